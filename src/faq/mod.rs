//! Anomaly FAQ: a fixed question -> answer table.
//!
//! The table is compiled into the binary, kept in display order, and never
//! mutated. The TUI selection list is built from the same slice, so every key it
//! can offer is guaranteed to resolve.

use crate::domain::QaEntry;
use crate::error::AppError;

const ENTRIES: &[QaEntry] = &[
    QaEntry {
        question: "Higher ambient temperature",
        answer: concat!(
            "Higher ambient temperature increases heat load on the cooling system.\n",
            "Expected impacts:\n",
            "- Higher chiller/CRAC runtime\n",
            "- Higher cooling power usage\n",
            "- Increased anomaly score if values drift beyond normal baseline",
        ),
    },
    QaEntry {
        question: "Increase in IT load",
        answer: concat!(
            "IT load increase causes rise in:\n",
            "- Rack-level power\n",
            "- Heat generation\n",
            "- Cooling demand\n",
            "\n",
            "If cooling does not scale proportionally, anomaly score increases.",
        ),
    },
    QaEntry {
        question: "Increase in chilled water inlet temperature",
        answer: concat!(
            "Higher inlet temperature reduces cooling efficiency and may trigger:\n",
            "- Higher room temperatures\n",
            "- Longer chiller runtimes\n",
            "- Energy inefficiencies\n",
            "\n",
            "Model flags this as anomaly when deviation is large.",
        ),
    },
    QaEntry {
        question: "What exactly triggers a high anomaly score",
        answer: concat!(
            "A high anomaly score occurs when real-time behavior deviates significantly\n",
            "from baseline patterns for similar environmental and load conditions.",
        ),
    },
    QaEntry {
        question: "How the operations team should interpret each category",
        answer: concat!(
            "Green = Normal  \n",
            "Amber = Monitor closely  \n",
            "Red = Immediate investigation needed  ",
        ),
    },
    QaEntry {
        question: "What actions need to be taken for different anomaly levels",
        answer: concat!(
            "Low: Monitor  \n",
            "Medium: Check sensors & logs  \n",
            "High: Immediate investigation, raise incident  ",
        ),
    },
    QaEntry {
        question: "Which parameters the model uses (runtime, performance degradation, fleet score, etc.)",
        answer: concat!(
            "Model commonly uses:\n",
            "- Power, runtime, temperatures\n",
            "- Cooling/airflow data\n",
            "- Fleet comparison metrics\n",
            "- Performance degradation indicators",
        ),
    },
    QaEntry {
        question: "How operations should decide on maintenance priority",
        answer: concat!(
            "Focus on:\n",
            "1. High anomaly assets  \n",
            "2. Redundancy level  \n",
            "3. SLA impact  \n",
            "4. CMMS history  ",
        ),
    },
    QaEntry {
        question: "Also, since we have CMMS–Anavaya with full history of PPM records (available via API), please confirm if this data can be integrated for better accuracy",
        answer: concat!(
            "Yes, CMMS–Anavaya PPM data can be integrated.\n",
            "Use API history to enrich anomaly prediction and maintenance actions.",
        ),
    },
    QaEntry {
        question: "Health KPIs and thresholds",
        answer: concat!(
            "Common KPIs:\n",
            "- COP/EER\n",
            "- Rack inlet temperature compliance\n",
            "- UPS efficiency\n",
            "- PUE & energy KPIs",
        ),
    },
    QaEntry {
        question: "What conditions require immediate escalation by the operations team",
        answer: concat!(
            "Escalate when:\n",
            "- Critical temperature breaches  \n",
            "- Loss of N+1 redundancy  \n",
            "- Repeated high anomalies  ",
        ),
    },
    QaEntry {
        question: "What triggers an internal alert from the model",
        answer: concat!(
            "Alert is triggered when:\n",
            "- Anomaly > threshold  \n",
            "- Sudden spike  \n",
            "- Persistent moderate anomalies  ",
        ),
    },
];

/// Immutable, insertion-ordered FAQ table.
#[derive(Debug, Clone, Copy)]
pub struct FaqTable {
    entries: &'static [QaEntry],
}

impl FaqTable {
    /// The dashboard's built-in anomaly FAQ.
    pub fn builtin() -> Self {
        Self { entries: ENTRIES }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'static [QaEntry] {
        self.entries
    }

    /// Questions in display order.
    pub fn questions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.question)
    }

    pub fn get(&self, index: usize) -> Option<&'static QaEntry> {
        self.entries.get(index)
    }

    /// Exact-key lookup.
    pub fn lookup(&self, question: &str) -> Result<&'static str, AppError> {
        self.entries
            .iter()
            .find(|e| e.question == question)
            .map(|e| e.answer)
            .ok_or_else(|| AppError::usage(format!("Unknown FAQ question: '{question}'.")))
    }

    /// Resolve a CLI query: a 1-based list index or an exact question.
    pub fn resolve(&self, query: &str) -> Result<&'static QaEntry, AppError> {
        let query = query.trim();
        if let Ok(choice) = query.parse::<usize>() {
            return choice
                .checked_sub(1)
                .and_then(|i| self.get(i))
                .ok_or_else(|| {
                    AppError::usage(format!(
                        "Invalid choice: {choice}. Enter a number between 1 and {}.",
                        self.len()
                    ))
                });
        }

        self.entries
            .iter()
            .find(|e| e.question == query)
            .ok_or_else(|| {
                AppError::usage(format!(
                    "Unknown FAQ question: '{query}'. Run `bms faq --list` to see the available questions."
                ))
            })
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique_and_all_resolve() {
        let faq = FaqTable::builtin();
        assert_eq!(faq.len(), 12);

        let unique: HashSet<&str> = faq.questions().collect();
        assert_eq!(unique.len(), faq.len());

        for entry in faq.entries() {
            assert_eq!(faq.lookup(entry.question).unwrap(), entry.answer);
        }
    }

    #[test]
    fn ambient_temperature_answer() {
        let answer = FaqTable::builtin().lookup("Higher ambient temperature").unwrap();
        assert!(answer.starts_with(
            "Higher ambient temperature increases heat load on the cooling system.\n"
        ));
        assert!(answer.ends_with("- Increased anomaly score if values drift beyond normal baseline"));
        assert_eq!(answer.lines().count(), 5);
    }

    #[test]
    fn health_kpis_answer_is_verbatim() {
        let answer = FaqTable::builtin().lookup("Health KPIs and thresholds").unwrap();
        assert_eq!(
            answer,
            "Common KPIs:\n- COP/EER\n- Rack inlet temperature compliance\n- UPS efficiency\n- PUE & energy KPIs"
        );
    }

    #[test]
    fn display_order_is_preserved() {
        let faq = FaqTable::builtin();
        let first = faq.get(0).unwrap();
        let last = faq.get(faq.len() - 1).unwrap();
        assert_eq!(first.question, "Higher ambient temperature");
        assert_eq!(last.question, "What triggers an internal alert from the model");
    }

    #[test]
    fn unknown_question_is_a_usage_error() {
        let err = FaqTable::builtin().lookup("Why is the sky blue").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert!(err.message().contains("Why is the sky blue"));
    }

    #[test]
    fn resolve_accepts_index_or_question() {
        let faq = FaqTable::builtin();
        assert_eq!(faq.resolve("2").unwrap().question, "Increase in IT load");
        assert_eq!(
            faq.resolve("  Health KPIs and thresholds ").unwrap().question,
            "Health KPIs and thresholds"
        );
        assert!(faq.resolve("0").is_err());
        assert!(faq.resolve("13").is_err());
        assert!(faq.resolve("nope").is_err());
    }
}
