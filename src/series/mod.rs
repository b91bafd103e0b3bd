//! Synthetic power-draw series for the demo chart.
//!
//! The curve is a flat baseline plus independent Gaussian noise plus a single
//! Gaussian bump that stands in for a transient load event:
//!
//! `value[i] = baseline + N(0, noise_std) + amplitude * exp(-(i - c)^2 / (2 w^2))`
//!
//! with `c = center_frac * n` and `w = width_frac * n`. Nothing is cached: every
//! call draws fresh noise, and callers that render the chart are expected to call
//! in again on every redraw.

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{DemoSeries, SeriesParams, SeriesPoint};
use crate::error::AppError;

/// Upper bound on points per series; the chart cannot show more anyway.
pub const MAX_POINTS: usize = 100_000;

/// Noise headroom (in standard deviations) that must stay within `f64` range.
const NOISE_HEADROOM_SIGMAS: f64 = 10.0;

/// Build a window/interval `Duration` from a minute count supplied by the user.
pub fn duration_from_minutes(minutes: i64, what: &str) -> Result<Duration, AppError> {
    Duration::try_minutes(minutes)
        .ok_or_else(|| AppError::usage(format!("{what} of {minutes} minutes is out of range.")))
}

/// Where the noise comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    /// Fresh OS-seeded entropy on every call.
    Entropy,
    /// Fixed seed; repeated calls produce the same series.
    Seeded(u64),
}

impl SeriesSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(seed),
            None => Self::Entropy,
        }
    }

    /// Generate a labelled demo series ending at `now`.
    pub fn generate(&self, now: DateTime<Utc>, params: &SeriesParams) -> Result<DemoSeries, AppError> {
        let points = match self {
            Self::Entropy => generate(now, params)?,
            Self::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(*seed);
                generate_with_rng(now, params, &mut rng)?
            }
        };
        Ok(DemoSeries::new(points))
    }
}

/// Generate the series using the thread-local RNG.
pub fn generate(now: DateTime<Utc>, params: &SeriesParams) -> Result<Vec<SeriesPoint>, AppError> {
    generate_with_rng(now, params, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    now: DateTime<Utc>,
    params: &SeriesParams,
    rng: &mut R,
) -> Result<Vec<SeriesPoint>, AppError> {
    let n = point_count(params)?;
    let start = now
        .checked_sub_signed(params.window)
        .ok_or_else(|| AppError::usage("Series window reaches before the representable time range."))?;
    let step_ms = params.interval.num_milliseconds();

    let normal = Normal::new(0.0, params.noise_std)
        .map_err(|e| AppError::usage(format!("Noise distribution error: {e}")))?;
    let bump = bump_profile(n, params);

    let mut points = Vec::with_capacity(n);
    for (i, b) in bump.into_iter().enumerate() {
        let timestamp = start + Duration::milliseconds(step_ms * i as i64);
        let value = params.baseline + normal.sample(rng) + b;
        if !value.is_finite() {
            return Err(AppError::usage(format!(
                "Series value at index {i} is not finite; reduce baseline, amplitude or noise."
            )));
        }
        points.push(SeriesPoint { timestamp, value });
    }

    log::debug!(
        "generated demo series: n={n} start={start} end={now} noise_std={} amplitude={}",
        params.noise_std,
        params.bump_amplitude
    );

    Ok(points)
}

/// Validate `params` and return the number of points they produce.
///
/// Both window endpoints are sampled, so a 24h window at 15min spacing gives 97.
pub fn point_count(params: &SeriesParams) -> Result<usize, AppError> {
    if params.interval <= Duration::zero() {
        return Err(AppError::usage("Sample interval must be > 0."));
    }
    if params.interval < Duration::milliseconds(1) {
        return Err(AppError::usage("Sample interval must be at least 1 ms."));
    }
    if params.window <= Duration::zero() {
        return Err(AppError::usage("Window duration must be > 0."));
    }

    let window_ms = params.window.num_milliseconds();
    let step_ms = params.interval.num_milliseconds();
    if params.window != Duration::milliseconds(window_ms) || window_ms % step_ms != 0 {
        return Err(AppError::usage(format!(
            "Window ({} min) must be a whole multiple of the sample interval ({} min).",
            window_ms as f64 / 60_000.0,
            step_ms as f64 / 60_000.0,
        )));
    }
    if !params.baseline.is_finite() {
        return Err(AppError::usage("Baseline must be a finite number."));
    }
    if !(params.noise_std.is_finite() && params.noise_std >= 0.0) {
        return Err(AppError::usage("Noise standard deviation must be finite and >= 0."));
    }
    if !(params.bump_amplitude.is_finite() && params.bump_amplitude >= 0.0) {
        return Err(AppError::usage("Bump amplitude must be finite and >= 0."));
    }
    if !params.bump_center_frac.is_finite() {
        return Err(AppError::usage("Bump center must be a finite fraction."));
    }
    if !(params.bump_width_frac.is_finite() && params.bump_width_frac > 0.0) {
        return Err(AppError::usage("Bump width must be finite and > 0."));
    }
    let extent = params.baseline.abs() + params.bump_amplitude + NOISE_HEADROOM_SIGMAS * params.noise_std;
    if !extent.is_finite() {
        return Err(AppError::usage(
            "Baseline, bump amplitude and noise together exceed the representable range.",
        ));
    }

    let intervals = window_ms / step_ms;
    let n = usize::try_from(intervals)
        .ok()
        .and_then(|k| k.checked_add(1))
        .filter(|&n| n <= MAX_POINTS)
        .ok_or_else(|| AppError::usage(format!("Series would exceed {MAX_POINTS} points.")))?;

    // A sub-normal width squares to zero and turns the bump peak into 0/0.
    let denom = bump_denominator(n, params);
    if !(denom.is_finite() && denom > 0.0) {
        return Err(AppError::usage(format!(
            "Bump width {:e} is too small or too large for {n} points.",
            params.bump_width_frac
        )));
    }

    // `window >= interval` here, so n is at least 2.
    Ok(n)
}

fn bump_denominator(n: usize, params: &SeriesParams) -> f64 {
    let width = params.bump_width_frac * n as f64;
    2.0 * width * width
}

/// Deterministic bump component for a series of `n` points.
pub fn bump_profile(n: usize, params: &SeriesParams) -> Vec<f64> {
    let center = params.bump_center_frac * n as f64;
    let denom = bump_denominator(n, params);

    (0..n)
        .map(|i| {
            let d = i as f64 - center;
            params.bump_amplitude * (-(d * d) / denom).exp()
        })
        .collect()
}
