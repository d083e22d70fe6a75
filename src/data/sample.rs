//! Synthetic delay-catalog generation.
//!
//! The generator lays down an ideal arithmetic ladder
//! (`start + i*step` for both edges) and perturbs each measurement:
//!
//! - every delay gets Gaussian jitter with standard deviation `noise` ps
//! - with probability `outlier_prob` a cell is an outlier: both of its edges
//!   shift together by `outlier_scale` noise units, up or down with equal
//!   chance (a mis-measured or process-skewed cell, not independent jitter)
//!
//! Keeping the outlier shift proportional to `noise` means `--noise 0`
//! produces the exact ladder, which is the easy way to build fixtures.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{DelayEntry, SynthConfig};
use crate::error::AppError;

/// Generate a synthetic delay catalog.
///
/// Output order is ladder order (ascending ideal delay), and the whole
/// catalog is a pure function of the config, seed included.
pub fn generate_catalog(config: &SynthConfig) -> Result<Vec<DelayEntry>, AppError> {
    if config.cells == 0 {
        return Err(AppError::input("Cell count must be > 0."));
    }
    if !config.noise.is_finite() || config.noise < 0.0 {
        return Err(AppError::input("Invalid noise setting (must be finite and >= 0)."));
    }
    if !config.outlier_prob.is_finite() || !(0.0..=1.0).contains(&config.outlier_prob) {
        return Err(AppError::input("Invalid outlier probability (must be in [0, 1])."));
    }
    if !config.outlier_scale.is_finite() || config.outlier_scale < 0.0 {
        return Err(AppError::input("Invalid outlier magnitude (must be finite and >= 0)."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::input(format!("Noise distribution error: {e}")))?;

    let mut entries = Vec::with_capacity(config.cells);

    for i in 0..config.cells {
        let base_rise = config.start_rise + i as i64 * config.step;
        let base_fall = config.start_fall + i as i64 * config.step;

        let z_rise: f64 = normal.sample(&mut rng);
        let z_fall: f64 = normal.sample(&mut rng);
        let jump = sample_jump(&mut rng, config.outlier_prob, config.outlier_scale);

        let rise = (base_rise + (config.noise * (z_rise + jump)).round() as i64).max(0);
        let fall = (base_fall + (config.noise * (z_fall + jump)).round() as i64).max(0);

        entries.push(DelayEntry {
            select: format!("TAP{i:03}"),
            rise,
            fall,
        });
    }

    Ok(entries)
}

fn sample_jump(rng: &mut StdRng, prob: f64, scale: f64) -> f64 {
    let roll: f64 = rng.r#gen();
    if roll < prob / 2.0 {
        scale
    } else if roll < prob {
        -scale
    } else {
        0.0
    }
}
