//! Level conversions used by the gain stage.
//!
//! All functions are allocation-free and `no_std` compatible.

use libm::{expf, logf};

/// Lowest level reported by [`linear_to_db`], returned for silent input.
pub const SILENCE_DB: f32 = -200.0;

/// Convert decibels to linear gain.
///
/// `amplitude = 10^(dB/20)`.
///
/// # Example
/// ```rust
/// use logicgain_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// assert!((db_to_linear(20.0) - 10.0).abs() < 1e-4);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Non-positive input maps to [`SILENCE_DB`].
///
/// # Example
/// ```rust
/// use logicgain_core::linear_to_db;
///
/// assert!(linear_to_db(1.0).abs() < 1e-6);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        return SILENCE_DB;
    }
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    (logf(linear) * FACTOR).max(SILENCE_DB)
}
