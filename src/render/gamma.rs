//! Gamma expansion and compression between 8-bit samples and linear light.
//!
//! Box filtering is done on linear values. Averaging gamma-encoded samples
//! directly darkens midtones wherever light and dark pixels are blended.

use crate::error::ArtError;

/// Standard display gamma (sRGB approximation).
pub const GAMMA: f32 = 2.2;

/// Convert an 8-bit channel value to normalized linear light.
///
/// Formula: `(c / 255)^2.2`
#[inline]
pub fn expand(c: u8) -> f32 {
    (c as f32 / 255.0).powf(GAMMA)
}

/// Convert a linear-light value back to an 8-bit channel value.
///
/// The input is clamped to `[0, 1]` before the power so that sums drifting
/// outside the unit range never reach `powf` with a negative base.
#[inline]
pub fn compress(v: f32) -> u8 {
    compress_with(v, GAMMA)
}

#[inline]
fn compress_with(v: f32, exponent: f32) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    (v.powf(1.0 / exponent) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Gamma curve with a precomputed expansion table.
///
/// Every source sample goes through `expand`, so the 256 possible results
/// are computed once up front.
#[derive(Debug, Clone)]
pub struct Gamma {
    exponent: f32,
    lut: [f32; 256],
}

impl Gamma {
    /// Build a curve for the given exponent.
    ///
    /// Returns [`ArtError::InvalidGamma`] for non-finite or non-positive values.
    pub fn new(exponent: f32) -> Result<Self, ArtError> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ArtError::InvalidGamma(exponent));
        }

        let mut lut = [0.0f32; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = (i as f32 / 255.0).powf(exponent);
        }

        Ok(Self { exponent, lut })
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    #[inline]
    pub fn expand(&self, c: u8) -> f32 {
        self.lut[c as usize]
    }

    #[inline]
    pub fn compress(&self, v: f32) -> u8 {
        compress_with(v, self.exponent)
    }
}

impl Default for Gamma {
    fn default() -> Self {
        let mut lut = [0.0f32; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = expand(i as u8);
        }
        Self {
            exponent: GAMMA,
            lut,
        }
    }
}
