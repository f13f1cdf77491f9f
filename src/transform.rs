use rayon::prelude::*;

use crate::buffer::ImageData;
use crate::error::{Error, Result};

/// The three slider-driven factors: linear gain `a`, linear offset `b`
/// and the gamma selector. Defaults match the sliders' initial positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub a: f64,
    pub b: f64,
    pub gamma: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            gamma: 1.0,
        }
    }
}

/// Map the gamma selector away from zero: 0 means "no correction"
/// (exponent 1) and negative values act as the reciprocal of their
/// magnitude, so -5 darkens as strongly as +5 brightens. The result is
/// strictly positive for any finite selector.
pub fn effective_gamma(gamma: f64) -> f64 {
    if gamma == 0.0 {
        1.0
    } else if gamma > 0.0 {
        gamma
    } else {
        -1.0 / gamma
    }
}

/// Per-sample mapping realized as a lookup table, one entry per 8-bit value:
/// `clamp(a*v + b, 0, 255)` normalized, raised to `1/gamma`, scaled back.
fn build_lut(a: f64, b: f64, gamma: f64) -> [u8; 256] {
    let inv_gamma = 1.0 / gamma;
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        let linear = a * v as f64 + b;
        let normalized = linear.clamp(0.0, 255.0) / 255.0;
        let corrected = normalized.powf(inv_gamma);
        *out = (corrected * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Remap every color sample of `source` through the a/b/gamma curve,
/// leaving alpha untouched. Returns a new image of identical dimensions
/// and layout; `source` itself is never modified.
pub fn point_transform(source: &ImageData, params: &TransformParams) -> Result<ImageData> {
    if source.is_empty() {
        return Err(Error::EmptyImage {
            width: source.width,
            height: source.height,
        });
    }
    if !params.a.is_finite() || !params.b.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "a and b must be finite, got a={}, b={}",
            params.a, params.b
        )));
    }
    let gamma = effective_gamma(params.gamma);
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "gamma selector {} resolves to unusable exponent {gamma}",
            params.gamma
        )));
    }

    let lut = build_lut(params.a, params.b, gamma);
    let channels = source.layout.channels();
    let alpha = source.layout.alpha_index();

    let mut out = source.clone();
    out.data
        .par_chunks_mut(source.width * channels)
        .for_each(|row| {
            for px in row.chunks_exact_mut(channels) {
                for (c, sample) in px.iter_mut().enumerate() {
                    if Some(c) != alpha {
                        *sample = lut[*sample as usize];
                    }
                }
            }
        });
    Ok(out)
}
