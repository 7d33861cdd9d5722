use crate::error::FilterError;

/// Gaussian frequency-domain filter specification.
///
/// Cutoffs are radial frequency scales (`D0` in the classical formulation):
/// larger values pass or reject a wider frequency band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterSpec {
    /// Attenuate frequencies below the cutoff.
    HighPass {
        /// Radial cutoff frequency, strictly positive.
        cutoff: f32,
    },
    /// Attenuate frequencies above the cutoff.
    LowPass {
        /// Radial cutoff frequency, strictly positive.
        cutoff: f32,
    },
    /// Pass frequencies between the two cutoffs as the difference of two
    /// low-pass Gaussians.
    BandPass {
        /// Lower radial cutoff, strictly positive and smaller than `high`.
        low: f32,
        /// Upper radial cutoff.
        high: f32,
    },
}

impl FilterSpec {
    /// Check the cutoff invariants, returning a configuration error on the
    /// first violation.
    pub fn validate(&self) -> Result<(), FilterError> {
        match *self {
            Self::HighPass { cutoff } | Self::LowPass { cutoff } => {
                if cutoff <= 0.0 {
                    return Err(FilterError::InvalidCutoff(cutoff));
                }
            }
            Self::BandPass { low, high } => {
                if low <= 0.0 || high <= low {
                    return Err(FilterError::InvalidBand { low, high });
                }
            }
        }
        Ok(())
    }

    /// File stem used by result sinks to persist this filter's output, e.g.
    /// `highpass_D0_5` or `bandpass_D0_low_5_D0_high_10`.
    pub fn file_stem(&self) -> String {
        match *self {
            Self::HighPass { cutoff } => format!("highpass_D0_{cutoff}"),
            Self::LowPass { cutoff } => format!("lowpass_D0_{cutoff}"),
            Self::BandPass { low, high } => {
                format!("bandpass_D0_low_{low}_D0_high_{high}")
            }
        }
    }
}

/// Gaussian low-pass weight for a squared radial distance.
#[inline]
fn lowpass_weight(d2: f32, cutoff: f32) -> f32 {
    (-d2 / (2.0 * cutoff * cutoff)).exp()
}

/// Compute the frequency-plane weight mask for a shifted spectrum of shape
/// (rows, cols), row-major.
///
/// The zero-frequency bin sits at `(rows / 2, cols / 2)`, matching a spectrum
/// whose quadrants have been swapped to center DC. The mask is real-valued
/// and shared across color channels.
///
/// Note that the band-pass mask is a difference of Gaussians rather than an
/// ideal ring filter: the pass-band is smooth and the weights can dip
/// slightly below zero around the lower cutoff. Downstream consumers depend
/// on these exact values, so the formula must not be replaced by a ring
/// filter.
pub fn gaussian_mask(rows: usize, cols: usize, spec: &FilterSpec) -> Vec<f32> {
    let (center_u, center_v) = (rows as isize / 2, cols as isize / 2);

    let mut mask = Vec::with_capacity(rows * cols);
    for u in 0..rows as isize {
        let du = (u - center_u) as f32;
        for v in 0..cols as isize {
            let dv = (v - center_v) as f32;
            let d2 = du * du + dv * dv;
            let w = match *spec {
                FilterSpec::HighPass { cutoff } => 1.0 - lowpass_weight(d2, cutoff),
                FilterSpec::LowPass { cutoff } => lowpass_weight(d2, cutoff),
                FilterSpec::BandPass { low, high } => {
                    lowpass_weight(d2, high) - lowpass_weight(d2, low)
                }
            };
            mask.push(w);
        }
    }
    mask
}
