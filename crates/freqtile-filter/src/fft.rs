use std::sync::Arc;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::kernel::{self, FilterSpec};

/// Number of color channels a block carries.
pub(crate) const CHANNELS: usize = 3;

/// Planned 2-D FFT over a row-major `Complex<f32>` plane.
///
/// The two passes run the planned 1-D transforms over every row, with a
/// transpose in between so the column pass also operates on contiguous
/// memory.
struct Fft2 {
    rows: usize,
    cols: usize,
    fwd_row: Arc<dyn Fft<f32>>,
    fwd_col: Arc<dyn Fft<f32>>,
    inv_row: Arc<dyn Fft<f32>>,
    inv_col: Arc<dyn Fft<f32>>,
}

impl Fft2 {
    fn new(planner: &mut FftPlanner<f32>, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            fwd_row: planner.plan_fft_forward(cols),
            fwd_col: planner.plan_fft_forward(rows),
            inv_row: planner.plan_fft_inverse(cols),
            inv_col: planner.plan_fft_inverse(rows),
        }
    }

    fn forward(&self, buf: &mut Vec<Complex<f32>>) {
        self.pass(buf, &self.fwd_row, &self.fwd_col);
    }

    /// Inverse transform, normalized by `rows * cols`.
    fn inverse(&self, buf: &mut Vec<Complex<f32>>) {
        self.pass(buf, &self.inv_row, &self.inv_col);

        let scale = 1.0 / (self.rows * self.cols) as f32;
        buf.iter_mut().for_each(|x| *x *= scale);
    }

    fn pass(
        &self,
        buf: &mut Vec<Complex<f32>>,
        row_fft: &Arc<dyn Fft<f32>>,
        col_fft: &Arc<dyn Fft<f32>>,
    ) {
        debug_assert_eq!(buf.len(), self.rows * self.cols);

        // `Fft::process` transforms every `cols`-sized chunk of the buffer,
        // so one call covers all rows.
        row_fft.process(buf);

        let mut transposed = transpose(buf, self.rows, self.cols);
        col_fft.process(&mut transposed);
        *buf = transpose(&transposed, self.cols, self.rows);
    }
}

fn transpose(src: &[Complex<f32>], rows: usize, cols: usize) -> Vec<Complex<f32>> {
    let mut dst = vec![Complex::new(0.0, 0.0); src.len()];
    for r in 0..rows {
        for c in 0..cols {
            dst[c * rows + r] = src[r * cols + c];
        }
    }
    dst
}

/// Filter one block of interleaved `rows x cols x 3` samples in the
/// frequency domain and return the result over the same extent, clipped to
/// `[0, 1]`.
///
/// Each channel plane is zero-padded to `(2 rows, 2 cols)`, transformed,
/// weighted by the centered Gaussian mask and transformed back; the real
/// part of the low-index `rows x cols` corner is kept, which is where
/// zero-padded convolution aligns the result.
///
/// The caller is expected to have validated `spec`; an invalid cutoff here
/// only produces a useless mask, never a panic.
pub fn filter_block(
    block: &[f32],
    rows: usize,
    cols: usize,
    spec: &FilterSpec,
    planner: &mut FftPlanner<f32>,
) -> Vec<f32> {
    debug_assert_eq!(block.len(), rows * cols * CHANNELS);

    let (padded_rows, padded_cols) = (2 * rows, 2 * cols);
    let fft = Fft2::new(planner, padded_rows, padded_cols);
    let mask = kernel::gaussian_mask(padded_rows, padded_cols, spec);

    // channel planes are independent
    let planes = (0..CHANNELS)
        .into_par_iter()
        .map(|ch| {
            let mut buf = vec![Complex::new(0.0, 0.0); padded_rows * padded_cols];
            for r in 0..rows {
                for c in 0..cols {
                    let sample = block[(r * cols + c) * CHANNELS + ch];
                    buf[r * padded_cols + c] = Complex::new(sample, 0.0);
                }
            }

            fft.forward(&mut buf);

            // Weight against the centered mask. Reading the mask through
            // swapped-quadrant indices is arithmetically identical to
            // fft-shifting the spectrum, multiplying and shifting back.
            for r in 0..padded_rows {
                let shifted_r = (r + rows) % padded_rows;
                for c in 0..padded_cols {
                    let shifted_c = (c + cols) % padded_cols;
                    buf[r * padded_cols + c] *= mask[shifted_r * padded_cols + shifted_c];
                }
            }

            fft.inverse(&mut buf);

            let mut plane = vec![0.0f32; rows * cols];
            for r in 0..rows {
                for c in 0..cols {
                    plane[r * cols + c] = buf[r * padded_cols + c].re.clamp(0.0, 1.0);
                }
            }
            plane
        })
        .collect::<Vec<_>>();

    let mut out = vec![0.0f32; rows * cols * CHANNELS];
    for (ch, plane) in planes.iter().enumerate() {
        for (i, &sample) in plane.iter().enumerate() {
            out[i * CHANNELS + ch] = sample;
        }
    }
    out
}
