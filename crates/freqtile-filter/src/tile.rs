use log::debug;
use rustfft::FftPlanner;

use freqtile_image::Image;

use crate::error::FilterError;
use crate::fft::{self, CHANNELS};
use crate::kernel::FilterSpec;

/// Parameters controlling the overlap-discard tiling.
///
/// The defaults match the block geometry the filters were tuned with: 256
/// pixel blocks with 50 pixels of overlap and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileParams {
    /// Edge length of the nominal square block.
    pub block_size: usize,
    /// Extra context pixels pulled in on every side of a block. The same
    /// width of transformed output is discarded again, since it is degraded
    /// by the truncated context.
    pub overlap: usize,
    /// Width of the zero-filled margin added around the image before tiling.
    /// Must be at least `overlap` so that edge blocks discard only margin
    /// pixels.
    pub border: usize,
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            block_size: 256,
            overlap: 50,
            border: 50,
        }
    }
}

impl TileParams {
    /// Check the tiling invariants, returning a shape error on the first
    /// violation.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.block_size == 0 {
            return Err(FilterError::InvalidBlockSize);
        }
        if self.overlap >= self.block_size {
            return Err(FilterError::OverlapTooLarge {
                overlap: self.overlap,
                block_size: self.block_size,
            });
        }
        if self.border < self.overlap {
            return Err(FilterError::BorderTooSmall {
                border: self.border,
                overlap: self.overlap,
            });
        }
        Ok(())
    }

    fn stride(&self) -> usize {
        self.block_size - self.overlap
    }
}

/// One grid position along a single axis: the clamped context window fed to
/// the transform and the half-open cell this position writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisSpan {
    ctx_start: usize,
    ctx_end: usize,
    cell_start: usize,
    cell_end: usize,
}

/// Lay out the block grid along one axis of the padded canvas.
///
/// Origins advance by `block_size - overlap`. Each origin owns the stride
/// interval starting at it, with the last cell extended to the canvas edge,
/// so the cells partition `[0, len)` exactly: every canvas pixel is written
/// once. Context windows take `overlap` extra pixels on each side where the
/// canvas provides them.
fn axis_spans(len: usize, params: &TileParams) -> Vec<AxisSpan> {
    let stride = params.stride();
    let mut spans = Vec::with_capacity(len.div_ceil(stride));

    let mut origin = 0;
    loop {
        let next = origin + stride;
        spans.push(AxisSpan {
            ctx_start: origin.saturating_sub(params.overlap),
            ctx_end: (origin + params.block_size + params.overlap).min(len),
            cell_start: origin,
            cell_end: if next < len { next } else { len },
        });
        if next >= len {
            break;
        }
        origin = next;
    }
    spans
}

/// Apply one frequency-domain filter across an entire image with the
/// overlap-discard tiling scheme.
///
/// The image is embedded in a zero border, covered with a grid of
/// overlapping blocks, and each block is filtered independently; only the
/// interior cell of each transformed block is kept, so the zero-padding
/// artifacts at block edges never reach the output. Peak memory is bounded
/// by the block extent rather than the image extent.
///
/// The per-block transform only approximates the full-image filter; the
/// approximation improves with block size and overlap and becomes exact when
/// a single block covers the whole padded canvas.
pub fn filter_tiled(
    src: &Image<f32, 3>,
    spec: &FilterSpec,
    params: &TileParams,
) -> Result<Image<f32, 3>, FilterError> {
    spec.validate()?;
    params.validate()?;

    let (rows, cols) = (src.rows(), src.cols());
    let (padded_rows, padded_cols) = (rows + 2 * params.border, cols + 2 * params.border);

    // embed the image in the zero-filled bordered canvas
    let mut canvas = vec![0.0f32; padded_rows * padded_cols * CHANNELS];
    let src_data = src.as_slice();
    for r in 0..rows {
        let dst_off = ((r + params.border) * padded_cols + params.border) * CHANNELS;
        let src_off = r * cols * CHANNELS;
        canvas[dst_off..dst_off + cols * CHANNELS]
            .copy_from_slice(&src_data[src_off..src_off + cols * CHANNELS]);
    }

    let row_spans = axis_spans(padded_rows, params);
    let col_spans = axis_spans(padded_cols, params);
    debug!(
        "tiling {}x{} into {}x{} blocks for {:?}",
        rows,
        cols,
        row_spans.len(),
        col_spans.len(),
        spec
    );

    let mut out = vec![0.0f32; padded_rows * padded_cols * CHANNELS];
    let mut planner = FftPlanner::new();

    for row_span in &row_spans {
        for col_span in &col_spans {
            let block_rows = row_span.ctx_end - row_span.ctx_start;
            let block_cols = col_span.ctx_end - col_span.ctx_start;

            // extract the context block from the canvas
            let mut block = vec![0.0f32; block_rows * block_cols * CHANNELS];
            for r in 0..block_rows {
                let src_off =
                    ((row_span.ctx_start + r) * padded_cols + col_span.ctx_start) * CHANNELS;
                let dst_off = r * block_cols * CHANNELS;
                block[dst_off..dst_off + block_cols * CHANNELS]
                    .copy_from_slice(&canvas[src_off..src_off + block_cols * CHANNELS]);
            }

            let filtered = fft::filter_block(&block, block_rows, block_cols, spec, &mut planner);

            // stitch the owned cell back, discarding the overlap margins
            let cell_width = (col_span.cell_end - col_span.cell_start) * CHANNELS;
            for r in row_span.cell_start..row_span.cell_end {
                let block_r = r - row_span.ctx_start;
                let src_off =
                    (block_r * block_cols + (col_span.cell_start - col_span.ctx_start)) * CHANNELS;
                let dst_off = (r * padded_cols + col_span.cell_start) * CHANNELS;
                out[dst_off..dst_off + cell_width]
                    .copy_from_slice(&filtered[src_off..src_off + cell_width]);
            }
        }
    }

    // crop the border back off
    let mut data = Vec::with_capacity(rows * cols * CHANNELS);
    for r in 0..rows {
        let off = ((r + params.border) * padded_cols + params.border) * CHANNELS;
        data.extend_from_slice(&out[off..off + cols * CHANNELS]);
    }

    Ok(Image::new(src.size(), data)?)
}
