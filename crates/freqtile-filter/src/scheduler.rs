use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use freqtile_image::Image;

use crate::backend::{self, BackendPreference};
use crate::error::FilterError;
use crate::kernel::FilterSpec;
use crate::tile::{filter_tiled, TileParams};

/// One independent filter request: a list of specifications applied with a
/// shared set of tiling parameters.
#[derive(Debug, Clone)]
pub struct FilterGroup {
    /// The filters to run, in the order their results should come back.
    pub specs: Vec<FilterSpec>,
    /// Tiling parameters shared by every filter in the group.
    pub tiling: TileParams,
}

impl FilterGroup {
    /// Convenience constructor with the default tiling parameters.
    pub fn new(specs: Vec<FilterSpec>) -> Self {
        Self {
            specs,
            tiling: TileParams::default(),
        }
    }
}

/// A filtered image together with the specification that produced it, so a
/// result sink can derive its file name without re-deriving parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    /// The filtered image, samples in `[0, 1]`.
    pub image: Image<f32, 3>,
    /// The specification this image was filtered with.
    pub spec: FilterSpec,
}

/// Run every group against the shared source image and collect each group's
/// outcome.
///
/// Groups are dispatched onto the rayon pool, one unit of work per group,
/// and joined before returning. The returned vector is indexed like
/// `groups`; within a group, results follow the group's spec order. A group
/// that fails validation reports its error in its own slot and leaves the
/// sibling groups untouched.
pub fn run_groups(
    src: &Image<f32, 3>,
    groups: &[FilterGroup],
    preference: BackendPreference,
) -> Vec<Result<Vec<FilterResult>, FilterError>> {
    let backend = backend::resolve(preference);
    debug!(
        "dispatching {} filter groups on {:?} backend",
        groups.len(),
        backend
    );

    groups.par_iter().map(|group| run_group(src, group)).collect()
}

/// Run one group to completion on the current thread.
pub fn run_group(
    src: &Image<f32, 3>,
    group: &FilterGroup,
) -> Result<Vec<FilterResult>, FilterError> {
    // fail fast before any block work, so a failing group yields no
    // partial results
    group.tiling.validate()?;
    for spec in &group.specs {
        spec.validate()?;
    }

    group
        .specs
        .iter()
        .map(|spec| {
            let image = filter_tiled(src, spec, &group.tiling)?;
            Ok(FilterResult { image, spec: *spec })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use freqtile_image::{Image, ImageSize};

    use super::{run_group, FilterGroup};
    use crate::error::FilterError;
    use crate::kernel::FilterSpec;
    use crate::tile::TileParams;

    fn gray_image() -> Image<f32, 3> {
        Image::from_size_val(
            ImageSize {
                width: 24,
                height: 24,
            },
            0.5,
        )
        .unwrap()
    }

    fn small_tiling() -> TileParams {
        TileParams {
            block_size: 16,
            overlap: 4,
            border: 4,
        }
    }

    #[test]
    fn group_results_follow_spec_order() {
        let group = FilterGroup {
            specs: vec![
                FilterSpec::LowPass { cutoff: 20.0 },
                FilterSpec::LowPass { cutoff: 10.0 },
                FilterSpec::LowPass { cutoff: 5.0 },
            ],
            tiling: small_tiling(),
        };

        let results = run_group(&gray_image(), &group).unwrap();
        assert_eq!(results.len(), 3);
        for (result, spec) in results.iter().zip(group.specs.iter()) {
            assert_eq!(result.spec, *spec);
        }
    }

    #[test]
    fn malformed_spec_fails_the_whole_group() {
        let group = FilterGroup {
            specs: vec![
                FilterSpec::LowPass { cutoff: 10.0 },
                FilterSpec::BandPass {
                    low: 10.0,
                    high: 5.0,
                },
            ],
            tiling: small_tiling(),
        };

        let outcome = run_group(&gray_image(), &group);
        assert_eq!(
            outcome.err(),
            Some(FilterError::InvalidBand {
                low: 10.0,
                high: 5.0
            })
        );
    }
}
