use std::path::Path;

use argh::FromArgs;

use freqtile_filter::backend::BackendPreference;
use freqtile_filter::kernel::FilterSpec;
use freqtile_filter::scheduler::{run_groups, FilterGroup};
use freqtile_image::{Image, ImageSize};

#[derive(FromArgs)]
/// Apply the stock set of frequency-domain Gaussian filters to an image and
/// write the results as PNG files.
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    image_path: String,

    /// directory the filtered images are written to
    #[argh(option, short = 'o', default = "String::from(\"result_imgs\")")]
    output_dir: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // decode to f32 RGB in [0, 1]; grayscale inputs are expanded here
    let rgb = image::open(&args.image_path)?.to_rgb32f();
    let (width, height) = rgb.dimensions();
    let src = Image::<f32, 3>::new(
        ImageSize {
            width: width as usize,
            height: height as usize,
        },
        rgb.into_raw(),
    )?;

    let groups = vec![
        FilterGroup::new(vec![
            FilterSpec::HighPass { cutoff: 5.0 },
            FilterSpec::HighPass { cutoff: 10.0 },
            FilterSpec::HighPass { cutoff: 20.0 },
        ]),
        FilterGroup::new(vec![
            FilterSpec::LowPass { cutoff: 20.0 },
            FilterSpec::LowPass { cutoff: 10.0 },
            FilterSpec::LowPass { cutoff: 5.0 },
        ]),
        FilterGroup::new(vec![
            FilterSpec::BandPass {
                low: 5.0,
                high: 10.0,
            },
            FilterSpec::BandPass {
                low: 10.0,
                high: 30.0,
            },
            FilterSpec::BandPass {
                low: 5.0,
                high: 30.0,
            },
        ]),
    ];

    std::fs::create_dir_all(&args.output_dir)?;

    for outcome in run_groups(&src, &groups, BackendPreference::Auto) {
        let results = match outcome {
            Ok(results) => results,
            Err(e) => {
                eprintln!("filter group failed: {e}");
                continue;
            }
        };

        for result in results {
            let path = Path::new(&args.output_dir).join(format!("{}.png", result.spec.file_stem()));
            let buf = result
                .image
                .as_slice()
                .iter()
                .map(|&v| (v * 255.0).round() as u8)
                .collect::<Vec<_>>();
            let png = image::RgbImage::from_raw(width, height, buf)
                .ok_or("failed to build output image buffer")?;
            png.save(&path)?;
            println!("saved {}", path.display());
        }
    }

    Ok(())
}
