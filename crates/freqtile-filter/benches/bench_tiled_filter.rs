use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use freqtile_filter::kernel::FilterSpec;
use freqtile_filter::tile::{filter_tiled, TileParams};
use freqtile_image::Image;

fn bench_tiled_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("TiledFilter");

    for (width, height) in [(512, 512), (1024, 768)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_data = vec![0.5f32; width * height * 3];
        let image = Image::<f32, 3>::new([*width, *height].into(), image_data).unwrap();

        let params = TileParams::default();

        group.bench_with_input(
            BenchmarkId::new("lowpass_tiled", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    black_box(filter_tiled(
                        i,
                        &FilterSpec::LowPass { cutoff: 10.0 },
                        &params,
                    ))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bandpass_tiled", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    black_box(filter_tiled(
                        i,
                        &FilterSpec::BandPass {
                            low: 5.0,
                            high: 30.0,
                        },
                        &params,
                    ))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tiled_filter);
criterion_main!(benches);
