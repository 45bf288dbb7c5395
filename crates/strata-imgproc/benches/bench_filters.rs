use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use strata_image::{Color, Image};
use strata_imgproc::{color, filter, flip, histogram};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(64, 48), (256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = Image::from_fn([*width, *height].into(), |p| {
            Color::from_rgb((p.x % 256) as u8, (p.y % 256) as u8, ((p.x + p.y) % 256) as u8)
        });

        group.bench_with_input(BenchmarkId::new("blur", &parameter_string), &image, |b, i| {
            b.iter(|| black_box(filter::blur(i)))
        });

        group.bench_with_input(
            BenchmarkId::new("sharpen", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(filter::sharpen(i))),
        );

        group.bench_with_input(BenchmarkId::new("sepia", &parameter_string), &image, |b, i| {
            b.iter(|| black_box(color::sepia_from_rgb(i)))
        });

        group.bench_with_input(
            BenchmarkId::new("horizontal_flip", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(flip::horizontal_flip(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("histogram", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(histogram::compute_histogram(i))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
