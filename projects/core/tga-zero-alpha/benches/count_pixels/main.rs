use core::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tga_zero_alpha::{count_color_without_alpha, scan_tga};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

// Helper to generate pixel data where roughly 1 in 8 pixels has color but no alpha
fn generate_pixels(num_pixels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(num_pixels * 4);
    for pixel_idx in 0..num_pixels {
        let alpha = if pixel_idx % 8 == 0 { 0 } else { 255 };
        data.extend_from_slice(&[
            (1 + pixel_idx % 255) as u8,
            (1 + (pixel_idx * 7) % 255) as u8,
            (1 + (pixel_idx * 13) % 255) as u8,
            alpha,
        ]);
    }
    data
}

fn generate_tga(width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0u8; 18];
    data[2] = 2;
    data[12..14].copy_from_slice(&width.to_le_bytes());
    data[14..16].copy_from_slice(&height.to_le_bytes());
    data[16] = 32;
    data[17] = 8;
    data.extend_from_slice(&generate_pixels(width as usize * height as usize));
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Count Pixels With Color But No Alpha");

    // 512x512, 2048x2048
    for size in [512usize, 2048] {
        let num_bytes = size * size * 4;
        let pixels = generate_pixels(size * size);
        group.throughput(criterion::Throughput::Bytes(num_bytes as u64));

        group.bench_with_input(
            BenchmarkId::new("count_color_without_alpha", size),
            &size,
            |b, &_size| b.iter(|| count_color_without_alpha(black_box(&pixels))),
        );

        let file = generate_tga(size as u16, size as u16);
        group.bench_with_input(BenchmarkId::new("scan_tga", size), &size, |b, &_size| {
            b.iter(|| scan_tga(black_box(&file)))
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
