//! Benchmarks for the furnish pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::Rgba;

use furnish::highlight::highlight_sheet;
use furnish::transform::{outline_frame, DEFAULT_ALPHA_THRESHOLD};
use furnish::{
    enlarge, outline, pad, process_batch, process_item, resolve, retile, EngineConfig,
    GenerationItem, PixelBuffer, SpriteClass,
};

/// A sheet of `frames` blob-shaped frames separated by 1px gutters.
fn sheet(frames: u32, frame_w: u32, height: u32) -> PixelBuffer {
    let width = frames * frame_w + frames - 1;
    let mut buf = PixelBuffer::new(width, height);
    let (cx, cy) = (frame_w as i64 / 2, height as i64 / 2);
    let radius = (frame_w.min(height) as i64 / 2 - 1).pow(2);

    for f in 0..frames as i64 {
        let ox = f * (frame_w as i64 + 1);
        for y in 0..height as i64 {
            for x in 0..frame_w as i64 {
                if (x - cx).pow(2) + (y - cy).pow(2) <= radius {
                    let shade = ((x + y) * 4) as u8;
                    buf.put(ox + x, y, Rgba([shade, 90, 40, 255]));
                }
            }
        }
    }
    buf
}

// -- Transform benchmarks --

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    let door = sheet(2, 17, 33);
    let layout = resolve(SpriteClass::Door, door.width(), door.height());
    let padded = pad(&door, &layout).into_owned();

    group.bench_function("resolve", |b| {
        b.iter(|| resolve(black_box(SpriteClass::Door), black_box(35), black_box(33)))
    });

    group.bench_function("pad_door", |b| b.iter(|| pad(black_box(&door), &layout)));

    group.bench_function("retile_door", |b| {
        b.iter(|| retile(black_box(&padded), &layout, None))
    });

    group.bench_function("enlarge_door", |b| b.iter(|| enlarge(black_box(&padded))));

    group.bench_function("outline_door", |b| {
        b.iter(|| outline(black_box(&padded), &layout, 2, 1, DEFAULT_ALPHA_THRESHOLD))
    });

    let large = sheet(1, 128, 128);
    group.bench_function("outline_frame_128", |b| {
        b.iter(|| outline_frame(black_box(&large), DEFAULT_ALPHA_THRESHOLD))
    });

    group.finish();
}

// -- Pipeline benchmarks --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = EngineConfig::default();

    let item = GenerationItem::new(
        SpriteClass::Door,
        Some(1),
        sheet(1, 16, 16),
        sheet(2, 16, 33),
    )
    .with_door_closed(sheet(3, 8, 33));

    group.bench_function("process_door", |b| {
        b.iter(|| process_item(black_box(&item), &config).unwrap())
    });

    let batch: Vec<GenerationItem> = (0..32).map(|_| item.clone()).collect();
    group.bench_function("process_batch_32", |b| {
        b.iter(|| process_batch(black_box(&batch), &config))
    });

    let upscaled = process_item(&item, &config).unwrap().tile;
    group.bench_function("highlight_upscaled_door", |b| {
        b.iter(|| highlight_sheet(black_box(&upscaled), "Door", DEFAULT_ALPHA_THRESHOLD))
    });

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_pipeline);
criterion_main!(benches);
