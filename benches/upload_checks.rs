// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use splat_studio::infrastructure::splat::probe_ply;
use splat_studio::upload::is_valid_email;
use std::hint::black_box;
use std::io::Cursor;

fn email_validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_validation");

    group.bench_function("valid_address", |b| {
        b.iter(|| is_valid_email(black_box("first.last+scan@studio.example.com")));
    });
    group.bench_function("invalid_address", |b| {
        b.iter(|| is_valid_email(black_box("first.last@localhost")));
    });

    group.finish();
}

fn header_probe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_probe");

    let mut header = String::from("ply\nformat binary_little_endian 1.0\nelement vertex 100000\n");
    for name in ["x", "y", "z", "nx", "ny", "nz", "f_dc_0", "f_dc_1", "f_dc_2"] {
        header.push_str(&format!("property float {name}\n"));
    }
    for i in 0..45 {
        header.push_str(&format!("property float f_rest_{i}\n"));
    }
    for name in ["opacity", "scale_0", "scale_1", "scale_2", "rot_0", "rot_1", "rot_2", "rot_3"] {
        header.push_str(&format!("property float {name}\n"));
    }
    header.push_str("end_header\n");
    let file_len = header.len() as u64 + 100_000 * 62 * 4;

    group.bench_function("gaussian_ply_header", |b| {
        b.iter(|| probe_ply(Cursor::new(black_box(header.as_bytes())), file_len));
    });

    group.finish();
}

criterion_group!(benches, email_validation_benchmark, header_probe_benchmark);
criterion_main!(benches);
