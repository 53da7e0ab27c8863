//! Criterion benchmarks for contact URI processing.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use contact_uri::{
    ContactParameters, ContactScheme, ContactValidator, Mode, sanitize_contact_uri,
    sanitize_parameter_value, validate_contact_uri,
};

/// Benchmark: sanitize per scheme branch
fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    let test_cases = [
        ("tel", "tel:+1 (541) 754-3010"),
        ("skype", "skype:john.doe_1985?call"),
        ("mailto", "mailto:sales@example.com, support@example.org"),
        ("https", "https://example.com/contact?ref=card&lang=en"),
        ("https_encoded", "https://example.com/a%20b?q=1%26r%3D2"),
        ("https_nested", "https://example.com/?q=%2541%2520x"),
        ("generic", "viber://chat?number=%2B15417543010"),
        ("rejected", "javascript:alert(document.cookie)"),
    ];

    for (name, uri) in test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| sanitize_contact_uri(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: Sanitize vs Validate on the URL branch
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let uri = "https://example.com/path/to/page?utm_source=card&utm_medium=qr%20code";

    group.bench_function("sanitize", |b| {
        b.iter(|| sanitize_contact_uri(black_box(uri)));
    });
    group.bench_function("validate", |b| {
        b.iter(|| validate_contact_uri(black_box(uri)));
    });

    let validator = ContactValidator::default();
    group.bench_function("try_process", |b| {
        b.iter(|| validator.try_process(black_box(uri), Mode::Sanitize));
    });

    group.finish();
}

/// Benchmark: long inputs near the default length limit
fn bench_long_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_input");

    for len in [64usize, 512, 2000] {
        let uri = format!("https://example.com/{}", "a&b'c".repeat(len / 5));
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("https", len), &uri, |b, uri| {
            b.iter(|| sanitize_contact_uri(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: query-parameter sanitizing
fn bench_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("parameters");

    group.bench_function("text", |b| {
        b.iter(|| sanitize_parameter_value(black_box("Order <b>42</b>\r\n please"), "text"));
    });
    group.bench_function("textarea", |b| {
        b.iter(|| {
            sanitize_parameter_value(black_box("Hello,\n<script>x</script>I have a question"), "textarea")
        });
    });
    group.bench_function("email", |b| {
        b.iter(|| {
            sanitize_parameter_value(black_box("a@example.com, bad@@x, c@example.org"), "email")
        });
    });
    group.bench_function("for_scheme", |b| {
        b.iter(|| {
            ContactParameters::for_scheme(
                ContactScheme::Mailto,
                black_box([("subject", "Order 42"), ("body", "Hi,\nthanks"), ("cc", "ops@example.com")]),
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_modes,
    bench_long_input,
    bench_parameters,
);
criterion_main!(benches);
