use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_catalog::{Backend, Command, CommandExecutor, Product, RespDecode, RespFrame};

// use oracle / add 1 pen 1.5 / get 1 / list
const DATA: &str = "*2\r\n$3\r\nuse\r\n$6\r\noracle\r\n*4\r\n$3\r\nadd\r\n$1\r\n1\r\n$3\r\npen\r\n$3\r\n1.5\r\n*2\r\n$3\r\nget\r\n$1\r\n1\r\n*1\r\n$4\r\nlist\r\n";

fn decode_and_execute(buf: &mut BytesMut, backend: &Backend) -> Vec<RespFrame> {
    let mut replies = Vec::new();
    while let Ok(frame) = RespFrame::decode(buf) {
        if let Ok(cmd) = Command::try_from(frame) {
            replies.push(cmd.execute(backend));
        }
    }
    replies
}

fn seeded(n: i64) -> Backend {
    let backend = Backend::new();
    let _ = backend.configure("mysql");
    for id in 0..n {
        let product = if id % 3 == 0 {
            Product::with_fields(id, None, Some(id as f64))
        } else {
            Product::new(id, format!("product-{}", id), id as f64)
        };
        let _ = backend.add(product);
    }
    backend
}

fn criterion_benchmark(c: &mut Criterion) {
    let buf = BytesMut::from(DATA);

    c.bench_function("decode_and_execute", |b| {
        let backend = Backend::new();
        b.iter(|| {
            let _ = backend.clear();
            black_box(decode_and_execute(&mut buf.clone(), &backend))
        })
    });

    let backend = seeded(10_000);
    c.bench_function("find_by_id_10k", |b| {
        b.iter(|| black_box(backend.find_by_id(black_box(9_999))))
    });

    c.bench_function("purge_incomplete_10k", |b| {
        b.iter_batched(
            || seeded(10_000),
            |backend| black_box(backend.purge_incomplete()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
