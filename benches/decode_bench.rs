use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sauce::classify::TypeTables;
use sauce::{Sauce, RECORD_SIZE};

fn fixture() -> Vec<u8> {
    let mut b = vec![b' '; RECORD_SIZE];
    b[0..5].copy_from_slice(b"SAUCE");
    b[5..7].copy_from_slice(b"00");
    b[7..17].copy_from_slice(b"Bench Art ");
    b[82..90].copy_from_slice(b"20230615");
    for byte in &mut b[90..106] {
        *byte = 0;
    }
    b[94] = 1;
    b[95] = 1;
    b[96..98].copy_from_slice(&80u16.to_le_bytes());
    b[98..100].copy_from_slice(&25u16.to_le_bytes());
    for byte in &mut b[106..] {
        *byte = 0;
    }
    b
}

fn bench_decode(c: &mut Criterion) {
    let buf = fixture();
    c.bench_function("decode_record", |b| {
        b.iter(|| Sauce::from_bytes(black_box(&buf)).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let record = Sauce::from_bytes(&fixture()).unwrap();
    let tables = TypeTables::standard();
    c.bench_function("classify_record", |b| {
        b.iter(|| {
            (
                tables.data_type_name(black_box(&record)),
                tables.file_type_name(&record),
                tables.mime_type(&record),
            )
        })
    });
}

criterion_group!(benches, bench_decode, bench_classify);
criterion_main!(benches);
