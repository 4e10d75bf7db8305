use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use scatha::codec::ReadExt;
use scatha::{Cursor, Image, Section, SectionTable};

fn synthetic_image(raw_size: u64) -> Image {
    let data = vec![0xabu8; raw_size as usize + 0x200];
    let sections = SectionTable::new(vec![Section::new(
        ".text",
        0x1000,
        0x1000 + raw_size * 2,
        0x200,
        raw_size,
    )]);
    Image::new(data, sections, Default::default())
}

fn bench_read_virtual(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_virtual");
    for size in [0x100u64, 0x1000, 0x10000] {
        let image = synthetic_image(size);
        group.throughput(Throughput::Bytes(size));
        group.bench_function(format!("raw/{size:#x}"), |b| {
            b.iter(|| image.read_virtual(0x1000, size).unwrap())
        });
        group.bench_function(format!("zero_tail/{size:#x}"), |b| {
            b.iter(|| image.read_virtual(0x1000 + size, size).unwrap())
        });
    }
    group.finish();
}

fn bench_cursor_decode(c: &mut Criterion) {
    let data = vec![0x5au8; 64 * 1024];
    let mut group = c.benchmark_group("cursor");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("dword_stream", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(&data);
            let mut acc = 0u64;
            while !cursor.eof() {
                acc = acc.wrapping_add(u64::from(cursor.read_dword().unwrap()));
            }
            acc
        })
    });
    group.bench_function("block_reads", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for offset in (0..data.len()).step_by(256) {
                total += data.read_block(offset, 256).unwrap().len();
            }
            total
        })
    });
    group.finish();
}

criterion_group!(benches, bench_read_virtual, bench_cursor_decode);
criterion_main!(benches);
