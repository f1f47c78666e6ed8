// In lexitrie-core/benches/compile_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lexitrie::kernels::huffman;
use lexitrie::pipeline::encode_dictionary;
use lexitrie::{Entry, LexitrieConfig};

// --- Mock Word List Generation ---

/// Generates `count` pseudo-words over a skewed lowercase alphabet so that
/// prefixes are shared the way they are in natural word lists.
fn generate_word_list(count: usize, seed: u64) -> Vec<Entry> {
    const ALPHABET: &[u8] = b"eeeettaaoinshrdlcumwfgypbvkjxqz";
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(2..12);
            let word: String = (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect();
            Entry::new(word, rng.random_range(1..300), None)
        })
        .collect()
}

// --- Benchmark Suite ---

fn bench_compile(c: &mut Criterion) {
    let config = LexitrieConfig::default();
    // Child offsets are limited to 0xFFFF bytes.
    let small = generate_word_list(250, 7);
    let large = generate_word_list(1_000, 11);

    let mut group = c.benchmark_group("Dictionary Compilation");
    group.sample_size(10);

    group.bench_function("Full pipeline (250 words)", |b| {
        b.iter(|| black_box(encode_dictionary(black_box(small.clone()), &config)))
    });
    group.bench_function("Full pipeline (1k words)", |b| {
        b.iter(|| black_box(encode_dictionary(black_box(large.clone()), &config)))
    });

    // Huffman alone, over the symbol table of the large list.
    let context = encode_dictionary(large.clone(), &config).unwrap().context;
    group.bench_function("Huffman build (1k words)", |b| {
        b.iter(|| black_box(huffman::build(black_box(&context.symbols))))
    });

    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
