use core::tokenizer::tokenize;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    let text = "The Boston Celtics are an American professional basketball team based in \
                Boston. The Celtics compete in the National Basketball Association as a \
                member of the league's Eastern Conference Atlantic Division. Founded in \
                1946, the team played greco-roman era men's exhibition games before the \
                league's first official season."
        .repeat(50);
    c.bench_function("tokenize_corpus_text", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
