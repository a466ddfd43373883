use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pda_parser::{infix_to_postfix, postfix_to_infix, prefix_to_postfix, tokenize};

fn long_infix(terms: usize) -> String {
    let ops = ["+", "*", "-", "/"];
    let mut source = String::from("1");
    for i in 0..terms {
        source.push_str(&format!(" {} ({} + {})", ops[i % ops.len()], i + 2, i + 3));
    }
    source
}

fn tokenize_expression(c: &mut Criterion) {
    let source = long_infix(200);

    c.bench_function("tokenize_long_infix", |b| {
        b.iter(|| tokenize(black_box(&source)))
    });
}

fn shunting_yard(c: &mut Criterion) {
    let source = long_infix(200);
    let tokens = tokenize(&source);

    c.bench_function("infix_to_postfix", |b| {
        b.iter(|| infix_to_postfix(black_box(&tokens)))
    });
}

fn prefix_normalization(c: &mut Criterion) {
    let source = "/ * + 1 2 - 3 4 + * 5 6 - 7 / 8 9";
    let tokens = tokenize(source);

    c.bench_function("prefix_to_postfix", |b| {
        b.iter(|| prefix_to_postfix(black_box(&tokens)))
    });
}

fn infix_rendering(c: &mut Criterion) {
    let source = long_infix(200);
    let tokens = tokenize(&source);
    let postfix = infix_to_postfix(&tokens).expect("benchmark input is valid");

    c.bench_function("postfix_to_infix", |b| {
        b.iter(|| postfix_to_infix(black_box(&postfix)))
    });
}

criterion_group!(
    benches,
    tokenize_expression,
    shunting_yard,
    prefix_normalization,
    infix_rendering
);
criterion_main!(benches);
