use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tslite_ast::{BinaryOperator, Code, Mutability, Releaser};
use tslite_builder::AstBuilder;
use tslite_token::TokenBuffer;

// Number of `let xN: number = N + 1;` statements per program
const STATEMENTS: i64 = 10_000;

fn build_program(builder: &mut AstBuilder) -> Code {
    let mut code = Code::empty();
    for n in (0..STATEMENTS).rev() {
        let tag = builder.type_tag(Some("number"));
        let annotation = builder.single_type(tag);
        let binding = match builder.variable_type(Some(format!("x{}", n)), annotation) {
            Ok(binding) => binding,
            Err(_) => continue,
        };
        let left = builder.integer_constant(n);
        let left = builder.constant_factor(left);
        let left = builder.factor_expression(left);
        let right = builder.integer_constant(1);
        let right = builder.constant_factor(right);
        let right = builder.factor_expression(right);
        let sum = builder.binary_expression(BinaryOperator::Add, left, right);
        let decl = builder.expression_declaration(Mutability::Let, binding, sum);
        code = builder.code(decl, code);
    }
    code
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_let_chain_10k", |b| {
        b.iter(|| {
            let mut builder = AstBuilder::default();
            let code = build_program(&mut builder);
            let finalized = builder.finalize(code, &TokenBuffer::default());
            black_box(finalized);
        });
    });
}

fn bench_release(c: &mut Criterion) {
    c.bench_function("release_let_chain_10k", |b| {
        b.iter_batched(
            || build_program(&mut AstBuilder::default()),
            |code| {
                let mut releaser = Releaser::new();
                releaser.release_code(code);
                black_box(releaser.ledger().total());
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_build, bench_release);
criterion_main!(benches);
