use criterion::*;
use operation_validator::{OperationValidator, Parser, Report};

const SCHEMA: &str = r#"
type Query { pet(id: ID!): Pet pets(first: Int): [Pet!]! }
type Pet { id: ID! name: String! nickname: String owner: Owner photo(size: Int): String }
type Owner { name: String pets: [Pet] }
directive @nothing repeatable on FIELD
"#;

fn bench_pet_query(c: &mut Criterion) {
    let schema = Parser::new().parse_schema(SCHEMA).unwrap();
    let operation = Parser::new()
        .parse_executable(
            r#"
            query Pets($size: Int) {
              pets(first: 10) { ...PetCard owner { name pets { name } } }
            }
            fragment PetCard on Pet { id name nickname photo(size: $size) }
            "#,
        )
        .unwrap();
    let mut validator = OperationValidator::default();
    let mut report = Report::new();

    c.bench_function("pet_query", move |b| {
        b.iter(|| {
            report.reset();
            let state = validator.validate(&operation, &schema, Some(&mut report));
            black_box(state);
        });
    });
}

fn bench_many_fields(c: &mut Criterion) {
    let schema = Parser::new().parse_schema(SCHEMA).unwrap();
    let fields: String = (0..500)
        .map(|i| format!("p{i}: pet(id: \"{i}\") {{ name }}\n"))
        .collect();
    let operation = Parser::new()
        .parse_executable(&format!("{{ {fields} }}"))
        .unwrap();
    let mut validator = OperationValidator::default();

    c.bench_function("many_fields", move |b| {
        b.iter(|| {
            let state = validator.validate(&operation, &schema, None);
            black_box(state);
        });
    });
}

fn bench_many_identical_directives(c: &mut Criterion) {
    let schema = Parser::new().parse_schema(SCHEMA).unwrap();
    let operation = Parser::new()
        .parse_executable(&format!(
            "{{ pets {{ name {} }} }}",
            "@nothing ".repeat(1_000)
        ))
        .unwrap();
    let mut validator = OperationValidator::default();

    c.bench_function("many_identical_directives", move |b| {
        b.iter(|| {
            let state = validator.validate(&operation, &schema, None);
            black_box(state);
        });
    });
}

criterion_group!(
    benches,
    bench_pet_query,
    bench_many_fields,
    bench_many_identical_directives
);
criterion_main!(benches);
