use super::expect_error_code;
use super::expect_valid;

#[test]
fn builtin_and_custom_directives() {
    expect_valid(
        r#"
        query($skipOwner: Boolean!) {
          owner @skip(if: $skipOwner) {
            name @cached(ttl: 30)
            pets @include(if: true) { ...PetName @tag(name: "spread") }
          }
        }
        fragment PetName on Pet { name }
        "#,
    );
}

#[test]
fn undefined_directive() {
    expect_error_code(
        "{ owner @live { name } }",
        "DIRECTIVE_UNDEFINED",
        "cannot find directive `@live` in the schema",
    );
}

#[test]
fn directive_on_operation() {
    expect_error_code(
        "query Owner @skip(if: true) { owner { name } }",
        "DIRECTIVE_INVALID_LOCATION",
        "directive `@skip` is not allowed on QUERY",
    );
}

#[test]
fn directive_on_inline_fragment() {
    expect_valid("{ owner { ... @include(if: false) { name } } }");
    expect_error_code(
        "{ owner { ... @cached(ttl: 1) { name } } }",
        "DIRECTIVE_INVALID_LOCATION",
        "directive `@cached` is not allowed on INLINE_FRAGMENT",
    );
}

#[test]
fn directive_on_variable_definition() {
    expect_error_code(
        "query($ttl: Int @cached) { pets(first: $ttl) { name } }",
        "DIRECTIVE_INVALID_LOCATION",
        "directive `@cached` is not allowed on VARIABLE_DEFINITION",
    );
}

#[test]
fn duplicate_directive() {
    expect_error_code(
        "{ owner { name @cached(ttl: 1) @cached(ttl: 2) } }",
        "DIRECTIVE_MUST_BE_UNIQUE",
        "directive `@cached` can only be used once at this location",
    );
}

#[test]
fn same_directive_on_different_fields() {
    expect_valid("{ owner { id @cached(ttl: 1) name @cached(ttl: 1) } }");
}

#[test]
fn repeatable_directive() {
    expect_valid(r#"{ owner { name @tag(name: "a") @tag(name: "b") } }"#);
}
