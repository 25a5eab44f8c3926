use super::expect_error_code;
use super::expect_valid;
use super::pet_schema;
use super::validate_with;
use expect_test::expect;
use operation_validator::ValidationState;

#[test]
fn duplicate_variable() {
    expect_error_code(
        "query Pets($first: Int, $first: Int) { pets(first: $first) { name } }",
        "VARIABLE_MUST_BE_UNIQUE",
        "the variable `$first` is declared multiple times in operation `Pets`",
    );
}

#[test]
fn variable_of_output_type() {
    expect_error_code(
        "query($pet: Pet) { owner { name } }",
        "VARIABLE_NOT_INPUT_TYPE",
        "variable `$pet` cannot be non-input type `Pet`",
    );
    expect_error_code(
        "query($pets: [SearchResult!]) { owner { name } }",
        "VARIABLE_NOT_INPUT_TYPE",
        "variable `$pets` cannot be non-input type `SearchResult`",
    );
}

#[test]
fn variable_of_undefined_type() {
    expect_error_code(
        "query($at: Instant) { owner { name } }",
        "VARIABLE_NOT_INPUT_TYPE",
        "variable `$at` cannot be non-input type `Instant`",
    );
}

#[test]
fn variables_of_input_types() {
    expect_valid(
        r#"
        query($filter: PetFilter!, $since: DateTime!, $kind: PetKind, $ttl: Int) {
          search(filter: $filter) { __typename }
          pets(kinds: [$kind]) { name @cached(ttl: $ttl) }
          adoptedSince(date: $since) { id }
        }
        "#,
    );
}

#[test]
fn undefined_variable_in_argument() {
    expect_error_code(
        "query Pets { pets(first: $first) { name } }",
        "VARIABLE_UNDEFINED",
        "variable `$first` used by argument `first` is not defined",
    );
}

#[test]
fn undefined_variable_nested_in_a_literal() {
    expect_error_code(
        "query Pets { search(filter: { kind: $kind }) { __typename } }",
        "VARIABLE_UNDEFINED",
        "variable `$kind` used by argument `filter` is not defined",
    );
}

#[test]
fn undefined_variable_in_spread_fragment() {
    expect_error_code(
        r#"
        query Pets { pets { ...Photo } }
        fragment Photo on Pet { photo(size: $size) }
        "#,
        "VARIABLE_UNDEFINED",
        "variable `$size` is not defined by operation `Pets`",
    );
}

#[test]
fn variable_used_through_fragments() {
    expect_valid(
        r#"
        query Pets($size: Int) { pets { ...Card } }
        fragment Card on Pet { name ...Photo }
        fragment Photo on Pet { photo(size: $size) }
        "#,
    );
}

#[test]
fn variables_are_scoped_to_their_operation() {
    expect_error_code(
        r#"
        query A($size: Int) { pets { photo(size: $size) } }
        query B { pets { photo(size: $size) } }
        "#,
        "VARIABLE_UNDEFINED",
        "variable `$size` used by argument `size` is not defined",
    );
}

#[test]
fn all_unused_variables_are_reported() {
    let (state, report) = validate_with(
        pet_schema(),
        "query Pets($a: Int, $b: Int, $c: Int) { pets(first: $b) { name } }",
    );
    assert_eq!(state, ValidationState::Invalid);
    let expected = expect![[r#"
        Error: variable `$a` is defined by operation `Pets` but never used
        Error: variable `$c` is defined by operation `Pets` but never used
    "#]];
    expected.assert_eq(&report.to_string());
}

#[test]
fn unused_variable_in_second_operation() {
    expect_error_code(
        r#"
        query A($size: Int) { pets { photo(size: $size) } }
        query B($size: Int) { pets { name } }
        "#,
        "VARIABLE_UNUSED",
        "variable `$size` is defined by operation `B` but never used",
    );
}
