use super::expect_error_code;
use super::expect_valid;

#[test]
fn defined_arguments() {
    expect_valid(
        r#"
        {
          pet(id: "1") { photo(size: 64) }
          pets(first: 2, kinds: [CAT, DOG]) { name }
          nearby(lat: 52, lng: 13.4) { name }
        }
        "#,
    );
}

#[test]
fn undefined_argument() {
    expect_error_code(
        r#"{ pet(id: "1", name: "Rex") { name } }"#,
        "ARGUMENT_UNDEFINED",
        "the argument `name` is not supported by `pet`",
    );
}

#[test]
fn undefined_directive_argument() {
    expect_error_code(
        "{ owner @skip(unless: true) { name } }",
        "ARGUMENT_UNDEFINED",
        "the argument `unless` is not supported by `skip`",
    );
}

#[test]
fn literal_of_the_wrong_scalar_type() {
    expect_error_code(
        "{ pet(id: true) { name } }",
        "INVALID_VALUE",
        "value `true` does not satisfy type `ID!`",
    );
    expect_error_code(
        r#"{ pets(first: "ten") { name } }"#,
        "INVALID_VALUE",
        r#"value `"ten"` does not satisfy type `Int`"#,
    );
    expect_error_code(
        "{ pets(first: 1.5) { name } }",
        "INVALID_VALUE",
        "value `1.5` does not satisfy type `Int`",
    );
}

#[test]
fn ids_accept_strings_and_integers() {
    expect_valid("{ pet(id: 1) { name } }");
}

#[test]
fn custom_scalars_accept_any_literal() {
    expect_valid(
        r#"
        {
          a: adoptedSince(date: "2024-05-01") { id }
          b: adoptedSince(date: 1714521600) { id }
        }
        "#,
    );
    expect_error_code(
        "{ adoptedSince(date: null) { id } }",
        "ARGUMENT_MUST_NOT_BE_NULL",
        "the argument `date` on field `adoptedSince` must not be null",
    );
}

#[test]
fn enum_values() {
    expect_valid("{ pets(kinds: [CAT]) { name } }");
    expect_error_code(
        "{ pets(kinds: [BIRD]) { name } }",
        "INVALID_VALUE",
        "value `[BIRD]` does not satisfy type `[PetKind!]`",
    );
    expect_error_code(
        r#"{ pets(kinds: "CAT") { name } }"#,
        "INVALID_VALUE",
        r#"value `"CAT"` does not satisfy type `[PetKind!]`"#,
    );
}

#[test]
fn single_values_do_not_satisfy_list_types() {
    expect_error_code(
        "{ pets(kinds: CAT) { name } }",
        "INVALID_VALUE",
        "value `CAT` does not satisfy type `[PetKind!]`",
    );
    expect_error_code(
        "{ petsOfKinds(kinds: DOG) { name } }",
        "INVALID_VALUE",
        "value `DOG` does not satisfy type `[PetKind!]!`",
    );
    expect_error_code(
        r#"{ search(filter: { kind: CAT, tags: "calm" }) { __typename } }"#,
        "INVALID_VALUE",
        r#"value `{kind: CAT, tags: "calm"}` does not satisfy type `PetFilter!`"#,
    );
}

#[test]
fn empty_lists() {
    expect_valid("{ pets(kinds: []) { name } }");
    expect_valid(r#"{ search(filter: { kind: CAT, tags: [] }) { __typename } }"#);
    expect_valid("{ petsOfKinds(kinds: [CAT]) { name } }");
    expect_error_code(
        "{ petsOfKinds(kinds: []) { name } }",
        "INVALID_VALUE",
        "value `[]` does not satisfy type `[PetKind!]!`",
    );
}

#[test]
fn null_list_items() {
    expect_valid("{ pets(kinds: null) { name } }");
    expect_error_code(
        "{ pets(kinds: [CAT, null]) { name } }",
        "INVALID_VALUE",
        "value `[CAT, null]` does not satisfy type `[PetKind!]`",
    );
}

#[test]
fn input_objects() {
    expect_valid(
        r#"
        {
          search(filter: { kind: CAT, name: "Rex", minAge: 2, tags: ["calm", null] }) {
            __typename
          }
        }
        "#,
    );
    expect_error_code(
        r#"{ search(filter: { name: "Rex" }) { __typename } }"#,
        "INVALID_VALUE",
        r#"value `{name: "Rex"}` does not satisfy type `PetFilter!`"#,
    );
    expect_error_code(
        "{ search(filter: { kind: CAT, color: BLACK }) { __typename } }",
        "INVALID_VALUE",
        "value `{kind: CAT, color: BLACK}` does not satisfy type `PetFilter!`",
    );
    expect_error_code(
        "{ search(filter: { kind: CAT, kind: DOG }) { __typename } }",
        "INVALID_VALUE",
        "value `{kind: CAT, kind: DOG}` does not satisfy type `PetFilter!`",
    );
}

#[test]
fn directive_argument_values() {
    expect_error_code(
        r#"{ owner { name @include(if: "yes") } }"#,
        "INVALID_VALUE",
        r#"value `"yes"` does not satisfy type `Boolean!`"#,
    );
}

#[test]
fn variables_of_compatible_types() {
    expect_valid("query($id: ID!) { pet(id: $id) { name } }");
    expect_valid(r#"query($id: ID = "1") { pet(id: $id) { name } }"#);
    expect_valid("query($first: Int!) { pets(first: $first) { name } }");
    expect_valid("query($kinds: [PetKind!]!) { pets(kinds: $kinds) { name } }");
}

#[test]
fn variables_of_incompatible_types() {
    expect_error_code(
        "query($id: String!) { pet(id: $id) { name } }",
        "INVALID_VALUE",
        "value `$id` does not satisfy type `ID!`",
    );
    expect_error_code(
        "query($id: ID) { pet(id: $id) { name } }",
        "INVALID_VALUE",
        "value `$id` does not satisfy type `ID!`",
    );
    expect_error_code(
        "query($kinds: [PetKind]) { pets(kinds: $kinds) { name } }",
        "INVALID_VALUE",
        "value `$kinds` does not satisfy type `[PetKind!]`",
    );
}

#[test]
fn variable_default_values() {
    expect_error_code(
        r#"query($first: Int = "ten") { pets(first: $first) { name } }"#,
        "INVALID_VALUE",
        r#"value `"ten"` does not satisfy type `Int`"#,
    );
}

#[test]
fn duplicate_argument() {
    expect_error_code(
        "{ pets(first: 1, first: 2) { name } }",
        "ARGUMENT_MUST_BE_UNIQUE",
        "the argument `first` is provided multiple times",
    );
}

#[test]
fn required_argument_missing() {
    expect_error_code(
        "{ pet { name } }",
        "ARGUMENT_REQUIRED",
        "the required argument `id` is not provided on field `pet`",
    );
    expect_error_code(
        "{ nearby(lat: 1) { name } }",
        "ARGUMENT_REQUIRED",
        "the required argument `lng` is not provided on field `nearby`",
    );
}

#[test]
fn arguments_with_defaults_are_optional() {
    expect_valid("{ pets { name } }");
    expect_valid(r#"mutation { adopt(id: "1") { name } }"#);
}

#[test]
fn required_argument_set_to_null() {
    expect_error_code(
        "{ pet(id: null) { name } }",
        "ARGUMENT_MUST_NOT_BE_NULL",
        "the argument `id` on field `pet` must not be null",
    );
}
