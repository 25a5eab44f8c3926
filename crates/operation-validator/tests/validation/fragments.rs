use super::expect_error_code;
use super::expect_valid;

#[test]
fn used_fragments() {
    expect_valid(
        r#"
        query {
          pet(id: "1") { ...PetName ...NodeId }
          owner { pets { ...PetName } }
        }
        fragment PetName on Pet { name }
        fragment NodeId on Node { id }
        "#,
    );
}

#[test]
fn fragments_spreading_fragments() {
    expect_valid(
        r#"
        { search(filter: { kind: CAT }) { ...Result } }
        fragment Result on SearchResult { ... on Pet { ...PetName } }
        fragment PetName on Pet { name }
        "#,
    );
}

#[test]
fn unused_fragment() {
    expect_error_code(
        r#"
        { owner { name } }
        fragment PetName on Pet { name }
        "#,
        "FRAGMENT_UNUSED",
        "fragment `PetName` defined but not used",
    );
}

#[test]
fn unused_fragment_spreading_another() {
    expect_error_code(
        r#"
        { owner { name } }
        fragment Outer on Pet { ...Inner }
        fragment Inner on Pet { name }
        "#,
        "FRAGMENT_UNUSED",
        "fragment `Outer` defined but not used",
    );
}

#[test]
fn undefined_fragment() {
    expect_error_code(
        r#"{ pet(id: "1") { ...Missing } }"#,
        "FRAGMENT_UNDEFINED",
        "cannot find fragment `Missing` in this document",
    );
}

#[test]
fn direct_cycle() {
    expect_error_code(
        r#"
        { pet(id: "1") { ...Again } }
        fragment Again on Pet { name ...Again }
        "#,
        "FRAGMENT_SPREAD_FORMS_CYCLE",
        "fragment spread `...Again` forms a cycle",
    );
}

#[test]
fn indirect_cycle() {
    expect_error_code(
        r#"
        { pet(id: "1") { ...A } }
        fragment A on Pet { name ...B }
        fragment B on Pet { nickname ...A }
        "#,
        "FRAGMENT_SPREAD_FORMS_CYCLE",
        "fragment spread `...B` forms a cycle",
    );
}

#[test]
fn duplicate_fragment_name() {
    expect_error_code(
        r#"
        { pet(id: "1") { ...PetName } }
        fragment PetName on Pet { name }
        fragment PetName on Pet { nickname }
        "#,
        "FRAGMENT_NAME_MUST_BE_UNIQUE",
        "there can be only one fragment named `PetName`",
    );
}

#[test]
fn fragment_on_scalar() {
    expect_error_code(
        r#"
        { pet(id: "1") { ...Text } }
        fragment Text on String { length }
        "#,
        "FRAGMENT_ON_NON_COMPOSITE_TYPE",
        "fragment `Text` cannot condition on non composite type `String`",
    );
}

#[test]
fn fragment_on_undefined_type() {
    expect_error_code(
        r#"
        { pet(id: "1") { ...CatName } }
        fragment CatName on Cat { name }
        "#,
        "TYPE_UNDEFINED",
        "cannot find type `Cat` in the schema",
    );
}

#[test]
fn impossible_fragment_spread() {
    expect_error_code(
        r#"
        { owner { ...PetName } }
        fragment PetName on Pet { name }
        "#,
        "FRAGMENT_SPREAD_IMPOSSIBLE",
        "fragment `PetName` with type condition `Pet` cannot be applied to `Owner`",
    );
}

#[test]
fn inline_fragments() {
    expect_valid(
        r#"
        {
          owner {
            ... { name }
            ... on Node { id }
            ... on SearchResult { __typename }
          }
        }
        "#,
    );
}

#[test]
fn impossible_inline_fragment() {
    expect_error_code(
        "{ owner { ... on Pet { name } } }",
        "INLINE_FRAGMENT_IMPOSSIBLE",
        "inline fragment with type condition `Pet` cannot be applied to `Owner`",
    );
}

#[test]
fn inline_fragment_on_enum() {
    expect_error_code(
        "{ owner { ... on PetKind { name } } }",
        "INLINE_FRAGMENT_ON_NON_COMPOSITE_TYPE",
        "inline fragment cannot condition on non composite type `PetKind`",
    );
}

#[test]
fn inline_fragment_on_undefined_type() {
    expect_error_code(
        "{ owner { ... on Cat { name } } }",
        "TYPE_UNDEFINED",
        "cannot find type `Cat` in the schema",
    );
}
