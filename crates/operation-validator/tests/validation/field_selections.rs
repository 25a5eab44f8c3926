use super::expect_error_code;
use super::expect_valid;
use super::validate_with;
use operation_validator::ast::NodeKind;
use operation_validator::InternalError;
use operation_validator::Parser;
use operation_validator::ValidationState;

#[test]
fn undefined_field() {
    expect_error_code(
        "{ owner { age } }",
        "FIELD_UNDEFINED",
        "cannot query field `age` on type `Owner`",
    );
}

#[test]
fn typename_on_every_composite_type() {
    expect_valid(
        r#"
        {
          __typename
          owner { __typename }
          node { __typename }
          search(filter: { kind: CAT }) { __typename }
        }
        "#,
    );
}

#[test]
fn fields_of_interfaces() {
    expect_valid("{ node { id ... on Pet { name } } }");
    expect_error_code(
        "{ node { name } }",
        "FIELD_UNDEFINED",
        "cannot query field `name` on type `Node`",
    );
}

#[test]
fn fields_on_unions_only_through_fragments() {
    expect_valid(
        r#"
        {
          search(filter: { kind: DOG }) {
            __typename
            ... on Pet { nickname }
            ... on Owner { name }
          }
        }
        "#,
    );
    expect_error_code(
        "{ search(filter: { kind: CAT }) { name } }",
        "FIELD_SELECTION_ON_UNION",
        "cannot query field `name` on union `SearchResult`, only `__typename` can be selected",
    );
}

#[test]
fn leaf_fields_have_no_selections() {
    expect_error_code(
        r#"{ pet(id: "1") { name { length } } }"#,
        "FIELD_SELECTION_ON_LEAF",
        "field `name` of type `String` must not have a selection set",
    );
    expect_error_code(
        r#"{ pet(id: "1") { kind { value } } }"#,
        "FIELD_SELECTION_ON_LEAF",
        "field `kind` of type `PetKind` must not have a selection set",
    );
}

#[test]
fn composite_fields_need_selections() {
    expect_error_code(
        "{ owner }",
        "MISSING_FIELD_SELECTION",
        "field `owner` of type `Owner` must have a selection of subfields",
    );
    expect_error_code(
        "{ pets }",
        "MISSING_FIELD_SELECTION",
        "field `pets` of type `Pet` must have a selection of subfields",
    );
}

#[test]
fn field_of_undefined_type() {
    let schema = Parser::new()
        .parse_schema("type Query { missing: Missing }")
        .unwrap();
    let (state, report) = validate_with(&schema, "{ missing }");
    assert_eq!(state, ValidationState::Invalid);
    assert_eq!(
        report.to_string(),
        "Error: cannot find type `Missing` in the schema\n"
    );
}

#[test]
fn selections_on_input_objects_are_internal_errors() {
    let schema = Parser::new()
        .parse_schema("type Query { filter: Filter } input Filter { kind: String }")
        .unwrap();
    let (state, report) = validate_with(&schema, "{ filter { kind } }");
    assert_eq!(state, ValidationState::Invalid);
    assert!(report.external_errors.is_empty(), "{report}");
    assert_eq!(
        report.internal_errors,
        [InternalError::UnhandledEnclosingType {
            field: "kind".into(),
            kind: NodeKind::InputObjectTypeDefinition,
        }]
    );
}

#[test]
fn repeated_fields_merge() {
    expect_valid(
        r#"
        {
          pet(id: "1") { name name photo(size: 2) photo(size: 2) }
          pet(id: "1") { nickname }
        }
        "#,
    );
}

#[test]
fn aliases_to_different_fields() {
    expect_error_code(
        r#"{ pet(id: "1") { label: name label: nickname } }"#,
        "DIFFERING_FIELDS",
        "fields selected as `label` conflict because they select different fields or arguments",
    );
}

#[test]
fn same_field_with_different_arguments() {
    expect_error_code(
        r#"{ pet(id: "1") { photo(size: 1) photo(size: 2) } }"#,
        "DIFFERING_FIELDS",
        "fields selected as `photo` conflict because they select different fields or arguments",
    );
}

#[test]
fn conflicts_are_scoped_to_their_parent_field() {
    expect_valid(
        r#"
        {
          pet(id: "1") { label: name }
          owner { label: name }
        }
        "#,
    );
}

#[test]
fn leaf_and_composite_under_one_key() {
    expect_error_code(
        r#"{ pet(id: "1") { owner: name owner { name } } }"#,
        "RESPONSE_SHAPE_MISMATCH",
        "fields selected as `name` and `owner` return objects of differing types and must have the same shape",
    );
}

#[test]
fn composite_fields_of_mismatching_types() {
    expect_error_code(
        r#"{ pets { name } pets: pet(id: "1") { name } }"#,
        "FIELD_TYPES_MISMATCH",
        "fields selected as `pets` have mismatching types `[Pet!]!` and `Pet`",
    );
}

#[test]
fn leaf_fields_of_conflicting_types_on_different_objects() {
    expect_error_code(
        r#"
        {
          search(filter: { kind: DOG }) {
            ... on Pet { name }
            ... on Owner { name }
          }
        }
        "#,
        "FIELDS_CONFLICT",
        "fields selected as `name` conflict because they return conflicting types `String!` and `String`",
    );
}

#[test]
fn different_fields_on_different_objects() {
    expect_valid(
        r#"
        {
          search(filter: { kind: DOG }) {
            ... on Pet { label: nickname }
            ... on Owner { label: email }
          }
        }
        "#,
    );
}
