mod arguments;
mod directives;
mod field_selections;
mod fragments;
mod operations;
mod variables;

use operation_validator::Document;
use operation_validator::ExternalError;
use operation_validator::OperationValidator;
use operation_validator::Parser;
use operation_validator::Report;
use operation_validator::ValidationState;
use pretty_assertions::assert_eq;
use std::sync::OnceLock;
use unindent::unindent;

const PET_SCHEMA: &str = r#"
  type Query {
    pet(id: ID!): Pet
    pets(first: Int = 10, kinds: [PetKind!]): [Pet!]!
    petsOfKinds(kinds: [PetKind!]!): [Pet!]!
    owner: Owner
    node: Node
    search(filter: PetFilter!): [SearchResult]
    nearby(lat: Float!, lng: Float!): [Pet]
    adoptedSince(date: DateTime!): [Pet!]
  }

  type Mutation {
    adopt(id: ID!, owner: String): Pet
  }

  type Subscription {
    petAdded: Pet
    petRemoved: Pet
  }

  interface Node {
    id: ID!
  }

  type Pet implements Node {
    id: ID!
    name: String!
    nickname: String!
    age: Int
    kind: PetKind
    photo(size: Int): String
    owner: Owner
    tags: [String!]
  }

  type Owner implements Node {
    id: ID!
    name: String
    email: String!
    pets: [Pet]
  }

  union SearchResult = Pet | Owner

  enum PetKind {
    CAT
    DOG
  }

  input PetFilter {
    kind: PetKind!
    name: String
    minAge: Int = 0
    tags: [String]
  }

  scalar DateTime

  directive @cached(ttl: Int) on FIELD
  directive @tag(name: String!) repeatable on FIELD | FRAGMENT_SPREAD
"#;

pub(crate) fn pet_schema() -> &'static Document {
    static SCHEMA: OnceLock<Document> = OnceLock::new();
    SCHEMA.get_or_init(|| Parser::new().parse_schema(&unindent(PET_SCHEMA)).unwrap())
}

/// Runs every rule over `query` and returns the outcome with its report.
#[track_caller]
pub(crate) fn validate_with(schema: &Document, query: &str) -> (ValidationState, Report) {
    let operation = Parser::new().parse_executable(&unindent(query)).unwrap();
    let mut report = Report::new();
    let state = OperationValidator::default().validate(&operation, schema, Some(&mut report));
    (state, report)
}

#[track_caller]
pub(crate) fn expect_valid(query: &str) {
    let (state, report) = validate_with(pet_schema(), query);
    assert_eq!(report.to_string(), "");
    assert_eq!(state, ValidationState::Valid);
}

/// Asserts that `query` is invalid and returns its single error.
#[track_caller]
pub(crate) fn expect_error(query: &str) -> ExternalError {
    let (state, mut report) = validate_with(pet_schema(), query);
    assert_eq!(state, ValidationState::Invalid);
    assert!(report.internal_errors.is_empty(), "{report}");
    assert_eq!(report.external_errors.len(), 1, "{report}");
    report.external_errors.remove(0)
}

#[track_caller]
pub(crate) fn expect_error_code(query: &str, code: &str, message: &str) {
    let error = expect_error(query);
    assert_eq!(error.code(), code);
    assert_eq!(error.to_string(), message);
}

const SMALL_SCHEMA: &str = "type Query { pet(id: ID!): Pet } type Pet { name: String! }";

fn small_schema() -> &'static Document {
    static SCHEMA: OnceLock<Document> = OnceLock::new();
    SCHEMA.get_or_init(|| Parser::new().parse_schema(SMALL_SCHEMA).unwrap())
}

#[test]
fn selecting_defined_fields_is_valid() {
    let (state, report) = validate_with(small_schema(), r#"{ pet(id: "1") { name } }"#);
    assert!(!report.has_errors());
    assert_eq!(state, ValidationState::Valid);
}

#[test]
fn selecting_an_undefined_field_is_invalid() {
    let (state, report) = validate_with(small_schema(), r#"{ pet(id: "1") { nickname } }"#);
    assert_eq!(state, ValidationState::Invalid);
    assert_eq!(
        report.to_string(),
        "Error: cannot query field `nickname` on type `Pet`\n"
    );
}

#[test]
fn duplicate_operation_names_are_invalid() {
    let query = r#"
      query A { pet(id: "1") { name } }
      query A { pet(id: "2") { name } }
    "#;
    let (state, report) = validate_with(small_schema(), query);
    assert_eq!(state, ValidationState::Invalid);
    assert_eq!(report.external_errors.len(), 1);
    assert_eq!(
        report.external_errors[0].code(),
        "OPERATION_NAME_MUST_BE_UNIQUE"
    );
}

#[test]
fn variables_must_be_used() {
    let (state, report) = validate_with(
        small_schema(),
        "query($x: ID!) { pet(id: $x) { name } }",
    );
    assert_eq!(report.to_string(), "");
    assert_eq!(state, ValidationState::Valid);

    let (state, report) = validate_with(
        small_schema(),
        r#"query($x: ID!) { pet(id: "1") { name } }"#,
    );
    assert_eq!(state, ValidationState::Invalid);
    assert_eq!(
        report.to_string(),
        "Error: variable `$x` is defined by anonymous operation but never used\n"
    );
}

#[test]
fn aliasing_different_fields_to_one_key_is_invalid() {
    let schema = Parser::new()
        .parse_schema("type Query { pet(id: ID!): Pet } type Pet { name: String! nickname: String! }")
        .unwrap();
    let (state, report) = validate_with(&schema, r#"{ pet(id: "1") { name name: nickname } }"#);
    assert_eq!(state, ValidationState::Invalid);
    assert_eq!(report.external_errors[0].code(), "DIFFERING_FIELDS");
    assert_eq!(
        report.to_string(),
        "Error: fields selected as `name` conflict because they select different fields or arguments\n"
    );
}

#[test]
fn missing_root_type_is_reported() {
    let (state, report) = validate_with(small_schema(), r#"mutation { pet(id: "1") { name } }"#);
    assert_eq!(state, ValidationState::Invalid);
    assert_eq!(report.external_errors[0].code(), "OPERATION_TYPE_UNDEFINED");
    assert_eq!(
        report.external_errors[0].to_string(),
        "the schema does not define a root type for `mutation` operations"
    );
}

#[test]
fn every_rule_passes_on_a_rich_operation() {
    expect_valid(
        r#"
        query PetPage($id: ID!, $size: Int, $withOwner: Boolean!) {
          pet(id: $id) {
            ...PetCard
            owner @include(if: $withOwner) {
              name
              pets { nickname }
            }
          }
          node { id ... on Owner { name } }
        }

        fragment PetCard on Pet {
          __typename
          id
          name
          photo(size: $size) @cached(ttl: 60)
          ... on Node { id }
        }
        "#,
    );
}

#[test]
fn validators_can_be_reused() {
    let schema = pet_schema();
    let valid = Parser::new()
        .parse_executable("{ owner { name } }")
        .unwrap();
    let invalid = Parser::new()
        .parse_executable("{ owner { age } }")
        .unwrap();

    let mut validator = OperationValidator::default();
    let mut report = Report::new();
    assert_eq!(
        validator.validate(&invalid, schema, Some(&mut report)),
        ValidationState::Invalid
    );
    assert_eq!(report.external_errors.len(), 1);

    report.reset();
    assert_eq!(
        validator.validate(&valid, schema, Some(&mut report)),
        ValidationState::Valid
    );
    assert!(!report.has_errors());
    assert_eq!(validator.validate(&valid, schema, None), ValidationState::Valid);
}

#[test]
fn validator_without_rules_accepts_anything() {
    let operation = Parser::new()
        .parse_executable("{ owner { age } } { owner { age } }")
        .unwrap();
    let state = OperationValidator::new().validate(&operation, pet_schema(), None);
    assert_eq!(state, ValidationState::Valid);
}

#[test]
fn single_rule_validator() {
    let operation = Parser::new()
        .parse_executable("query A { owner { age } } query A { owner { name } }")
        .unwrap();
    let mut validator = OperationValidator::new();
    validator.register_rule(operation_validator::validation::rules::field_selections);
    let mut report = Report::new();
    validator.validate(&operation, pet_schema(), Some(&mut report));
    assert_eq!(report.external_errors[0].code(), "FIELD_UNDEFINED");
}

#[test]
fn convenience_function_returns_the_report() {
    let operation = Parser::new().parse_executable("{ owner { name } }").unwrap();
    assert!(operation_validator::validate(&operation, pet_schema()).is_ok());

    let operation = Parser::new().parse_executable("{ owner }").unwrap();
    let report = operation_validator::validate(&operation, pet_schema()).unwrap_err();
    assert_eq!(report.external_errors[0].code(), "MISSING_FIELD_SELECTION");
}

#[test]
fn all_variables_used_passes_for_any_count() {
    for count in 0..6 {
        let definitions: Vec<String> = (0..count).map(|i| format!("$v{i}: Int")).collect();
        let fields: Vec<String> = (0..count)
            .map(|i| format!("p{i}: pets(first: $v{i}) {{ name }}"))
            .collect();
        let query = if count == 0 {
            "query Q { owner { name } }".to_owned()
        } else {
            format!("query Q({}) {{ {} }}", definitions.join(", "), fields.join(" "))
        };
        expect_valid(&query);

        if count > 0 {
            // drop the first usage
            let query = format!(
                "query Q({}) {{ owner {{ name }} {} }}",
                definitions.join(", "),
                fields[1..].join(" ")
            );
            expect_error_code(
                &query,
                "VARIABLE_UNUSED",
                "variable `$v0` is defined by operation `Q` but never used",
            );
        }
    }
}
