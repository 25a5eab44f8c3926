use crate::validation::pet_schema;
use operation_validator::ast::Ref;
use operation_validator::DiagnosticData;
use operation_validator::OperationValidator;
use operation_validator::Parser;
use operation_validator::Report;
use operation_validator::ValidationState;
use operation_validator::Visitor;
use operation_validator::WalkContext;
use operation_validator::Walker;
use std::sync::Arc;
use std::sync::Mutex;

struct FieldPaths(Arc<Mutex<Vec<String>>>);

impl Visitor for FieldPaths {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, field: Ref) {
        let key = ctx.operation().field_response_key(field);
        let entry = format!("{}.{key}", ctx.path());
        self.0.lock().unwrap().push(entry);
    }
}

#[test]
fn fields_are_visited_with_their_path() {
    let operation = Parser::new()
        .parse_executable(
            r#"
            query Q { pet(id: "1") { label: name owner { name } ... on Pet { id } } }
            fragment OwnerName on Owner { name }
            "#,
        )
        .unwrap();
    let paths = Arc::new(Mutex::new(Vec::new()));
    let mut walker = Walker::new();
    let id = walker.add_visitor(FieldPaths(paths.clone()));
    walker.register_enter_field_visitor(id);

    let mut report = Report::new();
    walker.walk(&operation, pet_schema(), &mut report);
    assert!(!report.has_errors());
    assert_eq!(
        *paths.lock().unwrap(),
        [
            "Q.pet",
            "Q.pet.label",
            "Q.pet.owner",
            "Q.pet.owner.name",
            "Q.pet.id",
            "OwnerName.name",
        ]
    );
}

/// Rejects every field named `nickname`.
fn no_nicknames(walker: &mut Walker) {
    let id = walker.add_visitor(NoNicknames);
    walker.register_enter_field_visitor(id);
}

struct NoNicknames;

impl Visitor for NoNicknames {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, field: Ref) {
        let operation = ctx.operation();
        if operation.field_name(field) == "nickname" {
            ctx.stop_with_external_err(
                DiagnosticData::FieldUndefinedOnType {
                    field: "nickname".to_owned(),
                    type_name: ctx.definition().node_name(ctx.enclosing_type_definition()).to_owned(),
                }
                .at(operation.fields[field].span),
            );
        }
    }
}

#[test]
fn custom_rules_run_after_builtin_ones() {
    let mut validator = OperationValidator::default();
    validator.register_rule(no_nicknames);

    let operation = Parser::new()
        .parse_executable(r#"{ pet(id: "1") { name } }"#)
        .unwrap();
    assert_eq!(
        validator.validate(&operation, pet_schema(), None),
        ValidationState::Valid
    );

    let operation = Parser::new()
        .parse_executable(r#"{ pet(id: "1") { nickname } }"#)
        .unwrap();
    let mut report = Report::new();
    assert_eq!(
        validator.validate(&operation, pet_schema(), Some(&mut report)),
        ValidationState::Invalid
    );
    assert_eq!(
        report.to_string(),
        "Error: cannot query field `nickname` on type `Pet`\n"
    );
}
