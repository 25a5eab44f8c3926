use crate::ast::OperationType;
use crate::report::DiagnosticData;
use crate::report::OperationName;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Operation names are unique within a document.
///
/// Only applies to documents with several operations. Anonymous operations
/// compare equal to each other.
pub fn operation_name_uniqueness(walker: &mut Walker) {
    let id = walker.add_visitor(OperationNameUniqueness);
    walker.register_enter_document_visitor(id);
}

struct OperationNameUniqueness;

impl Visitor for OperationNameUniqueness {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
        let operation = ctx.operation();
        let operations = &operation.operation_definitions;
        if operations.len() <= 1 {
            return;
        }
        for (i, left) in operations.iter().enumerate() {
            let name = operation.byte_slice(left.name);
            let duplicate = operations[i + 1..]
                .iter()
                .find(|right| operation.byte_slice(right.name) == name);
            if let Some(duplicate) = duplicate {
                ctx.stop_with_external_err(
                    DiagnosticData::OperationNameMustBeUnique {
                        name: name.to_owned(),
                    }
                    .at(duplicate.span),
                );
                return;
            }
        }
    }
}

/// An anonymous operation must be the only operation of its document.
pub fn lone_anonymous_operation(walker: &mut Walker) {
    let id = walker.add_visitor(LoneAnonymousOperation);
    walker.register_enter_document_visitor(id);
}

struct LoneAnonymousOperation;

impl Visitor for LoneAnonymousOperation {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
        let operations = &ctx.operation().operation_definitions;
        if operations.len() <= 1 {
            return;
        }
        if let Some(anonymous) = operations.iter().find(|op| op.name.is_empty()) {
            ctx.stop_with_external_err(
                DiagnosticData::AnonymousOperationMustBeTheOnlyOperation.at(anonymous.span),
            );
        }
    }
}

/// Subscriptions select exactly one root field.
///
/// Fragment spreads and inline fragments at the root are flattened, so a
/// lone spread must itself contribute a single field.
pub fn subscription_single_root_field(walker: &mut Walker) {
    let id = walker.add_visitor(SubscriptionSingleRootField);
    walker.register_enter_document_visitor(id);
}

struct SubscriptionSingleRootField;

impl Visitor for SubscriptionSingleRootField {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
        let operation = ctx.operation();
        for subscription in operation
            .operation_definitions
            .iter()
            .filter(|op| op.operation_type == OperationType::Subscription)
        {
            let selections = operation.selection_set_selections(subscription.selection_set);
            if selections.len() > 1
                || operation.selection_set_field_count(subscription.selection_set) > 1
            {
                ctx.stop_with_external_err(
                    DiagnosticData::SubscriptionMustOnlyHaveOneRootSelection {
                        operation: OperationName::new(operation.byte_slice(subscription.name)),
                    }
                    .at(subscription.span),
                );
                return;
            }
        }
    }
}
