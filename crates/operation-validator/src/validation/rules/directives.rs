use crate::ast::Ref;
use crate::report::DiagnosticData;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Every directive used is defined by the schema.
pub fn directives_are_defined(walker: &mut Walker) {
    let id = walker.add_visitor(DirectivesAreDefined);
    walker.register_enter_directive_visitor(id);
}

struct DirectivesAreDefined;

impl Visitor for DirectivesAreDefined {
    fn enter_directive(&mut self, ctx: &mut WalkContext<'_>, directive: Ref) {
        let operation = ctx.operation();
        let name = operation.directive_name(directive);
        if ctx.definition().directive_definition_by_name(name).is_none() {
            ctx.stop_with_external_err(
                DiagnosticData::DirectiveUndefined {
                    name: name.to_owned(),
                }
                .at(operation.directives[directive].span),
            );
        }
    }
}

/// Directives are only used at locations their definition lists.
///
/// Undefined directives are skipped.
pub fn directives_are_in_valid_locations(walker: &mut Walker) {
    let id = walker.add_visitor(DirectivesAreInValidLocations);
    walker.register_enter_directive_visitor(id);
}

struct DirectivesAreInValidLocations;

impl Visitor for DirectivesAreInValidLocations {
    fn enter_directive(&mut self, ctx: &mut WalkContext<'_>, directive: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let name = operation.directive_name(directive);
        let Some(directive_definition) = definition
            .directive_definition_by_name(name)
            .and_then(|def| definition.directive_definitions.get(def))
        else {
            return;
        };
        let Some(node) = ctx.parent() else {
            return;
        };

        let location = operation.node_directive_location(node);
        if location.is_some_and(|location| directive_definition.locations.contains(location)) {
            return;
        }
        let location = match location {
            Some(location) => location.name().to_owned(),
            None => node.kind.as_str().to_owned(),
        };
        ctx.stop_with_external_err(
            DiagnosticData::DirectiveNotAllowedOnNode {
                name: name.to_owned(),
                location,
            }
            .at(operation.directives[directive].span),
        );
    }
}

/// A non-repeatable directive is used at most once per node.
pub fn directives_are_unique_per_location(walker: &mut Walker) {
    let id = walker.add_visitor(DirectivesAreUniquePerLocation);
    walker.register_enter_directive_visitor(id);
}

struct DirectivesAreUniquePerLocation;

impl Visitor for DirectivesAreUniquePerLocation {
    fn enter_directive(&mut self, ctx: &mut WalkContext<'_>, directive: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let name = operation.directive_name(directive);
        let repeatable = definition
            .directive_definition_by_name(name)
            .and_then(|def| definition.directive_definitions.get(def))
            .is_some_and(|def| def.repeatable);
        if repeatable {
            return;
        }
        let Some(node) = ctx.parent() else {
            return;
        };
        let duplicated = operation
            .node_directives(node)
            .iter()
            .any(|&other| other != directive && operation.directive_name(other) == name);
        if duplicated {
            ctx.stop_with_external_err(
                DiagnosticData::DirectiveMustBeUniquePerLocation {
                    name: name.to_owned(),
                }
                .at(operation.directives[directive].span),
            );
        }
    }
}
