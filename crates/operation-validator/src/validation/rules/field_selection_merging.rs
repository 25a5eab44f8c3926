use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::report::DiagnosticData;
use crate::report::InternalError;
use crate::walker::Path;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Fields selected under the same response key at the same path can be
/// merged into one response value.
///
/// - Leaf fields that may resolve on the same object must select the same
///   field with the same arguments, and their types must be compatible.
/// - Composite fields that may resolve on the same object must have
///   compatible types.
/// - A leaf field and a composite field never share a response key.
///
/// Requirements are collected per operation and per fragment definition.
pub fn field_selection_merging(walker: &mut Walker) {
    let id = walker.add_visitor(FieldSelectionMerging::default());
    walker.register_enter_document_visitor(id);
    walker.register_enter_operation_visitor(id);
    walker.register_enter_fragment_definition_visitor(id);
    walker.register_enter_field_visitor(id);
}

/// A field of leaf type seen before.
struct LeafRequirement {
    path: Path,
    response_key: String,
    field: Ref,
    field_type: Ref,
    enclosing_type: Node,
    field_type_node: Node,
}

/// A field of composite type seen before.
struct CompositeRequirement {
    path: Path,
    response_key: String,
    field: Ref,
    field_type: Ref,
    field_type_node: Node,
}

#[derive(Default)]
struct FieldSelectionMerging {
    leaf_requirements: Vec<LeafRequirement>,
    composite_requirements: Vec<CompositeRequirement>,
}

impl FieldSelectionMerging {
    fn reset(&mut self) {
        self.leaf_requirements.clear();
        self.composite_requirements.clear();
    }

    fn enter_composite_field(
        &mut self,
        ctx: &mut WalkContext<'_>,
        field: Ref,
        field_type: Ref,
        field_type_node: Node,
    ) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let response_key = operation.field_response_key(field);
        let path = ctx.path().clone();

        if let Some(leaf) = self
            .leaf_requirements
            .iter()
            .find(|req| req.path == path && req.response_key == response_key)
        {
            let error = DiagnosticData::ResponseOfDifferingTypesMustBeOfSameShape {
                left: operation.field_name(leaf.field).to_owned(),
                right: operation.field_name(field).to_owned(),
            };
            ctx.stop_with_external_err(error.at(operation.fields[field].span));
            return;
        }

        let mut matched = false;
        let mut other_kind_matched = false;
        for req in self
            .composite_requirements
            .iter()
            .filter(|req| req.path == path && req.response_key == response_key)
        {
            matched = true;
            if potentially_same_object(definition, field_type_node, req.field_type_node) {
                match definition.types_are_compatible_deep(req.field_type, field_type) {
                    Ok(true) => {}
                    Ok(false) => {
                        match print_types(definition, req.field_type, field_type) {
                            Ok((left, right)) => ctx.stop_with_external_err(
                                DiagnosticData::TypesForFieldMismatch {
                                    response_key: response_key.to_owned(),
                                    left,
                                    right,
                                }
                                .at(operation.fields[field].span),
                            ),
                            Err(err) => ctx.stop_with_internal_err(err),
                        }
                        return;
                    }
                    Err(err) => {
                        ctx.stop_with_internal_err(err);
                        return;
                    }
                }
            }
            if field_type_node.kind != req.field_type_node.kind {
                other_kind_matched = true;
            }
        }

        if matched && other_kind_matched {
            return;
        }
        self.composite_requirements.push(CompositeRequirement {
            path,
            response_key: response_key.to_owned(),
            field,
            field_type,
            field_type_node,
        });
    }

    fn enter_leaf_field(
        &mut self,
        ctx: &mut WalkContext<'_>,
        field: Ref,
        field_type: Ref,
        field_type_node: Node,
    ) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let response_key = operation.field_response_key(field);
        let enclosing_type = ctx.enclosing_type_definition();
        let path = ctx.path().clone();

        if let Some(composite) = self
            .composite_requirements
            .iter()
            .find(|req| req.path == path && req.response_key == response_key)
        {
            let error = DiagnosticData::ResponseOfDifferingTypesMustBeOfSameShape {
                left: operation.field_name(composite.field).to_owned(),
                right: operation.field_name(field).to_owned(),
            };
            ctx.stop_with_external_err(error.at(operation.fields[field].span));
            return;
        }

        let mut matched = false;
        let mut other_kind_matched = false;
        for req in self
            .leaf_requirements
            .iter()
            .filter(|req| req.path == path && req.response_key == response_key)
        {
            matched = true;
            if potentially_same_object(definition, req.enclosing_type, enclosing_type)
                && !operation.fields_are_equal_flat(req.field, field)
            {
                ctx.stop_with_external_err(
                    DiagnosticData::DifferingFieldsOnPotentiallySameType {
                        response_key: response_key.to_owned(),
                    }
                    .at(operation.fields[field].span),
                );
                return;
            }
            match definition.types_are_compatible_deep(req.field_type, field_type) {
                Ok(true) => {}
                Ok(false) => {
                    match print_types(definition, req.field_type, field_type) {
                        Ok((left, right)) => ctx.stop_with_external_err(
                            DiagnosticData::FieldsConflict {
                                response_key: response_key.to_owned(),
                                left,
                                right,
                            }
                            .at(operation.fields[field].span),
                        ),
                        Err(err) => ctx.stop_with_internal_err(err),
                    }
                    return;
                }
                Err(err) => {
                    ctx.stop_with_internal_err(err);
                    return;
                }
            }
            if field_type_node.kind != req.field_type_node.kind {
                other_kind_matched = true;
            }
        }

        if matched && other_kind_matched {
            return;
        }
        self.leaf_requirements.push(LeafRequirement {
            path,
            response_key: response_key.to_owned(),
            field,
            field_type,
            enclosing_type,
            field_type_node,
        });
    }
}

impl Visitor for FieldSelectionMerging {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.reset();
    }

    fn enter_operation_definition(&mut self, _ctx: &mut WalkContext<'_>, _operation: Ref) {
        self.reset();
    }

    fn enter_fragment_definition(&mut self, _ctx: &mut WalkContext<'_>, _fragment: Ref) {
        self.reset();
    }

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, field: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let enclosing_type = ctx.enclosing_type_definition();
        let field_name = operation.field_name(field);

        let Some(field_definition) =
            definition.node_field_definition_by_name(enclosing_type, field_name)
        else {
            ctx.stop_with_external_err(
                DiagnosticData::FieldUndefinedOnType {
                    field: field_name.to_owned(),
                    type_name: definition.node_name(enclosing_type).to_owned(),
                }
                .at(operation.fields[field].span),
            );
            return;
        };
        let Some(field_type) = definition.field_definition_type(field_definition) else {
            ctx.stop_with_internal_err(InternalError::NodeOutOfBounds {
                kind: NodeKind::FieldDefinition.as_str(),
                index: field_definition,
            });
            return;
        };
        let field_type_node = definition.field_definition_type_node(field_definition);

        if definition.node_is_leaf(field_type_node) {
            self.enter_leaf_field(ctx, field, field_type, field_type_node)
        } else {
            self.enter_composite_field(ctx, field, field_type, field_type_node)
        }
    }
}

/// Whether selections on `left` and `right` may apply to the same runtime
/// object. Interfaces are assumed to overlap with anything.
fn potentially_same_object(definition: &Document, left: Node, right: Node) -> bool {
    match (left.kind, right.kind) {
        (NodeKind::InterfaceTypeDefinition, _) | (_, NodeKind::InterfaceTypeDefinition) => true,
        (NodeKind::ObjectTypeDefinition, NodeKind::ObjectTypeDefinition) => {
            definition.node_name(left) == definition.node_name(right)
        }
        _ => false,
    }
}

fn print_types(definition: &Document, left: Ref, right: Ref) -> Result<(String, String), InternalError> {
    Ok((definition.print_type(left)?, definition.print_type(right)?))
}
