use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::TYPENAME;
use crate::report::DiagnosticData;
use crate::report::InternalError;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Selected fields exist on their enclosing type, and have a selection set
/// exactly when their type is composite.
///
/// Unions only allow `__typename`. Leaf types allow no selection at all.
pub fn field_selections(walker: &mut Walker) {
    let id = walker.add_visitor(FieldSelections);
    walker.register_enter_field_visitor(id);
}

struct FieldSelections;

impl Visitor for FieldSelections {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, field: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let enclosing_type = ctx.enclosing_type_definition();
        let field_name = operation.field_name(field);
        let span = operation.fields[field].span;
        let type_name = definition.node_name(enclosing_type);

        match enclosing_type.kind {
            NodeKind::UnionTypeDefinition if field_name != TYPENAME => {
                ctx.stop_with_external_err(
                    DiagnosticData::FieldSelectionOnUnion {
                        field: field_name.to_owned(),
                        union: type_name.to_owned(),
                    }
                    .at(span),
                );
            }
            NodeKind::UnionTypeDefinition
            | NodeKind::InterfaceTypeDefinition
            | NodeKind::ObjectTypeDefinition => {
                let Some(field_definition) =
                    definition.node_field_definition_by_name(enclosing_type, field_name)
                else {
                    ctx.stop_with_external_err(
                        DiagnosticData::FieldUndefinedOnType {
                            field: field_name.to_owned(),
                            type_name: type_name.to_owned(),
                        }
                        .at(span),
                    );
                    return;
                };
                let field_type = definition.field_definition_type_node(field_definition);
                if field_type == Node::UNKNOWN {
                    let type_name = definition
                        .field_definition_type(field_definition)
                        .map_or("", |ty| definition.resolve_type_name(ty));
                    ctx.stop_with_external_err(
                        DiagnosticData::TypeUndefined {
                            type_name: type_name.to_owned(),
                        }
                        .at(span),
                    );
                    return;
                }
                let has_selections = operation.field_has_selections(field);
                let is_leaf = definition.node_is_leaf(field_type);
                if has_selections && is_leaf {
                    ctx.stop_with_external_err(
                        DiagnosticData::FieldSelectionOnLeaf {
                            field: field_name.to_owned(),
                            type_name: definition.node_name(field_type).to_owned(),
                        }
                        .at(span),
                    );
                } else if !has_selections && !is_leaf {
                    ctx.stop_with_external_err(
                        DiagnosticData::MissingFieldSelection {
                            field: field_name.to_owned(),
                            type_name: definition.node_name(field_type).to_owned(),
                        }
                        .at(span),
                    );
                }
            }
            NodeKind::ScalarTypeDefinition | NodeKind::EnumTypeDefinition => {
                ctx.stop_with_external_err(
                    DiagnosticData::FieldSelectionOnLeaf {
                        field: field_name.to_owned(),
                        type_name: type_name.to_owned(),
                    }
                    .at(span),
                );
            }
            kind => ctx.stop_with_internal_err(InternalError::UnhandledEnclosingType {
                field: field_name.to_owned(),
                kind,
            }),
        }
    }
}
