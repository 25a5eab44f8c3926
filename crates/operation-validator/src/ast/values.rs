use super::ByteSlice;
use super::Document;
use super::Ref;
use crate::report::InternalError;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Variable,
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Enum,
    List,
    Object,
}

/// A literal or variable in an operation or schema document.
///
/// `index` points into the array matching `kind`. It is unused for `Null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Value {
    pub kind: ValueKind,
    pub index: Ref,
}

impl Value {
    pub const NULL: Value = Value {
        kind: ValueKind::Null,
        index: 0,
    };

    pub fn new(kind: ValueKind, index: Ref) -> Self {
        Self { kind, index }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableValue {
    pub name: ByteSlice,
    pub span: ByteSlice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntValue {
    pub raw: ByteSlice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatValue {
    pub raw: ByteSlice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringValue {
    /// Content with escape sequences resolved
    pub content: ByteSlice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BooleanValue {
    pub value: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub name: ByteSlice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListValue {
    /// Refs into [`Document::values`]
    pub refs: Vec<Ref>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectValue {
    /// Refs into [`Document::object_fields`]
    pub refs: Vec<Ref>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectField {
    pub name: ByteSlice,
    pub value: Value,
}

impl Document {
    pub fn value_at(&self, value: Ref) -> Option<Value> {
        self.values.get(value).copied()
    }

    pub fn variable_value_name(&self, variable: Ref) -> &str {
        self.variable_values
            .get(variable)
            .map_or("", |v| self.byte_slice(v.name))
    }

    pub fn enum_value_name(&self, value: Ref) -> &str {
        self.enum_values
            .get(value)
            .map_or("", |v| self.byte_slice(v.name))
    }

    pub fn object_field_name(&self, field: Ref) -> &str {
        self.object_fields
            .get(field)
            .map_or("", |f| self.byte_slice(f.name))
    }

    pub fn list_value_items(&self, list: Ref) -> &[Ref] {
        self.list_values
            .get(list)
            .map(|l| l.refs.as_slice())
            .unwrap_or_default()
    }

    pub fn object_value_fields(&self, object: Ref) -> &[Ref] {
        self.object_values
            .get(object)
            .map(|o| o.refs.as_slice())
            .unwrap_or_default()
    }

    /// Renders `value` in GraphQL syntax.
    pub fn print_value(&self, value: Value) -> Result<String, InternalError> {
        let mut out = String::new();
        self.write_value(value, &mut out)?;
        Ok(out)
    }

    fn write_value(&self, value: Value, out: &mut String) -> Result<(), InternalError> {
        let out_of_bounds = |kind| InternalError::NodeOutOfBounds {
            kind,
            index: value.index,
        };
        match value.kind {
            ValueKind::Null => out.push_str("null"),
            ValueKind::Variable => {
                let variable = self
                    .variable_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("variable value"))?;
                out.push('$');
                out.push_str(self.byte_slice(variable.name));
            }
            ValueKind::Boolean => {
                let boolean = self
                    .boolean_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("boolean value"))?;
                out.push_str(if boolean.value { "true" } else { "false" });
            }
            ValueKind::Integer => {
                let int = self
                    .int_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("int value"))?;
                out.push_str(self.byte_slice(int.raw));
            }
            ValueKind::Float => {
                let float = self
                    .float_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("float value"))?;
                out.push_str(self.byte_slice(float.raw));
            }
            ValueKind::String => {
                let string = self
                    .string_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("string value"))?;
                write_escaped_string(self.byte_slice(string.content), out);
            }
            ValueKind::Enum => {
                let enum_value = self
                    .enum_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("enum value"))?;
                out.push_str(self.byte_slice(enum_value.name));
            }
            ValueKind::List => {
                let list = self
                    .list_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("list value"))?;
                out.push('[');
                for (i, &item) in list.refs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let item = self.value_at(item).ok_or(InternalError::NodeOutOfBounds {
                        kind: "value",
                        index: item,
                    })?;
                    self.write_value(item, out)?;
                }
                out.push(']');
            }
            ValueKind::Object => {
                let object = self
                    .object_values
                    .get(value.index)
                    .ok_or_else(|| out_of_bounds("object value"))?;
                out.push('{');
                for (i, &field) in object.refs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let field = self
                        .object_fields
                        .get(field)
                        .ok_or(InternalError::NodeOutOfBounds {
                            kind: "object field",
                            index: field,
                        })?;
                    out.push_str(self.byte_slice(field.name));
                    out.push_str(": ");
                    self.write_value(field.value, out)?;
                }
                out.push('}');
            }
        }
        Ok(())
    }

    /// Collects the names of all variables referenced by `value`, including
    /// those nested in list and object literals.
    pub fn value_variable_names<'a>(&'a self, value: Value, names: &mut Vec<&'a str>) {
        match value.kind {
            ValueKind::Variable => names.push(self.variable_value_name(value.index)),
            ValueKind::List => {
                for &item in self.list_value_items(value.index) {
                    if let Some(item) = self.value_at(item) {
                        self.value_variable_names(item, names);
                    }
                }
            }
            ValueKind::Object => {
                for &field in self.object_value_fields(value.index) {
                    if let Some(field) = self.object_fields.get(field) {
                        self.value_variable_names(field.value, names);
                    }
                }
            }
            _ => {}
        }
    }
}

fn write_escaped_string(content: &str, out: &mut String) {
    out.push('"');
    for c in content.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
