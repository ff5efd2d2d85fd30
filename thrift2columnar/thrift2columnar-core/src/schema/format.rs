use std::fmt::{Error, Result, Write as _};

use super::{SchemaField, SchemaType};

/// Format schema fields in a readable style:
/// primitive fields are rendered in one line, compound and enum fields are
/// pretty-printed. Nested fields follow the same rule.
pub fn format_schema_fields(
    fields: impl AsRef<[SchemaField]>,
) -> std::result::Result<String, Error> {
    format_schema_fields_indented(fields, 0)
}

pub(crate) fn format_schema_fields_indented(
    fields: impl AsRef<[SchemaField]>,
    indent: usize,
) -> std::result::Result<String, Error> {
    let fields = fields.as_ref();
    let mut out = String::new();

    for field in fields.iter() {
        format_field(field, indent, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &SchemaField, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if renders_inline(&field.schema_type) {
        writeln!(
            out,
            "{pad}{}: {{ id: {}, requirement: {}, type: {} }}",
            field.name,
            field.id,
            field.requirement.name(),
            field.schema_type.type_name()
        )
    } else {
        writeln!(out, "{pad}{}:", field.name)?;
        format_field_body(field, indent + 4, out)
    }
}

fn format_field_body(field: &SchemaField, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}id: {}", field.id)?;
    writeln!(out, "{pad}requirement: {}", field.requirement.name())?;
    writeln!(out, "{pad}type: {}", field.schema_type.type_name())?;

    match &field.schema_type {
        SchemaType::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields.iter() {
                format_field(child, indent + 4, out)?;
            }
        }
        SchemaType::Map { key, value } => {
            format_labeled_field("key", key, indent, out)?;
            format_labeled_field("value", value, indent, out)?;
        }
        SchemaType::Set(element) | SchemaType::List(element) => {
            format_labeled_field("element", element, indent, out)?;
        }
        SchemaType::Enum(values) => {
            writeln!(out, "{pad}values:")?;
            for ev in values {
                writeln!(out, "{pad}    {}: {}", ev.value, ev.name)?;
            }
        }
        _ => unreachable!("{:?} renders inline", field.schema_type),
    }

    Ok(())
}

fn format_labeled_field(label: &str, field: &SchemaField, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if renders_inline(&field.schema_type) {
        writeln!(
            out,
            "{pad}{label}: {{ name: {}, id: {}, requirement: {}, type: {} }}",
            field.name,
            field.id,
            field.requirement.name(),
            field.schema_type.type_name()
        )
    } else {
        writeln!(out, "{pad}{label}: {}", field.name)?;
        format_field_body(field, indent + 4, out)
    }
}

fn renders_inline(schema_type: &SchemaType) -> bool {
    schema_type.is_primitive() && !matches!(schema_type, SchemaType::Enum(_))
}
