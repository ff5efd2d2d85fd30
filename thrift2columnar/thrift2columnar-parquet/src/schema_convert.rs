use std::sync::Arc;

use parquet::basic::{ConvertedType, Repetition, Type as PhysicalType};
use parquet::schema::types::{Type, TypePtr};
use thrift2columnar_core::{MessageType, Requirement, SchemaField, SchemaType};

use crate::error::ParquetSchemaError;

// ---------------------------------------------------------------------------
// Convert MessageType schema IR to a parquet message type
// ---------------------------------------------------------------------------

/// Converts a `thrift2columnar-core` [`MessageType`] into a parquet message
/// type.
///
/// Requirement levels map to repetition: required fields become `REQUIRED`,
/// optional and default fields become `OPTIONAL`. Numeric field ids are
/// carried through as parquet field ids.
pub fn message_to_parquet_schema(message: &MessageType) -> Result<Type, ParquetSchemaError> {
    let fields = schema_fields_to_parquet(message.fields.as_slice())?;
    let root = Type::group_type_builder(&message.name)
        .with_fields(fields)
        .build()?;
    Ok(root)
}

fn schema_fields_to_parquet(fields: &[SchemaField]) -> Result<Vec<TypePtr>, ParquetSchemaError> {
    fields
        .iter()
        .map(|f| schema_field_to_parquet(f).map(Arc::new))
        .collect()
}

fn schema_field_to_parquet(field: &SchemaField) -> Result<Type, ParquetSchemaError> {
    build_type(
        &field.name,
        field.id,
        repetition(field.requirement),
        &field.schema_type,
    )
}

fn repetition(requirement: Requirement) -> Repetition {
    match requirement {
        Requirement::Required => Repetition::REQUIRED,
        Requirement::Optional | Requirement::Default => Repetition::OPTIONAL,
    }
}

fn build_type(
    name: &str,
    id: i16,
    repetition_level: Repetition,
    schema_type: &SchemaType,
) -> Result<Type, ParquetSchemaError> {
    let parquet_type = match schema_type {
        SchemaType::Bool => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::BOOLEAN,
            ConvertedType::NONE,
        )?,
        SchemaType::Byte => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::INT32,
            ConvertedType::INT_8,
        )?,
        SchemaType::Double => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::DOUBLE,
            ConvertedType::NONE,
        )?,
        SchemaType::I16 => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::INT32,
            ConvertedType::INT_16,
        )?,
        SchemaType::I32 => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::INT32,
            ConvertedType::NONE,
        )?,
        SchemaType::I64 => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::INT64,
            ConvertedType::NONE,
        )?,
        SchemaType::String => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::BYTE_ARRAY,
            ConvertedType::UTF8,
        )?,
        SchemaType::Enum(_) => primitive(
            name,
            id,
            repetition_level,
            PhysicalType::BYTE_ARRAY,
            ConvertedType::ENUM,
        )?,
        SchemaType::Struct(fields) => Type::group_type_builder(name)
            .with_repetition(repetition_level)
            .with_id(Some(id as i32))
            .with_fields(schema_fields_to_parquet(fields.as_slice())?)
            .build()?,
        // Sets and lists share the three-level parquet LIST layout
        SchemaType::Set(element) | SchemaType::List(element) => {
            let element = build_type(
                "element",
                element.id,
                repetition(element.requirement),
                &element.schema_type,
            )?;
            let repeated = Type::group_type_builder("list")
                .with_repetition(Repetition::REPEATED)
                .with_fields(vec![Arc::new(element)])
                .build()?;
            Type::group_type_builder(name)
                .with_repetition(repetition_level)
                .with_converted_type(ConvertedType::LIST)
                .with_id(Some(id as i32))
                .with_fields(vec![Arc::new(repeated)])
                .build()?
        }
        SchemaType::Map { key, value } => {
            // parquet map keys are always required
            let key = build_type("key", key.id, Repetition::REQUIRED, &key.schema_type)?;
            let value = build_type(
                "value",
                value.id,
                repetition(value.requirement),
                &value.schema_type,
            )?;
            let entries = Type::group_type_builder("key_value")
                .with_repetition(Repetition::REPEATED)
                .with_fields(vec![Arc::new(key), Arc::new(value)])
                .build()?;
            Type::group_type_builder(name)
                .with_repetition(repetition_level)
                .with_converted_type(ConvertedType::MAP)
                .with_id(Some(id as i32))
                .with_fields(vec![Arc::new(entries)])
                .build()?
        }
    };
    Ok(parquet_type)
}

fn primitive(
    name: &str,
    id: i16,
    repetition_level: Repetition,
    physical: PhysicalType,
    converted: ConvertedType,
) -> Result<Type, ParquetSchemaError> {
    let parquet_type = Type::primitive_type_builder(name, physical)
        .with_repetition(repetition_level)
        .with_converted_type(converted)
        .with_id(Some(id as i32))
        .build()?;
    Ok(parquet_type)
}
