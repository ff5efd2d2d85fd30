use thrift2columnar_core::{
    EnumValue, MessageType, Requirement, SchemaField, SchemaFields, SchemaType,
    format_schema_fields,
};

#[test]
fn nested_struct_keeps_field_lines_and_indentation() -> Result<(), std::fmt::Error> {
    let fields = vec![SchemaField::new(
        "field_root",
        1,
        Requirement::Required,
        SchemaType::Struct(
            vec![
                SchemaField::new("field_a", 1, Requirement::Optional, SchemaType::Double),
                SchemaField::new(
                    "field_b",
                    2,
                    Requirement::Optional,
                    SchemaType::Struct(
                        vec![SchemaField::new(
                            "field_c",
                            1,
                            Requirement::Default,
                            SchemaType::String,
                        )]
                        .into(),
                    ),
                ),
            ]
            .into(),
        ),
    )];

    let text = format_schema_fields(&fields)?;
    let expected = "\
field_root:
    id: 1
    requirement: required
    type: struct
    fields:
        field_a: { id: 1, requirement: optional, type: double }
        field_b:
            id: 2
            requirement: optional
            type: struct
            fields:
                field_c: { id: 1, requirement: default, type: string }
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn list_of_struct_element_is_rendered_as_block() -> Result<(), std::fmt::Error> {
    let fields = vec![SchemaField::new(
        "field_list",
        3,
        Requirement::Optional,
        SchemaType::List(Box::new(SchemaField::new(
            "field_list",
            3,
            Requirement::Optional,
            SchemaType::Struct(
                vec![
                    SchemaField::new("item_a", 1, Requirement::Optional, SchemaType::I32),
                    SchemaField::new("item_b", 2, Requirement::Optional, SchemaType::String),
                ]
                .into(),
            ),
        ))),
    )];

    let text = format_schema_fields(&fields)?;
    let expected = "\
field_list:
    id: 3
    requirement: optional
    type: list
    element: field_list
        id: 3
        requirement: optional
        type: struct
        fields:
            item_a: { id: 1, requirement: optional, type: i32 }
            item_b: { id: 2, requirement: optional, type: string }
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn map_and_enum_render_key_value_and_values_blocks() -> Result<(), std::fmt::Error> {
    let fields = vec![
        SchemaField::new(
            "counts",
            1,
            Requirement::Optional,
            SchemaType::Map {
                key: Box::new(SchemaField::new(
                    "key",
                    1,
                    Requirement::Optional,
                    SchemaType::String,
                )),
                value: Box::new(SchemaField::new(
                    "value",
                    2,
                    Requirement::Optional,
                    SchemaType::I64,
                )),
            },
        ),
        SchemaField::new(
            "status",
            2,
            Requirement::Default,
            SchemaType::Enum(vec![EnumValue::new(0, "OK"), EnumValue::new(1, "FAILED")]),
        ),
    ];

    let text = format_schema_fields(&fields)?;
    let expected = "\
counts:
    id: 1
    requirement: optional
    type: map
    key: { name: key, id: 1, requirement: optional, type: string }
    value: { name: value, id: 2, requirement: optional, type: i64 }
status:
    id: 2
    requirement: default
    type: enum
    values:
        0: OK
        1: FAILED
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn schema_fields_display_matches_formatter() -> Result<(), std::fmt::Error> {
    let fields: SchemaFields =
        vec![SchemaField::new("field_a", 1, Requirement::Required, SchemaType::I32)].into();
    assert_eq!(fields.to_string(), format_schema_fields(fields.as_slice())?);
    Ok(())
}

#[test]
fn message_type_display_prefixes_schema_name() {
    let message = MessageType::new(
        "Document",
        vec![SchemaField::new("id", 1, Requirement::Required, SchemaType::I64)],
    );
    let expected = "\
message Document:
    id: { id: 1, requirement: required, type: i64 }
";
    assert_eq!(message.to_string(), expected);
}

#[test]
fn requirement_resolution_defaults_to_optional() {
    assert_eq!(Requirement::resolve(None), Requirement::Optional);
    assert_eq!(
        Requirement::resolve(Some(Requirement::Required)),
        Requirement::Required
    );
    assert_eq!(
        Requirement::resolve(Some(Requirement::Default)),
        Requirement::Default
    );
}
