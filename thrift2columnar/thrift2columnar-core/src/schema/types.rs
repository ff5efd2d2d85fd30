use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Requirement level attached to every converted field.
///
/// Source metadata that carries no requirement at all resolves to
/// [`Requirement::Optional`]; `Default` is only produced when the source
/// explicitly declares default requiredness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    Required,
    #[default]
    Optional,
    Default,
}

impl Requirement {
    /// Resolve possibly-absent source requirement metadata.
    pub fn resolve(metadata: Option<Requirement>) -> Requirement {
        metadata.unwrap_or(Requirement::Optional)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Requirement::Required => "required",
            Requirement::Optional => "optional",
            Requirement::Default => "default",
        }
    }
}

/// One named member of an enum type, copied verbatim from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub value: i32,
    pub name: String,
}

impl EnumValue {
    pub fn new(value: i32, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

/// Thrift-shaped columnar type definition for schema intermediate representation.
///
/// `Struct`, `Map`, `Set` and `List` are the only recursive variants; every
/// other variant is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    Bool,
    Byte,
    Double,
    I16,
    I32,
    I64,
    String,
    Struct(SchemaFields),
    Map {
        key: Box<SchemaField>,
        value: Box<SchemaField>,
    },
    Set(Box<SchemaField>),
    List(Box<SchemaField>),
    Enum(Vec<EnumValue>),
}

impl SchemaType {
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            SchemaType::Struct(_)
                | SchemaType::Map { .. }
                | SchemaType::Set(_)
                | SchemaType::List(_)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaType::Bool => "bool",
            SchemaType::Byte => "byte",
            SchemaType::Double => "double",
            SchemaType::I16 => "i16",
            SchemaType::I32 => "i32",
            SchemaType::I64 => "i64",
            SchemaType::String => "string",
            SchemaType::Struct(_) => "struct",
            SchemaType::Map { .. } => "map",
            SchemaType::Set(_) => "set",
            SchemaType::List(_) => "list",
            SchemaType::Enum(_) => "enum",
        }
    }
}

/// Typed collection of [`SchemaField`] used for message bodies and struct members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaFields(pub Vec<SchemaField>);

impl SchemaFields {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[SchemaField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaField> {
        self.0.iter()
    }
}

impl From<Vec<SchemaField>> for SchemaFields {
    fn from(value: Vec<SchemaField>) -> Self {
        Self(value)
    }
}

impl From<SchemaFields> for Vec<SchemaField> {
    fn from(value: SchemaFields) -> Self {
        value.0
    }
}

impl AsRef<[SchemaField]> for SchemaFields {
    fn as_ref(&self) -> &[SchemaField] {
        self.as_slice()
    }
}

impl Deref for SchemaFields {
    type Target = [SchemaField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for SchemaFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema_fields(self.as_slice())?;
        f.write_str(&text)
    }
}

/// Converted field: name, numeric field id, requirement level and type.
///
/// Fields are immutable once constructed and exclusively owned by their
/// parent container.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub id: i16,
    pub requirement: Requirement,
    pub schema_type: SchemaType,
}

impl SchemaField {
    pub fn new(
        name: impl Into<String>,
        id: i16,
        requirement: Requirement,
        schema_type: SchemaType,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            requirement,
            schema_type,
        }
    }
}

/// Root of a converted schema.
///
/// Unlike nested struct fields the root carries a schema name instead of a
/// field name/id, which is why it is not itself a [`SchemaField`].
#[derive(Debug, Clone, PartialEq)]
pub struct MessageType {
    pub name: String,
    pub fields: SchemaFields,
}

impl MessageType {
    pub fn new(name: impl Into<String>, fields: impl Into<SchemaFields>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into(),
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "message {}:", self.name)?;
        let text = super::format_schema_fields_indented(self.fields.as_slice(), 4)?;
        f.write_str(&text)
    }
}
