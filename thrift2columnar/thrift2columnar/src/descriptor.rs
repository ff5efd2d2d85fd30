//! Source-side Thrift metadata model.
//!
//! [`StructDescriptor`] trees are what a reflection collaborator hands to
//! [`SchemaConverter`](crate::SchemaConverter). Kind-specific children are
//! `Option`s because the metadata comes from an external collaborator and is
//! validated here, not assumed.

use thrift2columnar_core::Requirement;

/// Closed enumeration of Thrift wire kinds as they appear in field metadata.
///
/// `Stop` and `Void` are protocol sentinels, not field types; a descriptor
/// declaring either is rejected during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThriftKind {
    Stop,
    Void,
    Bool,
    Byte,
    Double,
    I16,
    I32,
    I64,
    String,
    Struct,
    Map,
    Set,
    List,
    Enum,
}

impl ThriftKind {
    pub fn name(&self) -> &'static str {
        match self {
            ThriftKind::Stop => "stop",
            ThriftKind::Void => "void",
            ThriftKind::Bool => "bool",
            ThriftKind::Byte => "byte",
            ThriftKind::Double => "double",
            ThriftKind::I16 => "i16",
            ThriftKind::I32 => "i32",
            ThriftKind::I64 => "i64",
            ThriftKind::String => "string",
            ThriftKind::Struct => "struct",
            ThriftKind::Map => "map",
            ThriftKind::Set => "set",
            ThriftKind::List => "list",
            ThriftKind::Enum => "enum",
        }
    }
}

/// One (value, symbolic name) pair of a source enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub value: i32,
    pub name: String,
}

impl EnumMember {
    pub fn new(value: i32, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

/// Reflected metadata for a single Thrift field.
///
/// `requirement` is `None` when the source carries no requirement metadata
/// at all; conversion resolves that to `Optional`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub id: i16,
    pub kind: ThriftKind,
    pub requirement: Option<Requirement>,
    /// Nested struct metadata, present iff `kind` is `Struct`.
    pub struct_descriptor: Option<StructDescriptor>,
    /// Map key metadata, present iff `kind` is `Map`.
    pub map_key: Option<Box<FieldDescriptor>>,
    /// Map value metadata, present iff `kind` is `Map`.
    pub map_value: Option<Box<FieldDescriptor>>,
    /// Element metadata, present iff `kind` is `Set` or `List`.
    pub element: Option<Box<FieldDescriptor>>,
    /// Enum members, populated iff `kind` is `Enum`.
    pub enum_members: Vec<EnumMember>,
}

impl FieldDescriptor {
    /// Descriptor for a field with no nested metadata (leaf kinds and the
    /// sentinels).
    pub fn scalar(
        name: impl Into<String>,
        id: i16,
        kind: ThriftKind,
        requirement: Option<Requirement>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            kind,
            requirement,
            struct_descriptor: None,
            map_key: None,
            map_value: None,
            element: None,
            enum_members: Vec::new(),
        }
    }

    pub fn structure(
        name: impl Into<String>,
        id: i16,
        requirement: Option<Requirement>,
        nested: StructDescriptor,
    ) -> Self {
        Self {
            struct_descriptor: Some(nested),
            ..Self::scalar(name, id, ThriftKind::Struct, requirement)
        }
    }

    pub fn map(
        name: impl Into<String>,
        id: i16,
        requirement: Option<Requirement>,
        key: FieldDescriptor,
        value: FieldDescriptor,
    ) -> Self {
        Self {
            map_key: Some(Box::new(key)),
            map_value: Some(Box::new(value)),
            ..Self::scalar(name, id, ThriftKind::Map, requirement)
        }
    }

    pub fn set(
        name: impl Into<String>,
        id: i16,
        requirement: Option<Requirement>,
        element: FieldDescriptor,
    ) -> Self {
        Self {
            element: Some(Box::new(element)),
            ..Self::scalar(name, id, ThriftKind::Set, requirement)
        }
    }

    pub fn list(
        name: impl Into<String>,
        id: i16,
        requirement: Option<Requirement>,
        element: FieldDescriptor,
    ) -> Self {
        Self {
            element: Some(Box::new(element)),
            ..Self::scalar(name, id, ThriftKind::List, requirement)
        }
    }

    pub fn enumeration(
        name: impl Into<String>,
        id: i16,
        requirement: Option<Requirement>,
        members: Vec<EnumMember>,
    ) -> Self {
        Self {
            enum_members: members,
            ..Self::scalar(name, id, ThriftKind::Enum, requirement)
        }
    }
}

/// Reflected metadata for a Thrift struct: its name and its fields in
/// declaration order.
///
/// Field order is load-bearing: converted schemas preserve it exactly, and
/// downstream schema compatibility depends on that.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl StructDescriptor {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
