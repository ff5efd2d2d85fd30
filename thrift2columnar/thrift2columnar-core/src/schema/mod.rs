//! Columnar schema intermediate representation.

mod format;
mod types;

pub use format::format_schema_fields;
pub(crate) use format::format_schema_fields_indented;
pub use types::{EnumValue, MessageType, Requirement, SchemaField, SchemaFields, SchemaType};
