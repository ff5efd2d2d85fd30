//! Source-agnostic schema types for `thrift2columnar`.
//!
//! This crate provides the columnar intermediate representation
//! ([`MessageType`] / [`SchemaType`]) that converted Thrift struct metadata
//! is expressed in, together with the [`ConvertError`] taxonomy.

mod error;
mod schema;

pub use error::ConvertError;
pub use schema::{
    EnumValue, MessageType, Requirement, SchemaField, SchemaFields, SchemaType,
    format_schema_fields,
};
