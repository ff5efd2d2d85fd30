//! Error types for schema conversion.

/// Error returned when Thrift struct metadata cannot be converted.
///
/// All variants are fatal: conversion aborts immediately and no partial
/// schema is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The descriptor declares a kind that has no columnar mapping
    /// (the `stop`/`void` sentinels, which must never appear as real
    /// field types).
    #[error("cannot convert field `{path}` of kind {kind}")]
    UnsupportedKind { path: String, kind: &'static str },

    /// A container kind (struct, map, set, list) is missing its required
    /// nested descriptor(s). Indicates a broken metadata collaborator.
    #[error("malformed descriptor for field `{path}`: {detail}")]
    MalformedDescriptor { path: String, detail: String },

    /// The reflection collaborator failed to resolve a type name into a
    /// struct descriptor.
    #[error("failed to reflect struct metadata for '{type_name}': {source}")]
    Reflection {
        type_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
