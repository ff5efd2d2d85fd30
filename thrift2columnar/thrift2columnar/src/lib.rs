//! Convert reflected Thrift struct metadata into a columnar message schema.
//!
//! [`SchemaConverter`] is the entry point: it takes a [`StructDescriptor`]
//! tree (or resolves one through a [`StructReflection`] collaborator) and
//! produces a [`MessageType`] from `thrift2columnar-core`, honoring a
//! [`ProjectionFilter`] that can prune fields and whole subtrees.

mod descriptor;
mod projection;
mod visitor;

pub use descriptor::{EnumMember, FieldDescriptor, StructDescriptor, ThriftKind};
pub use projection::{FieldPath, KeepAll, ProjectionFilter, PrunePaths};
pub use thrift2columnar_core as core;
use thrift2columnar_core::{ConvertError, MessageType};
use visitor::TypeMappingVisitor;

/// Collaborator that resolves an opaque type name into reflected struct
/// metadata.
///
/// Implementations must expose fields in stable declaration order; the
/// converter preserves whatever order they report.
pub trait StructReflection {
    fn describe(&self, type_name: &str) -> Result<StructDescriptor, ConvertError>;
}

/// Converts a root struct descriptor into a columnar [`MessageType`].
///
/// Conversion is a pure synchronous computation: deterministic for identical
/// inputs, no state shared between calls. A converter with a stateless
/// filter may be used from multiple threads at once.
pub struct SchemaConverter<F = KeepAll> {
    filter: F,
}

impl SchemaConverter<KeepAll> {
    /// Converter with the default keep-everything filter.
    pub fn new() -> Self {
        Self { filter: KeepAll }
    }
}

impl Default for SchemaConverter<KeepAll> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ProjectionFilter> SchemaConverter<F> {
    pub fn with_filter(filter: F) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Convert an already-resolved descriptor tree.
    ///
    /// The root is labelled with the struct's name; every nested node is a
    /// field. Fails on `stop`/`void` field kinds and on container
    /// descriptors missing their nested metadata, in which case no partial
    /// schema is returned.
    pub fn convert(&self, root: &StructDescriptor) -> Result<MessageType, ConvertError> {
        let mut visitor = TypeMappingVisitor::new(&self.filter);
        let fields = visitor.convert_struct(root)?;
        Ok(MessageType::new(&root.name, fields))
    }

    /// Resolve `type_name` through `reflection`, then convert.
    pub fn convert_reflected(
        &self,
        reflection: &impl StructReflection,
        type_name: &str,
    ) -> Result<MessageType, ConvertError> {
        let root = reflection.describe(type_name)?;
        self.convert(&root)
    }
}
