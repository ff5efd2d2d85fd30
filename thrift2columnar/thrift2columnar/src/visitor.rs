//! Recursive descent over reflected Thrift metadata.

use thrift2columnar_core::{
    ConvertError, EnumValue, Requirement, SchemaField, SchemaFields, SchemaType,
};

use crate::descriptor::{FieldDescriptor, StructDescriptor, ThriftKind};
use crate::projection::{FieldPath, ProjectionFilter};

/// Walks a [`StructDescriptor`] tree and assembles the converted schema,
/// consulting the projection filter at every struct-field boundary.
///
/// The only state is the current field path; recursion depth tracks source
/// nesting depth. One visitor serves exactly one conversion call.
pub(crate) struct TypeMappingVisitor<'a, F: ProjectionFilter + ?Sized> {
    filter: &'a F,
    path: FieldPath,
}

impl<'a, F: ProjectionFilter + ?Sized> TypeMappingVisitor<'a, F> {
    pub(crate) fn new(filter: &'a F) -> Self {
        Self {
            filter,
            path: FieldPath::new(),
        }
    }

    /// Convert the declared fields of a struct, in declaration order.
    ///
    /// Each child resolves its own requirement. The filter decides inclusion
    /// before any descent, so a pruned field's children are never visited.
    pub(crate) fn convert_struct(
        &mut self,
        descriptor: &StructDescriptor,
    ) -> Result<SchemaFields, ConvertError> {
        let mut fields = Vec::with_capacity(descriptor.fields.len());
        for fd in &descriptor.fields {
            let requirement = Requirement::resolve(fd.requirement);
            self.path.push(fd.name.clone());
            if self.filter.keep(&self.path, fd.kind) {
                fields.push(self.convert_field(&fd.name, fd, requirement)?);
            }
            self.path.pop();
        }
        Ok(fields.into())
    }

    /// Convert a single field descriptor into a [`SchemaField`].
    ///
    /// `name` is passed separately because set/list element fields take the
    /// outer field's name rather than their own. Children of map/set/list
    /// inherit `requirement` unchanged; only struct members carry independent
    /// requirement metadata in the source model.
    fn convert_field(
        &mut self,
        name: &str,
        fd: &FieldDescriptor,
        requirement: Requirement,
    ) -> Result<SchemaField, ConvertError> {
        let schema_type = match fd.kind {
            ThriftKind::Stop | ThriftKind::Void => {
                return Err(ConvertError::UnsupportedKind {
                    path: self.path.to_string(),
                    kind: fd.kind.name(),
                });
            }
            ThriftKind::Bool => SchemaType::Bool,
            ThriftKind::Byte => SchemaType::Byte,
            ThriftKind::Double => SchemaType::Double,
            ThriftKind::I16 => SchemaType::I16,
            ThriftKind::I32 => SchemaType::I32,
            ThriftKind::I64 => SchemaType::I64,
            ThriftKind::String => SchemaType::String,
            ThriftKind::Struct => {
                let nested =
                    self.require_child(fd.struct_descriptor.as_ref(), "nested struct descriptor")?;
                SchemaType::Struct(self.convert_struct(nested)?)
            }
            ThriftKind::Map => {
                let key = self.require_child(fd.map_key.as_deref(), "map key descriptor")?;
                let value = self.require_child(fd.map_value.as_deref(), "map value descriptor")?;
                SchemaType::Map {
                    key: Box::new(self.convert_entry(key, requirement)?),
                    value: Box::new(self.convert_entry(value, requirement)?),
                }
            }
            ThriftKind::Set => {
                let element = self.require_child(fd.element.as_deref(), "set element descriptor")?;
                SchemaType::Set(Box::new(self.convert_field(name, element, requirement)?))
            }
            ThriftKind::List => {
                let element =
                    self.require_child(fd.element.as_deref(), "list element descriptor")?;
                SchemaType::List(Box::new(self.convert_field(name, element, requirement)?))
            }
            ThriftKind::Enum => SchemaType::Enum(
                fd.enum_members
                    .iter()
                    .map(|m| EnumValue::new(m.value, m.name.clone()))
                    .collect(),
            ),
        };
        Ok(SchemaField::new(name, fd.id, requirement, schema_type))
    }

    /// Convert a map key or value sub-field, which keeps its own element
    /// name and path segment.
    fn convert_entry(
        &mut self,
        fd: &FieldDescriptor,
        requirement: Requirement,
    ) -> Result<SchemaField, ConvertError> {
        self.path.push(fd.name.clone());
        let field = self.convert_field(&fd.name, fd, requirement)?;
        self.path.pop();
        Ok(field)
    }

    fn require_child<'d, T>(
        &self,
        child: Option<&'d T>,
        what: &str,
    ) -> Result<&'d T, ConvertError> {
        child.ok_or_else(|| ConvertError::MalformedDescriptor {
            path: self.path.to_string(),
            detail: format!("missing {what}"),
        })
    }
}
