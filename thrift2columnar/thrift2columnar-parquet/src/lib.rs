//! Parquet schema emission built on top of `thrift2columnar-core` message
//! types.

mod error;
mod schema_convert;

pub use error::ParquetSchemaError;
pub use schema_convert::message_to_parquet_schema;
