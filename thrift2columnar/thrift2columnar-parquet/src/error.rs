use parquet::errors::ParquetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParquetSchemaError {
    /// The parquet type builder rejected a node (bad converted type
    /// combination, empty group, ...).
    #[error(transparent)]
    Parquet(#[from] ParquetError),
}
