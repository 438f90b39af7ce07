use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unsupported attribute type: {0}")]
    UnsupportedType(String),
    #[error("nominal specification has no values")]
    EmptyNominal,
    #[error("attribute declaration is missing a type specification")]
    MissingTypeSpec,
}

pub type Result<T> = std::result::Result<T, SchemaError>;
