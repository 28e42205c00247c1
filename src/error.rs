use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid property key: `{0}`")]
    InvalidKey(String),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("missing configuration node: {0}")]
    MissingNode(String),

    #[error("unknown axis type: `{0}`")]
    UnknownAxisType(String),

    #[error("axis type `{0}` is already registered")]
    DuplicateAxisType(String),

    #[error("invalid color: `{0}`")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
