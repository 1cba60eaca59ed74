use thiserror::Error;

pub type ChoroplethResult<T> = Result<T, ChoroplethError>;

/// Side of the join a schema mismatch was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    Geometry,
    Tabular,
}

impl std::fmt::Display for JoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinSide::Geometry => write!(f, "geometry"),
            JoinSide::Tabular => write!(f, "tabular"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChoroplethError {
    /// Join key field is absent from a data source. Fatal at initialization;
    /// a missing match is a valid "no data" outcome, not this error.
    #[error("join key field `{field}` missing from {side} source")]
    MissingKeyField { field: String, side: JoinSide },

    /// Every entity has "no data" for the sampled attribute. Recoverable:
    /// the engine emits the designated no-data classification instead.
    #[error("attribute `{attribute}` has no numeric values across all entities")]
    EmptyDistribution { attribute: String },

    /// Selection command referenced an unregistered attribute id.
    #[error("unknown attribute id `{id}`")]
    UnknownAttribute { id: String },

    #[error("invalid chart frame: width={width}, height={height}")]
    InvalidFrame { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
