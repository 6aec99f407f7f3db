use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DnsError {
    /// Fewer bytes than a complete header were supplied.
    #[error("truncated input: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// A buffer read, write or seek would cross the end of the region.
    #[error("out of bounds: requested {requested} bytes, {remaining} remaining")]
    OutOfBounds { requested: usize, remaining: usize },

    /// Only returned by the strict encoding path.
    #[error("{field} value {value} does not fit in its wire field")]
    FieldOutOfRange { field: &'static str, value: u16 },
}

pub type Result<T> = std::result::Result<T, DnsError>;
