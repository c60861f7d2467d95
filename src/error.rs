use hedron::primitive::attribute::{AttributeError, AttributeUsage};

/// The collection whose size failed to agree with the vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// A per-vertex attribute array.
    Attribute(AttributeUsage),
    /// The vertex count a host declares separately from its arrays.
    DeclaredCount,
    /// An externally supplied array of vertex records.
    Records,
    /// A membership set over vertex indices.
    Selection,
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extent::Attribute(usage) => write!(f, "{usage}"),
            Extent::DeclaredCount => f.write_str("declared vertex count"),
            Extent::Records => f.write_str("imported vertex records"),
            Extent::Selection => f.write_str("vertex selection"),
        }
    }
}

/// Everything which can abort an operation.
///
/// All of these are raised before anything is written back to a host, so an `Err` always means
/// the host is untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no vertices")]
    EmptyInput,
    #[error("size mismatch: {array} has {found} entries, expected {expected}")]
    SizeMismatch {
        array: Extent,
        expected: usize,
        found: usize,
    },
    #[error("vertex index {index} out of range: (0..{len}) ∌ {index}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("operation {0:?} is not applicable to the selection")]
    NotApplicable(&'static str),
    #[error("no operation named {0:?}")]
    UnknownOperation(String),
    #[error("operation {op:?} has no mode {mode}")]
    UnknownMode { op: &'static str, mode: usize },
    #[error("clipboard is empty")]
    EmptyClipboard,
    #[error("clipboard unavailable")]
    Clipboard(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("could not read vertex records")]
    Records(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] hedron::DocumentError),
}

impl From<AttributeError> for Error {
    fn from(e: AttributeError) -> Self {
        match e {
            AttributeError::Length {
                usage,
                expected,
                found,
            } => Error::SizeMismatch {
                array: Extent::Attribute(usage),
                expected,
                found,
            },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
