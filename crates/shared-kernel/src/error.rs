// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CharCountError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CharCountError>,
    },

    #[error("Invalid argument: '{name}' must be provided")]
    InvalidArgument { name: &'static str },

    #[error("Argument out of range: '{name}' {reason}")]
    OutOfRange {
        name: &'static str,
        reason: OutOfRangeReason,
    },
}

pub type Result<T> = std::result::Result<T, CharCountError>;

/// Why an index or limit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfRangeReason {
    #[error("must not be negative (got {value})")]
    Negative { value: i64 },

    #[error("must not be less than start index {start} (got {end})")]
    EndBeforeStart { start: i64, end: i64 },

    #[error("must be less than text length {len} (got {end})")]
    PastEnd { end: i64, len: usize },

    #[error("must be positive (got {value})")]
    NotPositive { value: i64 },
}

impl CharCountError {
    pub const fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    pub const fn out_of_range(name: &'static str, reason: OutOfRangeReason) -> Self {
        Self::OutOfRange { name, reason }
    }

    /// Stable machine-readable category, looking through context wrappers.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Context { source, .. } => source.category(),
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), Self::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.root(), Self::OutOfRange { .. })
    }

    /// Innermost error beneath any `Context` layers.
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CharCountError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CharCountError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CharCountError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
