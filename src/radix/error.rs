use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadixError {
    #[error("path must begin with '/' in path '{path}'")]
    MissingLeadingSlash { path: String },
    #[error("a handler is already registered for path '{path}'")]
    DuplicateRoute { path: String },
    #[error("duplicate parameter name '{param}' in path '{path}'")]
    DuplicateParamName { param: String, path: String },
    #[error(
        "'{segment}' in new path '{path}' conflicts with existing wildcard '{wildcard}' in existing prefix '{prefix}'"
    )]
    WildcardConflict {
        segment: String,
        path: String,
        wildcard: String,
        prefix: String,
    },
    #[error("only one wildcard per path segment is allowed, has '{segment}' in path '{path}'")]
    MultipleWildcardsInSegment { segment: String, path: String },
    #[error("wildcards must be named with a non-empty name in path '{path}'")]
    EmptyWildcardName { path: String },
    #[error("wildcard segment '{wildcard}' conflicts with existing children in path '{path}'")]
    WildcardLiteralConflict { wildcard: String, path: String },
    #[error("catch-all routes are only allowed at the end of the path in path '{path}'")]
    CatchAllNotTerminal { path: String },
    #[error("no '/' before catch-all in path '{path}'")]
    CatchAllMissingSlash { path: String },
    #[error("catch-all conflicts with existing handler for the path segment root in path '{path}'")]
    CatchAllConflict { path: String },
}

impl RadixError {
    /// The route path that failed to register.
    pub fn path(&self) -> &str {
        match self {
            RadixError::MissingLeadingSlash { path }
            | RadixError::DuplicateRoute { path }
            | RadixError::DuplicateParamName { path, .. }
            | RadixError::WildcardConflict { path, .. }
            | RadixError::MultipleWildcardsInSegment { path, .. }
            | RadixError::EmptyWildcardName { path }
            | RadixError::WildcardLiteralConflict { path, .. }
            | RadixError::CatchAllNotTerminal { path }
            | RadixError::CatchAllMissingSlash { path }
            | RadixError::CatchAllConflict { path } => path,
        }
    }
}

pub type RadixResult<T> = Result<T, RadixError>;
