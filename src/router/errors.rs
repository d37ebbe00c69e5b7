use crate::radix::RadixError;
use crate::router::HandlerError;
use crate::types::HttpMethod;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route {method} '{path}'")]
    AddWhileSealed { method: HttpMethod, path: String },
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error("handler for {method} '{path}' failed")]
    Handler {
        method: HttpMethod,
        path: String,
        #[source]
        source: HandlerError,
    },
}

pub type RouterResult<T> = Result<T, RouterError>;
