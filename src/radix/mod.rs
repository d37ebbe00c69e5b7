mod error;
mod insert;
pub mod node;
mod search;
mod wildcard;

pub use error::{RadixError, RadixResult};
pub use node::{Node, NodeKind};
pub use search::Lookup;
