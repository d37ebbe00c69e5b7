mod stats;
mod store;

pub use stats::RegistryMetrics;
pub use store::{RouteInfo, RouteRegistry};
