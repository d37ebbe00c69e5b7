mod clean;

pub use clean::{clean_path, join_paths};
