//! Output path resolution for printed matches.

mod path;

pub use path::canonical_path;
