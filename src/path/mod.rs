mod resolver;

pub use resolver::{normalize, PathResolver};
