mod keys;

pub use keys::{Operation, QueryKey};
