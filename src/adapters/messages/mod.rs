pub mod table;

pub use table::{DEFAULT_MESSAGES, StaticMessages};
