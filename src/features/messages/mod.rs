pub mod message_source;

pub use message_source::{MessageSource, RandomMessages};
