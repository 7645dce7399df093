pub mod automation;
pub mod messages;
