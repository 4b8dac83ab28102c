pub mod messages;
pub mod output;
