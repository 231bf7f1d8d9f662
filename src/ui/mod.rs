pub mod intro;
pub mod messages;
