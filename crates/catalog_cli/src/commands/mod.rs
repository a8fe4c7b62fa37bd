pub mod list;
pub mod request;
pub mod seed;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
