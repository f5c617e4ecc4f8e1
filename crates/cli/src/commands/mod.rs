//! Command handlers for the FloodSense CLI.

pub mod ask;
pub mod chat;
pub mod model;
pub mod regions;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use model::ModelCommand;
pub use regions::RegionsCommand;
