pub mod message;
pub mod wire;

pub use message::{ChatMessage, Role};
pub use wire::{ChatReply, ChatRequest, ErrorBody};
