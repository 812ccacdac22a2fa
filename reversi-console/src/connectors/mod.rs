//! Connectors feed player input into the console driver from different places.

mod scripted;
mod source;
mod stdin;

pub use scripted::ScriptedSource;
pub use source::MoveSource;
pub use stdin::StdinSource;
