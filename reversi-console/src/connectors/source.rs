use async_trait::async_trait;
use std::io;

/// An abstract interface to wherever the players' moves come from.
#[async_trait]
pub trait MoveSource {
    /// Get the next raw line of input, without its line terminator.
    /// Returns `None` once the input is exhausted; the driver treats that as the
    /// players leaving the game.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}
