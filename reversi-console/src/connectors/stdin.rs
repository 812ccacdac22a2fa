//! [`MoveSource`] reading moves typed on standard input.

use super::MoveSource;
use async_std::io::{self, Stdin};
use async_trait::async_trait;

pub struct StdinSource {
    stdin: Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MoveSource for StdinSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.stdin.read_line(&mut buffer).await? == 0 {
            return Ok(None);
        }

        let line = buffer.trim_end_matches(|c| c == '\n' || c == '\r');
        Ok(Some(line.to_string()))
    }
}
