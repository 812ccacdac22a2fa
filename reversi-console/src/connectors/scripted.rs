//! [`MoveSource`] replaying a fixed list of lines. Used to drive games in tests
//! and to replay recorded sessions.

use super::MoveSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;

#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl MoveSource for ScriptedSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
