//! The console game loop: render, prompt, read, apply, repeat.

use crate::connectors::MoveSource;
use crate::parse::parse_move;
use crate::view::ConsoleView;
use anyhow::Result;
use reversi_engine::{Game, Status, Termination};
use std::io::Write;
use tracing::{debug, info, instrument};

/// How a console session ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Finished(Termination),
    /// The move source ran dry before the game ended.
    InputClosed,
}

pub struct Driver<S, W> {
    game: Game,
    source: S,
    out: W,
    view: ConsoleView,
}

impl<S: MoveSource, W: Write> Driver<S, W> {
    pub fn new(game: Game, source: S, out: W, view: ConsoleView) -> Self {
        Self {
            game,
            source,
            out,
            view,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Take back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play until the game ends or the input is exhausted.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        writeln!(self.out, "Reversi game started.")?;

        loop {
            if let Status::Finished(termination) = self.game.status() {
                writeln!(self.out, "\n{}\n", self.view.render(self.game.board()))?;
                writeln!(self.out, "{}", self.view.game_over(termination))?;
                return Ok(Outcome::Finished(termination));
            }

            if self.game.must_pass() {
                writeln!(self.out, "{}", self.view.pass(self.game.active_player()))?;
                self.game.pass()?;
                continue;
            }

            writeln!(self.out, "\n{}\n", self.view.render(self.game.board()))?;
            writeln!(self.out, "{}", self.view.prompt(self.game.active_player()))?;
            self.out.flush()?;

            if !self.take_turn().await? {
                info!("input closed before the game ended");
                return Ok(Outcome::InputClosed);
            }
        }
    }

    /// Read lines until one is accepted as a move for the active player.
    /// Returns false if the input ends first.
    async fn take_turn(&mut self) -> Result<bool> {
        while let Some(line) = self.source.next_line().await? {
            let (row, column) = match parse_move(&line) {
                Ok(coords) => coords,
                Err(err) => {
                    debug!(%line, %err, "unparseable move");
                    writeln!(self.out, "{}", self.view.parse_error(&err))?;
                    continue;
                }
            };

            match self.game.play(row, column) {
                Ok(placement) => {
                    debug!(
                        location = %placement.location,
                        flipped = %placement.flipped,
                        "move accepted"
                    );
                    return Ok(true);
                }
                Err(err) => {
                    writeln!(self.out, "{}", self.view.rejection(&err, &self.game))?;
                    self.out.flush()?;
                }
            }
        }

        Ok(false)
    }
}
