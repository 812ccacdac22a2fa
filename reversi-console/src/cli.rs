//! Command-line options for the console game.

use crate::view::Symbols;
use clap::Parser;
use reversi_engine::Player;

/// Two-player Reversi on the console. Moves are entered as "row column", 1 to 8.
#[derive(Parser, Debug)]
#[command(name = "reversi-console")]
#[command(version)]
pub struct Cli {
    /// Player moving first: a or b
    #[arg(long, default_value = "a")]
    pub first: Player,

    /// Piece characters for player A and player B, in that order
    #[arg(long, default_value = "XO")]
    pub symbols: Symbols,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["reversi-console"]).unwrap();
        assert_eq!(cli.first, Player::A);
        assert_eq!(cli.symbols, Symbols::default());
    }

    #[test]
    fn overrides() {
        let cli =
            Cli::try_parse_from(["reversi-console", "--first", "b", "--symbols", "#@"]).unwrap();
        assert_eq!(cli.first, Player::B);
        assert_eq!(cli.symbols, Symbols { a: '#', b: '@' });
    }

    #[test]
    fn rejects_bad_symbols() {
        assert!(Cli::try_parse_from(["reversi-console", "--symbols", "XX"]).is_err());
    }
}
