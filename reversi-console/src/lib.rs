//! Console front end for `reversi-engine`: a text renderer and a turn driver
//! reading moves from a [`connectors::MoveSource`].

pub mod cli;
pub mod connectors;
pub mod driver;
pub mod parse;
pub mod view;

pub use driver::{Driver, Outcome};
