//! Tree renderer: connector glyph sets, the [`print_tree`] entry point, and
//! the configurable depth-guarded [`Printer`].

mod error;
mod glyphs;
mod tree;

pub use error::PrintError;
pub use glyphs::{Glyphs, ASCII, UNICODE};
pub use tree::{print_tree, Printer, PrinterOptions};
