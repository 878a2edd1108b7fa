//! Interactive console list selection.
//!
//! ```rust,ignore
//! let config = picklist::core::config::ResolvedConfig::default();
//! let mut terminal = picklist::Terminal::init(&config)?;
//! match picklist::run_selection(&mut terminal, &["red", "green", "blue"], "colour")? {
//!     picklist::SessionResult::Selected(index) => println!("picked {index}"),
//!     picklist::SessionResult::Cancelled => println!("no choice"),
//! }
//! ```

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::SessionResult;
pub use crate::tui::{SelectError, SelectionController, Terminal, run_selection};
