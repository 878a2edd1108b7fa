//! # Core Selection Logic
//!
//! This module contains the selection state machine.
//! It knows nothing about any specific terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (selection)    │
//!                    │  • Viewport (window)    │
//!                    │  • Action (input)       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │(crossterm) │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `SelectionState` and the `SessionResult` of a finished session
//! - [`viewport`]: the visible window and the frame height derived from it
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: settings loaded from `~/.picklist/config.toml`

pub mod action;
pub mod config;
pub mod state;
pub mod viewport;

pub use action::{Action, Effect, update};
pub use state::{SelectionState, SessionResult};
pub use viewport::Viewport;
