//! TUI Bomber (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benches can write `tui_bomber::core::Session`.

pub use tui_bomber_core as core;
pub use tui_bomber_engine as engine;
pub use tui_bomber_input as input;
pub use tui_bomber_scores as scores;
pub use tui_bomber_term as term;
pub use tui_bomber_types as types;
