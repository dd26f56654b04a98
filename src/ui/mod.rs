//! Terminal overlay surface built on ratatui and crossterm.
mod model;
mod render;


pub use model::OverlayModel;
pub use render::{TerminalGuard, TerminalSurface, Ui, UiActions};
