//! Terminal presentation for the marathon engine.
//!
//! Deliberately thin: a full-redraw view that formats the engine's exposed
//! state into one frame string, and a renderer that owns the raw-mode and
//! alternate-screen lifecycle. No layout engine, no diffing.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::GameView;
