//! UI layer: App orchestrator, AppWindow trait, palette, drawing helpers, and windows.

pub mod app;
pub mod colors;
pub mod fonts;
pub mod pie;
pub mod widgets;
pub mod window;
pub mod windows;
