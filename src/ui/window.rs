//! The `AppWindow` trait and the shared `AppState` view passed to each window.
//!
//! To add a new floating window:
//! 1. Create a new file in `ui/windows/`.
//! 2. Implement `AppWindow` for your struct.
//! 3. Push `Box::new(MyWindow::default())` into `App::windows` in `App::with_config()`.

use crate::engine::banks::BankOffer;
use crate::engine::mortgage::MortgageQuote;
use crate::types::LoanForm;

/// Calculator state shared with every window's `show` call.
pub struct AppState<'a> {
    pub form: &'a mut LoanForm,
    /// Latest successful calculation, if any.
    pub quote: Option<&'a MortgageQuote>,
    pub offers: &'a [BankOffer],
    pub selected_bank: &'a mut Option<String>,
    /// Set by a window to have `App` recalculate after this frame.
    pub recalc_requested: &'a mut bool,
}

/// Trait implemented by every floating window.
///
/// Each window owns its own open/closed flag and any window-specific UI state.
/// The orchestrator (`App`) iterates over all registered windows and calls
/// `show` on each frame.
pub trait AppWindow {
    /// Display name, also the egui window title.
    fn name(&self) -> &str;

    fn is_open(&self) -> bool;

    fn toggle(&mut self);

    /// Draw the window contents. Called every frame by `App::update`.
    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>);
}
