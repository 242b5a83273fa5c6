//! Choose Bank window: apply a lender's rate and term to the form.

use crate::ui::window::{AppState, AppWindow};
use eframe::egui::{self, RichText};

pub const BANK_WINDOW: &str = "Choose Bank";

#[derive(Default)]
pub struct BankView {
    open: bool,
}

impl AppWindow for BankView {
    fn name(&self) -> &str {
        BANK_WINDOW
    }
    fn is_open(&self) -> bool {
        self.open
    }
    fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>) {
        let mut applied = false;
        egui::Window::new(BANK_WINDOW)
            .resizable(false)
            .collapsible(false)
            .open(&mut self.open)
            .show(ctx, |ui| {
                if state.offers.is_empty() {
                    ui.label("No bank offers available.");
                    return;
                }
                egui::Grid::new("bank_offers")
                    .num_columns(4)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Bank").strong());
                        ui.label(RichText::new("Rate").strong());
                        ui.label(RichText::new("Term").strong());
                        ui.label("");
                        ui.end_row();

                        for offer in state.offers {
                            let is_selected = state.selected_bank.as_deref()
                                == Some(offer.name.as_str())
                                && offer.matches(state.form);
                            ui.label(offer.name.as_str());
                            ui.label(format!("{}%", offer.annual_rate.normalize()));
                            ui.label(format!("{} yrs", offer.term_years));
                            let label = if is_selected { "Applied" } else { "Apply" };
                            if ui.add_enabled(!is_selected, egui::Button::new(label)).clicked() {
                                log::info!(
                                    "Applied {} offer: {}% over {} years",
                                    offer.name,
                                    offer.annual_rate,
                                    offer.term_years
                                );
                                offer.apply(state.form);
                                *state.selected_bank = Some(offer.name.clone());
                                *state.recalc_requested = true;
                                applied = true;
                            }
                            ui.end_row();
                        }
                    });
            });
        if applied {
            self.open = false;
        }
    }
}
