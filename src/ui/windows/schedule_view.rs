//! Amortization window: remaining-balance plot and month-by-month table.

use crate::ui::colors::INDIGO;
use crate::ui::window::{AppState, AppWindow};
use crate::utils::{format_currency, format_month};
use eframe::egui::{self, RichText, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints};
use rust_decimal::prelude::ToPrimitive;

pub const SCHEDULE_WINDOW: &str = "Amortization Schedule";

#[derive(Default)]
pub struct ScheduleView {
    open: bool,
}

impl AppWindow for ScheduleView {
    fn name(&self) -> &str {
        SCHEDULE_WINDOW
    }
    fn is_open(&self) -> bool {
        self.open
    }
    fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>) {
        egui::Window::new(SCHEDULE_WINDOW)
            .default_size(Vec2::new(560.0, 520.0))
            .open(&mut self.open)
            .show(ctx, |ui| {
                let Some(quote) = state.quote else {
                    ui.label("Press Calculate to build the schedule.");
                    return;
                };

                ui.horizontal(|ui| {
                    ui.label(format!(
                        "Monthly principal & interest: {}",
                        format_currency(quote.monthly_principal_interest)
                    ));
                    ui.separator();
                    ui.label(format!(
                        "Total interest: {}",
                        format_currency(quote.total_interest)
                    ));
                });

                let start = [0.0, quote.loan_amount.to_f64().unwrap_or(0.0)];
                let points = std::iter::once(start).chain(quote.schedule.iter().map(|row| {
                    [f64::from(row.month), row.balance.to_f64().unwrap_or(0.0)]
                }));
                let balance =
                    Line::new("Balance", PlotPoints::from_iter(points)).color(INDIGO);

                Plot::new("balance_plot")
                    .height(160.0)
                    .show_axes([true, true])
                    .x_axis_label("Month")
                    .y_axis_label("Remaining balance")
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(balance);
                    });

                ui.add_space(6.0);

                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::right_to_left(egui::Align::Center))
                    .column(Column::auto().at_least(80.0))
                    .columns(Column::remainder().at_least(80.0), 4)
                    .max_scroll_height(280.0)
                    .header(20.0, |mut header| {
                        for title in ["Month", "Payment", "Principal", "Interest", "Balance"] {
                            header.col(|ui| {
                                ui.label(RichText::new(title).strong());
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, quote.schedule.len(), |mut row| {
                            let entry = &quote.schedule[row.index()];
                            row.col(|ui| {
                                ui.label(format_month(entry.date));
                            });
                            let amounts =
                                [entry.payment, entry.principal, entry.interest, entry.balance];
                            for amount in amounts {
                                row.col(|ui| {
                                    ui.label(format_currency(amount));
                                });
                            }
                        });
                    });
            });
    }
}
