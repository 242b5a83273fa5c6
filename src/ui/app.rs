//! Application orchestrator: owns the form and the latest result, lays out the
//! two panels, and drives the floating windows.

use crate::config::Config;
use crate::engine::banks::{self, BankOffer};
use crate::engine::mortgage::{self, MortgageQuote, Slice, Summary};
use crate::types::{Category, InputField, LoanForm};
use crate::ui::colors::{BACKGROUND, EDIT_BORDER, ERROR, INDIGO, TEXT};
use crate::ui::window::{AppState, AppWindow};
use crate::ui::windows::{
    bank_view::{BANK_WINDOW, BankView},
    schedule_view::{SCHEDULE_WINDOW, ScheduleView},
};
use crate::ui::{fonts, pie, widgets};
use crate::utils::format_currency;
use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke, Vec2};
use jiff::civil::Date;

const CATEGORY_BUTTON_SIZE: Vec2 = Vec2::new(100.0, 50.0);
/// Share of the window width given to the chart/summary side.
const RIGHT_PANEL_SHARE: f32 = 0.4;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// `App` keeps the raw form text and the last successful result. The
/// repayment math lives in `engine::mortgage`; `App` only:
/// 1. Lays out the inputs panel (left) and the chart/summary panel (right).
/// 2. Runs a calculation when Calculate is pressed or a window asks for one.
/// 3. Delegates every floating window to the registered `windows` vec.
pub struct App {
    category: Category,
    form: LoanForm,

    // ── Results ────────────────────────────────────────────────────────────
    quote: Option<MortgageQuote>,
    summary: Summary,
    breakdown: Vec<Slice>,
    last_error: Option<String>,

    // ── Choose Bank ────────────────────────────────────────────────────────
    offers: Vec<BankOffer>,
    selected_bank: Option<String>,
    recalc_requested: bool,

    windows: Vec<Box<dyn AppWindow>>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        fonts::install_fonts(&cc.egui_ctx, &config.font_path, config.font_size);
        apply_visuals(&cc.egui_ctx);
        Self::with_config(&config)
    }

    /// Everything except the egui context setup.
    pub fn with_config(config: &Config) -> Self {
        let windows: Vec<Box<dyn AppWindow>> = vec![
            Box::new(BankView::default()),
            Box::new(ScheduleView::default()),
        ];

        Self {
            category: Category::default(),
            form: LoanForm::default(),
            quote: None,
            summary: Summary::placeholder(),
            breakdown: mortgage::placeholder_breakdown(),
            last_error: None,
            offers: banks::load_offers(config.banks_path.as_deref()),
            selected_bank: None,
            recalc_requested: false,
            windows,
        }
    }

    // ── Actions ────────────────────────────────────────────────────────────────

    fn on_calculate_clicked(&mut self) {
        log::info!("Calculate button clicked");
        self.calculate_from(today());
    }

    /// Recalculate if a category switch or an applied offer asked for it.
    fn run_requested_recalc(&mut self, start: Date) {
        if std::mem::take(&mut self.recalc_requested) {
            self.calculate_from(start);
        }
    }

    /// Forget the applied offer once the rate or term no longer match it.
    fn sync_selected_bank(&mut self) {
        let Some(name) = &self.selected_bank else {
            return;
        };
        let still_applied = self
            .offers
            .iter()
            .any(|offer| &offer.name == name && offer.matches(&self.form));
        if !still_applied {
            log::debug!("Rate or term edited; {name} offer no longer applied");
            self.selected_bank = None;
        }
    }

    /// Parse the form and recompute with payments starting after `start`.
    /// On failure the previous summary and chart stay on screen.
    fn calculate_from(&mut self, start: Date) {
        let result = self
            .form
            .to_inputs(self.category)
            .and_then(|inputs| mortgage::calculate(&inputs, start));
        match result {
            Ok(quote) => {
                log::info!(
                    "{} loan: total monthly {} over {} payments",
                    self.category.label(),
                    format_currency(quote.total_monthly),
                    quote.schedule.len()
                );
                self.summary = quote.summary();
                self.breakdown = quote.breakdown();
                self.quote = Some(quote);
                self.last_error = None;
            }
            Err(e) => {
                log::warn!("Calculation failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn select_category(&mut self, category: Category) {
        if self.category == category {
            return;
        }
        log::debug!("Category changed to {}", category.label());
        self.category = category;
        // Property costs only apply to some categories; refresh a shown result.
        if self.quote.is_some() {
            self.recalc_requested = true;
        }
    }

    fn toggle_window(&mut self, name: &str) {
        if let Some(w) = self.windows.iter_mut().find(|w| w.name() == name) {
            w.toggle();
        }
    }

    fn window_open(&self, name: &str) -> bool {
        self.windows
            .iter()
            .any(|w| w.name() == name && w.is_open())
    }

    // ── Panels ─────────────────────────────────────────────────────────────────

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for category in Category::ALL {
                let selected = self.category == category;
                if widgets::gradient_button(ui, category.label(), CATEGORY_BUTTON_SIZE, selected)
                    .clicked()
                {
                    self.select_category(category);
                }
            }
        });
        ui.add_space(12.0);

        widgets::gradient_group(ui, |ui| self.input_grid(ui));
        ui.add_space(12.0);

        let calc_btn = egui::Button::new(RichText::new("Calculate").color(Color32::WHITE).strong())
            .fill(INDIGO)
            .min_size(Vec2::new(ui.available_width(), 40.0));
        if ui.add(calc_btn).clicked() {
            self.on_calculate_clicked();
        }

        if let Some(err) = &self.last_error {
            ui.add_space(6.0);
            ui.colored_label(ERROR, err.as_str());
        }
        if let Some(bank) = &self.selected_bank {
            ui.add_space(6.0);
            ui.label(format!("Rate and term from {bank}"));
        }
    }

    fn input_grid(&mut self, ui: &mut egui::Ui) {
        let visuals = &mut ui.visuals_mut().widgets;
        for state in [&mut visuals.inactive, &mut visuals.hovered, &mut visuals.active] {
            state.bg_stroke = Stroke::new(1.0, EDIT_BORDER);
            state.corner_radius = CornerRadius::same(6);
        }
        ui.visuals_mut().extreme_bg_color = Color32::WHITE;

        let rows = InputField::ALL.len().div_ceil(2);
        egui::Grid::new("loan_inputs")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .min_col_width((ui.available_width() - 16.0) / 2.0)
            .show(ui, |ui| {
                for row in 0..rows {
                    let fields: Vec<InputField> = InputField::ALL
                        .into_iter()
                        .filter(|f| f.grid_cell().0 == row)
                        .collect();
                    for field in &fields {
                        ui.label(RichText::new(field.label()).size(12.0).color(TEXT));
                    }
                    ui.end_row();
                    for field in &fields {
                        let edit = egui::TextEdit::singleline(self.form.get_mut(*field))
                            .desired_width(f32::INFINITY)
                            .margin(Margin::same(5));
                        ui.add_enabled(field.applies_to(self.category), edit);
                    }
                    ui.end_row();
                }
            });
    }

    fn summary_panel(&mut self, ui: &mut egui::Ui) {
        // Chart and summary split the height 2:1 above the buttons.
        let usable = (ui.available_height() - 48.0).max(0.0);
        pie::pie_chart(ui, "Mortgage Breakdown", &self.breakdown, usable * 2.0 / 3.0);
        ui.add_space(8.0);

        ui.label(
            RichText::new("Mortgage Repayment Summary")
                .strong()
                .color(TEXT),
        );
        for (label, value) in summary_lines(&self.summary) {
            ui.label(RichText::new(format!("{label}: {value}")).color(TEXT));
        }
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let choose = egui::Button::new(RichText::new("Choose Bank").color(Color32::WHITE).strong())
                .fill(INDIGO)
                .min_size(Vec2::new(120.0, 28.0));
            if ui.add(choose).clicked() {
                log::info!("Choose Bank button clicked");
                self.toggle_window(BANK_WINDOW);
            }

            let label = if self.window_open(SCHEDULE_WINDOW) {
                "Hide Schedule"
            } else {
                "Schedule"
            };
            if ui
                .add_enabled(self.quote.is_some(), egui::Button::new(label))
                .clicked()
            {
                self.toggle_window(SCHEDULE_WINDOW);
            }
        });
    }
}

/// `(label, value)` lines of the repayment summary, in display order.
pub fn summary_lines(summary: &Summary) -> [(&'static str, String); 6] {
    [
        ("Mortgage Amount", format_currency(summary.mortgage_amount)),
        ("Loan pay-off date", summary.payoff.clone()),
        ("Monthly Tax Paid", format_currency(summary.monthly_tax)),
        ("Monthly Insurance", format_currency(summary.monthly_insurance)),
        ("Annual Payment", format_currency(summary.annual_payment)),
        ("Total Monthly Payment", format_currency(summary.total_monthly)),
    ]
}

fn today() -> Date {
    jiff::Zoned::now().date()
}

fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.style_mut(|style| {
        style.visuals.panel_fill = BACKGROUND;
        style.visuals.window_fill = BACKGROUND;
    });
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_selected_bank();

        let panel_frame = egui::Frame::new()
            .fill(BACKGROUND)
            .inner_margin(Margin::same(16));

        // ── 1. Right: chart + summary (2/5 of the width) ──────────────────────
        egui::SidePanel::right("summary_panel")
            .resizable(false)
            .show_separator_line(false)
            .exact_width(ctx.screen_rect().width() * RIGHT_PANEL_SHARE)
            .frame(panel_frame)
            .show(ctx, |ui| self.summary_panel(ui));

        // ── 2. Left: categories, inputs, Calculate ────────────────────────────
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.inputs_panel(ui));
            });

        // ── 3. Floating windows ───────────────────────────────────────────────
        let mut state = AppState {
            form: &mut self.form,
            quote: self.quote.as_ref(),
            offers: &self.offers,
            selected_bank: &mut self.selected_bank,
            recalc_requested: &mut self.recalc_requested,
        };
        for w in &mut self.windows {
            w.show(ctx, &mut state);
        }

        self.run_requested_recalc(today());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    fn app() -> App {
        App::with_config(&Config::default())
    }

    #[test]
    fn starts_with_mockup_values() {
        let app = app();
        assert!(app.quote.is_none());
        assert_eq!(app.summary, Summary::placeholder());
        let lines = summary_lines(&app.summary);
        assert_eq!(lines[0], ("Mortgage Amount", "$979,899.62".to_string()));
        assert_eq!(lines[1], ("Loan pay-off date", "Apr, 2054".to_string()));
        assert_eq!(lines[5], ("Total Monthly Payment", "$9,721.94".to_string()));
        assert_eq!(app.offers.len(), 5);
    }

    #[test]
    fn calculate_replaces_placeholder() {
        let mut app = app();
        app.calculate_from(date(2024, 4, 19));
        assert!(app.last_error.is_none());
        let quote = app.quote.as_ref().unwrap();
        assert_eq!(app.summary.mortgage_amount, dec!(32740));
        assert_eq!(app.summary.payoff, "Apr, 2054");
        // 86,740 * 2.58% / 12
        assert_eq!(app.summary.monthly_tax, dec!(186.49));
        assert_eq!(app.summary.monthly_insurance, dec!(6000.00));
        assert_eq!(app.breakdown, quote.breakdown());
    }

    #[test]
    fn invalid_input_keeps_previous_result() {
        let mut app = app();
        app.calculate_from(date(2024, 4, 19));
        let before = app.summary.clone();

        app.form.set(InputField::LoanAmount, "lots");
        app.calculate_from(date(2024, 4, 19));
        assert_eq!(
            app.last_error.as_deref(),
            Some("Loan Amount: 'lots' is not a number")
        );
        assert_eq!(app.summary, before);
    }

    #[test]
    fn vehicle_drops_property_costs() {
        let mut app = app();
        app.calculate_from(date(2024, 4, 19));
        app.select_category(Category::Vehicle);
        assert!(app.recalc_requested);
        app.calculate_from(date(2024, 4, 19));
        assert!(app.summary.monthly_tax.is_zero());
        assert!(app.summary.monthly_insurance.is_zero());
        assert_eq!(app.breakdown.len(), 3);
    }

    #[test]
    fn windows_toggle_by_name() {
        let mut app = app();
        assert!(!app.window_open(BANK_WINDOW));
        app.toggle_window(BANK_WINDOW);
        assert!(app.window_open(BANK_WINDOW));
        assert!(!app.window_open(SCHEDULE_WINDOW));
    }

    fn apply_offer(app: &mut App, index: usize) {
        let offer = app.offers[index].clone();
        offer.apply(&mut app.form);
        app.selected_bank = Some(offer.name);
        app.recalc_requested = true;
    }

    #[test]
    fn editing_rate_clears_applied_offer() {
        let mut app = app();
        apply_offer(&mut app, 0);
        app.sync_selected_bank();
        assert_eq!(app.selected_bank.as_deref(), Some("Northwind Savings"));

        app.form.set(InputField::InterestRate, "5.5");
        app.sync_selected_bank();
        assert!(app.selected_bank.is_none());
        assert!(!app.offers[0].matches(&app.form));
    }

    #[test]
    fn editing_term_clears_applied_offer() {
        let mut app = app();
        apply_offer(&mut app, 2);
        app.form.set(InputField::LoanTerm, "30");
        app.sync_selected_bank();
        assert!(app.selected_bank.is_none());
    }

    #[test]
    fn requested_recalc_runs_once() {
        let mut app = app();
        apply_offer(&mut app, 2);
        app.run_requested_recalc(date(2024, 4, 19));
        assert!(!app.recalc_requested);
        assert_eq!(app.quote.as_ref().unwrap().schedule.len(), 15 * 12);

        app.form.set(InputField::LoanTerm, "10");
        app.run_requested_recalc(date(2024, 4, 19));
        assert_eq!(app.quote.as_ref().unwrap().schedule.len(), 15 * 12);
    }

    #[test]
    fn category_switch_requests_recalc() {
        let mut app = app();
        app.select_category(Category::Vacations);
        assert!(!app.recalc_requested);
        app.calculate_from(date(2024, 4, 19));
        app.select_category(Category::Home);
        assert!(app.recalc_requested);
        app.run_requested_recalc(date(2024, 4, 19));
        assert!(!app.recalc_requested);
        assert_eq!(app.summary.monthly_tax, dec!(186.49));
    }

    #[test]
    fn applying_an_offer_updates_form() {
        let mut app = app();
        let offer = app.offers[2].clone();
        offer.apply(&mut app.form);
        app.calculate_from(date(2024, 4, 19));
        assert_eq!(app.quote.as_ref().unwrap().schedule.len(), 15 * 12);
    }
}
