//! Form model: loan categories, the eight input fields, and their parsed form.
//!
//! The UI edits [`LoanForm`] (raw text, one string per field). Pressing
//! Calculate turns it into a validated [`LoanInputs`] that the engine works on.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::error::{AppError, Result};
use crate::utils::parse_decimal;

// ── Category ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Home,
    Vehicle,
    Vacations,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Home, Category::Vehicle, Category::Vacations];

    pub fn label(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Vehicle => "Vehicle",
            Category::Vacations => "Vacations",
        }
    }

    /// Whether property tax, homeowners insurance and PMI apply.
    pub fn has_property_costs(self) -> bool {
        matches!(self, Category::Home)
    }
}

// ── Input fields ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    PropertyValue,
    LoanAmount,
    DownPayment,
    InterestRate,
    LoanTerm,
    PropertyTaxes,
    HomeownersInsurance,
    Pmi,
}

impl InputField {
    /// Display order; also the grid order (two per row).
    pub const ALL: [InputField; 8] = [
        InputField::PropertyValue,
        InputField::LoanAmount,
        InputField::DownPayment,
        InputField::InterestRate,
        InputField::LoanTerm,
        InputField::PropertyTaxes,
        InputField::HomeownersInsurance,
        InputField::Pmi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::PropertyValue => "Property Value",
            InputField::LoanAmount => "Loan Amount",
            InputField::DownPayment => "Down Payment",
            InputField::InterestRate => "Interest Rate",
            InputField::LoanTerm => "Loan Term",
            InputField::PropertyTaxes => "Property Taxes",
            InputField::HomeownersInsurance => "Homeowners Insurance",
            InputField::Pmi => "Private Mortgage Insurance (PMI)",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            InputField::PropertyValue => "86740",
            InputField::LoanAmount => "32740",
            InputField::DownPayment => "80040",
            InputField::InterestRate => "7.77",
            InputField::LoanTerm => "30",
            InputField::PropertyTaxes => "2.58",
            InputField::HomeownersInsurance => "72000",
            InputField::Pmi => "0.5",
        }
    }

    /// `(row, column)` of the field in the two-column input grid.
    pub fn grid_cell(self) -> (usize, usize) {
        let index = self as usize;
        (index / 2, index % 2)
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Whether the field feeds the calculation for `category`.
    pub fn applies_to(self, category: Category) -> bool {
        match self {
            InputField::PropertyTaxes | InputField::HomeownersInsurance | InputField::Pmi => {
                category.has_property_costs()
            }
            _ => true,
        }
    }
}

// ── Raw form ───────────────────────────────────────────────────────────────────

/// Transient text-field contents, indexed by [`InputField`].
#[derive(Clone, Debug)]
pub struct LoanForm {
    values: [String; 8],
}

impl Default for LoanForm {
    fn default() -> Self {
        Self {
            values: InputField::ALL.map(|f| f.default_text().to_string()),
        }
    }
}

impl LoanForm {
    pub fn get(&self, field: InputField) -> &str {
        &self.values[field.index()]
    }

    pub fn get_mut(&mut self, field: InputField) -> &mut String {
        &mut self.values[field.index()]
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    fn parse(&self, field: InputField) -> Result<Decimal> {
        parse_decimal(field.label(), self.get(field))
    }

    /// Validate every field relevant to `category`. Fields the category
    /// ignores are treated as zero and never rejected.
    pub fn to_inputs(&self, category: Category) -> Result<LoanInputs> {
        let money = |field: InputField| -> Result<Decimal> {
            if !field.applies_to(category) {
                return Ok(Decimal::ZERO);
            }
            let value = self.parse(field)?;
            if value.is_sign_negative() && !value.is_zero() {
                return Err(AppError::invalid(field.label(), "must not be negative"));
            }
            Ok(value)
        };
        let percent = |field: InputField| -> Result<Decimal> {
            let value = money(field)?;
            if value > dec!(100) {
                return Err(AppError::invalid(field.label(), "must be at most 100%"));
            }
            Ok(value)
        };

        let loan_amount = money(InputField::LoanAmount)?;
        if loan_amount.is_zero() {
            return Err(AppError::invalid(
                InputField::LoanAmount.label(),
                "must be greater than zero",
            ));
        }

        let term = self.parse(InputField::LoanTerm)?;
        if term.fract() != Decimal::ZERO || term < Decimal::ONE || term > dec!(50) {
            return Err(AppError::invalid(
                InputField::LoanTerm.label(),
                "must be a whole number of years between 1 and 50",
            ));
        }
        let term_years = term.to_u32().ok_or_else(|| {
            AppError::invalid(InputField::LoanTerm.label(), "out of range")
        })?;

        Ok(LoanInputs {
            property_value: money(InputField::PropertyValue)?,
            loan_amount,
            down_payment: money(InputField::DownPayment)?,
            annual_rate_pct: percent(InputField::InterestRate)?,
            term_years,
            property_tax_pct: percent(InputField::PropertyTaxes)?,
            homeowners_insurance: money(InputField::HomeownersInsurance)?,
            pmi_pct: percent(InputField::Pmi)?,
        })
    }
}

// ── Parsed inputs ──────────────────────────────────────────────────────────────

/// Validated loan parameters. Percentages are annual and expressed in
/// percent (`7.77` means 7.77%).
#[derive(Clone, Debug, PartialEq)]
pub struct LoanInputs {
    pub property_value: Decimal,
    pub loan_amount: Decimal,
    pub down_payment: Decimal,
    pub annual_rate_pct: Decimal,
    pub term_years: u32,
    /// Percent of property value per year.
    pub property_tax_pct: Decimal,
    /// Yearly premium in currency.
    pub homeowners_insurance: Decimal,
    /// Percent of loan amount per year.
    pub pmi_pct: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_display_order() {
        let form = LoanForm::default();
        let texts: Vec<&str> = InputField::ALL.iter().map(|f| form.get(*f)).collect();
        assert_eq!(
            texts,
            ["86740", "32740", "80040", "7.77", "30", "2.58", "72000", "0.5"]
        );
    }

    #[test]
    fn grid_is_two_columns() {
        assert_eq!(InputField::PropertyValue.grid_cell(), (0, 0));
        assert_eq!(InputField::LoanAmount.grid_cell(), (0, 1));
        assert_eq!(InputField::InterestRate.grid_cell(), (1, 1));
        assert_eq!(InputField::Pmi.grid_cell(), (3, 1));
    }

    #[test]
    fn default_form_parses() {
        let inputs = LoanForm::default().to_inputs(Category::Home).unwrap();
        assert_eq!(inputs.loan_amount, dec!(32740));
        assert_eq!(inputs.term_years, 30);
        assert_eq!(inputs.annual_rate_pct, dec!(7.77));
        assert_eq!(inputs.homeowners_insurance, dec!(72000));
    }

    #[test]
    fn vehicle_ignores_property_costs() {
        let mut form = LoanForm::default();
        form.set(InputField::PropertyTaxes, "not a number");
        let inputs = form.to_inputs(Category::Vehicle).unwrap();
        assert!(inputs.property_tax_pct.is_zero());
        assert!(inputs.pmi_pct.is_zero());
        assert!(form.to_inputs(Category::Home).is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut form = LoanForm::default();
        form.set(InputField::LoanTerm, "30.5");
        assert!(form.to_inputs(Category::Home).is_err());
        form.set(InputField::LoanTerm, "51");
        assert!(form.to_inputs(Category::Home).is_err());
        form.set(InputField::LoanTerm, "30.0");
        assert_eq!(form.to_inputs(Category::Home).unwrap().term_years, 30);

        form.set(InputField::InterestRate, "101");
        assert!(form.to_inputs(Category::Home).is_err());
        form.set(InputField::InterestRate, "5");
        form.set(InputField::LoanAmount, "0");
        assert!(form.to_inputs(Category::Home).is_err());
        form.set(InputField::LoanAmount, "-10");
        assert!(form.to_inputs(Category::Home).is_err());
    }
}
