//! Repayment math: monthly payment, escrow components, amortization schedule.
//!
//! All money is `Decimal`. Monthly components are rounded to cents before
//! they are summed so the summary adds up exactly to what is displayed.

use jiff::ToSpan;
use jiff::civil::Date;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::{AppError, Result};
use crate::types::LoanInputs;
use crate::utils::{format_month, round_cents};

/// Down payments below this share of the property value carry PMI.
const PMI_EQUITY_THRESHOLD: Decimal = dec!(0.20);

// ── Results ────────────────────────────────────────────────────────────────────

/// One month of the amortization schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleRow {
    pub month: u32,
    pub date: Date,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Balance left after this payment.
    pub balance: Decimal,
}

/// Full result of a calculation.
#[derive(Clone, Debug)]
pub struct MortgageQuote {
    pub loan_amount: Decimal,
    pub monthly_principal_interest: Decimal,
    pub monthly_tax: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_pmi: Decimal,
    pub total_monthly: Decimal,
    pub annual_payment: Decimal,
    pub total_interest: Decimal,
    pub payoff_date: Date,
    pub schedule: Vec<ScheduleRow>,
}

/// A named pie-chart slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: Decimal,
}

/// Values shown in the "Mortgage Repayment Summary" panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub mortgage_amount: Decimal,
    pub payoff: String,
    pub monthly_tax: Decimal,
    pub monthly_insurance: Decimal,
    pub annual_payment: Decimal,
    pub total_monthly: Decimal,
}

impl Summary {
    /// Shown until the first successful calculation.
    pub fn placeholder() -> Self {
        Self {
            mortgage_amount: dec!(979899.62),
            payoff: "Apr, 2054".to_string(),
            monthly_tax: dec!(225.00),
            monthly_insurance: dec!(200.00),
            annual_payment: dec!(32653.32),
            total_monthly: dec!(9721.94),
        }
    }
}

/// Pie slices shown until the first successful calculation.
pub fn placeholder_breakdown() -> Vec<Slice> {
    vec![
        Slice {
            label: "Principal",
            value: dec!(54558.32),
        },
        Slice {
            label: "Tax",
            value: dec!(8934.01),
        },
        Slice {
            label: "Insurance",
            value: dec!(498.00),
        },
    ]
}

impl MortgageQuote {
    pub fn summary(&self) -> Summary {
        Summary {
            mortgage_amount: self.loan_amount,
            payoff: format_month(self.payoff_date),
            monthly_tax: self.monthly_tax,
            monthly_insurance: self.monthly_insurance,
            annual_payment: self.annual_payment,
            total_monthly: self.total_monthly,
        }
    }

    /// Monthly payment split by component; PMI only when charged.
    pub fn breakdown(&self) -> Vec<Slice> {
        let mut slices = vec![
            Slice {
                label: "Principal",
                value: self.monthly_principal_interest,
            },
            Slice {
                label: "Tax",
                value: self.monthly_tax,
            },
            Slice {
                label: "Insurance",
                value: self.monthly_insurance,
            },
        ];
        if !self.monthly_pmi.is_zero() {
            slices.push(Slice {
                label: "PMI",
                value: self.monthly_pmi,
            });
        }
        slices
    }
}

// ── Arithmetic helpers ─────────────────────────────────────────────────────────

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or(AppError::Overflow)
}

fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_div(b).ok_or(AppError::Overflow)
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or(AppError::Overflow)
}

/// Annual percent to monthly fraction: `7.77` → `0.006475`.
fn monthly_fraction(annual_pct: Decimal) -> Result<Decimal> {
    div(annual_pct, dec!(1200))
}

// ── Calculation ────────────────────────────────────────────────────────────────

/// Level principal-and-interest payment for `principal` over `months`,
/// rounded to cents.
pub fn monthly_payment(principal: Decimal, monthly_rate: Decimal, months: u32) -> Result<Decimal> {
    if months == 0 {
        return Err(AppError::invalid("Loan Term", "must be at least one month"));
    }
    let n = Decimal::from(months);
    if monthly_rate.is_zero() {
        return Ok(round_cents(div(principal, n)?));
    }
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(months))
        .ok_or(AppError::Overflow)?;
    let factor = div(mul(monthly_rate, growth)?, growth - Decimal::ONE)?;
    Ok(round_cents(mul(principal, factor)?))
}

/// Month-by-month schedule for a level payment. The final row clears the
/// remaining balance exactly.
pub fn amortize(
    principal: Decimal,
    monthly_rate: Decimal,
    payment: Decimal,
    months: u32,
    start: Date,
) -> Result<Vec<ScheduleRow>> {
    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        if balance.is_zero() {
            break;
        }
        let interest = round_cents(mul(balance, monthly_rate)?);
        let mut principal_part = payment - interest;
        if month == months || principal_part > balance {
            principal_part = balance;
        }
        balance -= principal_part;

        rows.push(ScheduleRow {
            month,
            date: start.checked_add(i64::from(month).months())?,
            payment: add(principal_part, interest)?,
            principal: principal_part,
            interest,
            balance,
        });
    }
    Ok(rows)
}

/// Run the full calculation. Payments start the month after `start`.
pub fn calculate(inputs: &LoanInputs, start: Date) -> Result<MortgageQuote> {
    let months = inputs.term_years * 12;
    let rate = monthly_fraction(inputs.annual_rate_pct)?;

    let principal_interest = monthly_payment(inputs.loan_amount, rate, months)?;
    let monthly_tax = round_cents(mul(
        inputs.property_value,
        monthly_fraction(inputs.property_tax_pct)?,
    )?);
    let monthly_insurance = round_cents(div(inputs.homeowners_insurance, dec!(12))?);

    let needs_pmi = inputs.property_value > Decimal::ZERO
        && inputs.down_payment < mul(inputs.property_value, PMI_EQUITY_THRESHOLD)?;
    let monthly_pmi = if needs_pmi {
        round_cents(mul(inputs.loan_amount, monthly_fraction(inputs.pmi_pct)?)?)
    } else {
        Decimal::ZERO
    };

    let total_monthly = [monthly_tax, monthly_insurance, monthly_pmi]
        .into_iter()
        .try_fold(principal_interest, add)?;
    let annual_payment = mul(total_monthly, dec!(12))?;

    let schedule = amortize(inputs.loan_amount, rate, principal_interest, months, start)?;
    let total_interest = schedule
        .iter()
        .map(|row| row.interest)
        .try_fold(Decimal::ZERO, add)?;

    Ok(MortgageQuote {
        loan_amount: inputs.loan_amount,
        monthly_principal_interest: principal_interest,
        monthly_tax,
        monthly_insurance,
        monthly_pmi,
        total_monthly,
        annual_payment,
        total_interest,
        payoff_date: start.checked_add(i64::from(months).months())?,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn inputs() -> LoanInputs {
        LoanInputs {
            property_value: dec!(250000),
            loan_amount: dec!(200000),
            down_payment: dec!(50000),
            annual_rate_pct: dec!(6),
            term_years: 30,
            property_tax_pct: dec!(1.2),
            homeowners_insurance: dec!(1200),
            pmi_pct: dec!(0.5),
        }
    }

    #[test]
    fn standard_payment() {
        let rate = monthly_fraction(dec!(6)).unwrap();
        assert_eq!(monthly_payment(dec!(100000), rate, 360).unwrap(), dec!(599.55));
        let rate = monthly_fraction(dec!(5)).unwrap();
        assert_eq!(monthly_payment(dec!(100000), rate, 180).unwrap(), dec!(790.79));
    }

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(
            monthly_payment(dec!(200000), Decimal::ZERO, 120).unwrap(),
            dec!(1666.67)
        );
        let rows = amortize(dec!(1000), Decimal::ZERO, dec!(333.33), 3, date(2024, 1, 1)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].principal, dec!(333.34));
        assert!(rows[2].balance.is_zero());
    }

    #[test]
    fn schedule_repays_principal_exactly() {
        let quote = calculate(&inputs(), date(2024, 4, 19)).unwrap();
        assert_eq!(quote.schedule.len(), 360);
        let repaid: Decimal = quote.schedule.iter().map(|r| r.principal).sum();
        assert_eq!(repaid, dec!(200000));
        assert!(quote.schedule.last().unwrap().balance.is_zero());
        let interest: Decimal = quote.schedule.iter().map(|r| r.interest).sum();
        assert_eq!(interest, quote.total_interest);
        assert_eq!(quote.schedule[0].date, date(2024, 5, 19));
    }

    #[test]
    fn escrow_components_and_totals() {
        let quote = calculate(&inputs(), date(2024, 4, 19)).unwrap();
        assert_eq!(quote.monthly_principal_interest, dec!(1199.10));
        assert_eq!(quote.monthly_tax, dec!(250.00));
        assert_eq!(quote.monthly_insurance, dec!(100.00));
        // 20% down: no PMI.
        assert!(quote.monthly_pmi.is_zero());
        assert_eq!(quote.total_monthly, dec!(1549.10));
        assert_eq!(quote.annual_payment, dec!(18589.20));
        assert_eq!(quote.breakdown().len(), 3);
    }

    #[test]
    fn pmi_below_twenty_percent_down() {
        let mut low_down = inputs();
        low_down.down_payment = dec!(10000);
        let quote = calculate(&low_down, date(2024, 4, 19)).unwrap();
        assert_eq!(quote.monthly_pmi, dec!(83.33));
        let labels: Vec<_> = quote.breakdown().iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Principal", "Tax", "Insurance", "PMI"]);
    }

    #[test]
    fn payoff_month_label() {
        let quote = calculate(&inputs(), date(2024, 4, 19)).unwrap();
        assert_eq!(quote.summary().payoff, "Apr, 2054");
        assert_eq!(quote.summary().mortgage_amount, dec!(200000));
    }

    #[test]
    fn overflow_is_reported() {
        let mut huge = inputs();
        huge.property_value = Decimal::MAX;
        huge.property_tax_pct = dec!(100);
        huge.homeowners_insurance = Decimal::MAX;
        assert!(matches!(
            calculate(&huge, date(2024, 1, 1)),
            Err(AppError::Overflow)
        ));
    }

    #[test]
    fn placeholder_matches_mockup() {
        let summary = Summary::placeholder();
        assert_eq!(summary.total_monthly, dec!(9721.94));
        assert_eq!(placeholder_breakdown().len(), 3);
    }
}
