//! Bank offers for the "Choose Bank" window.
//!
//! Offers come from a JSON file named in the config, or the list compiled into
//! the binary when no file is configured or the file cannot be read.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::types::{InputField, LoanForm};
use crate::utils::parse_decimal;

const EMBEDDED_OFFERS: &str = include_str!("../../assets/banks.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BankOffer {
    pub name: String,
    /// Annual percent, e.g. `6.49`.
    pub annual_rate: Decimal,
    pub term_years: u32,
}

impl BankOffer {
    /// Copy the offer's rate and term into the form.
    pub fn apply(&self, form: &mut LoanForm) {
        form.set(InputField::InterestRate, self.annual_rate.normalize().to_string());
        form.set(InputField::LoanTerm, self.term_years.to_string());
    }

    /// Whether the form still holds this offer's rate and term.
    pub fn matches(&self, form: &LoanForm) -> bool {
        let rate = form.get(InputField::InterestRate);
        let term = form.get(InputField::LoanTerm);
        parse_decimal(InputField::InterestRate.label(), rate).is_ok_and(|r| r == self.annual_rate)
            && term.trim().parse::<u32>().is_ok_and(|t| t == self.term_years)
    }
}

/// Decode and validate an offer list.
pub fn parse_offers(json: &str) -> Result<Vec<BankOffer>> {
    let offers: Vec<BankOffer> = serde_json::from_str(json)?;
    for offer in &offers {
        if offer.annual_rate.is_sign_negative() || offer.annual_rate > dec!(100) {
            return Err(AppError::invalid(
                "Interest Rate",
                format!("{}: rate {} out of range", offer.name, offer.annual_rate),
            ));
        }
        if !(1..=50).contains(&offer.term_years) {
            return Err(AppError::invalid(
                "Loan Term",
                format!("{}: term {} out of range", offer.name, offer.term_years),
            ));
        }
    }
    Ok(offers)
}

pub fn read_offers(path: &Path) -> Result<Vec<BankOffer>> {
    let json = fs::read_to_string(path)?;
    parse_offers(&json)
}

pub fn embedded_offers() -> Vec<BankOffer> {
    parse_offers(EMBEDDED_OFFERS).unwrap_or_else(|e| {
        log::error!("embedded bank offers are invalid: {e}");
        Vec::new()
    })
}

/// Offers from `path` if given and readable, otherwise the embedded list.
pub fn load_offers(path: Option<&Path>) -> Vec<BankOffer> {
    let Some(path) = path else {
        return embedded_offers();
    };
    match read_offers(path) {
        Ok(offers) => {
            log::info!("Loaded {} bank offers from {}", offers.len(), path.display());
            offers
        }
        Err(e) => {
            log::warn!(
                "Failed to load bank offers from {}: {e}. Using built-in list.",
                path.display()
            );
            embedded_offers()
        }
    }
}
