//! Immutable investment declarations.
//!
//! Each declaration is validated once, at construction, and never mutated
//! afterwards. Corrections are modelled by clearing and re-adding. Stored
//! records are re-validated on deserialization so nothing invalid can reach
//! the projection engine.

use serde::{Deserialize, Serialize};

use super::recurrence::{default_interval, normalize_interval, validate_amount, Scheduled};
use crate::errors::DeclarationError;

/// A one-time purchase deployed at month 0 (equipment, fit-out, licences...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InitialInvestmentRecord")]
pub struct InitialInvestmentItem {
    description: String,
    quantity: u32,
    unit_value: f64,
}

impl InitialInvestmentItem {
    pub fn new(
        description: impl Into<String>,
        quantity: u32,
        unit_value: f64,
    ) -> Result<Self, DeclarationError> {
        if quantity == 0 {
            return Err(DeclarationError::ZeroQuantity);
        }
        let unit_value = validate_amount("unit_value", unit_value)?;
        if !(quantity as f64 * unit_value).is_finite() {
            return Err(DeclarationError::NonFiniteAmount { field: "total" });
        }
        Ok(Self {
            description: description.into(),
            quantity,
            unit_value,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_value(&self) -> f64 {
        self.unit_value
    }

    /// `quantity * unit_value`, computed on every read.
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_value
    }
}

impl Scheduled for InitialInvestmentItem {
    fn start_month(&self) -> u32 {
        0
    }

    fn recurring(&self) -> bool {
        false
    }

    fn interval_months(&self) -> u32 {
        default_interval()
    }
}

/// Capital a partner brings into the business, once or on a fixed cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartnerContributionRecord")]
pub struct PartnerContribution {
    amount: f64,
    start_month: u32,
    recurring: bool,
    interval_months: u32,
}

impl PartnerContribution {
    pub fn new(
        amount: f64,
        start_month: u32,
        recurring: bool,
        interval_months: u32,
    ) -> Result<Self, DeclarationError> {
        Ok(Self {
            amount: validate_amount("amount", amount)?,
            start_month,
            recurring,
            interval_months: normalize_interval(recurring, interval_months)?,
        })
    }

    pub fn once(amount: f64, start_month: u32) -> Result<Self, DeclarationError> {
        Self::new(amount, start_month, false, default_interval())
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Scheduled for PartnerContribution {
    fn start_month(&self) -> u32 {
        self.start_month
    }

    fn recurring(&self) -> bool {
        self.recurring
    }

    fn interval_months(&self) -> u32 {
        self.interval_months
    }
}

/// A planned expansion or replacement spend that leaves the plan later on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FutureOutflowRecord")]
pub struct FutureOutflow {
    description: String,
    amount: f64,
    start_month: u32,
    recurring: bool,
    interval_months: u32,
}

impl FutureOutflow {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        start_month: u32,
        recurring: bool,
        interval_months: u32,
    ) -> Result<Self, DeclarationError> {
        Ok(Self {
            description: description.into(),
            amount: validate_amount("amount", amount)?,
            start_month,
            recurring,
            interval_months: normalize_interval(recurring, interval_months)?,
        })
    }

    pub fn once(
        description: impl Into<String>,
        amount: f64,
        start_month: u32,
    ) -> Result<Self, DeclarationError> {
        Self::new(description, amount, start_month, false, default_interval())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Scheduled for FutureOutflow {
    fn start_month(&self) -> u32 {
        self.start_month
    }

    fn recurring(&self) -> bool {
        self.recurring
    }

    fn interval_months(&self) -> u32 {
        self.interval_months
    }
}

#[derive(Deserialize)]
struct InitialInvestmentRecord {
    description: String,
    quantity: u32,
    unit_value: f64,
}

impl TryFrom<InitialInvestmentRecord> for InitialInvestmentItem {
    type Error = DeclarationError;

    fn try_from(record: InitialInvestmentRecord) -> Result<Self, Self::Error> {
        Self::new(record.description, record.quantity, record.unit_value)
    }
}

#[derive(Deserialize)]
struct PartnerContributionRecord {
    amount: f64,
    start_month: u32,
    #[serde(default)]
    recurring: bool,
    #[serde(default = "default_interval")]
    interval_months: u32,
}

impl TryFrom<PartnerContributionRecord> for PartnerContribution {
    type Error = DeclarationError;

    fn try_from(record: PartnerContributionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.amount,
            record.start_month,
            record.recurring,
            record.interval_months,
        )
    }
}

#[derive(Deserialize)]
struct FutureOutflowRecord {
    description: String,
    amount: f64,
    start_month: u32,
    #[serde(default)]
    recurring: bool,
    #[serde(default = "default_interval")]
    interval_months: u32,
}

impl TryFrom<FutureOutflowRecord> for FutureOutflow {
    type Error = DeclarationError;

    fn try_from(record: FutureOutflowRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.description,
            record.amount,
            record.start_month,
            record.recurring,
            record.interval_months,
        )
    }
}
