use serde::{Deserialize, Serialize};

use super::declaration::{FutureOutflow, InitialInvestmentItem, PartnerContribution};
use super::recurrence::Scheduled;

/// Aggregate root holding every declaration of a capital plan.
///
/// Declarations keep their insertion order. The plan is a plain value owned by
/// its caller; persistence layers read and write it whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    #[serde(default)]
    initial_items: Vec<InitialInvestmentItem>,
    #[serde(default)]
    partner_contributions: Vec<PartnerContribution>,
    #[serde(default)]
    future_outflows: Vec<FutureOutflow>,
}

impl InvestmentPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_initial_item(&mut self, item: InitialInvestmentItem) {
        self.initial_items.push(item);
    }

    pub fn add_partner_contribution(&mut self, contribution: PartnerContribution) {
        self.partner_contributions.push(contribution);
    }

    pub fn add_future_outflow(&mut self, outflow: FutureOutflow) {
        self.future_outflows.push(outflow);
    }

    pub fn clear_initial_items(&mut self) {
        self.initial_items.clear();
    }

    pub fn clear_partner_contributions(&mut self) {
        self.partner_contributions.clear();
    }

    pub fn clear_future_outflows(&mut self) {
        self.future_outflows.clear();
    }

    pub fn initial_items(&self) -> &[InitialInvestmentItem] {
        &self.initial_items
    }

    pub fn partner_contributions(&self) -> &[PartnerContribution] {
        &self.partner_contributions
    }

    pub fn future_outflows(&self) -> &[FutureOutflow] {
        &self.future_outflows
    }

    /// Sum of `total` over every initial item currently held.
    pub fn total_initial_investment(&self) -> f64 {
        self.initial_items.iter().map(InitialInvestmentItem::total).sum()
    }

    /// Gross partner capital landing inside `0..horizon`.
    pub fn total_partner_contributions(&self, horizon: u32) -> f64 {
        self.partner_contributions
            .iter()
            .map(|c| c.amount() * c.occurrence_months(horizon).len() as f64)
            .sum()
    }

    /// Gross future spend landing inside `0..horizon`, as a positive number.
    pub fn total_future_outflows(&self, horizon: u32) -> f64 {
        self.future_outflows
            .iter()
            .map(|o| o.amount() * o.occurrence_months(horizon).len() as f64)
            .sum()
    }

    pub fn declaration_count(&self) -> usize {
        self.initial_items.len() + self.partner_contributions.len() + self.future_outflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declaration_count() == 0
    }
}
