//! Facade that holds one session's investment plan and serves its projections.

use serde::Serialize;
use tracing::info;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::PlanError;
use crate::plan::{FutureOutflow, InitialInvestmentItem, InvestmentPlan, PartnerContribution};
use crate::projection::{aggregate_loaded, project, Granularity, Table, DEFAULT_HORIZON_MONTHS};

/// Monthly projection together with the headline initial-investment figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentFlows {
    pub horizon: u32,
    pub table: Table,
    pub total_initial: f64,
}

/// Owns at most one plan. Every read that needs a plan returns `None` until
/// one has been loaded or started by an addition.
#[derive(Debug, Clone)]
pub struct InvestmentService {
    plan: Option<InvestmentPlan>,
    horizon: u32,
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_MONTHS)
    }
}

impl InvestmentService {
    pub fn new(horizon: u32) -> Self {
        Self {
            plan: None,
            horizon,
        }
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Replaces the current plan wholesale.
    pub fn load_plan(&mut self, plan: InvestmentPlan) {
        info!(declarations = plan.declaration_count(), "investment plan loaded");
        self.plan = Some(plan);
    }

    pub fn plan(&self) -> Option<&InvestmentPlan> {
        self.plan.as_ref()
    }

    pub fn take_plan(&mut self) -> Option<InvestmentPlan> {
        self.plan.take()
    }

    /// True when a plan is loaded and holds at least one declaration.
    pub fn has_declarations(&self) -> bool {
        self.plan.as_ref().is_some_and(|plan| !plan.is_empty())
    }

    pub fn add_initial_item(
        &mut self,
        description: &str,
        quantity: u32,
        unit_value: f64,
    ) -> ServiceResult<()> {
        let description = required_description(description)?;
        let item =
            InitialInvestmentItem::new(description, quantity, unit_value).map_err(PlanError::from)?;
        self.plan_mut().add_initial_item(item);
        Ok(())
    }

    pub fn add_partner_contribution(
        &mut self,
        amount: f64,
        start_month: u32,
        recurring: bool,
        interval_months: u32,
    ) -> ServiceResult<()> {
        require_positive(amount)?;
        let contribution =
            PartnerContribution::new(amount, start_month, recurring, interval_months)
                .map_err(PlanError::from)?;
        self.plan_mut().add_partner_contribution(contribution);
        Ok(())
    }

    pub fn add_future_outflow(
        &mut self,
        description: &str,
        amount: f64,
        start_month: u32,
        recurring: bool,
        interval_months: u32,
    ) -> ServiceResult<()> {
        let description = required_description(description)?;
        require_positive(amount)?;
        let outflow =
            FutureOutflow::new(description, amount, start_month, recurring, interval_months)
                .map_err(PlanError::from)?;
        self.plan_mut().add_future_outflow(outflow);
        Ok(())
    }

    pub fn clear_initial_items(&mut self) {
        if let Some(plan) = self.plan.as_mut() {
            plan.clear_initial_items();
        }
    }

    pub fn clear_partner_contributions(&mut self) {
        if let Some(plan) = self.plan.as_mut() {
            plan.clear_partner_contributions();
        }
    }

    pub fn clear_future_outflows(&mut self) {
        if let Some(plan) = self.plan.as_mut() {
            plan.clear_future_outflows();
        }
    }

    /// Projects the loaded plan over `horizon` months.
    pub fn calculate_flows(&self, horizon: u32) -> Option<InvestmentFlows> {
        let plan = self.plan.as_ref()?;
        Some(InvestmentFlows {
            horizon,
            table: project(plan, horizon),
            total_initial: plan.total_initial_investment(),
        })
    }

    /// Projects over the service horizon and re-buckets into `granularity`.
    pub fn grouped_flow(&self, granularity: Granularity) -> Option<Table> {
        let flows = self.calculate_flows(self.horizon);
        aggregate_loaded(flows.as_ref().map(|flows| &flows.table), granularity)
    }

    fn plan_mut(&mut self) -> &mut InvestmentPlan {
        self.plan.get_or_insert_with(InvestmentPlan::new)
    }
}

fn required_description(description: &str) -> ServiceResult<&str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid("description is required".into()));
    }
    Ok(trimmed)
}

fn require_positive(amount: f64) -> ServiceResult<()> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Invalid(format!(
            "amount must be greater than zero (got {amount})"
        )))
    }
}
