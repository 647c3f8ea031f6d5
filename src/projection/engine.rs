use tracing::{debug, warn};

use super::table::{RowLabel, Table};
use crate::plan::{InvestmentPlan, Scheduled};

/// Planning horizon used when the caller does not pick one.
pub const DEFAULT_HORIZON_MONTHS: u32 = 60;

/// Largest horizon accepted at input boundaries (one hundred years).
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Folds every declaration of `plan` into a monthly table covering `0..horizon`.
///
/// Capital deployed (initial items, future outflows) is negative; partner
/// capital is positive, so `Total` is the net cash flow of each month.
/// A zero horizon yields a table with no columns.
pub fn project(plan: &InvestmentPlan, horizon: u32) -> Table {
    debug!(
        horizon,
        initial_items = plan.initial_items().len(),
        partner_contributions = plan.partner_contributions().len(),
        future_outflows = plan.future_outflows().len(),
        "projecting investment plan"
    );

    let mut table = Table::monthly(horizon);
    if table.is_empty() {
        return table;
    }

    table.add(RowLabel::InitialInvestment, 0, -plan.total_initial_investment());

    for contribution in plan.partner_contributions() {
        fold(
            &mut table,
            RowLabel::PartnerContributions,
            contribution,
            contribution.amount(),
            horizon,
        );
    }
    for outflow in plan.future_outflows() {
        fold(
            &mut table,
            RowLabel::FutureOutflows,
            outflow,
            -outflow.amount(),
            horizon,
        );
    }

    table.recompute_total();
    table
}

/// Projects `plan` when one is loaded; `None` signals there is nothing to show.
pub fn project_loaded(plan: Option<&InvestmentPlan>, horizon: u32) -> Option<Table> {
    match plan {
        Some(plan) => Some(project(plan, horizon)),
        None => {
            debug!("no investment plan loaded; projection unavailable");
            None
        }
    }
}

fn fold(
    table: &mut Table,
    row: RowLabel,
    declaration: &impl Scheduled,
    delta: f64,
    horizon: u32,
) {
    let months = declaration.occurrence_months(horizon);
    if months.is_empty() {
        warn!(
            row = %row,
            start_month = declaration.start_month(),
            horizon,
            "declaration starts beyond the planning horizon"
        );
        return;
    }
    for month in months {
        table.add(row, month as usize, delta);
    }
}
