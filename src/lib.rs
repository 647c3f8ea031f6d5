#![doc(test(attr(deny(warnings))))]

//! Invest Core models a business's capital investment plan and projects it
//! into a month-indexed cash-flow table, with period roll-ups for charting.
//!
//! ```
//! use invest_core::plan::{InitialInvestmentItem, InvestmentPlan, PartnerContribution};
//! use invest_core::projection::{aggregate, project, Granularity, RowLabel};
//!
//! let mut plan = InvestmentPlan::new();
//! plan.add_initial_item(InitialInvestmentItem::new("Ovens", 2, 1000.0).unwrap());
//! plan.add_partner_contribution(PartnerContribution::new(500.0, 1, true, 2).unwrap());
//!
//! let monthly = project(&plan, 6);
//! assert_eq!(monthly.row(RowLabel::Total), &[-2000.0, 500.0, 0.0, 500.0, 0.0, 500.0]);
//!
//! let quarterly = aggregate(&monthly, Granularity::Quarterly);
//! assert_eq!(quarterly.row(RowLabel::Total), &[-1500.0, 1000.0]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod plan;
pub mod projection;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Invest Core tracing initialized.");
    });
}
