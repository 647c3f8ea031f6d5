//! Investment declarations and the plan aggregate that holds them.

pub mod declaration;
pub mod investment_plan;
pub mod recurrence;

pub use declaration::{FutureOutflow, InitialInvestmentItem, PartnerContribution};
pub use investment_plan::InvestmentPlan;
pub use recurrence::{Scheduled, DEFAULT_INTERVAL_MONTHS};
