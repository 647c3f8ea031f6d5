#![allow(dead_code)]

use invest_core::plan::{FutureOutflow, InitialInvestmentItem, InvestmentPlan, PartnerContribution};
use proptest::prelude::*;

/// A small bakery plan touching every declaration kind.
pub fn bakery_plan() -> InvestmentPlan {
    let mut plan = InvestmentPlan::new();
    plan.add_initial_item(InitialInvestmentItem::new("Deck oven", 2, 1_000.0).expect("oven"));
    plan.add_initial_item(
        InitialInvestmentItem::new("Display counter", 1, 450.0).expect("counter"),
    );
    plan.add_partner_contribution(PartnerContribution::once(5_000.0, 0).expect("seed capital"));
    plan.add_partner_contribution(
        PartnerContribution::new(500.0, 1, true, 2).expect("bimonthly top-up"),
    );
    plan.add_future_outflow(FutureOutflow::once("Delivery van", 8_000.0, 4).expect("van"));
    plan.add_future_outflow(
        FutureOutflow::new("Equipment service", 120.0, 0, true, 6).expect("service"),
    );
    plan
}

/// Integer-valued amounts keep every generated sum exact.
pub fn arb_outflow() -> impl Strategy<Value = FutureOutflow> {
    (0u32..10_000, 0u32..80, any::<bool>(), 1u32..13).prop_map(
        |(amount, start, recurring, interval)| {
            FutureOutflow::new("generated", amount as f64, start, recurring, interval).unwrap()
        },
    )
}

pub fn arb_contribution() -> impl Strategy<Value = PartnerContribution> {
    (0u32..10_000, 0u32..80, any::<bool>(), 1u32..13).prop_map(
        |(amount, start, recurring, interval)| {
            PartnerContribution::new(amount as f64, start, recurring, interval).unwrap()
        },
    )
}

pub fn arb_plan() -> impl Strategy<Value = InvestmentPlan> {
    (
        prop::collection::vec((1u32..5, 0u32..5_000), 0..4),
        prop::collection::vec(arb_contribution(), 0..5),
        prop::collection::vec(arb_outflow(), 0..5),
    )
        .prop_map(|(items, contributions, outflows)| {
            let mut plan = InvestmentPlan::new();
            for (quantity, value) in items {
                plan.add_initial_item(
                    InitialInvestmentItem::new("generated", quantity, value as f64).unwrap(),
                );
            }
            for contribution in contributions {
                plan.add_partner_contribution(contribution);
            }
            for outflow in outflows {
                plan.add_future_outflow(outflow);
            }
            plan
        })
}
