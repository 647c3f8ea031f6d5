use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use invest_core::plan::{FutureOutflow, InitialInvestmentItem, InvestmentPlan, PartnerContribution};
use invest_core::projection::{aggregate, project, Granularity};
use invest_core::utils::persistence::{load_plan_from_path, save_plan_to_path};
use tempfile::tempdir;

fn build_sample_plan(declarations: usize) -> InvestmentPlan {
    let mut plan = InvestmentPlan::new();

    for idx in 0..declarations {
        let value = 100.0 + (idx % 50) as f64;
        plan.add_initial_item(
            InitialInvestmentItem::new(format!("Item {idx}"), 1 + (idx % 4) as u32, value)
                .expect("item"),
        );
        let start = (idx % 12) as u32;
        let contribution =
            PartnerContribution::new(value * 10.0, start, idx % 2 == 0, 1 + (idx % 6) as u32)
                .expect("contribution");
        plan.add_partner_contribution(contribution);
        let outflow = FutureOutflow::new(
            format!("Outflow {idx}"),
            value * 3.0,
            (idx % 60) as u32,
            idx % 3 == 0,
            3,
        )
        .expect("outflow");
        plan.add_future_outflow(outflow);
    }

    plan
}

fn bench_projection(c: &mut Criterion) {
    let plan = build_sample_plan(black_box(1_000));

    c.bench_function("project_60_months_1k", |b| {
        b.iter(|| {
            let table = project(&plan, 60);
            black_box(table);
        })
    });

    let monthly = project(&plan, 120);
    c.bench_function("aggregate_all_granularities_120", |b| {
        b.iter(|| {
            for granularity in Granularity::ALL {
                black_box(aggregate(&monthly, granularity));
            }
        })
    });
}

fn bench_plan_io(c: &mut Criterion) {
    let plan = build_sample_plan(black_box(1_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("plan.json");

    c.bench_function("plan_save_1k", |b| {
        b.iter(|| {
            save_plan_to_path(&plan, &file_path).expect("save plan");
        })
    });

    save_plan_to_path(&plan, &file_path).expect("seed");

    c.bench_function("plan_load_and_project_1k", |b| {
        b.iter_batched(
            || file_path.clone(),
            |path| {
                let loaded = load_plan_from_path(&path).expect("load plan");
                black_box(project(&loaded, 60));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_projection, bench_plan_io);
criterion_main!(benches);
