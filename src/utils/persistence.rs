use std::{fs, path::Path};

use tracing::debug;

use crate::{errors::PlanError, plan::InvestmentPlan};

/// Writes the whole plan to disk atomically by staging to a temporary file.
pub fn save_plan_to_path(plan: &InvestmentPlan, path: &Path) -> Result<(), PlanError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), declarations = plan.declaration_count(), "plan saved");
    Ok(())
}

/// Loads a plan snapshot, re-validating every declaration on the way in.
pub fn load_plan_from_path(path: &Path) -> Result<InvestmentPlan, PlanError> {
    let data = fs::read_to_string(path)?;
    let plan: InvestmentPlan = serde_json::from_str(&data)?;
    debug!(path = %path.display(), declarations = plan.declaration_count(), "plan loaded");
    Ok(plan)
}
