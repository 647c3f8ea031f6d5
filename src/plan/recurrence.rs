use crate::errors::DeclarationError;

/// Interval applied when a declaration does not recur.
pub const DEFAULT_INTERVAL_MONTHS: u32 = 1;

/// Shared month-expansion rule for anything that lands on the plan's month grid.
///
/// Implementors only describe *when* they start and whether they repeat; the
/// expansion into concrete month indices lives in [`Scheduled::occurrence_months`].
pub trait Scheduled {
    fn start_month(&self) -> u32;
    fn recurring(&self) -> bool;
    fn interval_months(&self) -> u32;

    /// Months in `0..horizon` on which this declaration produces a cash effect.
    ///
    /// Non-recurring declarations yield `[start_month]` when it falls inside the
    /// horizon. Recurring ones yield `start_month + k * interval_months` for every
    /// `k` that stays below `horizon`, in increasing order.
    fn occurrence_months(&self, horizon: u32) -> Vec<u32> {
        occurrence_months(
            self.start_month(),
            self.recurring(),
            self.interval_months(),
            horizon,
        )
    }
}

/// Free-function form of [`Scheduled::occurrence_months`] over raw schedule fields.
pub fn occurrence_months(
    start_month: u32,
    recurring: bool,
    interval: u32,
    horizon: u32,
) -> Vec<u32> {
    if start_month >= horizon {
        return Vec::new();
    }
    if !recurring {
        return vec![start_month];
    }
    // Zero is rejected at construction, but `step_by` panics on it.
    let step = interval.max(1) as usize;
    (start_month..horizon).step_by(step).collect()
}

/// Validates the interval of a recurring declaration and normalises the
/// interval of a one-off declaration to [`DEFAULT_INTERVAL_MONTHS`].
pub(crate) fn normalize_interval(recurring: bool, interval: u32) -> Result<u32, DeclarationError> {
    if !recurring {
        return Ok(DEFAULT_INTERVAL_MONTHS);
    }
    if interval == 0 {
        return Err(DeclarationError::NonPositiveInterval(interval));
    }
    Ok(interval)
}

pub(crate) fn validate_amount(field: &'static str, value: f64) -> Result<f64, DeclarationError> {
    if !value.is_finite() {
        return Err(DeclarationError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(DeclarationError::NegativeAmount { field, value });
    }
    Ok(value)
}

pub(crate) fn default_interval() -> u32 {
    DEFAULT_INTERVAL_MONTHS
}
