use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::table::{ColumnLabel, RowLabel, Table};

/// Display granularity for a projected table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Monthly,
        Granularity::Quarterly,
        Granularity::SemiAnnual,
        Granularity::Annual,
    ];

    /// Number of months folded into one period.
    pub fn bucket_size(self) -> usize {
        match self {
            Granularity::Monthly => 1,
            Granularity::Quarterly => 3,
            Granularity::SemiAnnual => 6,
            Granularity::Annual => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Monthly => "Monthly",
            Granularity::Quarterly => "Quarterly",
            Granularity::SemiAnnual => "Semi-Annual",
            Granularity::Annual => "Annual",
        }
    }

    /// Lenient parse used at input boundaries: unknown labels fall back to
    /// `Monthly`, which leaves the table untouched.
    pub fn parse_or_monthly(raw: &str) -> Granularity {
        match raw.parse() {
            Ok(granularity) => granularity,
            Err(err) => {
                tracing::warn!(%err, "falling back to monthly granularity");
                Granularity::Monthly
            }
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown granularity `{0}`")]
pub struct UnknownGranularity(pub String);

impl FromStr for Granularity {
    type Err = UnknownGranularity;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "monthly" | "month" => Ok(Granularity::Monthly),
            "quarterly" | "quarter" => Ok(Granularity::Quarterly),
            "semiannual" | "semiannually" | "halfyearly" => Ok(Granularity::SemiAnnual),
            "annual" | "annually" | "yearly" | "year" => Ok(Granularity::Annual),
            _ => Err(UnknownGranularity(raw.to_string())),
        }
    }
}

/// Re-buckets a monthly table into contiguous periods of `granularity`.
///
/// Each output cell is the sum of its run of input columns; the last run may be
/// short when the width is not a multiple of the bucket size. `Monthly`
/// returns the input unchanged.
pub fn aggregate(table: &Table, granularity: Granularity) -> Table {
    if granularity == Granularity::Monthly {
        return table.clone();
    }

    let size = granularity.bucket_size();
    let width = table.width();
    let columns = (0..width.div_ceil(size))
        .map(|run| ColumnLabel::Period {
            granularity,
            index: run as u32 + 1,
        })
        .collect();

    let mut grouped = Table::zeroed(columns);
    for (label, cells) in table.rows() {
        for (run, chunk) in cells.chunks(size).enumerate() {
            grouped.add(label, run, chunk.iter().sum());
        }
    }
    grouped
}

/// Aggregates a prior projection when there is one; `None` passes through.
pub fn aggregate_loaded(table: Option<&Table>, granularity: Granularity) -> Option<Table> {
    match table {
        Some(table) => Some(aggregate(table, granularity)),
        None => {
            tracing::debug!(%granularity, "no projection available to aggregate");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(width: u32) -> Table {
        let mut table = Table::monthly(width);
        for column in 0..width as usize {
            table.add(RowLabel::PartnerContributions, column, 1.0);
        }
        table.recompute_total();
        table
    }

    #[test]
    fn quarterly_over_twelve_months_yields_four_periods_of_three() {
        let grouped = aggregate(&ones(12), Granularity::Quarterly);
        assert_eq!(grouped.width(), 4);
        assert_eq!(grouped.row(RowLabel::PartnerContributions), &[3.0; 4]);
        assert_eq!(grouped.row(RowLabel::Total), &[3.0; 4]);
        assert_eq!(grouped.columns()[0].to_string(), "Quarterly 1");
        assert_eq!(grouped.columns()[3].to_string(), "Quarterly 4");
    }

    #[test]
    fn trailing_partial_run_keeps_remaining_months() {
        let grouped = aggregate(&ones(14), Granularity::Annual);
        assert_eq!(grouped.row(RowLabel::PartnerContributions), &[12.0, 2.0]);
        let grouped = aggregate(&ones(5), Granularity::SemiAnnual);
        assert_eq!(grouped.row(RowLabel::PartnerContributions), &[5.0]);
    }

    #[test]
    fn monthly_is_identity() {
        let table = ones(7);
        assert_eq!(aggregate(&table, Granularity::Monthly), table);
    }

    #[test]
    fn empty_table_aggregates_to_empty() {
        let grouped = aggregate(&Table::monthly(0), Granularity::Annual);
        assert!(grouped.is_empty());
    }

    #[test]
    fn missing_projection_is_unavailable() {
        assert!(aggregate_loaded(None, Granularity::Quarterly).is_none());
        let grouped = aggregate_loaded(Some(&ones(6)), Granularity::Quarterly).unwrap();
        assert_eq!(grouped.row(RowLabel::Total), &[3.0, 3.0]);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("Quarterly".parse::<Granularity>(), Ok(Granularity::Quarterly));
        assert_eq!("semi-annual".parse::<Granularity>(), Ok(Granularity::SemiAnnual));
        assert_eq!("SEMI_ANNUAL".parse::<Granularity>(), Ok(Granularity::SemiAnnual));
        assert_eq!(" yearly ".parse::<Granularity>(), Ok(Granularity::Annual));
        assert_eq!(
            "fortnightly".parse::<Granularity>(),
            Err(UnknownGranularity("fortnightly".into()))
        );
    }

    #[test]
    fn unknown_label_falls_back_to_monthly() {
        assert_eq!(Granularity::parse_or_monthly("weekly"), Granularity::Monthly);
        assert_eq!(Granularity::parse_or_monthly("annual"), Granularity::Annual);
    }
}
