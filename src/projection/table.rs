use std::fmt;

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use super::aggregate::Granularity;

/// Fixed row set of every projected table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RowLabel {
    #[serde(rename = "Initial Investment")]
    InitialInvestment,
    #[serde(rename = "Partner Contributions")]
    PartnerContributions,
    #[serde(rename = "Future Outflows")]
    FutureOutflows,
    #[serde(rename = "Total")]
    Total,
}

impl RowLabel {
    pub const ALL: [RowLabel; 4] = [
        RowLabel::InitialInvestment,
        RowLabel::PartnerContributions,
        RowLabel::FutureOutflows,
        RowLabel::Total,
    ];

    /// Rows that feed the `Total` row.
    pub const CATEGORIES: [RowLabel; 3] = [
        RowLabel::InitialInvestment,
        RowLabel::PartnerContributions,
        RowLabel::FutureOutflows,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RowLabel::InitialInvestment => "Initial Investment",
            RowLabel::PartnerContributions => "Partner Contributions",
            RowLabel::FutureOutflows => "Future Outflows",
            RowLabel::Total => "Total",
        }
    }

    fn index(self) -> usize {
        match self {
            RowLabel::InitialInvestment => 0,
            RowLabel::PartnerContributions => 1,
            RowLabel::FutureOutflows => 2,
            RowLabel::Total => 3,
        }
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnLabel {
    /// Zero-based month index.
    Month { month: u32 },
    /// One-based period index at the given granularity.
    Period { granularity: Granularity, index: u32 },
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnLabel::Month { month } => write!(f, "{month}"),
            ColumnLabel::Period { granularity, index } => write!(f, "{granularity} {index}"),
        }
    }
}

/// One plotted row, ready for a charting layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub row: RowLabel,
    pub points: Vec<(ColumnLabel, f64)>,
}

/// Dense row-labelled, column-labelled cash-flow grid.
///
/// Every row always has exactly `columns().len()` cells. Tables are values:
/// nothing in this crate mutates a table after handing it out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<ColumnLabel>,
    #[serde(serialize_with = "serialize_rows")]
    rows: [Vec<f64>; 4],
}

impl Table {
    pub(crate) fn zeroed(columns: Vec<ColumnLabel>) -> Self {
        let width = columns.len();
        Self {
            columns,
            rows: [
                vec![0.0; width],
                vec![0.0; width],
                vec![0.0; width],
                vec![0.0; width],
            ],
        }
    }

    pub(crate) fn monthly(horizon: u32) -> Self {
        Self::zeroed((0..horizon).map(|month| ColumnLabel::Month { month }).collect())
    }

    pub(crate) fn add(&mut self, row: RowLabel, column: usize, delta: f64) {
        self.rows[row.index()][column] += delta;
    }

    /// Rewrites the `Total` row as the column-wise sum of the category rows.
    pub(crate) fn recompute_total(&mut self) {
        for column in 0..self.width() {
            let sum: f64 = RowLabel::CATEGORIES
                .iter()
                .map(|row| self.rows[row.index()][column])
                .sum();
            self.rows[RowLabel::Total.index()][column] = sum;
        }
    }

    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn row(&self, label: RowLabel) -> &[f64] {
        &self.rows[label.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowLabel, &[f64])> + '_ {
        RowLabel::ALL.into_iter().map(move |label| (label, self.row(label)))
    }

    pub fn value(&self, label: RowLabel, column: usize) -> Option<f64> {
        self.row(label).get(column).copied()
    }

    pub fn row_sum(&self, label: RowLabel) -> f64 {
        self.row(label).iter().sum()
    }

    /// Builds chart series for the selected rows; an empty selection plots `Total`.
    pub fn series(&self, selection: &[RowLabel]) -> Vec<ChartSeries> {
        effective_selection(selection)
            .iter()
            .map(|&row| ChartSeries {
                row,
                points: self
                    .columns
                    .iter()
                    .copied()
                    .zip(self.row(row).iter().copied())
                    .collect(),
            })
            .collect()
    }

    /// Absolute row sums for the selected rows, for share-of-total charts.
    pub fn category_totals(&self, selection: &[RowLabel]) -> Vec<(RowLabel, f64)> {
        effective_selection(selection)
            .iter()
            .map(|&row| (row, self.row_sum(row).abs()))
            .collect()
    }
}

fn serialize_rows<S: Serializer>(rows: &[Vec<f64>; 4], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(rows.len()))?;
    for label in RowLabel::ALL {
        map.serialize_entry(&label, &rows[label.index()])?;
    }
    map.end()
}

fn effective_selection(selection: &[RowLabel]) -> &[RowLabel] {
    if selection.is_empty() {
        &[RowLabel::Total]
    } else {
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_table_starts_zeroed_with_month_columns() {
        let table = Table::monthly(3);
        assert_eq!(table.width(), 3);
        assert_eq!(table.columns()[2], ColumnLabel::Month { month: 2 });
        for (_, cells) in table.rows() {
            assert_eq!(cells, &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn recompute_total_sums_category_rows() {
        let mut table = Table::monthly(2);
        table.add(RowLabel::InitialInvestment, 0, -100.0);
        table.add(RowLabel::PartnerContributions, 0, 40.0);
        table.add(RowLabel::FutureOutflows, 1, -5.0);
        table.recompute_total();
        assert_eq!(table.row(RowLabel::Total), &[-60.0, -5.0]);
    }

    #[test]
    fn empty_selection_defaults_to_total() {
        let table = Table::monthly(2);
        let series = table.series(&[]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].row, RowLabel::Total);
        assert_eq!(series[0].points.len(), 2);
    }

    #[test]
    fn category_totals_are_absolute() {
        let mut table = Table::monthly(2);
        table.add(RowLabel::FutureOutflows, 0, -30.0);
        table.add(RowLabel::FutureOutflows, 1, -20.0);
        let totals = table.category_totals(&[RowLabel::FutureOutflows]);
        assert_eq!(totals, vec![(RowLabel::FutureOutflows, 50.0)]);
    }

    #[test]
    fn labels_render_stable_names() {
        assert_eq!(RowLabel::PartnerContributions.to_string(), "Partner Contributions");
        let column = ColumnLabel::Period {
            granularity: Granularity::Quarterly,
            index: 2,
        };
        assert_eq!(column.to_string(), "Quarterly 2");
        assert_eq!(
            serde_json::to_value(RowLabel::InitialInvestment).unwrap(),
            serde_json::json!("Initial Investment")
        );
    }

    #[test]
    fn serialized_rows_are_keyed_by_label() {
        let mut table = Table::monthly(2);
        table.add(RowLabel::PartnerContributions, 1, 10.0);
        table.recompute_total();
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["rows"]["Partner Contributions"], serde_json::json!([0.0, 10.0]));
        assert_eq!(value["rows"]["Total"], serde_json::json!([0.0, 10.0]));
        assert_eq!(value["columns"][1], serde_json::json!({"kind": "month", "month": 1}));
    }

    #[test]
    fn value_out_of_range_is_none() {
        let table = Table::monthly(1);
        assert_eq!(table.value(RowLabel::Total, 0), Some(0.0));
        assert_eq!(table.value(RowLabel::Total, 1), None);
    }
}
