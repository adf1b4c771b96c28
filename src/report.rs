//! Tabular rendering of cost records.

use std::fmt;

use crate::cost::{Cost, CostValue};

/// An org-mode table over a slice of [`Cost`] records.
///
/// Columns follow [`Cost::FIELDS`]. Text columns are left-aligned and numeric
/// columns right-aligned, headers included.
///
/// ```
/// use nanotca::{Cost, CostReport};
///
/// let costs = [Cost::new("Execution Cost tran2", 0.0, 2600.0, 0.0, 100.0)];
/// let table = CostReport::new(&costs).to_string();
/// let mut lines = table.lines();
///
/// assert!(lines.next().unwrap().starts_with("| cost_name "));
/// assert!(lines.next().unwrap().starts_with("|-"));
/// assert!(lines.next().unwrap().starts_with("| Execution Cost tran2 |"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CostReport<'a> {
    costs: &'a [Cost],
}

impl<'a> CostReport<'a> {
    pub fn new(costs: &'a [Cost]) -> Self {
        Self { costs }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Column headers, in rendering order.
    pub fn header(&self) -> &'static [&'static str] {
        &Cost::FIELDS
    }

    /// Cell text for every row, in header order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.costs
            .iter()
            .map(|cost| cost.values().iter().map(|v| v.to_string()).collect())
            .collect()
    }
}

impl fmt::Display for CostReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        let rows = self.rows();

        let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        // A column is numeric unless it holds text; cost_name is the only text field
        let numeric: Vec<bool> = match self.costs.first() {
            Some(cost) => cost
                .values()
                .iter()
                .map(|v| matches!(v, CostValue::Number(_)))
                .collect(),
            None => header.iter().map(|&h| h != "cost_name").collect(),
        };

        write_row(f, header.iter().copied(), &widths, &numeric)?;

        write!(f, "|")?;
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", "-".repeat(width + 2))?;
        }
        writeln!(f, "|")?;

        for row in &rows {
            write_row(f, row.iter().map(String::as_str), &widths, &numeric)?;
        }
        Ok(())
    }
}

fn write_row<'s>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'s str>,
    widths: &[usize],
    numeric: &[bool],
) -> fmt::Result {
    write!(f, "|")?;
    for ((cell, &width), &right) in cells.zip(widths).zip(numeric) {
        if right {
            write!(f, " {cell:>width$} |")?;
        } else {
            write!(f, " {cell:<width$} |")?;
        }
    }
    writeln!(f)
}
