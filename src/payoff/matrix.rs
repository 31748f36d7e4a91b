//! Rectangular payoff matrix.

/// A rectangular grid of payoffs: one row per alternative, one column
/// per state of nature.
///
/// Rectangularity is maintained by construction. Shape-changing
/// operations ([`resized`](PayoffMatrix::resized)) return a new matrix;
/// the receiver is never mutated.
///
/// A matrix with zero rows or zero columns is valid and degenerates to
/// empty engine results rather than an error.
///
/// # Examples
///
/// ```
/// use u_decision::payoff::PayoffMatrix;
///
/// let payoffs = PayoffMatrix::from_rows(vec![
///     vec![4.0, 2.0, 5.0],
///     vec![3.0, 6.0, 1.0],
/// ]);
/// assert_eq!(payoffs.alternatives(), 2);
/// assert_eq!(payoffs.states(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct PayoffMatrix {
    rows: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    /// A rows×cols matrix with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            rows: vec![vec![fill; cols]; rows],
        }
    }

    /// A rows×cols matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Builds a matrix from caller-supplied rows.
    ///
    /// Ragged input is normalized: short rows are padded with zeros to
    /// the width of the widest row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, 0.0);
                row
            })
            .collect();
        Self { rows }
    }

    /// Number of alternatives (rows).
    pub fn alternatives(&self) -> usize {
        self.rows.len()
    }

    /// Number of states of nature (columns).
    pub fn states(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// True when the matrix has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.alternatives() == 0 || self.states() == 0
    }

    /// The payoff row for alternative `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= alternatives()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// The payoff at (alternative `i`, state `j`), or 0.0 out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0.0)
    }

    /// A copy of this matrix with exactly `rows`×`cols` cells.
    ///
    /// Trailing rows/columns are truncated; missing ones are appended
    /// as zeros. Shrinking then growing back therefore recovers the
    /// surviving cells and zero-fills the rest.
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        let mut next: Vec<Vec<f64>> = self
            .rows
            .iter()
            .take(rows)
            .map(|row| {
                let mut row: Vec<f64> = row.iter().copied().take(cols).collect();
                row.resize(cols, 0.0);
                row
            })
            .collect();
        while next.len() < rows {
            next.push(vec![0.0; cols]);
        }
        Self { rows: next }
    }

    /// Largest payoff in row `i` (0.0 for an out-of-range or empty row).
    pub fn row_max(&self, i: usize) -> f64 {
        strict_max(self.rows.get(i).into_iter().flatten().copied())
    }

    /// Smallest payoff in row `i` (0.0 for an out-of-range or empty row).
    pub fn row_min(&self, i: usize) -> f64 {
        strict_min(self.rows.get(i).into_iter().flatten().copied())
    }

    /// Largest payoff in column `j` (0.0 when there are no rows).
    pub fn column_max(&self, j: usize) -> f64 {
        strict_max(self.rows.iter().map(|row| row.get(j).copied().unwrap_or(0.0)))
    }

    /// Smallest payoff in column `j` (0.0 when there are no rows).
    pub fn column_min(&self, j: usize) -> f64 {
        strict_min(self.rows.iter().map(|row| row.get(j).copied().unwrap_or(0.0)))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PayoffMatrix {
    /// Deserializes from a plain nested array, zero-padding ragged rows
    /// so the rectangularity invariant holds.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        Ok(PayoffMatrix::from_rows(rows))
    }
}

// First-wins scans: an equal later value never replaces the current
// extreme, matching the selection tie-break used by the engines.

fn strict_max(values: impl Iterator<Item = f64>) -> f64 {
    values.reduce(|a, b| if b > a { b } else { a }).unwrap_or(0.0)
}

fn strict_min(values: impl Iterator<Item = f64>) -> f64 {
    values.reduce(|a, b| if b < a { b } else { a }).unwrap_or(0.0)
}
