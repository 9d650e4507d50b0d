//! Scenario price matrix.
//!
//! # Memory Layout
//!
//! Values are stored column-major: `values[scenario * n_steps + step]`, so
//! each scenario path is one contiguous slice. This keeps per-column
//! evolution cache-friendly and lets columns be processed in parallel
//! without sharing.

/// An `n_steps × n_scenarios` matrix of simulated prices, one column per
/// scenario.
///
/// Produced by [`simulate_market`](crate::gbm::simulate_market); immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioMatrix {
    n_steps: usize,
    n_scenarios: usize,
    /// Column-major storage, `values[scenario * n_steps + step]`.
    values: Vec<f64>,
}

impl ScenarioMatrix {
    /// Wraps column-major storage produced by the simulator.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n_steps * n_scenarios`.
    pub(crate) fn from_columns(n_steps: usize, n_scenarios: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            n_steps * n_scenarios,
            "storage must hold n_steps * n_scenarios values"
        );
        Self {
            n_steps,
            n_scenarios,
            values,
        }
    }

    /// Returns the number of time steps (rows).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of scenarios (columns).
    #[inline]
    pub fn n_scenarios(&self) -> usize {
        self.n_scenarios
    }

    /// Returns the price at (`step`, `scenario`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, step: usize, scenario: usize) -> f64 {
        assert!(step < self.n_steps, "step {step} out of range");
        assert!(scenario < self.n_scenarios, "scenario {scenario} out of range");
        self.values[scenario * self.n_steps + step]
    }

    /// Returns one scenario path as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `scenario` is out of range.
    #[inline]
    pub fn column(&self, scenario: usize) -> &[f64] {
        assert!(scenario < self.n_scenarios, "scenario {scenario} out of range");
        &self.values[scenario * self.n_steps..(scenario + 1) * self.n_steps]
    }

    /// Returns an iterator over scenario paths in column order.
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_column_major() {
        // 2 steps x 3 scenarios
        let m = ScenarioMatrix::from_columns(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.n_steps(), 2);
        assert_eq!(m.n_scenarios(), 3);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 0), 2.0);
        assert_eq!(m.get(0, 1), 3.0);
        assert_eq!(m.get(1, 2), 6.0);
    }

    #[test]
    fn test_column_slices() {
        let m = ScenarioMatrix::from_columns(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.column(0), &[1.0, 2.0]);
        assert_eq!(m.column(1), &[3.0, 4.0]);
        let cols: Vec<&[f64]> = m.columns().collect();
        assert_eq!(cols.len(), 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_rejects_bad_scenario() {
        let m = ScenarioMatrix::from_columns(1, 1, vec![1.0]);
        m.get(0, 1);
    }

    #[test]
    #[should_panic(expected = "n_steps * n_scenarios")]
    fn test_from_columns_rejects_bad_storage() {
        ScenarioMatrix::from_columns(2, 2, vec![1.0]);
    }
}
