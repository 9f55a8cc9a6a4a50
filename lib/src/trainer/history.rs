/// Snapshot of one gradient-descent iteration.
///
/// `cost` is evaluated at the parameters stored in the same entry, i.e. after
/// that iteration's update.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// 1-based iteration index.
    pub iteration: usize,
    pub cost: f64,
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Optimization trace: one [`HistoryEntry`] per iteration, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    entries: Vec<HistoryEntry>,
}

impl TrainingHistory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cost after every iteration.
    pub fn costs(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.cost).collect()
    }

    pub fn final_cost(&self) -> Option<f64> {
        self.entries.last().map(|e| e.cost)
    }

    /// Whether no iteration increased the cost.
    pub fn is_non_increasing(&self) -> bool {
        self.entries.windows(2).all(|w| w[1].cost <= w[0].cost)
    }
}

impl<'a> IntoIterator for &'a TrainingHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(iteration: usize, cost: f64) -> HistoryEntry {
        HistoryEntry {
            iteration,
            cost,
            weights: vec![0.0],
            bias: 0.0,
        }
    }

    #[test]
    fn test_costs_and_final() {
        let mut h = TrainingHistory::default();
        assert!(h.is_empty());
        assert_eq!(h.final_cost(), None);
        h.push(entry(1, 3.0));
        h.push(entry(2, 1.0));
        assert_eq!(h.costs(), vec![3.0, 1.0]);
        assert_eq!(h.final_cost(), Some(1.0));
        assert!(h.is_non_increasing());
    }

    #[test]
    fn test_detects_increase() {
        let mut h = TrainingHistory::default();
        h.push(entry(1, 1.0));
        h.push(entry(2, 2.0));
        assert!(!h.is_non_increasing());
    }
}
