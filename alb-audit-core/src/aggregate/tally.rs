use std::collections::HashMap;

/// Counts keyed by label, remembering first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.order[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.order.len());
                self.order.push((key.to_string(), 1));
            }
        }
    }

    /// Entries sorted by count descending; equal counts keep first-seen order.
    pub(crate) fn into_sorted(self) -> Vec<(String, usize)> {
        let mut rows = self.order;
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

/// `part / total * 100`, or 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::{percent, Tally};

    #[test]
    fn ties_keep_first_seen_order() {
        let mut tally = Tally::default();
        for key in ["nlb", "alb", "gwlb", "alb", "nlb", "gwlb", "classic"] {
            tally.add(key);
        }
        let rows = tally.into_sorted();
        let keys = rows.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["nlb", "alb", "gwlb", "classic"]);
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
