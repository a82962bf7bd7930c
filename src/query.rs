//! Pure queries over catalog records: risk filtering and holdings aggregation.

use crate::investment::{Holding, InvestmentRecord, RiskLevel};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Label of the synthetic entry that sums every holding past the top N.
pub const OTHERS_LABEL: &str = "Otros";

/// Holdings shown on a summary card.
pub const CARD_HOLDINGS: usize = 3;

/// Slices shown on the detail pie chart.
pub const DETAIL_HOLDINGS: usize = 5;

/// Which risk levels the user wants to see.
///
/// An empty set and the full set both mean "no filter", so deselecting every
/// chip shows everything again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RiskSelection {
    #[default]
    All,
    Levels(BTreeSet<RiskLevel>),
}

impl RiskSelection {
    pub fn only(level: RiskLevel) -> Self {
        RiskSelection::Levels(BTreeSet::from([level]))
    }

    pub fn is_all(&self) -> bool {
        match self {
            RiskSelection::All => true,
            RiskSelection::Levels(levels) => {
                levels.is_empty() || RiskLevel::all().iter().all(|level| levels.contains(level))
            }
        }
    }

    pub fn contains(&self, level: RiskLevel) -> bool {
        match self {
            RiskSelection::All => true,
            RiskSelection::Levels(levels) => self.is_all() || levels.contains(&level),
        }
    }

    /// Whether the chip for `level` is highlighted. "Todos" is drawn instead
    /// whenever the selection means everything.
    pub fn is_chip_active(&self, level: RiskLevel) -> bool {
        match self {
            RiskSelection::All => false,
            RiskSelection::Levels(levels) => levels.contains(&level),
        }
    }

    pub fn toggle(&mut self, level: RiskLevel) {
        let mut levels = match std::mem::take(self) {
            RiskSelection::All => BTreeSet::new(),
            RiskSelection::Levels(levels) => levels,
        };
        if !levels.remove(&level) {
            levels.insert(level);
        }
        *self = if levels.is_empty() {
            RiskSelection::All
        } else {
            RiskSelection::Levels(levels)
        };
    }

    pub fn clear(&mut self) {
        *self = RiskSelection::All;
    }
}

impl FromIterator<RiskLevel> for RiskSelection {
    fn from_iter<I: IntoIterator<Item = RiskLevel>>(iter: I) -> Self {
        RiskSelection::Levels(iter.into_iter().collect())
    }
}

/// Records matching the selection, in catalog order.
pub fn filter_by_risk<'a>(
    records: &'a [InvestmentRecord],
    selection: &RiskSelection,
) -> Vec<&'a InvestmentRecord> {
    let filtered: Vec<&InvestmentRecord> = if selection.is_all() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| selection.contains(record.get_risk_level()))
            .collect()
    };
    tracing::debug!(
        total = records.len(),
        shown = filtered.len(),
        "applied risk filter"
    );
    filtered
}

/// One slice of a holdings chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingSlice {
    pub label: String,
    pub percentage: f64,
}

impl HoldingSlice {
    pub fn is_others(&self) -> bool {
        self.label == OTHERS_LABEL
    }
}

fn by_weight_desc(a: &&Holding, b: &&Holding) -> Ordering {
    b.percentage
        .partial_cmp(&a.percentage)
        .unwrap_or(Ordering::Equal)
}

/// Holdings by descending weight. Equal weights keep their input order.
pub fn sorted_holdings(holdings: &[Holding]) -> Vec<&Holding> {
    let mut sorted: Vec<&Holding> = holdings.iter().collect();
    // sort_by is stable
    sorted.sort_by(by_weight_desc);
    sorted
}

/// The `n` heaviest holdings, plus an "Otros" slice summing the rest when
/// there is a rest.
pub fn top_holdings(holdings: &[Holding], n: usize) -> Vec<HoldingSlice> {
    let sorted = sorted_holdings(holdings);
    let split = n.min(sorted.len());
    let (kept, rest) = sorted.split_at(split);

    let mut slices: Vec<HoldingSlice> = kept
        .iter()
        .map(|holding| HoldingSlice {
            label: holding.symbol.clone(),
            percentage: holding.percentage,
        })
        .collect();

    if !rest.is_empty() {
        slices.push(HoldingSlice {
            label: OTHERS_LABEL.to_string(),
            percentage: rest.iter().map(|holding| holding.percentage).sum(),
        });
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::list_investments;
    use proptest::prelude::*;

    fn holdings(data: &[(&str, f64)]) -> Vec<Holding> {
        data.iter()
            .map(|(symbol, percentage)| Holding::new(symbol, symbol, *percentage))
            .collect()
    }

    fn slices(slices: &[HoldingSlice]) -> Vec<(&str, f64)> {
        slices
            .iter()
            .map(|slice| (slice.label.as_str(), slice.percentage))
            .collect()
    }

    fn ids(records: &[&InvestmentRecord]) -> Vec<String> {
        records.iter().map(|r| r.get_id().to_string()).collect()
    }

    #[test]
    fn test_empty_and_full_selection_mean_all() {
        let all = list_investments();
        let expected: Vec<String> = all.iter().map(|r| r.get_id().to_string()).collect();

        let empty = RiskSelection::Levels(BTreeSet::new());
        assert_eq!(ids(&filter_by_risk(all, &empty)), expected);

        let full: RiskSelection = RiskLevel::all().into_iter().collect();
        assert_eq!(ids(&filter_by_risk(all, &full)), expected);

        assert_eq!(ids(&filter_by_risk(all, &RiskSelection::All)), expected);
    }

    #[test]
    fn test_single_level_filter() {
        let filtered =
            filter_by_risk(list_investments(), &RiskSelection::only(RiskLevel::Moderate));
        assert_eq!(ids(&filtered), vec!["gestion-mix", "cartera-renta"]);
        assert!(filtered
            .iter()
            .all(|r| r.get_risk_level() == RiskLevel::Moderate));
    }

    #[test]
    fn test_two_level_filter_keeps_catalog_order() {
        let selection: RiskSelection = [RiskLevel::Aggressive, RiskLevel::Conservative]
            .into_iter()
            .collect();
        let filtered = filter_by_risk(list_investments(), &selection);
        assert_eq!(
            ids(&filtered),
            vec!["ahorro", "ahorro-plus", "bonos", "cartera-renta-fija"]
        );
    }

    #[test]
    fn test_toggle_chips() {
        let mut selection = RiskSelection::All;
        selection.toggle(RiskLevel::Moderate);
        assert_eq!(selection, RiskSelection::only(RiskLevel::Moderate));
        assert!(selection.is_chip_active(RiskLevel::Moderate));
        assert!(!selection.is_all());

        selection.toggle(RiskLevel::Conservative);
        selection.toggle(RiskLevel::Aggressive);
        assert!(selection.is_all());
        assert!(selection.is_chip_active(RiskLevel::Aggressive));

        selection.clear();
        assert_eq!(selection, RiskSelection::All);

        selection.toggle(RiskLevel::Moderate);
        selection.toggle(RiskLevel::Moderate);
        assert_eq!(selection, RiskSelection::All);
    }

    #[test]
    fn test_top_holdings_with_others() {
        let input = holdings(&[("A", 40.0), ("B", 30.0), ("C", 20.0), ("D", 10.0)]);
        let result = top_holdings(&input, 3);
        assert_eq!(
            slices(&result),
            vec![("A", 40.0), ("B", 30.0), ("C", 20.0), ("Otros", 10.0)]
        );
        assert!(result[3].is_others());
    }

    #[test]
    fn test_top_holdings_without_others() {
        let input = holdings(&[("A", 60.0), ("B", 40.0)]);
        assert_eq!(slices(&top_holdings(&input, 3)), vec![("A", 60.0), ("B", 40.0)]);
    }

    #[test]
    fn test_top_holdings_exactly_n() {
        let input = holdings(&[("A", 10.0), ("B", 50.0), ("C", 40.0)]);
        assert_eq!(
            slices(&top_holdings(&input, 3)),
            vec![("B", 50.0), ("C", 40.0), ("A", 10.0)]
        );
    }

    #[test]
    fn test_top_holdings_empty() {
        assert!(top_holdings(&[], 5).is_empty());
    }

    #[test]
    fn test_top_holdings_zero_n_collapses_to_others() {
        let input = holdings(&[("A", 60.0), ("B", 40.0)]);
        assert_eq!(slices(&top_holdings(&input, 0)), vec![("Otros", 100.0)]);
    }

    #[test]
    fn test_top_holdings_stable_on_ties() {
        let input = holdings(&[("X", 10.0), ("A", 25.0), ("Y", 10.0), ("Z", 10.0)]);
        assert_eq!(
            slices(&top_holdings(&input, 3)),
            vec![("A", 25.0), ("X", 10.0), ("Y", 10.0), ("Otros", 10.0)]
        );
    }

    #[test]
    fn test_seed_detail_chart() {
        let record = crate::catalog::get_investment("ahorro").unwrap();
        let result = top_holdings(record.get_holdings(), DETAIL_HOLDINGS);
        let labels: Vec<&str> = result.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["YPFD", "GGAL", "PAMP", "TGS", "ALUA", "Otros"]);
        assert!((result[5].percentage - 18.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_top_holdings_shape(
            weights in proptest::collection::vec(0.0f64..100.0, 0..12),
            n in 0usize..8,
        ) {
            let input: Vec<Holding> = weights
                .iter()
                .enumerate()
                .map(|(i, w)| Holding::new(&format!("S{i}"), "x", *w))
                .collect();
            let result = top_holdings(&input, n);

            prop_assert!(result.len() <= n + 1);
            if input.len() <= n {
                prop_assert_eq!(result.len(), input.len());
                prop_assert!(result.iter().all(|s| !s.is_others()));
            } else {
                prop_assert!(result.last().map(|s| s.is_others()).unwrap_or(false));
            }

            let total_in: f64 = weights.iter().sum();
            let total_out: f64 = result.iter().map(|s| s.percentage).sum();
            prop_assert!((total_in - total_out).abs() < 1e-6);

            let kept = &result[..n.min(input.len())];
            for pair in kept.windows(2) {
                prop_assert!(pair[0].percentage >= pair[1].percentage);
            }
        }

        #[test]
        fn prop_filter_preserves_order(mask in proptest::collection::vec(any::<bool>(), 3)) {
            let selection: RiskSelection = RiskLevel::all()
                .into_iter()
                .zip(mask)
                .filter_map(|(level, on)| on.then_some(level))
                .collect();
            let all = list_investments();
            let filtered = filter_by_risk(all, &selection);

            let positions = filtered
                .iter()
                .map(|r| all.iter().position(|c| c.get_id() == r.get_id()).unwrap());
            let mut last = None;
            for pos in positions {
                prop_assert!(last.map(|l| l < pos).unwrap_or(true));
                last = Some(pos);
            }
            for record in &filtered {
                prop_assert!(selection.contains(record.get_risk_level()));
            }
        }
    }
}
