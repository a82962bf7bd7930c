//! Reshapes evolution series into chart-ready points.

use crate::error::ParseError;
use crate::investment::EvolutionPoint;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Amount (ARS) the value view assumes was invested at the start of the series.
pub const DEFAULT_BASE_VALUE: f64 = 1_000_000.0;

const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ChartMode {
    #[default]
    /// Cumulative percentage, with zero points where the sign flips.
    Performance,
    /// Money value of `base_value` invested at the start.
    Value { base_value: f64 },
}

impl ChartMode {
    pub fn value() -> Self {
        ChartMode::Value {
            base_value: DEFAULT_BASE_VALUE,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartMode::Performance => "Performance (%)",
            ChartMode::Value { .. } => "Valor (ARS)",
        }
    }

    /// Flips between the two views, keeping the base value of a value view.
    pub fn toggled(self, base_value: f64) -> Self {
        match self {
            ChartMode::Performance => ChartMode::Value { base_value },
            ChartMode::Value { .. } => ChartMode::Performance,
        }
    }
}

impl FromStr for ChartMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "performance" | "rendimiento" => Ok(ChartMode::Performance),
            "value" | "valor" => Ok(ChartMode::value()),
            _ => Err(ParseError::UnknownChartMode(s.to_string())),
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartMode::Performance => write!(f, "performance"),
            ChartMode::Value { .. } => write!(f, "value"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: usize,
    pub y: f64,
    /// Empty for synthetic zero-crossing points.
    pub label: String,
}

impl ChartPoint {
    pub fn is_zero_crossing(&self) -> bool {
        self.label.is_empty()
    }
}

/// Short Spanish date label, e.g. "2 ene".
pub fn date_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS[date.month0() as usize])
}

pub fn value_at(base_value: f64, percentage: f64) -> f64 {
    base_value * (1.0 + percentage / 100.0)
}

fn crosses_zero(previous: f64, current: f64) -> bool {
    (previous >= 0.0 && current < 0.0) || (previous < 0.0 && current >= 0.0)
}

/// Turns an evolution series into chart points without reordering them.
///
/// In performance mode a point with value exactly 0 and an empty label is
/// inserted before every point whose sign differs from its predecessor, so
/// the drawn line touches the axis before changing color.
pub fn to_chart_series(evolution: &[EvolutionPoint], mode: ChartMode) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::with_capacity(evolution.len());
    let mut push = |y: f64, label: String| {
        let x = points.len();
        points.push(ChartPoint { x, y, label });
    };

    match mode {
        ChartMode::Value { base_value } => {
            for point in evolution {
                push(value_at(base_value, point.percentage), date_label(point.date));
            }
        }
        ChartMode::Performance => {
            let mut previous: Option<f64> = None;
            for point in evolution {
                if let Some(previous) = previous {
                    if crosses_zero(previous, point.percentage) {
                        push(0.0, String::new());
                    }
                }
                push(point.percentage, date_label(point.date));
                previous = Some(point.percentage);
            }
        }
    }
    points
}

/// A stretch of consecutive points drawn in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarityRun {
    pub positive: bool,
    pub points: Vec<(f64, f64)>,
}

/// Splits a series into same-color runs. A segment takes the color of its end
/// point; neighbouring runs share their boundary point.
pub fn polarity_runs(points: &[ChartPoint]) -> Vec<PolarityRun> {
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x as f64, p.y)).collect();
    let Some(&first) = coords.first() else {
        return Vec::new();
    };

    let mut runs: Vec<PolarityRun> = Vec::new();
    let mut current = PolarityRun {
        positive: coords.get(1).map_or(first.1 >= 0.0, |p| p.1 >= 0.0),
        points: vec![first],
    };

    for pair in coords.windows(2) {
        let positive = pair[1].1 >= 0.0;
        if positive == current.positive {
            current.points.push(pair[1]);
        } else {
            let next = PolarityRun {
                positive,
                points: vec![pair[0], pair[1]],
            };
            runs.push(std::mem::replace(&mut current, next));
        }
    }
    runs.push(current);
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn series(values: &[f64]) -> Vec<EvolutionPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EvolutionPoint {
                date: day(i as u32 + 1),
                percentage: *v,
            })
            .collect()
    }

    #[test]
    fn test_performance_inserts_two_crossings() {
        let points = to_chart_series(&series(&[1.0, -1.0, 2.0]), ChartMode::Performance);
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1.0, 0.0, -1.0, 0.0, 2.0]);
        assert!(points[1].is_zero_crossing());
        assert!(points[3].is_zero_crossing());
        assert_eq!(points[0].label, "1 ene");
        assert_eq!(points[4].label, "3 ene");
        let xs: Vec<usize> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_counts_as_positive() {
        let points = to_chart_series(&series(&[0.0, 0.5, -0.5, 0.0]), ChartMode::Performance);
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        // 0 -> 0.5 stays positive, 0.5 -> -0.5 and -0.5 -> 0 cross
        assert_eq!(ys, vec![0.0, 0.5, 0.0, -0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_first_point_never_gets_a_crossing() {
        let points = to_chart_series(&series(&[-3.0]), ChartMode::Performance);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].y, -3.0);
    }

    #[test]
    fn test_value_mode_is_one_to_one() {
        let points = to_chart_series(
            &series(&[10.0, -5.0]),
            ChartMode::Value { base_value: 1000.0 },
        );
        assert_eq!(points.len(), 2);
        assert!((points[0].y - 1100.0).abs() < 1e-9);
        assert!((points[1].y - 950.0).abs() < 1e-9);
        assert!(points.iter().all(|p| !p.is_zero_crossing()));
    }

    #[test]
    fn test_empty_series() {
        assert!(to_chart_series(&[], ChartMode::Performance).is_empty());
        assert!(polarity_runs(&[]).is_empty());
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()), "30 sept");
        assert_eq!(date_label(NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()), "2 dic");
    }

    #[test]
    fn test_chart_mode_parsing() {
        assert_eq!("valor".parse::<ChartMode>(), Ok(ChartMode::value()));
        assert_eq!("Performance".parse::<ChartMode>(), Ok(ChartMode::Performance));
        assert!("pie".parse::<ChartMode>().is_err());
        assert_eq!(
            ChartMode::Performance.toggled(5.0),
            ChartMode::Value { base_value: 5.0 }
        );
    }

    #[test]
    fn test_polarity_runs_share_boundaries() {
        let points = to_chart_series(&series(&[1.0, -1.0, 2.0]), ChartMode::Performance);
        let runs = polarity_runs(&points);
        let shape: Vec<(bool, usize)> = runs.iter().map(|r| (r.positive, r.points.len())).collect();
        assert_eq!(shape, vec![(true, 2), (false, 2), (true, 3)]);
        assert_eq!(runs[1].points[0], (1.0, 0.0));
        assert_eq!(runs[2].points[0], (2.0, -1.0));
    }

    proptest! {
        #[test]
        fn prop_performance_preserves_inputs(
            values in proptest::collection::vec(-50.0f64..50.0, 0..60)
        ) {
            let evolution = series_long(&values);
            let points = to_chart_series(&evolution, ChartMode::Performance);
            prop_assert!(points.len() >= values.len());

            let originals: Vec<f64> = points
                .iter()
                .filter(|p| !p.is_zero_crossing())
                .map(|p| p.y)
                .collect();
            prop_assert_eq!(originals, values.clone());

            let crossings = values
                .windows(2)
                .filter(|w| crosses_zero(w[0], w[1]))
                .count();
            prop_assert_eq!(points.len(), values.len() + crossings);
            prop_assert!(points.iter().filter(|p| p.is_zero_crossing()).all(|p| p.y == 0.0));
        }
    }

    fn series_long(values: &[f64]) -> Vec<EvolutionPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EvolutionPoint {
                date: start + chrono::Days::new(i as u64),
                percentage: *v,
            })
            .collect()
    }
}
