//! Instrument categories for the composition pie chart.

use crate::investment::Holding;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

/// Alpha of a slice at rest.
pub const ALPHA_DEFAULT: f64 = 0.65;
/// Alpha of a hovered slice.
pub const ALPHA_HOVER: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InstrumentCategory {
    Dollars,
    Pesos,
    SovereignBonds,
    CorporateBonds,
    LocalEquities,
    Cedears,
    Uncategorized,
}

const SOVEREIGN_BONDS: &[&str] = &[
    "AL29", "AL30", "AL35", "AL38", "AL41", "AE38", "GD29", "GD30", "GD35", "GD38", "GD41",
    "GD46", "TX26", "TX28", "DICP", "PARP", "BONOS",
];

const CEDEARS: &[&str] = &[
    "CEDEAR", "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "KO", "MELI", "SPY",
    "QQQ", "DIA", "BRKB", "JPM", "WMT", "DISN", "BABA", "VIST", "GLOB",
];

const PESO_INSTRUMENTS: &[&str] = &[
    "ARS", "LECAP", "FCI", "CAUCION", "PF", "PLAZO FIJO", "S31O4", "S29N4", "S13D4", "T2X5",
];

const LOCAL_EQUITIES: &[&str] = &[
    "YPFD", "GGAL", "PAMP", "TGS", "TGSU2", "ALUA", "MIRG", "BMA", "TRAN", "TXAR", "CEPU",
    "CRES", "EDN", "LOMA", "SUPV", "BYMA", "COME", "VALO", "TECO2", "BBAR",
];

const DOLLAR_INSTRUMENTS: &[&str] = &["USD", "MEP", "CCL", "USDT", "DOLAR"];

const CORPORATE_BONDS: &[&str] = &["YCA6O", "YMCHO", "MGC9O", "PNDCO", "TLC1O", "IRCFO", "CS38O"];

impl InstrumentCategory {
    pub fn all() -> [InstrumentCategory; 7] {
        [
            InstrumentCategory::Dollars,
            InstrumentCategory::Pesos,
            InstrumentCategory::SovereignBonds,
            InstrumentCategory::CorporateBonds,
            InstrumentCategory::LocalEquities,
            InstrumentCategory::Cedears,
            InstrumentCategory::Uncategorized,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstrumentCategory::Dollars => "Dólares (USD)",
            InstrumentCategory::Pesos => "Pesos (ARS)",
            InstrumentCategory::SovereignBonds => "Bonos (Soberanos)",
            InstrumentCategory::CorporateBonds => "Obligaciones Negociables (ONs)",
            InstrumentCategory::LocalEquities => "Acciones (Locales)",
            InstrumentCategory::Cedears => "CEDEARs",
            InstrumentCategory::Uncategorized => "Otros / No categorizados",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            InstrumentCategory::Dollars => (47, 109, 58),
            InstrumentCategory::Pesos => (42, 144, 209),
            InstrumentCategory::SovereignBonds => (44, 62, 143),
            InstrumentCategory::CorporateBonds => (0, 105, 92),
            InstrumentCategory::LocalEquities => (230, 126, 34),
            InstrumentCategory::Cedears => (126, 87, 194),
            InstrumentCategory::Uncategorized => (158, 158, 158),
        }
    }

    pub fn rgba(&self, alpha: f64) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r},{g},{b},{alpha})")
    }

    pub fn default_color(&self) -> String {
        self.rgba(ALPHA_DEFAULT)
    }

    pub fn hover_color(&self) -> String {
        self.rgba(ALPHA_HOVER)
    }
}

impl fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a ticker to its category. Unknown tickers land in `Uncategorized`.
pub fn categorize(symbol: &str) -> InstrumentCategory {
    let symbol = symbol.trim().to_uppercase();
    let tables = [
        (SOVEREIGN_BONDS, InstrumentCategory::SovereignBonds),
        (CEDEARS, InstrumentCategory::Cedears),
        (PESO_INSTRUMENTS, InstrumentCategory::Pesos),
        (LOCAL_EQUITIES, InstrumentCategory::LocalEquities),
        (DOLLAR_INSTRUMENTS, InstrumentCategory::Dollars),
        (CORPORATE_BONDS, InstrumentCategory::CorporateBonds),
    ];
    tables
        .iter()
        .find(|(table, _)| table.contains(&symbol.as_str()))
        .map(|(_, category)| *category)
        .unwrap_or(InstrumentCategory::Uncategorized)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: InstrumentCategory,
    pub percentage: f64,
}

/// Sums holding weights per category, in the fixed category order.
/// Categories with no holdings are left out.
pub fn category_breakdown(holdings: &[Holding]) -> Vec<CategoryShare> {
    let mut totals = [0.0_f64; 7];
    let mut seen = [false; 7];
    for holding in holdings {
        let category = categorize(&holding.symbol);
        let index = InstrumentCategory::all()
            .iter()
            .position(|c| *c == category)
            .unwrap_or(6);
        totals[index] += holding.percentage;
        seen[index] = true;
    }

    InstrumentCategory::all()
        .into_iter()
        .zip(totals.into_iter().zip(seen))
        .filter(|(_, (_, seen))| *seen)
        .map(|(category, (percentage, _))| CategoryShare {
            category,
            percentage,
        })
        .collect()
}

/// Placeholder split over every category for demo charts.
///
/// Shares are non-negative, have two decimals and add up to exactly 100.
pub fn demo_category_split(seed: u64) -> Vec<CategoryShare> {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<f64> = InstrumentCategory::all()
        .iter()
        .map(|_| rng.gen_range(1.0..10.0))
        .collect();
    let total: f64 = weights.iter().sum();

    // work in basis points so the rounding remainder is exact
    let mut points: Vec<i64> = weights
        .iter()
        .map(|w| ((w / total) * 10_000.0).floor() as i64)
        .collect();
    let remainder = 10_000 - points.iter().sum::<i64>();
    if let Some(largest) = points.iter_mut().max() {
        *largest += remainder;
    }

    InstrumentCategory::all()
        .into_iter()
        .zip(points)
        .map(|(category, bp)| CategoryShare {
            category,
            percentage: bp as f64 / 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_known_symbols() {
        assert_eq!(categorize("AL30"), InstrumentCategory::SovereignBonds);
        assert_eq!(categorize("gd35"), InstrumentCategory::SovereignBonds);
        assert_eq!(categorize("CEDEAR"), InstrumentCategory::Cedears);
        assert_eq!(categorize(" LECAP "), InstrumentCategory::Pesos);
        assert_eq!(categorize("GGAL"), InstrumentCategory::LocalEquities);
        assert_eq!(categorize("MEP"), InstrumentCategory::Dollars);
        assert_eq!(categorize("YCA6O"), InstrumentCategory::CorporateBonds);
    }

    #[test]
    fn test_categorize_fallback() {
        assert_eq!(categorize("ZZZZ"), InstrumentCategory::Uncategorized);
        assert_eq!(categorize(""), InstrumentCategory::Uncategorized);
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            InstrumentCategory::Uncategorized.default_color(),
            "rgba(158,158,158,0.65)"
        );
        assert_eq!(InstrumentCategory::Cedears.hover_color(), "rgba(126,87,194,0.85)");
    }

    #[test]
    fn test_breakdown_of_fixed_income_portfolio() {
        let record = crate::catalog::get_investment("cartera-renta-fija").unwrap();
        let breakdown = category_breakdown(record.get_holdings());
        let labels: Vec<&str> = breakdown.iter().map(|s| s.category.label()).collect();
        assert_eq!(labels, vec!["Pesos (ARS)", "Bonos (Soberanos)", "CEDEARs"]);
        assert!((breakdown[0].percentage - 53.0).abs() < 1e-9);
        assert!((breakdown[1].percentage - 28.3).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_empty() {
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_demo_split_invariants() {
        for seed in 0..50 {
            let split = demo_category_split(seed);
            assert_eq!(split.len(), 7);
            assert!(split.iter().all(|s| s.percentage >= 0.0));
            let total: f64 = split.iter().map(|s| s.percentage).sum();
            assert!((total - 100.0).abs() < 1e-6, "seed {seed} sums to {total}");
        }
        assert_eq!(demo_category_split(3), demo_category_split(3));
    }
}
