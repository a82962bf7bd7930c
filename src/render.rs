//! Plain terminal output for the command line subcommands.

use crate::category::CategoryShare;
use crate::chart::{to_chart_series, ChartMode};
use crate::investment::{InvestmentRecord, PerformanceSnapshot, RiskLevel, Tone};
use crate::query::{sorted_holdings, top_holdings, HoldingSlice};
use colored::{ColoredString, Colorize};
use comfy_table::{
    presets::UTF8_FULL, Attribute, Cell, CellAlignment, Color as TColor, ContentArrangement, Table,
};
use piechart::{Chart, Color};

const PIE_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Purple,
    Color::White,
];

/// Percentage with a comma decimal separator, e.g. "25,5%".
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%").replace('.', ",")
}

/// Whole pesos with dot thousands separators, e.g. "$ 1.234.567".
pub fn format_ars(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(".");
    if rounded < 0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

fn tone_color(tone: Tone) -> TColor {
    match tone {
        Tone::Success => TColor::Green,
        Tone::Warning => TColor::Yellow,
        Tone::Error => TColor::Red,
    }
}

fn risk_badge(level: RiskLevel) -> ColoredString {
    let label = format!("[{}]", level.label());
    match level.tone() {
        Tone::Success => label.green(),
        Tone::Warning => label.yellow(),
        Tone::Error => label.red(),
    }
}

fn performance_text(snapshot: &PerformanceSnapshot) -> ColoredString {
    if snapshot.is_negative {
        format!("▼ {}", snapshot.percentage).red()
    } else {
        format!("▲ {}", snapshot.percentage).green()
    }
}

fn performance_cell(snapshot: Option<&PerformanceSnapshot>) -> Cell {
    match snapshot {
        Some(s) => {
            let (arrow, color) = if s.is_negative {
                ("▼", TColor::Red)
            } else {
                ("▲", TColor::Green)
            };
            Cell::new(format!("{arrow} {}", s.percentage))
                .set_alignment(CellAlignment::Right)
                .fg(color)
        }
        None => Cell::new("-").set_alignment(CellAlignment::Right),
    }
}

fn new_table(width: u16) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
    table
}

/// List view: one row per investment.
pub fn print_table(records: &[&InvestmentRecord]) {
    let mut table = new_table(120);
    table.set_header(vec![
        Cell::new("Cartera").add_attribute(Attribute::Bold),
        Cell::new("Riesgo").add_attribute(Attribute::Bold),
        Cell::new("Descripción").add_attribute(Attribute::Bold),
        Cell::new("Semana").add_attribute(Attribute::Bold),
        Cell::new("Mes").add_attribute(Attribute::Bold),
        Cell::new("Trimestre").add_attribute(Attribute::Bold),
        Cell::new("Horizonte").add_attribute(Attribute::Bold),
    ]);

    for record in records {
        let level = record.get_risk_level();
        let performance = record.get_performance();
        table.add_row(vec![
            Cell::new(record.get_title()).add_attribute(Attribute::Bold),
            Cell::new(level.label()).fg(tone_color(level.tone())),
            Cell::new(record.get_description()),
            performance_cell(performance.first()),
            performance_cell(performance.get(1)),
            performance_cell(performance.get(2)),
            Cell::new(record.get_horizon()),
        ]);
    }

    println!("{table}");
}

/// Grid view: one summary card per investment.
pub fn print_cards(records: &[&InvestmentRecord], card_holdings: usize) {
    for record in records {
        println!(
            "┌ {} {}",
            record.get_title().bold().blue(),
            risk_badge(record.get_risk_level())
        );
        println!("│ {}", record.get_description().dimmed());

        let figures: Vec<String> = record
            .get_performance()
            .iter()
            .map(|s| format!("{} {}", s.period, performance_text(s)))
            .collect();
        println!("│ Rendimientos: {}", figures.join("  "));

        let top = top_holdings(record.get_holdings(), card_holdings);
        if !top.is_empty() {
            println!("│ Principales participaciones:");
            for slice in &top {
                println!(
                    "│   {:<8} {:>7}",
                    slice.label.blue(),
                    format_percent(slice.percentage, 1).green()
                );
            }
        }
        println!("└ id: {}  ·  {}", record.get_id(), record.get_horizon());
        println!();
    }
}

/// Everything the detail page shows, top to bottom.
pub fn print_detail(record: &InvestmentRecord, detail_holdings: usize) {
    let level = record.get_risk_level();
    println!("{} {}", record.get_title().bold().blue(), risk_badge(level));
    println!("{}", record.get_description());
    println!();
    println!("{}", "Perfil de Riesgo".bold());
    println!("{}", level.profile());
    println!();
    println!("{}", "Descripción".bold());
    println!("{}", record.get_description_extended());
    println!();

    println!("{}", "Rendimientos Históricos".bold());
    let mut performance = new_table(80);
    performance.set_header(
        record
            .get_performance()
            .iter()
            .map(|s| Cell::new(&s.period).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    performance.add_row(
        record
            .get_performance()
            .iter()
            .map(|s| performance_cell(Some(s)))
            .collect::<Vec<_>>(),
    );
    println!("{performance}");

    let terms = record.get_terms();
    println!("{}", "Detalles de la Inversión".bold());
    println!("  Monto Mínimo: {}", terms.min_amount.blue());
    println!("  Comisiones:   {}", terms.fees.blue());
    println!("  Horizonte:    {}", record.get_horizon().blue());
    println!();

    println!("{}", "Composición de la Cartera".bold());
    let mut holdings = new_table(80);
    holdings.set_header(vec![
        Cell::new("Símbolo").add_attribute(Attribute::Bold),
        Cell::new("Empresa").add_attribute(Attribute::Bold),
        Cell::new("Participación").add_attribute(Attribute::Bold),
    ]);
    for holding in sorted_holdings(record.get_holdings()) {
        holdings.add_row(vec![
            Cell::new(&holding.symbol).fg(TColor::Blue),
            Cell::new(&holding.name),
            Cell::new(format_percent(holding.percentage, 1)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{holdings}");

    draw_pie_chart(&top_holdings(record.get_holdings(), detail_holdings));
}

pub fn print_holdings(record: &InvestmentRecord, n: usize) {
    let slices = top_holdings(record.get_holdings(), n);
    if slices.is_empty() {
        println!("{} no tiene participaciones.", record.get_title());
        return;
    }

    let mut table = new_table(60);
    table.set_header(vec![
        Cell::new("Símbolo").add_attribute(Attribute::Bold),
        Cell::new("Participación").add_attribute(Attribute::Bold),
    ]);
    for slice in &slices {
        let label = if slice.is_others() {
            Cell::new(&slice.label).add_attribute(Attribute::Italic)
        } else {
            Cell::new(&slice.label).fg(TColor::Blue)
        };
        table.add_row(vec![
            label,
            Cell::new(format_percent(slice.percentage, 1)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    draw_pie_chart(&slices);
}

pub fn print_chart(record: &InvestmentRecord, mode: ChartMode) {
    let points = to_chart_series(record.get_evolution(), mode);
    println!("{} · {}", record.get_title().bold().blue(), mode.title());

    let mut table = new_table(60);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Fecha").add_attribute(Attribute::Bold),
        Cell::new(mode.title()).add_attribute(Attribute::Bold),
    ]);
    for point in &points {
        let value = match mode {
            ChartMode::Performance => format_percent(point.y, 2),
            ChartMode::Value { .. } => format_ars(point.y),
        };
        let value_cell = match mode {
            ChartMode::Performance if point.is_zero_crossing() => {
                Cell::new(value).add_attribute(Attribute::Dim)
            }
            ChartMode::Performance => {
                let color = if point.y >= 0.0 { TColor::Green } else { TColor::Red };
                Cell::new(value).fg(color)
            }
            ChartMode::Value { .. } => Cell::new(value),
        };
        table.add_row(vec![
            Cell::new(point.x).set_alignment(CellAlignment::Right),
            Cell::new(if point.is_zero_crossing() { "·" } else { point.label.as_str() }),
            value_cell.set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

pub fn print_categories(title: &str, shares: &[CategoryShare]) {
    println!("{}", title.bold().blue());
    let mut table = new_table(70);
    table.set_header(vec![
        Cell::new("Categoría").add_attribute(Attribute::Bold),
        Cell::new("Participación").add_attribute(Attribute::Bold),
        Cell::new("Color").add_attribute(Attribute::Bold),
    ]);
    for share in shares {
        let (r, g, b) = share.category.rgb();
        table.add_row(vec![
            Cell::new(share.category.label()).fg(TColor::Rgb { r, g, b }),
            Cell::new(format_percent(share.percentage, 2)).set_alignment(CellAlignment::Right),
            Cell::new(share.category.default_color()),
        ]);
    }
    println!("{table}");

    let slices: Vec<HoldingSlice> = shares
        .iter()
        .map(|share| HoldingSlice {
            label: share.category.label().to_string(),
            percentage: share.percentage,
        })
        .collect();
    draw_pie_chart(&slices);
}

fn has_positive_weight(slices: &[HoldingSlice]) -> bool {
    slices.iter().map(|slice| slice.percentage).sum::<f64>() > 0.0
}

/// Draws nothing but a notice when there is no positive weight to plot.
pub fn draw_pie_chart(slices: &[HoldingSlice]) {
    if !has_positive_weight(slices) {
        println!("{}", "Sin participaciones".dimmed());
        return;
    }

    let data: Vec<piechart::Data> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| piechart::Data {
            label: slice.label.clone(),
            value: slice.percentage as f32,
            color: Some(PIE_COLORS[i % PIE_COLORS.len()].into()),
            fill: '•',
        })
        .collect();

    Chart::new()
        .legend(true)
        .radius(9)
        .aspect_ratio(3)
        .draw(&data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::category_breakdown;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.5, 1), "25,5%");
        assert_eq!(format_percent(-0.824, 2), "-0,82%");
    }

    #[test]
    fn test_format_ars() {
        assert_eq!(format_ars(1_000_000.0), "$ 1.000.000");
        assert_eq!(format_ars(950.4), "$ 950");
        assert_eq!(format_ars(-12_345.6), "-$ 12.346");
        assert_eq!(format_ars(0.0), "$ 0");
    }

    fn record_with_holdings(holdings: &str) -> crate::catalog::Catalog {
        let json = format!(
            r#"[{{
                "id": "x",
                "title": "Cartera X",
                "riskLevel": "moderado",
                "description": "Prueba",
                "descriptionExtended": "Prueba extendida",
                "performance": [{{ "period": "Semana", "percentage": "0,10%" }}],
                "holdings": {holdings},
                "evolution": [],
                "horizon": "Corto plazo"
            }}]"#
        );
        crate::catalog::Catalog::from_json(&json).unwrap()
    }

    #[test]
    fn test_no_weight_skips_pie_chart() {
        assert!(!has_positive_weight(&[]));
        let zeros: Vec<HoldingSlice> = ["A", "B"]
            .iter()
            .map(|label| HoldingSlice {
                label: label.to_string(),
                percentage: 0.0,
            })
            .collect();
        assert!(!has_positive_weight(&zeros));
        draw_pie_chart(&[]);
        draw_pie_chart(&zeros);
    }

    #[test]
    fn test_print_record_without_holdings() {
        let catalog = record_with_holdings("[]");
        let record = catalog.require("x").unwrap();
        print_detail(record, 5);
        print_holdings(record, 3);
        print_categories(record.get_title(), &category_breakdown(record.get_holdings()));
    }

    #[test]
    fn test_print_record_with_zero_weights() {
        let catalog = record_with_holdings(
            r#"[{ "symbol": "AL30", "name": "Bono", "percentage": 0.0 },
                { "symbol": "GGAL", "name": "Galicia", "percentage": 0.0 }]"#,
        );
        let record = catalog.require("x").unwrap();
        print_detail(record, 5);
        print_holdings(record, 1);
        print_categories(record.get_title(), &category_breakdown(record.get_holdings()));
    }
}
