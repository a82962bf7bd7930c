use carteras_rs::catalog::Catalog;
use carteras_rs::category::{category_breakdown, demo_category_split};
use carteras_rs::chart::{ChartMode, DEFAULT_BASE_VALUE};
use carteras_rs::investment::RiskLevel;
use carteras_rs::query::{filter_by_risk, RiskSelection, CARD_HOLDINGS, DETAIL_HOLDINGS};
use carteras_rs::render;
use carteras_rs::tui::{run_tui, TuiOptions};
use carteras_rs::view::ViewMode;

use clap::{arg, value_parser, ArgAction, ArgMatches, Command};
use eyre::WrapErr;
use serde::Deserialize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    /// Catalog JSON to load instead of the built-in one. Empty means built-in.
    catalog_file: String,
    base_value: f64,
    card_holdings: usize,
    detail_holdings: usize,
    default_view: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: String::new(),
            base_value: DEFAULT_BASE_VALUE,
            card_holdings: CARD_HOLDINGS,
            detail_holdings: DETAIL_HOLDINGS,
            default_view: "grilla".to_string(),
        }
    }
}

impl Config {
    fn view_mode(&self) -> ViewMode {
        self.default_view.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid default_view in config, using grid");
            ViewMode::Grid
        })
    }

    fn base_value(&self) -> f64 {
        if self.base_value > 0.0 {
            self.base_value
        } else {
            tracing::warn!(
                base_value = self.base_value,
                "base_value must be positive, using default"
            );
            DEFAULT_BASE_VALUE
        }
    }

    fn tui_options(&self) -> TuiOptions {
        TuiOptions {
            view_mode: self.view_mode(),
            card_holdings: self.card_holdings,
            detail_holdings: self.detail_holdings,
            base_value: self.base_value(),
        }
    }
}

fn cli() -> Command {
    Command::new("carteras_rs")
        .about("Browse a catalog of investment portfolios")
        .arg_required_else_help(true)
        .subcommand(Command::new("config").about("Print the path to the config file"))
        .subcommand(
            Command::new("list")
                .about("List the investments, optionally filtered by risk level")
                .arg(
                    arg!(-r --risk <LEVEL> "Risk level to show (conservador, moderado, agresivo)")
                        .action(ArgAction::Append),
                )
                .arg(arg!(-v --view <MODE> "Layout: grilla or lista")),
        )
        .subcommand(
            Command::new("show")
                .about("Show the detail page of an investment")
                .arg(arg!(<ID> "Investment id")),
        )
        .subcommand(
            Command::new("holdings")
                .about("Show the main holdings of an investment")
                .arg(arg!(<ID> "Investment id"))
                .arg(
                    arg!(-n --top <N> "Number of holdings before grouping the rest")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("chart")
                .about("Show the evolution series of an investment")
                .arg(arg!(<ID> "Investment id"))
                .arg(arg!(-m --mode <MODE> "performance (default) or value")),
        )
        .subcommand(
            Command::new("categories")
                .about("Show the composition of an investment by instrument category")
                .arg(arg!(<ID> "Investment id"))
                .arg(
                    arg!(--demo <SEED> "Show a placeholder split generated from SEED")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the catalog as JSON")
                .arg(arg!([FILE] "Output file, stdout when omitted")),
        )
        .subcommand(Command::new("tui").about("Open the interactive catalog"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(cfg: &Config) -> eyre::Result<Catalog> {
    if cfg.catalog_file.is_empty() {
        return Ok(Catalog::global().clone());
    }
    Catalog::from_file(&cfg.catalog_file)
        .wrap_err_with(|| format!("could not load catalog from {}", cfg.catalog_file))
}

fn risk_selection(matches: &ArgMatches) -> eyre::Result<RiskSelection> {
    let levels = matches
        .get_many::<String>("risk")
        .unwrap_or_default()
        .map(|s| s.parse::<RiskLevel>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(levels.into_iter().collect())
}

/// Chart mode from `--mode`, performance when omitted. The value view uses
/// the configured base value.
fn chart_mode(matches: &ArgMatches, cfg: &Config) -> eyre::Result<ChartMode> {
    let mode = matches
        .get_one::<String>("mode")
        .map(|mode| mode.parse::<ChartMode>())
        .transpose()?
        .unwrap_or_default();
    Ok(match mode {
        ChartMode::Value { .. } => ChartMode::Value {
            base_value: cfg.base_value(),
        },
        ChartMode::Performance => ChartMode::Performance,
    })
}

fn id_arg(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("ID")
        .map(String::as_str)
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let cfg: Config = confy::load("carteras", "config").wrap_err("could not load config")?;
    let matches = cli().get_matches();

    if let Some(("config", _)) = matches.subcommand() {
        let path = confy::get_configuration_file_path("carteras", "config")
            .wrap_err("could not locate config file")?;
        println!("Your config file is located here: \n{}", path.display());
        return Ok(());
    }

    let catalog = load_catalog(&cfg)?;

    match matches.subcommand() {
        Some(("list", m)) => {
            let selection = risk_selection(m)?;
            let mode = match m.get_one::<String>("view") {
                Some(view) => view.parse::<ViewMode>()?,
                None => cfg.view_mode(),
            };
            let records = filter_by_risk(catalog.get_all(), &selection);
            if records.is_empty() {
                println!("No hay carteras para este filtro");
            }
            match mode {
                ViewMode::Grid => render::print_cards(&records, cfg.card_holdings),
                ViewMode::List => render::print_table(&records),
            }
        }
        Some(("show", m)) => {
            let record = catalog.require(id_arg(m))?;
            render::print_detail(record, cfg.detail_holdings);
        }
        Some(("holdings", m)) => {
            let record = catalog.require(id_arg(m))?;
            let n = m.get_one::<usize>("top").copied().unwrap_or(cfg.detail_holdings);
            render::print_holdings(record, n);
        }
        Some(("chart", m)) => {
            let record = catalog.require(id_arg(m))?;
            render::print_chart(record, chart_mode(m, &cfg)?);
        }
        Some(("categories", m)) => {
            let record = catalog.require(id_arg(m))?;
            match m.get_one::<u64>("demo") {
                Some(seed) => render::print_categories(
                    &format!("{} (demo)", record.get_title()),
                    &demo_category_split(*seed),
                ),
                None => render::print_categories(
                    record.get_title(),
                    &category_breakdown(record.get_holdings()),
                ),
            }
        }
        Some(("export", m)) => {
            let json = catalog.to_json()?;
            match m.get_one::<String>("FILE") {
                Some(path) => {
                    std::fs::write(path, json).wrap_err_with(|| format!("could not write {path}"))?;
                    println!("Catálogo exportado a {path}");
                }
                None => println!("{json}"),
            }
        }
        Some(("tui", _)) => {
            run_tui(catalog, cfg.tui_options()).await?;
        }
        _ => {
            cli().print_help()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli() {
        let matches = cli().get_matches_from(vec!["carteras_rs", "show", "bonos"]);
        assert_eq!(matches.subcommand_name(), Some("show"));
        let (_, m) = matches.subcommand().unwrap();
        assert_eq!(id_arg(m), "bonos");
    }

    #[test]
    fn test_cli_risk_filters() {
        let matches = cli().get_matches_from(vec![
            "carteras_rs",
            "list",
            "--risk",
            "moderado",
            "-r",
            "aggressive",
        ]);
        let (_, m) = matches.subcommand().unwrap();
        let selection = risk_selection(m).unwrap();
        assert!(selection.contains(RiskLevel::Moderate));
        assert!(selection.contains(RiskLevel::Aggressive));
        assert!(!selection.contains(RiskLevel::Conservative));
    }

    #[test]
    fn test_cli_rejects_unknown_risk() {
        let matches = cli().get_matches_from(vec!["carteras_rs", "list", "-r", "extremo"]);
        let (_, m) = matches.subcommand().unwrap();
        assert!(risk_selection(m).is_err());
    }

    #[test]
    fn test_cli_chart_mode() {
        let cfg = Config {
            base_value: 500.0,
            ..Config::default()
        };
        let matches = cli().get_matches_from(vec!["carteras_rs", "chart", "bonos"]);
        let (_, m) = matches.subcommand().unwrap();
        assert_eq!(chart_mode(m, &cfg).unwrap(), ChartMode::Performance);

        let matches = cli().get_matches_from(vec!["carteras_rs", "chart", "bonos", "-m", "valor"]);
        let (_, m) = matches.subcommand().unwrap();
        assert_eq!(
            chart_mode(m, &cfg).unwrap(),
            ChartMode::Value { base_value: 500.0 }
        );

        let matches = cli().get_matches_from(vec!["carteras_rs", "chart", "bonos", "-m", "pie"]);
        let (_, m) = matches.subcommand().unwrap();
        assert!(chart_mode(m, &cfg).is_err());
    }

    #[test]
    fn test_seed_catalog_is_the_global_one() {
        let catalog = load_catalog(&Config::default()).unwrap();
        assert_eq!(catalog.get_all(), carteras_rs::list_investments());
        assert_eq!(
            catalog.get_by_id("bonos"),
            carteras_rs::get_investment("bonos")
        );
    }

    #[test]
    fn test_config_fallbacks() {
        let cfg = Config {
            base_value: -1.0,
            default_view: "mosaico".to_string(),
            ..Config::default()
        };
        assert_eq!(cfg.base_value(), DEFAULT_BASE_VALUE);
        assert_eq!(cfg.view_mode(), ViewMode::Grid);
        assert!(load_catalog(&Config::default()).unwrap().len() == 6);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let catalog = load_catalog(&Config::default()).unwrap();
        let err = catalog.require("nonexistent").unwrap_err();
        assert!(err.to_string().starts_with("Inversión no encontrada"));
    }
}
