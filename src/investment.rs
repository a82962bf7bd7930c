use crate::error::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Volatility profile of an investment. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "conservador")]
    Conservative,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "agresivo")]
    Aggressive,
}

/// Badge tone used when a risk level is shown next to a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl RiskLevel {
    pub fn all() -> [RiskLevel; 3] {
        [
            RiskLevel::Conservative,
            RiskLevel::Moderate,
            RiskLevel::Aggressive,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "conservador",
            RiskLevel::Moderate => "moderado",
            RiskLevel::Aggressive => "agresivo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "Conservador",
            RiskLevel::Moderate => "Moderado",
            RiskLevel::Aggressive => "Agresivo",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RiskLevel::Conservative => Tone::Success,
            RiskLevel::Moderate => Tone::Warning,
            RiskLevel::Aggressive => Tone::Error,
        }
    }

    /// Long-form description shown in the "Perfil de Riesgo" section.
    pub fn profile(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "Perfil de bajo riesgo con menor volatilidad. Ideal para inversores que buscan estabilidad y preservar el capital.",
            RiskLevel::Moderate => "Perfil de riesgo equilibrado que busca un balance entre crecimiento y estabilidad del capital.",
            RiskLevel::Aggressive => "Perfil de alto riesgo con mayor potencial de crecimiento. Adecuado para inversores con alta tolerancia al riesgo.",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservador" | "conservative" => Ok(RiskLevel::Conservative),
            "moderado" | "moderate" => Ok(RiskLevel::Moderate),
            "agresivo" | "aggressive" => Ok(RiskLevel::Aggressive),
            _ => Err(ParseError::UnknownRiskLevel(s.to_string())),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A performance figure for one period, kept in its display format ("-1,67%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub period: String,
    pub percentage: String,
    #[serde(default)]
    pub is_negative: bool,
}

impl PerformanceSnapshot {
    pub fn new(period: &str, percentage: &str) -> Self {
        Self {
            period: period.to_string(),
            percentage: percentage.to_string(),
            is_negative: percentage.trim_start().starts_with('-'),
        }
    }

    /// Parses the formatted percentage. With a comma present, dots are
    /// thousands separators ("1.234,5%"); otherwise a dot is the decimal point.
    pub fn value(&self) -> Option<f64> {
        let number = self.percentage.trim().trim_end_matches('%').trim();
        if number.contains(',') {
            number.replace('.', "").replace(',', ".").parse().ok()
        } else {
            number.parse().ok()
        }
    }

    /// Makes `is_negative` agree with the percentage text when it parses.
    pub fn sync_sign(&mut self) {
        if let Some(value) = self.value() {
            self.is_negative = value < 0.0;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub percentage: f64,
}

impl Holding {
    pub fn new(symbol: &str, name: &str, percentage: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            percentage,
        }
    }
}

/// One business day of cumulative return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPoint {
    pub date: NaiveDate,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) risk_level: RiskLevel,
    pub(crate) description: String,
    pub(crate) description_extended: String,
    pub(crate) performance: Vec<PerformanceSnapshot>,
    pub(crate) holdings: Vec<Holding>,
    #[serde(default)]
    pub(crate) evolution: Vec<EvolutionPoint>,
    pub(crate) horizon: String,
}

impl InvestmentRecord {
    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_description_extended(&self) -> &str {
        &self.description_extended
    }

    pub fn get_performance(&self) -> &[PerformanceSnapshot] {
        &self.performance
    }

    pub fn get_holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn get_evolution(&self) -> &[EvolutionPoint] {
        &self.evolution
    }

    pub fn get_horizon(&self) -> &str {
        &self.horizon
    }

    pub fn get_terms(&self) -> InvestmentTerms {
        InvestmentTerms::for_id(&self.id)
    }
}

/// Commercial conditions shown in "Detalles de la Inversión".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentTerms {
    pub min_amount: &'static str,
    pub fees: &'static str,
}

impl InvestmentTerms {
    const UNSPECIFIED: InvestmentTerms = InvestmentTerms {
        min_amount: "No especificado",
        fees: "No especificado",
    };

    pub fn for_id(id: &str) -> Self {
        let (min_amount, fees) = match id {
            "ahorro" => ("$10.000", "0.5% anual"),
            "ahorro-plus" => ("$50.000", "0.3% anual"),
            "gestion-mix" => ("$100.000", "1.2% anual"),
            "cartera-renta" => ("$250.000", "1.5% anual"),
            "bonos" => ("$500.000", "2.0% anual"),
            "cartera-renta-fija" => ("$1.000.000", "1.8% anual"),
            _ => return Self::UNSPECIFIED,
        };
        Self { min_amount, fees }
    }
}
