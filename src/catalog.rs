use crate::error::{CatalogError, ValidationError};
use crate::investment::{InvestmentRecord, PerformanceSnapshot};
use crate::seed::seed_records;
use chrono::{Datelike, Weekday};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

static SEED_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::seed);

/// Read-only table of investments, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<InvestmentRecord>,
}

impl Catalog {
    /// The built-in catalog. Seed data is trusted and not validated.
    pub fn seed() -> Catalog {
        Catalog {
            records: seed_records(),
        }
    }

    /// The process-wide seed catalog, built on first use.
    pub fn global() -> &'static Catalog {
        &SEED_CATALOG
    }

    pub fn from_records(records: Vec<InvestmentRecord>) -> Result<Catalog, ValidationError> {
        validate(&records)?;
        Ok(Catalog { records })
    }

    pub fn from_json(data: &str) -> Result<Catalog, CatalogError> {
        let mut records: Vec<InvestmentRecord> = serde_json::from_str(data)?;
        for record in &mut records {
            record.performance.iter_mut().for_each(PerformanceSnapshot::sync_sign);
        }
        let catalog = Catalog::from_records(records)?;
        tracing::info!(investments = catalog.len(), "loaded catalog from JSON");
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Catalog::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&InvestmentRecord> {
        self.records.iter().find(|record| record.get_id() == id)
    }

    /// Like [`Catalog::get_by_id`], for callers that propagate errors.
    pub fn require(&self, id: &str) -> Result<&InvestmentRecord, CatalogError> {
        self.get_by_id(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn get_all(&self) -> &[InvestmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn list_investments() -> &'static [InvestmentRecord] {
    Catalog::global().get_all()
}

pub fn get_investment(id: &str) -> Option<&'static InvestmentRecord> {
    Catalog::global().get_by_id(id)
}

fn validate(records: &[InvestmentRecord]) -> Result<(), ValidationError> {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();

    for record in records {
        let id = record.get_id();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if !ids.insert(id) {
            return Err(ValidationError::DuplicateId(id.to_string()));
        }
        if !titles.insert(record.get_title()) {
            return Err(ValidationError::DuplicateTitle(record.get_title().to_string()));
        }

        let mut symbols = HashSet::new();
        for holding in record.get_holdings() {
            if holding.percentage < 0.0 {
                return Err(ValidationError::NegativeHolding {
                    id: id.to_string(),
                    symbol: holding.symbol.clone(),
                    percentage: holding.percentage,
                });
            }
            if !symbols.insert(holding.symbol.as_str()) {
                return Err(ValidationError::DuplicateSymbol {
                    id: id.to_string(),
                    symbol: holding.symbol.clone(),
                });
            }
        }

        let evolution = record.get_evolution();
        for point in evolution {
            if matches!(point.date.weekday(), Weekday::Sat | Weekday::Sun) {
                return Err(ValidationError::EvolutionOnWeekend {
                    id: id.to_string(),
                    date: point.date,
                });
            }
        }
        if let Some(pair) = evolution.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(ValidationError::EvolutionOutOfOrder {
                id: id.to_string(),
                date: pair[1].date,
            });
        }
    }
    Ok(())
}
