//! Page state for the catalog and detail screens.
//!
//! These objects only hold user choices; everything shown is derived from
//! them through the pure functions in [`crate::query`] and [`crate::chart`].

use crate::catalog::Catalog;
use crate::chart::{ChartMode, DEFAULT_BASE_VALUE};
use crate::error::ParseError;
use crate::investment::{InvestmentRecord, RiskLevel};
use crate::query::{filter_by_risk, RiskSelection};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grilla",
            ViewMode::List => "Lista",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grilla" | "grid" => Ok(ViewMode::Grid),
            "lista" | "list" => Ok(ViewMode::List),
            _ => Err(ParseError::UnknownViewMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub created: Instant,
    pub ttl: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            created: now,
            ttl: NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= self.ttl
    }
}

/// State of the catalog page: chips, layout, cursor and the confirmation modal.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    pub risk: RiskSelection,
    pub mode: ViewMode,
    pub cursor: usize,
    pending: Option<String>,
    confirmation_visible: bool,
    notice: Option<Notice>,
}

impl CatalogView {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a InvestmentRecord> {
        filter_by_risk(catalog.get_all(), &self.risk)
    }

    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a InvestmentRecord> {
        self.visible(catalog).get(self.cursor).copied()
    }

    pub fn toggle_risk(&mut self, level: RiskLevel, catalog: &Catalog) {
        self.risk.toggle(level);
        self.clamp_cursor(catalog);
    }

    pub fn show_all(&mut self, catalog: &Catalog) {
        self.risk.clear();
        self.clamp_cursor(catalog);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    fn clamp_cursor(&mut self, catalog: &Catalog) {
        let len = self.visible(catalog).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_next(&mut self, catalog: &Catalog) {
        if self.cursor + 1 < self.visible(catalog).len() {
            self.cursor += 1;
        }
    }

    pub fn move_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Opens the confirmation modal for `id`.
    pub fn request_confirmation(&mut self, id: &str) {
        self.pending = Some(id.to_string());
        self.confirmation_visible = true;
    }

    pub fn cancel_confirmation(&mut self) {
        self.pending = None;
        self.confirmation_visible = false;
    }

    /// Closes the modal and returns the confirmed investment id.
    pub fn confirm(&mut self, catalog: &Catalog, now: Instant) -> Option<String> {
        let id = self.take_confirmation()?;
        self.notify_selected(catalog, &id, now);
        Some(id)
    }

    /// Like [`CatalogView::confirm`] but leaves the notice to the caller, for
    /// selections that still have a processing step ahead.
    pub fn take_confirmation(&mut self) -> Option<String> {
        self.confirmation_visible = false;
        let id = self.pending.take()?;
        tracing::info!(investment = %id, "investment confirmed");
        Some(id)
    }

    pub fn notify_selected(&mut self, catalog: &Catalog, id: &str, now: Instant) {
        let title = catalog
            .get_by_id(id)
            .map(|record| record.get_title())
            .unwrap_or(id);
        self.post_notice(format!("Cartera {title} seleccionada"), now);
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    pub fn post_notice(&mut self, message: impl Into<String>, now: Instant) {
        self.notice = Some(Notice::new(message, now));
    }

    /// The current notice, dropping it once it has expired.
    pub fn notice(&mut self, now: Instant) -> Option<&Notice> {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
        self.notice.as_ref()
    }
}

/// State of the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub investment_id: String,
    pub chart_mode: ChartMode,
    base_value: f64,
}

impl DetailView {
    pub fn new(investment_id: &str, base_value: f64) -> Self {
        Self {
            investment_id: investment_id.to_string(),
            chart_mode: ChartMode::Performance,
            base_value,
        }
    }

    pub fn investment<'a>(&self, catalog: &'a Catalog) -> Option<&'a InvestmentRecord> {
        catalog.get_by_id(&self.investment_id)
    }

    pub fn toggle_chart_mode(&mut self) {
        self.chart_mode = self.chart_mode.toggled(self.base_value);
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new("", DEFAULT_BASE_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::global()
    }

    #[test]
    fn test_view_mode() {
        assert_eq!("lista".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_eq!("GRID".parse::<ViewMode>(), Ok(ViewMode::Grid));
        assert!("tabla".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
    }

    #[test]
    fn test_cursor_is_clamped_when_filter_shrinks() {
        let mut view = CatalogView::default();
        for _ in 0..10 {
            view.move_next(catalog());
        }
        assert_eq!(view.cursor, 5);

        view.toggle_risk(RiskLevel::Aggressive, catalog());
        assert_eq!(view.cursor, 0);
        assert_eq!(view.current(catalog()).unwrap().get_id(), "bonos");

        view.show_all(catalog());
        assert_eq!(view.visible(catalog()).len(), 6);
    }

    #[test]
    fn test_move_previous_stops_at_top() {
        let mut view = CatalogView::default();
        view.move_previous();
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_confirmation_flow() {
        let now = Instant::now();
        let mut view = CatalogView::default();
        view.request_confirmation("bonos");
        assert!(view.is_confirmation_visible());
        assert_eq!(view.pending(), Some("bonos"));

        assert_eq!(view.confirm(catalog(), now), Some("bonos".to_string()));
        assert!(!view.is_confirmation_visible());
        assert_eq!(view.pending(), None);
        assert_eq!(
            view.notice(now).map(|n| n.message.as_str()),
            Some("Cartera Bonos seleccionada")
        );
        assert!(view.notice(now + NOTICE_TTL).is_none());
    }

    #[test]
    fn test_take_confirmation_posts_no_notice() {
        let now = Instant::now();
        let mut view = CatalogView::default();
        view.request_confirmation("ahorro");
        assert_eq!(view.take_confirmation(), Some("ahorro".to_string()));
        assert!(!view.is_confirmation_visible());
        assert!(view.notice(now).is_none());

        view.notify_selected(catalog(), "ahorro", now);
        assert_eq!(
            view.notice(now).map(|n| n.message.as_str()),
            Some("Cartera Ahorro $ seleccionada")
        );
    }

    #[test]
    fn test_cancel_confirmation() {
        let mut view = CatalogView::default();
        view.request_confirmation("ahorro");
        view.cancel_confirmation();
        assert!(!view.is_confirmation_visible());
        assert_eq!(view.confirm(catalog(), Instant::now()), None);
    }

    #[test]
    fn test_detail_view_toggles_chart_mode() {
        let mut detail = DetailView::new("gestion-mix", 500.0);
        assert_eq!(detail.chart_mode, ChartMode::Performance);
        detail.toggle_chart_mode();
        assert_eq!(detail.chart_mode, ChartMode::Value { base_value: 500.0 });
        detail.toggle_chart_mode();
        assert_eq!(detail.chart_mode, ChartMode::Performance);
        assert_eq!(detail.investment(catalog()).unwrap().get_title(), "Gestión MIX VI");
    }

    #[test]
    fn test_detail_view_unknown_investment() {
        assert!(DetailView::new("nonexistent", 1.0).investment(catalog()).is_none());
    }
}
