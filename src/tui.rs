use crate::catalog::Catalog;
use crate::chart::{date_label, polarity_runs, to_chart_series, ChartMode, ChartPoint};
use crate::investment::{InvestmentRecord, PerformanceSnapshot, RiskLevel, Tone};
use crate::query::{sorted_holdings, top_holdings};
use crate::render::{format_ars, format_percent};
use crate::view::{CatalogView, DetailView, ViewMode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row,
        Table, Wrap,
    },
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tui_big_text::{BigText, PixelSize};

/// Simulated processing time between confirming and returning to the catalog.
const CONFIRM_DELAY: Duration = Duration::from_millis(800);

const CARD_HEIGHT: u16 = 11;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Catalog,
    Detail,
}

/// Settings the TUI takes from the config file.
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    pub view_mode: ViewMode,
    pub card_holdings: usize,
    pub detail_holdings: usize,
    pub base_value: f64,
}

pub struct App {
    pub screen: Screen,
    pub catalog: Catalog,
    pub catalog_view: CatalogView,
    pub detail: Option<DetailView>,
    pub should_quit: bool,
    pub processing: Option<String>,
    pub options: TuiOptions,
    pub flash_state: bool,
    pub last_tick: Instant,
    confirm_sender: mpsc::UnboundedSender<String>,
    confirm_receiver: mpsc::UnboundedReceiver<String>,
}

impl App {
    pub fn new(catalog: Catalog, options: TuiOptions) -> App {
        let (confirm_sender, confirm_receiver) = mpsc::unbounded_channel();
        App {
            screen: Screen::Catalog,
            catalog,
            catalog_view: CatalogView::new(options.view_mode),
            detail: None,
            should_quit: false,
            processing: None,
            options,
            flash_state: false,
            last_tick: Instant::now(),
            confirm_sender,
            confirm_receiver,
        }
    }

    pub fn open_detail(&mut self) {
        if let Some(record) = self.catalog_view.current(&self.catalog) {
            self.detail = Some(DetailView::new(record.get_id(), self.options.base_value));
            self.screen = Screen::Detail;
        }
    }

    pub fn back_to_catalog(&mut self) {
        self.screen = Screen::Catalog;
        self.detail = None;
    }

    /// The investment the user is looking at, on either screen.
    fn focused_id(&self) -> Option<String> {
        match self.screen {
            Screen::Catalog => self
                .catalog_view
                .current(&self.catalog)
                .map(|record| record.get_id().to_string()),
            Screen::Detail => self.detail.as_ref().map(|d| d.investment_id.clone()),
        }
    }

    pub fn request_confirmation(&mut self) {
        if self.processing.is_some() {
            return;
        }
        if let Some(id) = self.focused_id() {
            self.catalog_view.request_confirmation(&id);
        }
    }

    /// Confirms the pending selection and hands it to a background task.
    pub fn confirm(&mut self) {
        let Some(id) = self.catalog_view.take_confirmation() else {
            return;
        };
        self.processing = Some(id.clone());
        let sender = self.confirm_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(CONFIRM_DELAY).await;
            // receiver gone means the app already quit
            let _ = sender.send(id);
        });
    }

    /// Picks up a finished confirmation, if any. Never blocks.
    pub fn try_receive_confirmation(&mut self) -> bool {
        let Ok(id) = self.confirm_receiver.try_recv() else {
            return false;
        };
        self.processing = None;
        self.catalog_view
            .notify_selected(&self.catalog, &id, Instant::now());
        self.back_to_catalog();
        true
    }

    pub fn tick(&mut self) {
        if self.last_tick.elapsed() >= Duration::from_millis(500) {
            self.flash_state = !self.flash_state;
            self.last_tick = Instant::now();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.catalog_view.is_confirmation_visible() {
            match code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('s') => self.confirm(),
                KeyCode::Esc | KeyCode::Char('n') => self.catalog_view.cancel_confirmation(),
                _ => {}
            }
            return;
        }

        match self.screen {
            Screen::Catalog => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('0') | KeyCode::Char('t') => {
                    self.catalog_view.show_all(&self.catalog)
                }
                KeyCode::Char('1') => self
                    .catalog_view
                    .toggle_risk(RiskLevel::Conservative, &self.catalog),
                KeyCode::Char('2') => self
                    .catalog_view
                    .toggle_risk(RiskLevel::Moderate, &self.catalog),
                KeyCode::Char('3') => self
                    .catalog_view
                    .toggle_risk(RiskLevel::Aggressive, &self.catalog),
                KeyCode::Char('v') => self.catalog_view.toggle_mode(),
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
                    self.catalog_view.move_next(&self.catalog)
                }
                KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
                    self.catalog_view.move_previous()
                }
                KeyCode::Enter | KeyCode::Char('d') => self.open_detail(),
                KeyCode::Char('s') => self.request_confirmation(),
                _ => {}
            },
            Screen::Detail => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => self.back_to_catalog(),
                KeyCode::Char('m') => {
                    if let Some(detail) = &mut self.detail {
                        detail.toggle_chart_mode();
                    }
                }
                KeyCode::Char('s') => self.request_confirmation(),
                _ => {}
            },
        }
    }
}

pub async fn run_tui(catalog: Catalog, options: TuiOptions) -> eyre::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, options);
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        app.try_receive_confirmation();
        app.tick();

        if crossterm::event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Error => Color::Red,
    }
}

fn performance_span(snapshot: &PerformanceSnapshot) -> Span<'static> {
    if snapshot.is_negative {
        Span::styled(
            format!("▼ {}", snapshot.percentage),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::styled(
            format!("▲ {}", snapshot.percentage),
            Style::default().fg(Color::Green),
        )
    }
}

fn cards_per_row(width: u16) -> usize {
    match width {
        0..=79 => 1,
        80..=119 => 2,
        _ => 3,
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    match app.screen {
        Screen::Catalog => render_catalog(f, chunks[1], app),
        Screen::Detail => render_detail(f, chunks[1], app),
    }

    render_footer(f, chunks[2], app);

    if app.catalog_view.is_confirmation_visible() {
        render_confirmation(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Carteras de inversión")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(50)])
        .split(inner);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .lines(vec!["Carteras".into()])
        .build();
    f.render_widget(big_text, halves[0]);

    let risk = &app.catalog_view.risk;
    let chip = |label: &'static str, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" {label} "), style)
    };

    let mut chips = vec![Span::raw("Riesgo "), chip("0 Todos", risk.is_all())];
    for (label, level) in ["1 Conservador", "2 Moderado", "3 Agresivo"]
        .into_iter()
        .zip(RiskLevel::all())
    {
        chips.push(Span::raw(" "));
        chips.push(chip(label, risk.is_chip_active(level)));
    }

    let mode = app.catalog_view.mode;
    let controls = Paragraph::new(vec![
        Line::from(chips),
        Line::from(vec![
            Span::raw("Vista "),
            chip("Grilla", mode == ViewMode::Grid),
            Span::raw(" "),
            chip("Lista", mode == ViewMode::List),
        ]),
    ])
    .wrap(Wrap { trim: false });
    f.render_widget(controls, halves[1]);
}

fn render_footer(f: &mut Frame, area: Rect, app: &mut App) {
    let help = match app.screen {
        Screen::Catalog => {
            "0-3 (riesgo) | v (vista) | j/k (mover) | Enter (detalle) | s (seleccionar) | q (salir)"
        }
        Screen::Detail => "m (performance/valor) | s (confirmar) | Esc (volver) | q (salir)",
    };

    let (text, style) = if let Some(id) = &app.processing {
        let spinner = if app.flash_state { "◐" } else { "◑" };
        (
            format!("{spinner} Procesando selección de {id}..."),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(notice) = app.catalog_view.notice(Instant::now()) {
        (
            format!("✔ {}", notice.message),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (help.to_string(), Style::default().fg(Color::Gray))
    };

    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Ayuda"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn render_catalog(f: &mut Frame, area: Rect, app: &App) {
    let visible = app.catalog_view.visible(&app.catalog);
    if visible.is_empty() {
        let placeholder = Paragraph::new("No hay carteras para este filtro")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    }

    match app.catalog_view.mode {
        ViewMode::Grid => render_cards(f, area, app, &visible),
        ViewMode::List => render_list(f, area, app, &visible),
    }
}

fn render_cards(f: &mut Frame, area: Rect, app: &App, visible: &[&InvestmentRecord]) {
    let per_row = cards_per_row(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let cursor_row = app.catalog_view.cursor / per_row;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let rows: Vec<&[&InvestmentRecord]> = visible
        .chunks(per_row)
        .skip(first_row)
        .take(visible_rows)
        .collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows.len()])
        .split(area);

    for (row_index, (records, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);

        for (col, record) in records.iter().enumerate() {
            let index = (first_row + row_index) * per_row + col;
            let selected = index == app.catalog_view.cursor;
            render_card(f, card_areas[col], record, selected, app.options.card_holdings);
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    record: &InvestmentRecord,
    selected: bool,
    holdings: usize,
) {
    let level = record.get_risk_level();
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            level.label(),
            Style::default().fg(tone_color(level.tone())),
        )),
        Line::from(Span::styled(
            record.get_description().to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let mut figures = Vec::new();
    for snapshot in record.get_performance() {
        figures.push(Span::raw(format!("{} ", snapshot.period)));
        figures.push(performance_span(snapshot));
        figures.push(Span::raw("  "));
    }
    lines.push(Line::from(figures));

    let top = top_holdings(record.get_holdings(), holdings);
    if !top.is_empty() {
        lines.push(Line::from(Span::styled(
            "Principales participaciones",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for slice in top {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<8}", slice.label), Style::default().fg(Color::Blue)),
                Span::styled(
                    format_percent(slice.percentage, 1),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }
    }

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(
                    format!(" {} ", record.get_title()),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App, visible: &[&InvestmentRecord]) {
    let header_cells = ["Cartera", "Riesgo", "Descripción", "Rendimientos"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = visible.iter().enumerate().map(|(i, record)| {
        let level = record.get_risk_level();
        let row_style = if i == app.catalog_view.cursor {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut figures = Vec::new();
        for snapshot in record.get_performance() {
            figures.push(Span::raw(format!("{} ", snapshot.period)));
            figures.push(performance_span(snapshot));
            figures.push(Span::raw(" "));
        }

        Row::new(vec![
            Cell::from(record.get_title().to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(level.label()).style(Style::default().fg(tone_color(level.tone()))),
            Cell::from(record.get_description().to_string()),
            Cell::from(Line::from(figures)),
        ])
        .height(1)
        .style(row_style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(12),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Carteras"))
    .style(Style::default().fg(Color::White));

    f.render_widget(table, area);
}

fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(detail) = &app.detail else {
        return;
    };
    let Some(record) = detail.investment(&app.catalog) else {
        let not_found = Paragraph::new("Inversión no encontrada\n\nEsc: Volver al inicio")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(not_found, area);
        return;
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(12),
        ])
        .split(area);

    let level = record.get_risk_level();
    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                record.get_title().to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                level.label(),
                Style::default().fg(tone_color(level.tone())),
            ),
        ]),
        Line::from(record.get_description().to_string()),
    ])
    .block(Block::default().borders(Borders::ALL).title("Detalle"));
    f.render_widget(title, main_chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);
    render_summary(f, middle[0], record);
    render_evolution(f, middle[1], record, detail.chart_mode);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[2]);
    render_holdings_table(f, bottom[0], record);
    render_holdings_chart(f, bottom[1], record, app.options.detail_holdings);
}

fn render_summary(f: &mut Frame, area: Rect, record: &InvestmentRecord) {
    let terms = record.get_terms();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Perfil de Riesgo", bold)),
        Line::from(record.get_risk_level().profile()),
        Line::from(""),
        Line::from(Span::styled("Rendimientos Históricos", bold)),
    ];
    for snapshot in record.get_performance() {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<10}", snapshot.period)),
            performance_span(snapshot),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Detalles de la Inversión", bold)));
    lines.push(Line::from(format!("Monto Mínimo: {}", terms.min_amount)));
    lines.push(Line::from(format!("Comisiones:   {}", terms.fees)));
    lines.push(Line::from(format!("Horizonte:    {}", record.get_horizon())));
    lines.push(Line::from(""));
    lines.push(Line::from(record.get_description_extended().to_string()));

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Resumen"))
        .wrap(Wrap { trim: true });
    f.render_widget(summary, area);
}

fn axis_labels(points: &[ChartPoint]) -> Vec<Line<'static>> {
    let labelled: Vec<&ChartPoint> = points.iter().filter(|p| !p.is_zero_crossing()).collect();
    match (labelled.first(), labelled.get(labelled.len() / 2), labelled.last()) {
        (Some(first), Some(middle), Some(last)) => vec![
            Line::from(first.label.clone()),
            Line::from(middle.label.clone()),
            Line::from(last.label.clone()),
        ],
        _ => Vec::new(),
    }
}

fn render_evolution(f: &mut Frame, area: Rect, record: &InvestmentRecord, mode: ChartMode) {
    let points = to_chart_series(record.get_evolution(), mode);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Evolución · {}", mode.title()));

    if points.is_empty() {
        let empty = Paragraph::new("Sin datos de evolución")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let (min, max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let pad = ((max - min) * 0.05).max(0.01);
    let (lo, hi) = (min - pad, max + pad);

    let series: Vec<(bool, Vec<(f64, f64)>)> = match mode {
        ChartMode::Performance => polarity_runs(&points)
            .into_iter()
            .map(|run| (run.positive, run.points))
            .collect(),
        ChartMode::Value { .. } => vec![(true, points.iter().map(|p| (p.x as f64, p.y)).collect())],
    };

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(positive, data)| {
            let color = match mode {
                ChartMode::Value { .. } => Color::Blue,
                ChartMode::Performance if *positive => Color::Green,
                ChartMode::Performance => Color::Red,
            };
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let y_labels = match mode {
        ChartMode::Performance => vec![
            Line::from(format_percent(lo, 1)),
            Line::from(format_percent((lo + hi) / 2.0, 1)),
            Line::from(format_percent(hi, 1)),
        ],
        ChartMode::Value { .. } => vec![
            Line::from(format_ars(lo)),
            Line::from(format_ars((lo + hi) / 2.0)),
            Line::from(format_ars(hi)),
        ],
    };

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, (points.len().saturating_sub(1)) as f64])
                .labels(axis_labels(&points)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([lo, hi])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn render_holdings_table(f: &mut Frame, area: Rect, record: &InvestmentRecord) {
    let header = Row::new(["Símbolo", "Empresa", "Participación"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows = sorted_holdings(record.get_holdings()).into_iter().map(|holding| {
        Row::new(vec![
            Cell::from(holding.symbol.clone()).style(Style::default().fg(Color::Blue)),
            Cell::from(holding.name.clone()),
            Cell::from(format_percent(holding.percentage, 1)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(55),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Composición de la Cartera"),
    );
    f.render_widget(table, area);
}

fn render_holdings_chart(f: &mut Frame, area: Rect, record: &InvestmentRecord, n: usize) {
    let slices = top_holdings(record.get_holdings(), n);
    let data: Vec<(&str, u64)> = slices
        .iter()
        .map(|slice| (slice.label.as_str(), slice.percentage.round() as u64))
        .collect();

    let barchart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Principales (%)"))
        .data(&data)
        .bar_width(6)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));
    f.render_widget(barchart, area);
}

fn render_confirmation(f: &mut Frame, app: &App) {
    let popup_area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, popup_area);

    let record = app
        .catalog_view
        .pending()
        .and_then(|id| app.catalog.get_by_id(id));

    let mut lines = vec![
        Line::from(Span::styled(
            "Confirmar Selección",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("¿Estás seguro de que deseas seleccionar la siguiente cartera de inversión?"),
        Line::from(""),
    ];
    if let Some(record) = record {
        let level = record.get_risk_level();
        lines.push(Line::from(vec![
            Span::styled(
                record.get_title().to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(level.label(), Style::default().fg(tone_color(level.tone()))),
        ]));
        lines.push(Line::from(record.get_description().to_string()));
        if let Some(last) = record.get_evolution().last() {
            lines.push(Line::from(format!(
                "Evolución al {}: {}",
                date_label(last.date),
                format_percent(last.percentage, 2)
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Confirmar | Esc: Cancelar",
        Style::default().fg(Color::Cyan),
    )));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(popup, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
