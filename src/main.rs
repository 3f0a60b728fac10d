use std::io;
use std::time::Instant;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart as LineChart, Clear,
    Dataset as ChartSeries, GraphType, Paragraph, Row, Table,
};

use fifa26_scout::charts::{self, CategoryValue, Chart, ChartData, ChartKind, CountryCount};
use fifa26_scout::comparison::{CombinedSeries, LineStyle};
use fifa26_scout::config::DashboardConfig;
use fifa26_scout::dataset::{CURATED_COLUMNS, Column, Dataset, SCOUT_COLUMNS};
use fifa26_scout::export;
use fifa26_scout::projection::{AgingCurve, Trajectory};
use fifa26_scout::scout::{self, Comparison, ScoutView};
use fifa26_scout::state::{AppState, MultiSelect, RangeSlider, Screen, ScoutField};

const PAGE: isize = 20;

struct App {
    state: AppState,
    dataset: Dataset,
    charts: Vec<Chart>,
    curve: AgingCurve,
    config: DashboardConfig,
    should_quit: bool,
}

impl App {
    fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let charts = charts::dashboard_charts(dataset.records());
        Self {
            state: AppState::new(&dataset),
            dataset,
            charts,
            curve: AgingCurve::default(),
            config,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.help_overlay {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('?') | KeyCode::Esc => self.state.help_overlay = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = true,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(screen) = Screen::from_digit(c) {
                    self.state.screen = screen;
                }
            }
            _ => match self.state.screen {
                Screen::Raw | Screen::Curated => self.on_table_key(key),
                Screen::Charts => self.on_charts_key(key),
                Screen::Scout => self.on_scout_key(key),
                Screen::Projection => self.on_projection_key(key),
            },
        }
    }

    fn on_table_key(&mut self, key: KeyEvent) {
        let total = self.dataset.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_by(1, total),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_by(-1, total),
            KeyCode::PageDown => self.state.scroll_by(PAGE, total),
            KeyCode::PageUp => self.state.scroll_by(-PAGE, total),
            KeyCode::Char('g') | KeyCode::Home => self.state.scroll_by(isize::MIN, total),
            KeyCode::Char('G') | KeyCode::End => self.state.scroll_to_end(total),
            _ => {}
        }
    }

    fn on_charts_key(&mut self, key: KeyEvent) {
        let total = self.charts.len();
        match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
                self.state.cycle_chart_next(total)
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.state.cycle_chart_prev(total)
            }
            _ => {}
        }
    }

    fn on_scout_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.state.scout.focus = self.state.scout.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.state.scout.focus = self.state.scout.focus.prev();
                return;
            }
            KeyCode::PageDown | KeyCode::PageUp => {
                let total = self.matching_count();
                let delta = if key.code == KeyCode::PageDown { PAGE } else { -PAGE };
                self.state.scroll_by(delta, total);
                return;
            }
            KeyCode::Char('x') => {
                self.export_scout();
                return;
            }
            KeyCode::Char('r') => {
                self.state.scout.reset();
                self.state.push_log("[INFO] Scout filters reset");
            }
            _ => {
                if let Some(slider) = self.state.scout.focused_slider() {
                    on_slider_key(slider, key.code);
                } else if let Some(multi) = self.state.scout.focused_multi() {
                    on_multi_key(multi, key.code);
                }
            }
        }
        let total = self.matching_count();
        self.state.clamp_scout_scroll(total);
    }

    fn on_projection_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_prospect_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prospect_prev(),
            KeyCode::Char('J') | KeyCode::Right => self.state.select_star_next(),
            KeyCode::Char('K') | KeyCode::Left => self.state.select_star_prev(),
            _ => {}
        }
    }

    fn matching_count(&self) -> usize {
        let criteria = self.state.scout.criteria();
        self.dataset
            .records()
            .iter()
            .filter(|record| criteria.matches(record))
            .count()
    }

    fn export_scout(&mut self) {
        let input = self.state.scout_input();
        let view = match scout::evaluate(&self.dataset, &input, &self.curve) {
            Ok(view) => view,
            Err(err) => {
                self.state.push_log(format!("[WARN] Export skipped: {err}"));
                return;
            }
        };
        let path = export::default_export_path(&self.config.export_dir);
        match export::export_scout_workbook(&path, &view.matches, view.comparison.series()) {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Exported {} players and {} projection points to {}",
                report.players,
                report.projection_points,
                path.display()
            )),
            Err(err) => self.state.push_log(format!("[WARN] Export failed: {err:#}")),
        }
    }
}

fn on_slider_key(slider: &mut RangeSlider, code: KeyCode) {
    match code {
        KeyCode::Char('h') | KeyCode::Left => slider.nudge_min(-1.0),
        KeyCode::Char('l') | KeyCode::Right => slider.nudge_min(1.0),
        KeyCode::Char(',') | KeyCode::Char('<') => slider.nudge_max(-1.0),
        KeyCode::Char('.') | KeyCode::Char('>') => slider.nudge_max(1.0),
        _ => {}
    }
}

fn on_multi_key(multi: &mut MultiSelect, code: KeyCode) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => multi.cursor_next(),
        KeyCode::Char('k') | KeyCode::Up => multi.cursor_prev(),
        KeyCode::Char(' ') | KeyCode::Enter => multi.toggle_cursor(),
        KeyCode::Char('a') => multi.select_all(),
        KeyCode::Char('n') => multi.clear(),
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = DashboardConfig::from_env();
    let (dataset, load_logs) = config.load_dataset()?;
    let mut app = App::new(dataset, config);
    for line in load_logs {
        app.state.push_log(line);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = app.config.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(std::time::Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(app))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Raw => render_raw(frame, chunks[1], app),
        Screen::Curated => render_curated(frame, chunks[1], app),
        Screen::Charts => render_charts(frame, chunks[1], app),
        Screen::Scout => render_scout(frame, chunks[1], app),
        Screen::Projection => render_projection(frame, chunks[1], app),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(app.state.screen))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        let area = frame.size();
        render_help_overlay(frame, area);
    }
}

fn header_text(app: &App) -> String {
    let line1 = format!(
        "FIFA 26 SCOUT | {} | {} players | {}",
        screen_label(app.state.screen),
        app.dataset.len(),
        app.dataset.source()
    );
    let line2 = Screen::ALL
        .iter()
        .enumerate()
        .map(|(idx, screen)| {
            let marker = if *screen == app.state.screen { "*" } else { " " };
            format!("{marker}{} {}", idx + 1, screen_label(*screen))
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{line1}\n{line2}")
}

fn footer_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Raw | Screen::Curated => {
            "1-5 Screens | j/k/↑/↓ Scroll | PgUp/PgDn Page | g/G Top/Bottom | ? Help | q Quit"
        }
        Screen::Charts => "1-5 Screens | h/l/←/→ Chart | ? Help | q Quit",
        Screen::Scout => {
            "Tab Field | ←/→ Min | ,/. Max | Space Toggle | a/n All/None | r Reset | x Export | q Quit"
        }
        Screen::Projection => "1-5 Screens | j/k Prospect | J/K Star | ? Help | q Quit",
    }
}

fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Raw => "RAW",
        Screen::Curated => "CURATED",
        Screen::Charts => "CHARTS",
        Screen::Scout => "SCOUT",
        Screen::Projection => "PROJECTION",
    }
}

fn column_width(column: Column) -> u16 {
    match column {
        Column::Url => 30,
        Column::Name | Column::Club => 20,
        Column::League => 18,
        Column::Nationality => 14,
        Column::Positions => 12,
        Column::ValueEur | Column::WageEur => 12,
        Column::ClubPosition => 9,
        Column::HeightCm | Column::WeightKg => 7,
        Column::Overall | Column::Potential | Column::Age => 4,
    }
}

/// Rows `[start, end)` that fit in `height` below the borders and header row.
fn table_window(scroll: usize, total: usize, height: u16) -> (usize, usize) {
    let visible = height.saturating_sub(3) as usize;
    let start = scroll.min(total.saturating_sub(1));
    let end = (start + visible).min(total);
    (start, end)
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<Constraint>,
) {
    let header = Row::new(headers).style(Style::default().add_modifier(Modifier::BOLD));
    let table = Table::new(rows.into_iter().map(Row::new), widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn render_raw(frame: &mut Frame, area: Rect, app: &App) {
    let raw = app.dataset.raw();
    let total = raw.rows.len();
    let (start, end) = table_window(app.state.raw_scroll, total, area.height);

    const RAW_WIDTH: u16 = 14;
    let shown = ((area.width.saturating_sub(2) / (RAW_WIDTH + 1)) as usize)
        .clamp(1, raw.headers.len().max(1));
    let headers = raw.headers.iter().take(shown).cloned().collect();
    let rows = raw.rows[start..end]
        .iter()
        .map(|row| row.iter().take(shown).cloned().collect())
        .collect();
    let title = format!(
        "Raw data | rows {}-{} of {total} | {shown}/{} columns",
        (start + 1).min(total),
        end,
        raw.headers.len()
    );
    let widths = vec![Constraint::Length(RAW_WIDTH); shown];
    render_table(frame, area, title, headers, rows, widths);
}

fn render_curated(frame: &mut Frame, area: Rect, app: &App) {
    let records = app.dataset.records();
    let total = records.len();
    let (start, end) = table_window(app.state.curated_scroll, total, area.height);
    let rows = records[start..end]
        .iter()
        .map(|record| CURATED_COLUMNS.iter().map(|c| record.cell(*c)).collect())
        .collect();
    let title = format!("Curated data | rows {}-{} of {total}", (start + 1).min(total), end);
    render_table(
        frame,
        area,
        title,
        column_labels(CURATED_COLUMNS),
        rows,
        column_widths(CURATED_COLUMNS),
    );
}

fn column_labels(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.label().to_string()).collect()
}

fn column_widths(columns: &[Column]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|c| Constraint::Length(column_width(*c)))
        .collect()
}

fn render_charts(frame: &mut Frame, area: Rect, app: &App) {
    let Some(chart) = app.charts.get(app.state.chart_selected) else {
        let empty = Paragraph::new("No charts").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    };
    let title = format!(
        "{} ({}/{})",
        chart.spec.title,
        app.state.chart_selected + 1,
        app.charts.len()
    );
    render_chart(frame, area, chart, title);
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &Chart, title: String) {
    let block = Block::default().title(title).borders(Borders::ALL);
    match &chart.data {
        ChartData::Categories(values) => {
            let horizontal = chart.spec.kind == ChartKind::HorizontalBar;
            let bars = category_bars(values);
            render_bars(frame, area, block, &bars, horizontal);
        }
        ChartData::Histogram(bins) => {
            let values: Vec<CategoryValue> = bins
                .iter()
                .map(|bin| CategoryValue {
                    label: bin.lo.to_string(),
                    value: bin.count as f64,
                })
                .collect();
            let bars = category_bars(&values);
            render_bars(frame, area, block, &bars, false);
        }
        ChartData::Points(points) => {
            let data: Vec<(f64, f64)> = points.iter().map(|p| (p[0], p[1])).collect();
            render_scatter(frame, area, block, chart, &data);
        }
        ChartData::Countries(countries) => render_countries(frame, area, block, countries),
        ChartData::Series(series) => render_series_chart(frame, area, block, series),
    }
}

fn category_bars(values: &[CategoryValue]) -> Vec<Bar<'static>> {
    values
        .iter()
        .map(|v| {
            Bar::default()
                .value(v.value.round().max(0.0) as u64)
                .label(Line::from(v.label.clone()))
                .text_value(format!("{:.0}", v.value))
        })
        .collect()
}

fn render_bars(frame: &mut Frame, area: Rect, block: Block, bars: &[Bar], horizontal: bool) {
    if bars.is_empty() {
        frame.render_widget(Paragraph::new("No data").block(block), area);
        return;
    }
    let chart = if horizontal {
        BarChart::default()
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
    } else {
        let inner = area.width.saturating_sub(2) as usize;
        let width = (inner / bars.len()).saturating_sub(1).clamp(1, 6) as u16;
        BarChart::default().bar_width(width).bar_gap(1)
    };
    let chart = chart
        .block(block)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(BarGroup::default().bars(bars));
    frame.render_widget(chart, area);
}

fn render_scatter(frame: &mut Frame, area: Rect, block: Block, chart: &Chart, data: &[(f64, f64)]) {
    let Some((x_lo, x_hi, y_lo, y_hi)) = bounds(data) else {
        frame.render_widget(Paragraph::new("No data").block(block), area);
        return;
    };
    let series = ChartSeries::default()
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Cyan))
        .data(data);
    let widget = LineChart::new(vec![series])
        .block(block)
        .x_axis(axis(&chart.spec.x_label, x_lo, x_hi))
        .y_axis(axis(&chart.spec.y_label, y_lo, y_hi));
    frame.render_widget(widget, area);
}

fn render_countries(frame: &mut Frame, area: Rect, block: Block, countries: &[CountryCount]) {
    let visible = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = countries
        .iter()
        .take(visible)
        .enumerate()
        .map(|(idx, c)| {
            Row::new(vec![
                format!("{}", idx + 1),
                c.country.clone(),
                c.player_count.to_string(),
            ])
        })
        .collect();
    let header = Row::new(vec!["#", "Country", "Players"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(24),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}

fn render_series_chart(frame: &mut Frame, area: Rect, block: Block, series: &CombinedSeries) {
    let (Some((age_lo, age_hi)), Some((r_lo, r_hi))) =
        (series.age_bounds(), series.rating_bounds())
    else {
        frame.render_widget(Paragraph::new("No projection").block(block), area);
        return;
    };

    let data: Vec<Vec<(f64, f64)>> = series
        .styles
        .iter()
        .map(|style| series.series_points(style))
        .collect();
    let datasets: Vec<ChartSeries> = series
        .styles
        .iter()
        .zip(&data)
        .map(|(style, points)| {
            // Terminal cells have no dash pattern; the sparser dot marker stands in.
            let (marker, color) = match style.line {
                LineStyle::Solid => (Marker::Braille, Color::Green),
                LineStyle::Dashed => (Marker::Dot, Color::Yellow),
            };
            ChartSeries::default()
                .name(format!("{} ({})", style.series, style.role))
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points)
        })
        .collect();

    let widget = LineChart::new(datasets)
        .block(block)
        .x_axis(axis("Age", f64::from(age_lo), f64::from(age_hi)))
        .y_axis(axis(
            "Projected overall",
            r_lo.floor() - 2.0,
            r_hi.ceil() + 2.0,
        ));
    frame.render_widget(widget, area);
}

fn axis(title: &str, lo: f64, hi: f64) -> Axis<'static> {
    let hi = if hi > lo { hi } else { lo + 1.0 };
    let mid = (lo + hi) / 2.0;
    Axis::default()
        .title(title.to_string())
        .style(Style::default().fg(Color::Gray))
        .bounds([lo, hi])
        .labels(vec![
            Span::raw(format_axis(lo)),
            Span::raw(format_axis(mid)),
            Span::raw(format_axis(hi)),
        ])
}

fn format_axis(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.0}M", value / 1_000_000.0)
    } else if value.abs() >= 10_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

fn bounds(data: &[(f64, f64)]) -> Option<(f64, f64, f64, f64)> {
    let (first, rest) = data.split_first()?;
    Some(rest.iter().fold(
        (first.0, first.0, first.1, first.1),
        |(x_lo, x_hi, y_lo, y_hi), (x, y)| (x_lo.min(*x), x_hi.max(*x), y_lo.min(*y), y_hi.max(*y)),
    ))
}

fn render_scout(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(area);

    let controls = Paragraph::new(scout_controls_text(&app.state))
        .block(Block::default().title("Filters").borders(Borders::ALL));
    frame.render_widget(controls, columns[0]);

    let input = app.state.scout_input();
    let view = match scout::evaluate(&app.dataset, &input, &app.curve) {
        Ok(view) => view,
        Err(err) => {
            let msg = Paragraph::new(format!("Scout failed: {err}"))
                .style(Style::default().fg(Color::Red))
                .block(Block::default().title("Players found").borders(Borders::ALL));
            frame.render_widget(msg, columns[1]);
            return;
        }
    };

    let total = view.matches.len();
    if total == 0 {
        let empty = Paragraph::new("No players match these filters")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title("Players found: 0").borders(Borders::ALL));
        frame.render_widget(empty, columns[1]);
        return;
    }

    let (start, end) = table_window(app.state.scout_scroll, total, columns[1].height);
    let rows = view.matches[start..end]
        .iter()
        .map(|record| SCOUT_COLUMNS.iter().map(|c| record.cell(*c)).collect())
        .collect();
    let title = format!(
        "Players found: {total} | rows {}-{end}",
        (start + 1).min(total)
    );
    render_table(
        frame,
        columns[1],
        title,
        column_labels(SCOUT_COLUMNS),
        rows,
        column_widths(SCOUT_COLUMNS),
    );
}

fn scout_controls_text(state: &AppState) -> String {
    let scout = &state.scout;
    let marker = |field: ScoutField| if scout.focus == field { "> " } else { "  " };
    let mut lines = vec![
        slider_line(marker(ScoutField::Age), "Age", &scout.age),
        slider_line(marker(ScoutField::Overall), "Overall", &scout.overall),
        slider_line(marker(ScoutField::Potential), "Potential", &scout.potential),
        multi_line(marker(ScoutField::Positions), "Positions", &scout.positions),
        multi_line(marker(ScoutField::Leagues), "Leagues", &scout.leagues),
        String::new(),
    ];

    let focused = match scout.focus {
        ScoutField::Positions => Some(&scout.positions),
        ScoutField::Leagues => Some(&scout.leagues),
        _ => None,
    };
    if let Some(multi) = focused {
        const VISIBLE: usize = 10;
        let (start, end) = visible_range(multi.cursor, multi.options.len(), VISIBLE);
        for idx in start..end {
            let cursor = if idx == multi.cursor { ">" } else { " " };
            let check = if multi.selected[idx] { "[x]" } else { "[ ]" };
            let label = if multi.options[idx].is_empty() {
                "(none)"
            } else {
                multi.options[idx].as_str()
            };
            lines.push(format!("{cursor} {check} {label}"));
        }
    }
    lines.join("\n")
}

fn slider_line(marker: &str, label: &str, slider: &RangeSlider) -> String {
    format!(
        "{marker}{label:<10} {:>3.0} - {:<3.0} ({:.0}..{:.0})",
        slider.value.min, slider.value.max, slider.lo, slider.hi
    )
}

fn multi_line(marker: &str, label: &str, multi: &MultiSelect) -> String {
    format!(
        "{marker}{label:<10} {}/{} selected",
        multi.selected_count(),
        multi.options.len()
    )
}

fn render_projection(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(area);
    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(columns[1]);

    render_name_list(
        frame,
        lists[0],
        "Prospects (j/k)",
        &app.state.prospect_names,
        app.state.prospect_selected,
    );
    render_name_list(
        frame,
        lists[1],
        "Stars (J/K)",
        &app.state.star_names,
        app.state.star_selected,
    );

    let input = app.state.scout_input();
    match scout::evaluate(&app.dataset, &input, &app.curve) {
        Ok(ScoutView {
            comparison:
                Comparison::Ready {
                    prospect,
                    star,
                    series,
                },
            ..
        }) => {
            let chart = charts::comparison_chart(series);
            render_chart(frame, right[0], &chart, chart.spec.title.clone());
            let summary = Paragraph::new(format!(
                "{}\n{}",
                trajectory_summary(&prospect),
                trajectory_summary(&star)
            ))
            .block(Block::default().title("Summary").borders(Borders::ALL));
            frame.render_widget(summary, right[1]);
        }
        Ok(ScoutView {
            comparison: Comparison::NoCandidates { prospects, stars },
            ..
        }) => {
            let mut missing = Vec::new();
            if prospects {
                missing.push("prospects");
            }
            if stars {
                missing.push("stars");
            }
            let msg = Paragraph::new(format!(
                "No candidates available ({})",
                missing.join(", ")
            ))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title("Projection").borders(Borders::ALL));
            frame.render_widget(msg, columns[1]);
        }
        Err(err) => {
            let msg = Paragraph::new(format!("Projection failed: {err}"))
                .style(Style::default().fg(Color::Red))
                .block(Block::default().title("Projection").borders(Borders::ALL));
            frame.render_widget(msg, columns[1]);
        }
    }
}

fn trajectory_summary(trajectory: &Trajectory) -> String {
    let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) else {
        return format!("{}: no points", trajectory.player);
    };
    let peak = trajectory
        .points
        .iter()
        .fold(first, |best, p| if p.rating > best.rating { p } else { best });
    format!(
        "{} ({}): {:.0} at {} -> peak {:.1} at {} -> {:.1} at {}",
        trajectory.player,
        trajectory.role,
        first.rating,
        first.age,
        peak.rating,
        peak.age,
        last.rating,
        last.age
    )
}

fn render_name_list(frame: &mut Frame, area: Rect, title: &str, names: &[String], selected: usize) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if names.is_empty() {
        let empty = Paragraph::new("No candidates")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }
    let visible = area.height.saturating_sub(2) as usize;
    let (start, end) = visible_range(selected, names.len(), visible);
    let lines: Vec<Line> = (start..end)
        .map(|idx| {
            if idx == selected {
                Line::styled(
                    format!("> {}", names[idx]),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                )
            } else {
                Line::raw(format!("  {}", names[idx]))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "FIFA 26 Scout - Help",
        "",
        "Global:",
        "  1-5          Raw / Curated / Charts / Scout / Projection",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Tables:",
        "  j/k or ↑/↓   Scroll",
        "  PgUp/PgDn    Page",
        "  g/G          Top / bottom",
        "",
        "Scout:",
        "  Tab/S-Tab    Focus next/previous filter",
        "  ←/→  h/l     Move range minimum",
        "  ,/.  </>     Move range maximum",
        "  Space        Toggle option under cursor",
        "  a / n        Select all / none",
        "  r            Reset filters",
        "  x            Export to xlsx",
        "",
        "Projection:",
        "  j/k          Pick prospect",
        "  J/K          Pick star",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
