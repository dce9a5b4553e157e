use lotwatch_core::{
    format_axis_amount, format_currency, CanvasId, ChartKind, ChartSpec, NoticeKind, PanelContent,
    Role, SeriesColor,
};
use ratatui::{
    prelude::*,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, Gauge,
        GraphType, Paragraph, Wrap,
    },
};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    success: Color,
    danger: Color,
    warning: Color,
    muted: Color,
    text: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    success: Color::Green,
    danger: Color::Red,
    warning: Color::Yellow,
    muted: Color::DarkGray,
    text: Color::White,
};

fn color_of(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Primary => THEME.primary,
        SeriesColor::Success => THEME.success,
        SeriesColor::Danger => THEME.danger,
        SeriesColor::Warning => THEME.warning,
    }
}

fn canvas_title(canvas: CanvasId) -> &'static str {
    match canvas {
        CanvasId::Overview => "Parking Status",
        CanvasId::Lots => "Lot Occupancy",
        CanvasId::Booking => "Your Bookings",
        CanvasId::Spending => "Monthly Spending",
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Summary bar
            Constraint::Min(10),   // Charts
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_summary(f, app, main_chunks[1]);

    // Both layouts show two charts side by side.
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);
    let canvases = CanvasId::for_role(app.controller.role());
    for (&canvas, &area) in canvases.iter().zip(content_chunks.iter()) {
        draw_panel(f, app, canvas, area);
    }

    draw_footer(f, app, main_chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let role = match app.controller.role() {
        Role::Admin => "admin",
        Role::User => "user",
    };
    let title = Line::from(vec![
        Span::styled(
            "LOTWATCH",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {role} dashboard"), Style::default().fg(THEME.muted)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let spans = match (&app.overview, app.controller.role()) {
        (Some(o), Role::Admin) => vec![
            Span::styled("Lots: ", Style::default().fg(THEME.muted)),
            Span::styled(o.total_lots.to_string(), Style::default().fg(THEME.text)),
            Span::raw("   "),
            Span::styled("Spots: ", Style::default().fg(THEME.muted)),
            Span::styled(o.total_spots.to_string(), Style::default().fg(THEME.text)),
            Span::raw("   "),
            Span::styled("Users: ", Style::default().fg(THEME.muted)),
            Span::styled(o.total_users.to_string(), Style::default().fg(THEME.text)),
            Span::raw("   "),
            Span::styled("Active: ", Style::default().fg(THEME.muted)),
            Span::styled(
                o.active_reservations.to_string(),
                Style::default().fg(THEME.warning),
            ),
        ],
        (Some(o), Role::User) => vec![
            Span::styled("Bookings: ", Style::default().fg(THEME.muted)),
            Span::styled(o.total_reservations.to_string(), Style::default().fg(THEME.text)),
            Span::raw("   "),
            Span::styled("Active: ", Style::default().fg(THEME.muted)),
            Span::styled(
                o.active_reservations.to_string(),
                Style::default().fg(THEME.warning),
            ),
            Span::raw("   "),
            Span::styled("Completed: ", Style::default().fg(THEME.muted)),
            Span::styled(
                o.completed_reservations.to_string(),
                Style::default().fg(THEME.success),
            ),
            Span::raw("   "),
            Span::styled("Spent: ", Style::default().fg(THEME.muted)),
            Span::styled(format_currency(o.total_spent), Style::default().fg(THEME.text)),
        ],
        (None, _) => vec![Span::styled("Waiting for data...", Style::default().fg(THEME.muted))],
    };

    let summary = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        );
    f.render_widget(summary, area);
}

fn draw_panel(f: &mut Frame, app: &App, canvas: CanvasId, area: Rect) {
    match app.binder.content(canvas) {
        None => draw_notice(f, canvas_title(canvas), "Loading charts...", THEME.muted, area),
        Some(PanelContent::Notice { kind, message }) => {
            let color = match kind {
                NoticeKind::Info => THEME.primary,
                NoticeKind::Warning => THEME.warning,
            };
            draw_notice(f, canvas_title(canvas), message, color, area);
        }
        Some(PanelContent::Chart(spec)) => match spec.kind {
            ChartKind::Pie | ChartKind::Donut => draw_proportion_chart(f, spec, area),
            ChartKind::Bar => draw_bar_chart(f, spec, area),
            ChartKind::Line => draw_line_chart(f, spec, area),
        },
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
}

fn draw_notice(f: &mut Frame, title: &str, message: &str, color: Color, area: Rect) {
    let notice = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block(title));
    f.render_widget(notice, area);
}

/// Pie and donut charts both become a gauge showing the first slice's share,
/// with the per-slice breakdown as a legend underneath.
fn draw_proportion_chart(f: &mut Frame, spec: &ChartSpec, area: Rect) {
    let block = panel_block(&spec.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let total: f64 = spec.series.iter().map(|s| s.values.iter().sum::<f64>()).sum();
    let first: f64 = spec.series.first().map_or(0.0, |s| s.values.iter().sum());
    let ratio = if total > 0.0 { first / total } else { 0.0 };

    let gauge_color = spec.series.first().map_or(THEME.primary, |s| color_of(s.color));
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{:.1}%", ratio * 100.0));
    f.render_widget(gauge, chunks[0]);

    let legend: Vec<Line> = spec
        .series
        .iter()
        .zip(&spec.detail)
        .map(|(series, detail)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color_of(series.color))),
                Span::styled(detail.as_str(), Style::default().fg(THEME.text)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}

fn draw_bar_chart(f: &mut Frame, spec: &ChartSpec, area: Rect) {
    let mut bars: Vec<Bar> = Vec::new();
    for (i, label) in spec.labels.iter().enumerate() {
        for (s, series) in spec.series.iter().enumerate() {
            let value = series.values.get(i).copied().unwrap_or(0.0) as u64;
            // Category label under the first bar of each group.
            let bar_label = if s == 0 { label.as_str() } else { "" };
            bars.push(
                Bar::default()
                    .label(bar_label)
                    .value(value)
                    .style(Style::default().fg(color_of(series.color)))
                    .text_value(value.to_string()),
            );
        }
        bars.push(Bar::default().value(0)); // Spacer
    }

    let legend = spec
        .series
        .iter()
        .map(|s| format!("■ {}", s.name))
        .collect::<Vec<_>>()
        .join("  ");
    let title = format!("{} | {legend}", spec.title);
    let chart = BarChart::default()
        .block(panel_block(&title))
        .bar_width(4)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn draw_line_chart(f: &mut Frame, spec: &ChartSpec, area: Rect) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let y_max = series.values.iter().cloned().fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };

    let amount = |v: f64| -> String {
        if spec.currency_axis {
            format_axis_amount(v)
        } else {
            format!("{v:.0}")
        }
    };
    let y_labels: Vec<Line> = vec![
        Line::from(amount(0.0)),
        Line::from(amount(y_max / 2.0)),
        Line::from(amount(y_max)),
    ];
    let x_labels: Vec<Line> = match (spec.labels.first(), spec.labels.last()) {
        (Some(first), Some(last)) => vec![
            Line::from(first.as_str()),
            Line::from(last.as_str()),
        ],
        _ => Vec::new(),
    };

    let dataset = Dataset::default()
        .name(series.name.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color_of(series.color)))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(panel_block(&spec.title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let refresh = match app.last_refresh {
        Some(at) => format!("Last refresh: {}", at.format("%H:%M:%S")),
        None => "Fetching...".to_string(),
    };
    let fetching = if app.in_flight > 0 { "  ● fetching" } else { "" };
    let help = Line::from(vec![
        Span::styled("r: Refresh | q: Quit", Style::default().fg(THEME.text)),
        Span::styled(
            format!(
                "   every {}s   {refresh}{fetching}",
                app.refresh_interval.as_secs()
            ),
            Style::default().fg(THEME.muted),
        ),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    f.render_widget(footer, area);
}
