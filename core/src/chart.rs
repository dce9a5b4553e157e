//! Chart specifications and the four dashboard renderers.
//!
//! Renderers turn projections into engine-agnostic [`ChartSpec`]s; the CLI's
//! draw layer maps those onto actual widgets. A renderer never fails: zero
//! data becomes a [`ChartView::Empty`] with a domain-specific message.

use crate::format::{format_currency, percentage_of};
use crate::projection::{BookingSplit, LotsSeries, OverviewSplit, SpendingSeries};

/// Chart families the draw layer knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    Donut,
    Line,
}

/// Fixed palette slots, resolved to concrete colors by the draw layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Primary,
    Success,
    Danger,
    Warning,
}

/// One named series of values. Pie and donut charts use one single-value
/// series per slice; bar and line charts use multi-value series aligned with
/// `ChartSpec::labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
}

/// Everything the draw layer needs for one chart. `detail` carries the
/// tooltip lines, index-aligned with the slices (pie/donut) or categories
/// (bar/line).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub detail: Vec<String>,
    pub currency_axis: bool,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            labels: Vec::new(),
            series: Vec::new(),
            detail: Vec::new(),
            currency_axis: false,
        }
    }
}

/// What a renderer hands to the binder: a real chart or an empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Chart(ChartSpec),
    Empty(String),
}

fn slice(spec: &mut ChartSpec, name: &str, value: u64, total: u64, color: SeriesColor) {
    let pct = percentage_of(value as f64, total as f64);
    spec.labels.push(name.to_string());
    spec.series.push(Series {
        name: name.to_string(),
        values: vec![value as f64],
        color,
    });
    spec.detail.push(format!("{name}: {value} ({pct:.1}%)"));
}

/// Overall parking status pie: available vs occupied spots.
pub fn overview_chart(split: &OverviewSplit) -> ChartView {
    if split.is_empty() {
        return ChartView::Empty(
            "No parking spots available yet. Create some parking lots first!".to_string(),
        );
    }

    let mut spec = ChartSpec::new(ChartKind::Pie, "Parking Status");
    slice(
        &mut spec,
        "Available Spots",
        split.available,
        split.total,
        SeriesColor::Success,
    );
    slice(
        &mut spec,
        "Occupied Spots",
        split.occupied,
        split.total,
        SeriesColor::Danger,
    );
    ChartView::Chart(spec)
}

/// Per-lot occupancy bar chart: grouped available/occupied bars, one
/// category per lot, with each lot's capacity as the detail line.
pub fn lots_chart(series: &LotsSeries) -> ChartView {
    if series.is_empty() {
        return ChartView::Empty(
            "No parking lots created yet. Add some parking lots to see occupancy data!"
                .to_string(),
        );
    }

    let mut spec = ChartSpec::new(ChartKind::Bar, "Lot Occupancy");
    spec.labels = series.labels.clone();
    spec.series = vec![
        Series {
            name: "Available".to_string(),
            values: series.available.iter().map(|&v| v as f64).collect(),
            color: SeriesColor::Success,
        },
        Series {
            name: "Occupied".to_string(),
            values: series.occupied.iter().map(|&v| v as f64).collect(),
            color: SeriesColor::Danger,
        },
    ];
    spec.detail = series
        .totals
        .iter()
        .map(|total| format!("Total spots: {total}"))
        .collect();
    ChartView::Chart(spec)
}

/// Booking summary donut: active vs completed reservations.
pub fn booking_chart(split: &BookingSplit) -> ChartView {
    if split.is_empty() {
        return ChartView::Empty(
            "No bookings yet. Start by booking your first parking spot!".to_string(),
        );
    }

    let mut spec = ChartSpec::new(ChartKind::Donut, "Your Bookings");
    slice(
        &mut spec,
        "Active Bookings",
        split.active,
        split.total,
        SeriesColor::Warning,
    );
    slice(
        &mut spec,
        "Completed Bookings",
        split.completed,
        split.total,
        SeriesColor::Success,
    );
    ChartView::Chart(spec)
}

/// Monthly spending line over the sorted month labels.
pub fn spending_chart(series: &SpendingSeries) -> ChartView {
    if series.is_empty() {
        return ChartView::Empty(
            "No spending data yet. Complete some bookings to see your spending trends!"
                .to_string(),
        );
    }

    let mut spec = ChartSpec::new(ChartKind::Line, "Monthly Spending");
    spec.labels = series.labels.clone();
    spec.series = vec![Series {
        name: format!("Amount Spent ({})", crate::format::CURRENCY_SYMBOL),
        values: series.values.clone(),
        color: SeriesColor::Primary,
    }];
    spec.detail = series
        .values
        .iter()
        .map(|&v| format!("Amount: {}", format_currency(v)))
        .collect();
    spec.currency_axis = true;
    ChartView::Chart(spec)
}
