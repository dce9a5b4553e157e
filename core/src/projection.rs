//! Pure projections from the raw statistics payload into the minimal shape
//! each chart needs. Every function here is total: missing input means an
//! empty (all-zero) projection, never an error.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::model::stats::{LotStats, OverviewStats};

/// Lot names longer than this are truncated with a `...` suffix so bar
/// category labels stay readable.
pub const MAX_LABEL_LEN: usize = 15;

/// Input for the overview pie: available vs occupied spots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewSplit {
    pub available: u64,
    pub occupied: u64,
    pub total: u64,
}

impl OverviewSplit {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Input for the booking donut: active vs completed reservations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSplit {
    pub active: u64,
    pub completed: u64,
    pub total: u64,
}

impl BookingSplit {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Input for the per-lot bar chart. All vectors are index-aligned and keep
/// the backend's lot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotsSeries {
    pub labels: Vec<String>,
    pub available: Vec<u64>,
    pub occupied: Vec<u64>,
    pub totals: Vec<u64>,
}

impl LotsSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Input for the spending line chart, months in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendingSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SpendingSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn overview_split(overview: Option<&OverviewStats>) -> OverviewSplit {
    let available = overview.map_or(0, |o| o.available_spots);
    let occupied = overview.map_or(0, |o| o.occupied_spots);
    OverviewSplit {
        available,
        occupied,
        total: available + occupied,
    }
}

pub fn booking_split(overview: Option<&OverviewStats>) -> BookingSplit {
    let active = overview.map_or(0, |o| o.active_reservations);
    let completed = overview.map_or(0, |o| o.completed_reservations);
    BookingSplit {
        active,
        completed,
        total: active + completed,
    }
}

pub fn lots_series(lots: Option<&[LotStats]>) -> LotsSeries {
    let lots = lots.unwrap_or_default();
    let mut series = LotsSeries::default();
    for lot in lots {
        series.labels.push(truncate_label(&lot.name));
        series.available.push(lot.available);
        series.occupied.push(lot.occupied);
        series.totals.push(lot.total);
    }
    series
}

pub fn spending_series(monthly: Option<&HashMap<String, f64>>) -> SpendingSeries {
    let Some(monthly) = monthly else {
        return SpendingSeries::default();
    };
    // Lexicographic order on "YYYY-MM" keys is chronological order.
    let mut months: Vec<&String> = monthly.keys().collect();
    months.sort_unstable();

    let mut series = SpendingSeries::default();
    for month in months {
        series.labels.push(month_label(month));
        series.values.push(monthly[month]);
    }
    series
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_LEN {
        let mut label: String = name.chars().take(MAX_LABEL_LEN).collect();
        label.push_str("...");
        label
    } else {
        name.to_string()
    }
}

/// "2024-03" -> "Mar 2024". Keys that are not valid `YYYY-MM` pass through
/// verbatim; projections never fail.
fn month_label(key: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => key.to_string(),
    }
}
