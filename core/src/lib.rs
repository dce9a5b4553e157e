pub mod binder;
pub mod chart;
pub mod client;
pub mod controller;
pub mod format;
pub mod model;
pub mod projection;

pub use binder::{CanvasId, ChartBinder, NoticeKind, PanelContent};
pub use chart::{
    booking_chart, lots_chart, overview_chart, spending_chart, ChartKind, ChartSpec, ChartView,
    Series, SeriesColor,
};
pub use client::{StatsClient, StatsError};
pub use controller::{DashboardController, ERROR_MESSAGE};
pub use format::{format_axis_amount, format_currency, format_duration, CURRENCY_SYMBOL};
pub use model::role::Role;
pub use model::stats::{LotStats, OverviewStats, StatisticsPayload};
pub use projection::{
    booking_split, lots_series, overview_split, spending_series, BookingSplit, LotsSeries,
    OverviewSplit, SpendingSeries,
};
