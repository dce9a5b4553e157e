use std::time::Duration;

use chrono::{DateTime, Local};
use lotwatch_core::{
    ChartBinder, DashboardController, OverviewStats, StatisticsPayload, StatsError,
};
use tokio::sync::mpsc::UnboundedSender;

/// State of the live dashboard between frames.
pub struct App {
    pub controller: DashboardController,
    pub binder: ChartBinder,
    /// Latest overview counters, kept for the summary bar.
    pub overview: Option<OverviewStats>,
    pub refresh_interval: Duration,
    pub last_refresh: Option<DateTime<Local>>,
    pub in_flight: usize,
}

impl App {
    pub fn new(controller: DashboardController, interval_secs: u64) -> Self {
        let binder = ChartBinder::for_role(controller.role());
        Self {
            controller,
            binder,
            overview: None,
            refresh_interval: Duration::from_secs(interval_secs),
            last_refresh: None,
            in_flight: 0,
        }
    }

    /// Kick off one fetch without blocking the draw loop. The result comes
    /// back through the channel drained in `run_app`.
    pub fn spawn_fetch(&mut self, tx: UnboundedSender<Result<StatisticsPayload, StatsError>>) {
        self.in_flight += 1;
        let controller = self.controller.clone();
        tokio::spawn(async move {
            // A send error only means the dashboard already quit.
            let _ = tx.send(controller.fetch().await);
        });
    }

    /// Render a completed fetch into the binder.
    pub fn apply(&mut self, result: Result<StatisticsPayload, StatsError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Some(payload) = self.controller.apply(result, &mut self.binder) {
            self.overview = payload.overview;
        }
        self.last_refresh = Some(Local::now());
    }
}
