//! Orchestration of one refresh cycle: fetch, project, render, or degrade to
//! the shared error state.

use tracing::{debug, error};

use crate::binder::{CanvasId, ChartBinder};
use crate::chart::{booking_chart, lots_chart, overview_chart, spending_chart};
use crate::client::{StatsClient, StatsError};
use crate::model::role::Role;
use crate::model::stats::StatisticsPayload;
use crate::projection::{booking_split, lots_series, overview_split, spending_series};

/// Shared message for the global error state. Deliberately coarse: a single
/// endpoint backs every chart, so there is nothing chart-specific to say.
pub const ERROR_MESSAGE: &str = "Charts are loading... Please wait for the next refresh.\n\
     If this persists, check that your session is still valid.";

/// Runs the role's fixed pipeline against a [`ChartBinder`]. The fetch and
/// apply halves are separate so a caller can keep several cycles in flight;
/// `refresh` combines them for one-shot use.
#[derive(Debug, Clone)]
pub struct DashboardController {
    client: StatsClient,
    role: Role,
}

impl DashboardController {
    pub fn new(client: StatsClient, role: Role) -> Self {
        Self { client, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The asynchronous half of a cycle: one statistics fetch.
    pub async fn fetch(&self) -> Result<StatisticsPayload, StatsError> {
        self.client.fetch_statistics().await
    }

    /// The synchronous half: project and render a completed fetch into the
    /// binder. Any failure, including a payload missing the keys this role
    /// requires, resolves into the global error state. Returns the payload on
    /// success so callers can surface its summary counters.
    pub fn apply(
        &self,
        result: Result<StatisticsPayload, StatsError>,
        binder: &mut ChartBinder,
    ) -> Option<StatisticsPayload> {
        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                error!(role = self.role.as_str(), error = %err, "statistics refresh failed");
                binder.render_error_state(ERROR_MESSAGE);
                return None;
            }
        };

        match self.role {
            Role::Admin => {
                let (Some(overview), Some(lots)) = (payload.overview.as_ref(), payload.lots.as_deref())
                else {
                    let err = StatsError::MalformedResponse(
                        "payload is missing the overview or lots section".to_string(),
                    );
                    error!(role = self.role.as_str(), error = %err, "statistics refresh failed");
                    binder.render_error_state(ERROR_MESSAGE);
                    return None;
                };
                binder.render(CanvasId::Overview, overview_chart(&overview_split(Some(overview))));
                binder.render(CanvasId::Lots, lots_chart(&lots_series(Some(lots))));
            }
            Role::User => {
                let Some(overview) = payload.overview.as_ref() else {
                    let err = StatsError::MalformedResponse(
                        "payload is missing the overview section".to_string(),
                    );
                    error!(role = self.role.as_str(), error = %err, "statistics refresh failed");
                    binder.render_error_state(ERROR_MESSAGE);
                    return None;
                };
                binder.render(CanvasId::Booking, booking_chart(&booking_split(Some(overview))));
                // Spending is optional for users; an absent map is just empty.
                binder.render(
                    CanvasId::Spending,
                    spending_chart(&spending_series(payload.monthly_spending.as_ref())),
                );
            }
        }

        debug!(role = self.role.as_str(), "dashboard refresh applied");
        Some(payload)
    }

    /// One complete fetch-then-render cycle.
    pub async fn refresh(&self, binder: &mut ChartBinder) -> Option<StatisticsPayload> {
        let result = self.fetch().await;
        self.apply(result, binder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{NoticeKind, PanelContent};
    use crate::chart::ChartKind;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/parking-stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn admin_pipeline_renders_pie_and_bars() {
        let server = server_with(json!({
            "overview": {"available_spots": 3, "occupied_spots": 7},
            "lots": [{"name": "Lot A", "available": 1, "occupied": 2, "total": 3}]
        }))
        .await;

        let controller =
            DashboardController::new(StatsClient::new(server.uri()), Role::Admin);
        let mut binder = ChartBinder::for_role(Role::Admin);
        assert!(controller.refresh(&mut binder).await.is_some());

        let pie = binder.chart(CanvasId::Overview).unwrap();
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.series[0].values, vec![3.0]);
        assert_eq!(pie.series[1].values, vec![7.0]);

        let bars = binder.chart(CanvasId::Lots).unwrap();
        assert_eq!(bars.labels, vec!["Lot A"]);
        assert_eq!(bars.detail, vec!["Total spots: 3"]);
    }

    #[tokio::test]
    async fn user_pipeline_renders_donut_and_sorted_spending() {
        let server = server_with(json!({
            "overview": {"active_reservations": 1, "completed_reservations": 3},
            "monthly_spending": {"2024-03": 150.5, "2024-01": 75.25}
        }))
        .await;

        let controller =
            DashboardController::new(StatsClient::new(server.uri()), Role::User);
        let mut binder = ChartBinder::for_role(Role::User);
        assert!(controller.refresh(&mut binder).await.is_some());

        assert_eq!(binder.chart(CanvasId::Booking).unwrap().kind, ChartKind::Donut);
        let line = binder.chart(CanvasId::Spending).unwrap();
        assert_eq!(line.labels, vec!["Jan 2024", "Mar 2024"]);
        assert_eq!(line.series[0].values, vec![75.25, 150.5]);
    }

    #[tokio::test]
    async fn user_pipeline_without_spending_shows_empty_state() {
        let server = server_with(json!({
            "overview": {"active_reservations": 1, "completed_reservations": 0}
        }))
        .await;

        let controller =
            DashboardController::new(StatsClient::new(server.uri()), Role::User);
        let mut binder = ChartBinder::for_role(Role::User);
        controller.refresh(&mut binder).await;

        assert!(binder.chart(CanvasId::Booking).is_some());
        assert!(matches!(
            binder.content(CanvasId::Spending),
            Some(PanelContent::Notice {
                kind: NoticeKind::Info,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn http_failure_degrades_every_panel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/parking-stats"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let controller =
            DashboardController::new(StatsClient::new(server.uri()), Role::Admin);
        let mut binder = ChartBinder::for_role(Role::Admin);

        // Seed a chart from an earlier successful cycle; the failure must
        // replace it rather than leave it dangling.
        let overview = crate::model::stats::OverviewStats {
            available_spots: 1,
            occupied_spots: 1,
            ..Default::default()
        };
        binder.render(
            CanvasId::Overview,
            crate::chart::overview_chart(&overview_split(Some(&overview))),
        );
        assert_eq!(binder.live_charts(), 1);

        assert!(controller.refresh(&mut binder).await.is_none());
        assert_eq!(binder.live_charts(), 0);
        for &canvas in CanvasId::for_role(Role::Admin) {
            assert!(matches!(
                binder.content(canvas),
                Some(PanelContent::Notice {
                    kind: NoticeKind::Warning,
                    ..
                })
            ));
        }
    }

    #[tokio::test]
    async fn admin_payload_missing_lots_takes_the_error_path() {
        let server = server_with(json!({
            "overview": {"available_spots": 3, "occupied_spots": 7}
        }))
        .await;

        let controller =
            DashboardController::new(StatsClient::new(server.uri()), Role::Admin);
        let mut binder = ChartBinder::for_role(Role::Admin);
        assert!(controller.refresh(&mut binder).await.is_none());
        assert_eq!(binder.live_charts(), 0);
    }

    #[tokio::test]
    async fn zero_data_payload_shows_empty_states_not_errors() {
        let server = server_with(json!({
            "overview": {},
            "lots": []
        }))
        .await;

        let controller =
            DashboardController::new(StatsClient::new(server.uri()), Role::Admin);
        let mut binder = ChartBinder::for_role(Role::Admin);
        assert!(controller.refresh(&mut binder).await.is_some());

        for &canvas in CanvasId::for_role(Role::Admin) {
            assert!(matches!(
                binder.content(canvas),
                Some(PanelContent::Notice {
                    kind: NoticeKind::Info,
                    ..
                })
            ));
        }
    }
}
