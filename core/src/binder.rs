//! The chart binding table: which content is live on which canvas.
//!
//! A canvas hosts at most one piece of content at a time. Rebinding drops the
//! previous chart first, which is what keeps repeated refresh cycles from
//! stacking duplicate charts — the dominant bug class in periodically
//! refreshed dashboards.

use std::collections::HashMap;

use crate::chart::{ChartSpec, ChartView};
use crate::model::role::Role;

/// Identifier of a dashboard panel that can host a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasId {
    Overview,
    Lots,
    Booking,
    Spending,
}

impl CanvasId {
    pub const ALL: [CanvasId; 4] = [
        CanvasId::Overview,
        CanvasId::Lots,
        CanvasId::Booking,
        CanvasId::Spending,
    ];

    /// The canvases each role's layout actually contains.
    pub fn for_role(role: Role) -> &'static [CanvasId] {
        match role {
            Role::Admin => &[CanvasId::Overview, CanvasId::Lots],
            Role::User => &[CanvasId::Booking, CanvasId::Spending],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CanvasId::Overview => "overview-chart",
            CanvasId::Lots => "lots-chart",
            CanvasId::Booking => "booking-chart",
            CanvasId::Spending => "spending-chart",
        }
    }
}

/// Severity of a non-chart panel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Zero-data empty state. Informational, not a failure.
    Info,
    /// Global error state after a failed refresh cycle.
    Warning,
}

/// A panel owns exactly one of these at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Chart(ChartSpec),
    Notice { kind: NoticeKind, message: String },
}

/// Owner of all chart bindings for the current layout. All mutation goes
/// through `bind` / `render_empty_state` / `render_error_state`, which is
/// what upholds the one-chart-per-canvas invariant.
#[derive(Debug, Default)]
pub struct ChartBinder {
    panels: HashMap<CanvasId, PanelContent>,
    present: Vec<CanvasId>,
}

impl ChartBinder {
    pub fn new(present: Vec<CanvasId>) -> Self {
        Self {
            panels: HashMap::new(),
            present,
        }
    }

    pub fn for_role(role: Role) -> Self {
        Self::new(CanvasId::for_role(role).to_vec())
    }

    fn has_canvas(&self, canvas: CanvasId) -> bool {
        self.present.contains(&canvas)
    }

    /// Bind a chart to a canvas, replacing (and thereby dropping) whatever
    /// was bound before. Binding to a canvas that is not part of the current
    /// layout is a silent no-op, so partial layouts work unchanged.
    pub fn bind(&mut self, canvas: CanvasId, spec: ChartSpec) {
        if !self.has_canvas(canvas) {
            return;
        }
        self.panels.insert(canvas, PanelContent::Chart(spec));
    }

    /// Replace a canvas with an informational zero-data message. Not an
    /// error: this never touches the other panels.
    pub fn render_empty_state(&mut self, canvas: CanvasId, message: impl Into<String>) {
        if !self.has_canvas(canvas) {
            return;
        }
        self.panels.insert(
            canvas,
            PanelContent::Notice {
                kind: NoticeKind::Info,
                message: message.into(),
            },
        );
    }

    /// Dispatch a renderer result to the appropriate operation.
    pub fn render(&mut self, canvas: CanvasId, view: ChartView) {
        match view {
            ChartView::Chart(spec) => self.bind(canvas, spec),
            ChartView::Empty(message) => self.render_empty_state(canvas, message),
        }
    }

    /// The global error path: every canvas in the layout shows the shared
    /// warning, including ones holding charts from an earlier cycle.
    pub fn render_error_state(&mut self, message: &str) {
        for canvas in self.present.clone() {
            self.panels.insert(
                canvas,
                PanelContent::Notice {
                    kind: NoticeKind::Warning,
                    message: message.to_string(),
                },
            );
        }
    }

    pub fn content(&self, canvas: CanvasId) -> Option<&PanelContent> {
        self.panels.get(&canvas)
    }

    pub fn chart(&self, canvas: CanvasId) -> Option<&ChartSpec> {
        match self.panels.get(&canvas) {
            Some(PanelContent::Chart(spec)) => Some(spec),
            _ => None,
        }
    }

    /// Number of live chart instances across all canvases.
    pub fn live_charts(&self) -> usize {
        self.panels
            .values()
            .filter(|content| matches!(content, PanelContent::Chart(_)))
            .count()
    }
}
