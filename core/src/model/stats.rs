use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level response of the statistics endpoint.
///
/// Every section is optional: the backend omits `lots` for regular users and
/// `monthly_spending` for admins, and an empty database can leave any of them
/// out. Absence is data ("nothing yet"), not an error.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StatisticsPayload {
    pub overview: Option<OverviewStats>,
    pub lots: Option<Vec<LotStats>>,
    pub monthly_spending: Option<HashMap<String, f64>>,
    pub success: Option<bool>,
}

/// Aggregate counters shared by both dashboards. The backend only fills the
/// fields relevant to the requesting role; the rest default to zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct OverviewStats {
    #[serde(default)]
    pub available_spots: u64,
    #[serde(default)]
    pub occupied_spots: u64,
    #[serde(default)]
    pub active_reservations: u64,
    #[serde(default)]
    pub completed_reservations: u64,

    // Admin extras.
    #[serde(default)]
    pub total_lots: u64,
    #[serde(default)]
    pub total_spots: u64,
    #[serde(default)]
    pub total_users: u64,

    // User extras.
    #[serde(default)]
    pub total_reservations: u64,
    #[serde(default)]
    pub total_spent: f64,
}

/// Per-lot occupancy snapshot, in the order the backend lists lots.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LotStats {
    pub name: String,
    #[serde(default)]
    pub available: u64,
    #[serde(default)]
    pub occupied: u64,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_admin_payload() {
        let body = r#"{
            "overview": {"available_spots": 3, "occupied_spots": 7, "total_lots": 2},
            "lots": [{"name": "Lot A", "available": 1, "occupied": 2, "total": 3}],
            "success": true
        }"#;
        let payload: StatisticsPayload = serde_json::from_str(body).unwrap();
        let overview = payload.overview.unwrap();
        assert_eq!(overview.available_spots, 3);
        assert_eq!(overview.occupied_spots, 7);
        assert_eq!(overview.total_lots, 2);
        assert_eq!(overview.active_reservations, 0);
        assert_eq!(payload.lots.unwrap()[0].name, "Lot A");
        assert!(payload.monthly_spending.is_none());
    }

    #[test]
    fn missing_sections_decode_as_none() {
        let payload: StatisticsPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.overview.is_none());
        assert!(payload.lots.is_none());
        assert!(payload.monthly_spending.is_none());
        assert!(payload.success.is_none());
    }

    #[test]
    fn partial_lot_defaults_to_zero() {
        let lot: LotStats = serde_json::from_str(r#"{"name": "North"}"#).unwrap();
        assert_eq!(lot.available, 0);
        assert_eq!(lot.occupied, 0);
        assert_eq!(lot.total, 0);
    }
}
