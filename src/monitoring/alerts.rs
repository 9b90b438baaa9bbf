use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: &'static str,
    pub service: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    /// `%Y-%m-%dT%H:%M:%SZ`
    pub triggered_at: String,
    pub metric: &'static str,
    pub current_value: f64,
    pub threshold: f64,
    pub status: AlertStatus,
}

/// A fixed set of alert records for the dashboard.
#[derive(Debug, Clone)]
pub struct AlertCatalog {
    alerts: Vec<Alert>,
}

fn stamp(now: DateTime<Utc>, minutes_ago: i64) -> String {
    (now - Duration::minutes(minutes_ago))
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

impl AlertCatalog {
    /// The canned alerts, with trigger times relative to `now`.
    pub fn standard(now: DateTime<Utc>) -> Self {
        let alerts = vec![
            Alert {
                id: "ALERT-001",
                service: "PaymentsService",
                severity: Severity::Info,
                title: "Error Rate Normalized",
                description: "PaymentsService error rate is 1.2%, below the 10% threshold",
                triggered_at: stamp(now, 5),
                metric: "error_rate_percent",
                current_value: 1.2,
                threshold: 10.0,
                status: AlertStatus::Resolved,
            },
            Alert {
                id: "ALERT-002",
                service: "PaymentsService",
                severity: Severity::Info,
                title: "Response Time Improved",
                description: "PaymentsService average response time is 180ms, \
                              below the 800ms threshold",
                triggered_at: stamp(now, 3),
                metric: "response_time_ms",
                current_value: 180.5,
                threshold: 800.0,
                status: AlertStatus::Resolved,
            },
            Alert {
                id: "ALERT-003",
                service: "PaymentsService",
                severity: Severity::Info,
                title: "Unhandled Errors Eliminated",
                description: "No unhandled errors detected in payment processing",
                triggered_at: stamp(now, 2),
                metric: "unhandled_errors",
                current_value: 0.0,
                threshold: 5.0,
                status: AlertStatus::Resolved,
            },
            Alert {
                id: "ALERT-004",
                service: "OrdersService",
                severity: Severity::Info,
                title: "All Systems Normal",
                description: "OrdersService operating within normal parameters",
                triggered_at: stamp(now, 60),
                metric: "overall_health",
                current_value: 98.5,
                threshold: 95.0,
                status: AlertStatus::Resolved,
            },
        ];
        Self { alerts }
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    /// Alerts for `service`, compared case-insensitively. `None` or an empty
    /// name returns everything.
    pub fn filter(&self, service: Option<&str>) -> Vec<&Alert> {
        match service {
            Some(name) if !name.is_empty() => self
                .alerts
                .iter()
                .filter(|alert| alert.service.eq_ignore_ascii_case(name))
                .collect(),
            _ => self.alerts.iter().collect(),
        }
    }
}
