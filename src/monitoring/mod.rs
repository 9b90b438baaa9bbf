//! Demo telemetry for the monitoring dashboard.
//!
//! Independent of payment processing: metrics are randomly generated and
//! alerts are a fixed catalogue.

pub mod alerts;
pub mod metrics;
