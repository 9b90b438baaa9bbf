use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Services the dashboard can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MonitoredService {
    Payments,
    Orders,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentsServiceMetrics {
    pub service: &'static str,
    pub time_range: String,
    pub cpu_usage_percent: f64,
    pub memory_usage_mb: f64,
    pub memory_usage_percent: f64,
    pub requests_per_minute: f64,
    pub error_rate_percent: f64,
    pub response_time_ms: f64,
    pub active_connections: u32,
    pub failed_transactions: u32,
    pub successful_transactions: u32,
    pub unhandled_errors: u32,
    pub payment_gateway_timeouts: u32,
    pub disk_io_mb_per_sec: f64,
    pub network_io_mb_per_sec: f64,
    pub thread_pool_usage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersServiceMetrics {
    pub service: &'static str,
    pub time_range: String,
    pub cpu_usage_percent: f64,
    pub memory_usage_mb: f64,
    pub memory_usage_percent: f64,
    pub requests_per_minute: f64,
    pub error_rate_percent: f64,
    pub response_time_ms: f64,
    pub active_connections: u32,
    pub failed_orders: u32,
    pub successful_orders: u32,
    pub validation_errors: u32,
    pub database_query_time_ms: f64,
    pub disk_io_mb_per_sec: f64,
    pub network_io_mb_per_sec: f64,
    pub thread_pool_usage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceMetrics {
    Payments(PaymentsServiceMetrics),
    Orders(OrdersServiceMetrics),
}

/// Fabricates plausible telemetry for the monitoring dashboard.
///
/// Nothing here is measured. Each gauge is `base + U[0, 1) * spread` rounded
/// to two decimals; counters are drawn from half-open integer ranges.
pub struct MetricsGenerator<R: Rng> {
    rng: R,
}

impl MetricsGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A reproducible generator, mostly useful in tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MetricsGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn gauge(&mut self, base: f64, spread: f64) -> f64 {
        let value = base + self.rng.gen_range(0.0..1.0) * spread;
        (value * 100.0).round() / 100.0
    }

    fn count(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..high)
    }

    pub fn snapshot(&mut self, service: MonitoredService, time_range: &str) -> ServiceMetrics {
        match service {
            MonitoredService::Payments => {
                ServiceMetrics::Payments(self.payments_service(time_range))
            }
            MonitoredService::Orders => ServiceMetrics::Orders(self.orders_service(time_range)),
        }
    }

    pub fn payments_service(&mut self, time_range: &str) -> PaymentsServiceMetrics {
        PaymentsServiceMetrics {
            service: "PaymentsService",
            time_range: time_range.to_string(),
            cpu_usage_percent: self.gauge(25.0, 15.0),
            memory_usage_mb: self.gauge(220.0, 60.0),
            memory_usage_percent: self.gauge(44.0, 12.0),
            requests_per_minute: self.gauge(180.0, 40.0),
            error_rate_percent: self.gauge(0.8, 1.5),
            response_time_ms: self.gauge(150.0, 100.0),
            active_connections: self.count(30, 50),
            failed_transactions: self.count(1, 5),
            successful_transactions: self.count(175, 220),
            unhandled_errors: self.count(0, 1),
            payment_gateway_timeouts: self.count(0, 2),
            disk_io_mb_per_sec: self.gauge(1.5, 1.0),
            network_io_mb_per_sec: self.gauge(1.2, 0.5),
            thread_pool_usage_percent: self.gauge(35.0, 20.0),
        }
    }

    pub fn orders_service(&mut self, time_range: &str) -> OrdersServiceMetrics {
        OrdersServiceMetrics {
            service: "OrdersService",
            time_range: time_range.to_string(),
            cpu_usage_percent: self.gauge(15.0, 10.0),
            memory_usage_mb: self.gauge(180.0, 40.0),
            memory_usage_percent: self.gauge(36.0, 12.0),
            requests_per_minute: self.gauge(200.0, 30.0),
            error_rate_percent: self.gauge(0.5, 1.0),
            response_time_ms: self.gauge(120.0, 80.0),
            active_connections: self.count(35, 55),
            failed_orders: self.count(1, 3),
            successful_orders: self.count(195, 225),
            validation_errors: self.count(0, 2),
            database_query_time_ms: self.gauge(25.0, 15.0),
            disk_io_mb_per_sec: self.gauge(1.2, 0.8),
            network_io_mb_per_sec: self.gauge(0.9, 0.4),
            thread_pool_usage_percent: self.gauge(25.0, 15.0),
        }
    }
}
