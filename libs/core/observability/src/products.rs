//! Product-specific metrics.

use metrics::{counter, histogram};
use std::time::Instant;

/// Product metrics recorder
pub struct ProductMetrics;

impl ProductMetrics {
    /// Count one handler invocation.
    ///
    /// `outcome` is `success`, `client_error` or `server_error`.
    pub fn record_operation(operation: &'static str, outcome: &'static str) {
        counter!(
            "product_operations_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
    }

    /// Record the duration of one store call.
    pub fn record_store_call(call: &'static str, duration_secs: f64) {
        histogram!("product_store_duration_seconds", "call" => call).record(duration_secs);
    }

    /// Start timing a store call.
    pub fn start_store_timer(call: &'static str) -> StoreTimer {
        StoreTimer::new(call)
    }
}

/// Records store call latency when dropped.
pub struct StoreTimer {
    call: &'static str,
    start: Instant,
}

impl StoreTimer {
    pub fn new(call: &'static str) -> Self {
        Self {
            call,
            start: Instant::now(),
        }
    }
}

impl Drop for StoreTimer {
    fn drop(&mut self) {
        ProductMetrics::record_store_call(self.call, self.start.elapsed().as_secs_f64());
    }
}
