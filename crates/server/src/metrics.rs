use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static RECORDS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("records_created_total", "Records created per collection", &["collection"])
        .expect("register records_created_total")
});

pub static RECORDS_DELETED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("records_deleted_total", "Records deleted per collection", &["collection"])
        .expect("register records_deleted_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("store_errors_total", "Failed store operations per collection", &["collection"])
        .expect("register store_errors_total")
});

pub fn record_created(collection: &str) {
    RECORDS_CREATED_TOTAL.with_label_values(&[collection]).inc();
}

pub fn record_deleted(collection: &str) {
    RECORDS_DELETED_TOTAL.with_label_values(&[collection]).inc();
}

pub fn store_error(collection: &str) {
    STORE_ERRORS_TOTAL.with_label_values(&[collection]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}
