use actix_web::HttpResponse;
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn request_count() -> u64 {
    REQUEST_COUNT.load(Ordering::Relaxed)
}

pub fn error_count() -> u64 {
    ERROR_COUNT.load(Ordering::Relaxed)
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition of request counters", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render_counters(&counters()))
}

/// (name, help, value) for every exported counter.
fn counters() -> [(&'static str, &'static str, u64); 2] {
    [
        ("http_requests_total", "Requests received", request_count()),
        ("http_errors_total", "Responses with a 5xx status", error_count()),
    ]
}

fn render_counters(counters: &[(&str, &str, u64)]) -> String {
    counters
        .iter()
        .map(|(name, help, value)| {
            format!("# HELP {name} {help}\n# TYPE {name} counter\n{name} {value}\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
