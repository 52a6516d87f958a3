//! HTTP handlers.

pub mod members;
pub mod quiz;

/// Liveness check.
pub async fn healthz() -> &'static str {
    "ok"
}
