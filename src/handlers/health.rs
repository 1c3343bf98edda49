//! Health check endpoint.
//! Used by: server.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "admin-backend";

/// Liveness payload. Both fields are constant; built per request and dropped after serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handler_returns_ok_status() {
        let Json(body) = health().await;
        assert_eq!(body, HealthStatus::ok());
    }

    #[test]
    fn serializes_fields_in_order() -> serde_json::Result<()> {
        let json = serde_json::to_string(&HealthStatus::ok())?;
        assert_eq!(json, r#"{"status":"ok","service":"admin-backend"}"#);
        Ok(())
    }
}
