//! PetStore JSON API Healthcheck Handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Root banner response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Service banner
    pub message: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Root banner handler
///
/// Confirms the API is up without touching any storage.
#[endpoint(tags("health"), summary = "API banner")]
pub(crate) async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "PetStore API is running".to_string(),
    })
}
