use axum::Json;
use serde_json::{json, Value};

/// GET / - Service information
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Quarano API (Rust)",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Contact tracing case management for health departments",
        "endpoints": {
            "login": "POST /api/login (public)",
            "health": "GET /health (public)",
            "cases": "/api/hd/cases[/:id] (agents)",
            "contacts": "/api/contacts[/:id] (tracked persons)",
            "symptoms": "/api/symptoms[/:id] (authenticated)"
        }
    }))
}
