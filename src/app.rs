use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::database::Store;
use crate::handlers::{protected, public};
use crate::middleware::require_auth;
use crate::observer::{ObserverPipeline, PipelineSettings};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<ObserverPipeline>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            pipeline: Arc::new(ObserverPipeline::standard()),
        }
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            quarantine_period_days: self.config.tracking.quarantine_period().num_days(),
            today: Utc::now().date_naive(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .merge(case_routes())
        .merge(contact_routes())
        .merge(symptom_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes())
        .merge(protected_routes)
        // Global middleware
        .layer(cors_layer(&state.config.security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/login", post(public::login))
}

fn case_routes() -> Router<AppState> {
    use protected::cases;

    Router::new()
        .route("/api/hd/cases", get(cases::list).post(cases::create))
        .route(
            "/api/hd/cases/:id",
            get(cases::show).put(cases::update).delete(cases::conclude),
        )
        .route("/api/hd/cases/:id/comments", post(cases::add_comment))
        .route(
            "/api/hd/cases/:id/registration",
            get(cases::registration_show).put(cases::start_tracking),
        )
        .route("/api/hd/cases/:id/registration/renewal", post(cases::renew))
}

fn contact_routes() -> Router<AppState> {
    use protected::contacts;

    Router::new()
        .route("/api/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/api/contacts/:id",
            get(contacts::show).put(contacts::update).delete(contacts::delete),
        )
}

fn symptom_routes() -> Router<AppState> {
    use protected::symptoms;

    Router::new()
        .route("/api/symptoms", get(symptoms::list).post(symptoms::create))
        .route("/api/symptoms/:id", get(symptoms::show))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let exposed = [header::LOCATION, HeaderName::from_static(public::AUTH_TOKEN_HEADER)];
    let origins = if security.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            security
                .cors_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(exposed)
}
