//! Tally Web Server
//!
//! Axum-based REST API for the Tally bank statement categorizer.
//!
//! The server keeps a single in-memory snapshot of the last uploaded
//! statement. Uploading (or loading the sample) replaces it; the other
//! endpoints read or edit it.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use tally_core::{Error as CoreError, TransactionStore};

mod handlers;

/// Maximum file upload size (10 MB)
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Default location of the bundled sample statement
pub const DEFAULT_SAMPLE_DATA: &str = "sample_data.csv.csv";

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin, for the dashboard during development)
    pub allowed_origins: Vec<String>,
    /// CSV file served by `/api/get_sample_data`
    pub sample_data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            sample_data_path: PathBuf::from(DEFAULT_SAMPLE_DATA),
        }
    }
}

/// Parse a comma-separated list of CORS origins
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub store: TransactionStore,
    pub config: ServerConfig,
}

/// Message-only success response
#[derive(serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Create the application router with an empty store
pub fn create_router(config: ServerConfig) -> Router {
    create_router_with_store(TransactionStore::new(), config)
}

/// Create the application router around an existing store (for testing)
pub fn create_router_with_store(store: TransactionStore, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        config: config.clone(),
    });

    let api_routes = Router::new()
        // Ingestion
        .route("/upload_csv", post(handlers::upload_csv))
        .route("/get_sample_data", get(handlers::get_sample_data))
        // Transactions
        .route("/get_transactions", get(handlers::get_transactions))
        .route(
            "/get_other_transactions",
            get(handlers::get_other_transactions),
        )
        .route("/update_category", post(handlers::update_category))
        .route("/add_custom_category", post(handlers::add_custom_category))
        // Reports
        .route("/get_expense_summary", get(handlers::get_expense_summary))
        .route("/categories", get(handlers::list_categories))
        // Health
        .route("/health", get(handlers::health_check));

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    let cors = if config.allowed_origins.is_empty() {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        // Leave headroom over the file itself for multipart framing
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    if !config.sample_data_path.exists() {
        warn!(
            path = %config.sample_data_path.display(),
            "Sample data file not found; /api/get_sample_data will return 404"
        );
    }

    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
        }
    }

    /// Translate a core error, prefixing unexpected failures with the operation
    ///
    /// Missing snapshot → 400, unknown id or sample file → 404, anything
    /// else → 500 as "{context}: {error}".
    pub fn from_core(err: CoreError, context: &str) -> Self {
        match err {
            CoreError::NoData => Self::bad_request(&err.to_string()),
            CoreError::NotFound(_) | CoreError::SampleFileMissing(_) => {
                Self::not_found(&err.to_string())
            }
            other => {
                error!(error = %other, context, "Request failed");
                Self::internal(&format!("{}: {}", context, other))
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}
