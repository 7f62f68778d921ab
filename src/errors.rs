use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use std::fmt;

/// User-facing text for every load failure. Details go to the log only.
pub const LOAD_FAILED_MESSAGE: &str = "Error loading content. Check file paths and JSON format.";

/// Shown when the request carries no deck identifier.
pub const MISSING_ID_MESSAGE: &str = "Please provide a file name via the \"id\" query parameter.";

/// Why a deck could not be brought up. All variants are treated the same at the
/// boundary: logged, one generic message, navigation disabled.
#[derive(Debug)]
pub enum LoadError {
    MissingParameter,
    Fetch { path: String, reason: String },
    Parse { path: String, source: serde_json::Error },
    EmptyDeck { id: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::MissingParameter => write!(f, "No deck identifier supplied"),
            LoadError::Fetch { path, reason } => write!(f, "Failed to fetch {path}: {reason}"),
            LoadError::Parse { path, source } => write!(f, "Malformed JSON in {path}: {source}"),
            LoadError::EmptyDeck { id } => write!(f, "Deck {id} contains no slides"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Load(LoadError),
    Template(askama::Error),
    Session(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Load(e) => write!(f, "Load error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Load(LoadError::MissingParameter) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Load(LoadError::MissingParameter) => MISSING_ID_MESSAGE.to_string(),
            AppError::Load(_) => {
                log::error!("{self}");
                LOAD_FAILED_MESSAGE.to_string()
            }
            AppError::NotFound => "Not Found".to_string(),
            _ => {
                log::error!("{self}");
                "Internal Server Error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Load(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama page into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let html = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
