//! Page outcomes and fatal handler errors.
//!
//! Every non-fatal result of a handler is a [`Page`]: a rendered view, a
//! redirect, a 404-class page, or a placeholder for an operation without
//! behavior. Only store failures become [`ApiError`].

use crate::views::View;
use catalog_core::ServiceError;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Render { view: View },
    Redirect { location: String },
    NotFound { message: String },
    NotImplemented { message: String },
}

impl Page {
    pub fn render(view: View) -> Self {
        Self::Render { view }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// HTTP status the outer layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Render { .. } => 200,
            Self::Redirect { .. } => 302,
            Self::NotFound { .. } => 404,
            Self::NotImplemented { .. } => 501,
        }
    }

    pub fn view(&self) -> Option<&View> {
        match self {
            Self::Render { view } => Some(view),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location } => Some(location),
            _ => None,
        }
    }
}

/// Fatal handler failure. Not recovered locally; the caller answers 500.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "catalog request failed: {err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        500
    }
}
