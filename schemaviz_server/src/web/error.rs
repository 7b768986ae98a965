
use crate::model;
use axum::{
    response::{IntoResponse, Response},
    http::StatusCode
};
use serde::Serialize;
use tracing::debug;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    Model(model::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        debug!("{:<12} - web::Error {self:?}", "INTO_RES");

        // Placeholder status, `mw_response_map` builds the client response.
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<model::Error> for Error {
    fn from(value: model::Error) -> Self {
        Self::Model(value)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        use model::Error::*;

        match self {
            Self::Model(NoActiveConnection) => {
                (StatusCode::CONFLICT, ClientError::NO_ACTIVE_CONNECTION)
            },
            Self::Model(Connect(..)) => {
                (StatusCode::BAD_GATEWAY, ClientError::DB_CONNECT_FAIL)
            },
            Self::Model(MetadataFetch { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::METADATA_FETCH_FAIL,
            ),
        }
    }

    /// Human readable cause returned next to the client error type.
    pub fn detail(&self) -> String {
        use model::Error::*;

        match self {
            Self::Model(NoActiveConnection) => {
                "no active database connection, call /api/db-connect first".to_string()
            },
            Self::Model(Connect(cause)) => cause.clone(),
            Self::Model(MetadataFetch { query, cause }) => format!("{query}: {cause}"),
        }
    }
}

#[derive(Debug, Clone, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    NO_ACTIVE_CONNECTION,
    DB_CONNECT_FAIL,
    METADATA_FETCH_FAIL,
}
