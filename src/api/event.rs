use std::collections::{BTreeMap, HashMap};

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Serverless HTTP event as delivered by the function runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
}

impl GatewayEvent {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            ..Self::default()
        }
    }

    /// Attaches query parameters; an empty map is stored as absent
    pub fn with_query(mut self, params: HashMap<String, String>) -> Self {
        self.query_string_parameters = (!params.is_empty()).then_some(params);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_context = Some(RequestContext {
            request_id: Some(request_id.into()),
        });
        self
    }

    /// HTTP method, `GET` when the event does not say
    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or("GET")
    }

    pub fn query_params(&self) -> HashMap<String, String> {
        self.query_string_parameters.clone().unwrap_or_default()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|context| context.request_id.as_deref())
    }
}

/// Serverless HTTP response: status, headers and a JSON string body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    /// CORS preflight answer: 200 with an empty body
    pub fn preflight() -> Self {
        let headers = BTreeMap::from([
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
            (ALLOW_METHODS.to_string(), "GET, OPTIONS".to_string()),
            (ALLOW_HEADERS.to_string(), "Content-Type".to_string()),
            (MAX_AGE.to_string(), "86400".to_string()),
        ]);

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// JSON response with the CORS origin header
    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        let headers = BTreeMap::from([
            (CONTENT_TYPE.to_string(), "application/json".to_string()),
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
        ]);

        Self {
            status_code: status.as_u16(),
            headers,
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    /// 200 with `payload` serialized as the body
    pub fn ok<T: Serialize>(payload: &T) -> AppResult<Self> {
        let body = serde_json::to_value(payload)
            .map_err(|e| AppError::Internal(format!("Failed to serialize response: {}", e)))?;
        Ok(Self::json(StatusCode::OK, &body))
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

impl From<AppError> for GatewayResponse {
    fn from(error: AppError) -> Self {
        Self::json(error.status_code(), &json!({ "error": error.to_string() }))
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }

        response
    }
}
