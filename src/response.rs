use crate::{
    Envelope,
    Error,
    KloutResult,
};
use reqwest::{
    header::HeaderMap,
    StatusCode,
};
use serde_json::Value;

/// The header the api gateway uses to report its own error code (`X-Mashery-Error-Code`).
const MASHERY_ERROR_CODE: &str = "x-mashery-error-code";

/// Map a response status to an error, if it is not a success.
///
/// Typed statuses are checked before anything else so that a non-json error page
/// is never decoded.
pub(crate) fn check_status(status: StatusCode, headers: &HeaderMap) -> KloutResult<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::FORBIDDEN => Err(Error::Forbidden),
        StatusCode::INTERNAL_SERVER_ERROR => Err(Error::InternalServerError),
        StatusCode::SERVICE_UNAVAILABLE => Err(Error::ServiceUnavailable),
        StatusCode::GATEWAY_TIMEOUT => Err(Error::GatewayTimeout),
        status => {
            let error_code = headers
                .get(MASHERY_ERROR_CODE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("");
            Err(Error::Api(format!("{} - {}", status.as_u16(), error_code)))
        }
    }
}

/// Decode the body of a successful response.
pub(crate) fn parse_body(text: &str) -> KloutResult<Envelope> {
    let value: Value = serde_json::from_str(text)?;

    if let Some(error) = value.get("body").and_then(|body| body.get("error")) {
        let message = match error {
            Value::String(message) => message.clone(),
            error => error.to_string(),
        };
        return Err(Error::Api(message));
    }

    Ok(serde_json::from_value(value)?)
}
