use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const JAVASCRIPT_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

/// JSON body that turns into a JSONP script when the caller asked for one
/// with a `callback` parameter.
pub struct Jsonp<T> {
    callback: Option<String>,
    body: T,
}

impl<T> Jsonp<T> {
    pub fn new(callback: Option<&str>, body: T) -> Self {
        Self {
            callback: callback.map(sanitize_callback).filter(|cb| !cb.is_empty()),
            body,
        }
    }
}

/// Keep only characters that can appear in a JavaScript member path.
fn sanitize_callback(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']'))
        .collect()
}

impl<T: Serialize> IntoResponse for Jsonp<T> {
    fn into_response(self) -> Response {
        let Some(callback) = self.callback else {
            return Json(self.body).into_response();
        };

        let json = match serde_json::to_string(&self.body) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize JSONP body: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        // Valid in JSON, but line terminators in JavaScript source.
        let json = json.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029");

        let script = format!("/**/ typeof {callback} === 'function' && {callback}({json});");

        (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JAVASCRIPT_CONTENT_TYPE),
            )],
            script,
        )
            .into_response()
    }
}
