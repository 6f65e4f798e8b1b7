use crate::constants::header;
use crate::context::RequestContext;
use crate::gatekeeper::Gatekeeper;
use crate::headers::{Headers, merge_vary};
use crate::result::{GateDecision, PreflightResult};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue, StatusCode,
        header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, VARY},
    },
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

pub type SharedGatekeeper = Arc<Gatekeeper>;

/// First stage of the pipeline. Answers preflight requests itself; for every
/// other request the decided headers are applied to whatever response the
/// rest of the stack produces, faults included.
pub async fn gatekeeper_middleware(
    State(gatekeeper): State<SharedGatekeeper>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = gatekeeper.check(&owned_ctx.as_request_context());

    debug!(
        method = %owned_ctx.method,
        origin = owned_ctx.origin.as_deref().unwrap_or("-"),
        preflight = decision.is_preflight(),
        "gatekeeper evaluated request"
    );

    match decision {
        GateDecision::Preflight(result) => preflight_response(result),
        GateDecision::Continue { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
    }
}

fn preflight_response(result: PreflightResult) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
    apply_headers(response.headers_mut(), &result.headers);
    response
}

/// Writes `headers` into `map`, replacing existing values. `Vary` is merged
/// with whatever the handler already set. Origin and credential headers are
/// owned by the gatekeeper: handler values are dropped even when the decided
/// set leaves them out.
pub fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    map.remove(ACCESS_CONTROL_ALLOW_ORIGIN);
    map.remove(ACCESS_CONTROL_ALLOW_CREDENTIALS);

    for (name, value) in headers.iter() {
        let Ok(header_name) = HeaderName::try_from(name.as_str()) else {
            warn!(header = %name, "skipping invalid header name");
            continue;
        };

        let value = if header_name == VARY {
            let existing = map.get(&VARY).and_then(|current| current.to_str().ok());
            match merge_vary(existing, value) {
                Some(merged) => merged,
                None => continue,
            }
        } else {
            value.clone()
        };

        match HeaderValue::try_from(value) {
            Ok(header_value) => {
                map.insert(header_name, header_value);
            }
            Err(_) => warn!(header = %name, "skipping invalid header value"),
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        Self {
            method: request.method().as_str().to_string(),
            origin: request
                .headers()
                .get(header::ORIGIN)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
