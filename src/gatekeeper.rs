use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::{GatekeeperOptions, ValidationError};
use crate::origin::OriginDecision;
use crate::result::{GateDecision, PreflightResult};
use tracing::debug;

/// Origin gatekeeper: decides which access-control headers every response
/// carries and short-circuits preflight requests.
///
/// Evaluation never fails. An unrecognized origin resolves to the configured
/// [`FallbackPolicy`](crate::FallbackPolicy) rather than an error.
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    options: GatekeeperOptions,
}

impl Gatekeeper {
    pub fn new(options: GatekeeperOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GatekeeperOptions {
        &self.options
    }

    /// Computes the header set for a request. Pure: the same request always
    /// yields the same headers. Used for normal, preflight and error responses.
    pub fn decide(&self, request: &RequestContext<'_>) -> Headers {
        let decision = OriginDecision::resolve(request.origin, &self.options.allow_list);
        debug!(
            origin = request.origin.unwrap_or("-"),
            decision = decision.as_str(),
            "origin resolved"
        );
        let builder = HeaderBuilder::new(&self.options);

        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(&decision));
        headers.extend(builder.build_credentials_header(&decision));
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.into_headers()
    }

    pub fn check(&self, request: &RequestContext<'_>) -> GateDecision {
        let headers = self.decide(request);

        if request.is_preflight() {
            GateDecision::Preflight(PreflightResult {
                headers,
                status: self.options.preflight_status,
            })
        } else {
            GateDecision::Continue { headers }
        }
    }
}

#[cfg(test)]
#[path = "gatekeeper_test.rs"]
mod gatekeeper_test;
