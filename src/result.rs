use crate::headers::Headers;

/// Response a preflight request is answered with; nothing downstream runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// What the gatekeeper decided for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Terminate now with `status` and an empty body.
    Preflight(PreflightResult),
    /// Hand the request on and attach `headers` to whatever response comes back.
    Continue { headers: Headers },
}

impl GateDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            GateDecision::Preflight(result) => &result.headers,
            GateDecision::Continue { headers } => headers,
        }
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, GateDecision::Preflight(_))
    }
}
