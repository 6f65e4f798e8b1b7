use crate::allow_list::AllowList;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Outcome of matching a request's declared origin against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// No `Origin` header: same-origin or non-browser traffic.
    Absent,
    /// Exact allow-list match; the origin is echoed back with credentials.
    Trusted(String),
    /// Present but not allowed.
    Untrusted,
}

impl OriginDecision {
    pub fn resolve(request_origin: Option<&str>, allow_list: &AllowList) -> Self {
        match request_origin {
            None => Self::Absent,
            Some(origin) if origin.len() > MAX_ORIGIN_LENGTH => Self::Untrusted,
            Some(origin) if allow_list.contains(origin) => Self::Trusted(origin.to_string()),
            Some(_) => Self::Untrusted,
        }
    }

    pub fn is_credentialed(&self) -> bool {
        matches!(self, Self::Absent | Self::Trusted(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Trusted(_) => "trusted",
            Self::Untrusted => "untrusted",
        }
    }
}

/// What to emit for an origin that is present but not on the allow-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Non-credentialed `Access-Control-Allow-Origin: *`.
    #[default]
    Wildcard,
    /// No `Access-Control-Allow-Origin` at all.
    Omit,
}

impl FallbackPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Omit } else { Self::Wildcard }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
