use crate::allow_list::AllowList;
use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::DEFAULT_ALLOWED_ORIGINS;
use crate::origin::FallbackPolicy;
use crate::util::is_http_token;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatekeeperOptions {
    pub allow_list: AllowList,
    pub fallback: FallbackPolicy,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub preflight_status: u16,
}

impl Default for GatekeeperOptions {
    fn default() -> Self {
        Self {
            allow_list: AllowList::new(DEFAULT_ALLOWED_ORIGINS),
            fallback: FallbackPolicy::Wildcard,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            preflight_status: 200,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allow-list entries cannot be empty")]
    EmptyOrigin,
    #[error("allow-list entries cannot be the wildcard \"*\"; use the wildcard fallback policy instead")]
    WildcardOrigin,
    #[error("allow-list entry `{0}` must be an http(s) scheme, host and optional port without a path")]
    InvalidOrigin(String),
    #[error("allowed method `{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("preflight status {0} must be within 200..=299")]
    InvalidPreflightStatus(u16),
}

impl GatekeeperOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for origin in self.allow_list.iter() {
            validate_origin(origin)?;
        }

        if let Some(method) = self.methods.values().iter().find(|m| !is_http_token(m)) {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self
            .allowed_headers
            .values()
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        if !(200..=299).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        Ok(())
    }
}

fn validate_origin(origin: &str) -> Result<(), ValidationError> {
    if origin.is_empty() {
        return Err(ValidationError::EmptyOrigin);
    }
    if origin == "*" {
        return Err(ValidationError::WildcardOrigin);
    }

    let authority = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .ok_or_else(|| ValidationError::InvalidOrigin(origin.to_string()))?;

    let malformed = authority.is_empty()
        || authority
            .bytes()
            .any(|byte| matches!(byte, b'/' | b'?' | b'#') || !byte.is_ascii_graphic());
    if malformed {
        return Err(ValidationError::InvalidOrigin(origin.to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
