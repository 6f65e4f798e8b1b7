use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::GatekeeperOptions;
use crate::origin::{FallbackPolicy, OriginDecision};

pub(crate) struct HeaderBuilder<'a> {
    options: &'a GatekeeperOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a GatekeeperOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(&self, decision: &OriginDecision) -> HeaderCollection {
        match decision {
            OriginDecision::Absent => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                headers
            }
            OriginDecision::Trusted(origin) => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.as_str());
                headers
            }
            OriginDecision::Untrusted => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ORIGIN);
                if self.options.fallback == FallbackPolicy::Wildcard {
                    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                }
                headers
            }
        }
    }

    pub(crate) fn build_credentials_header(&self, decision: &OriginDecision) -> HeaderCollection {
        if decision.is_credentialed() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.options.allowed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
