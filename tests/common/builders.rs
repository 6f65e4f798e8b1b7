#![allow(dead_code)]

use pankh_gatekeeper::constants::method;
use pankh_gatekeeper::{
    AllowList, AllowedHeaders, AllowedMethods, FallbackPolicy, GateDecision, Gatekeeper,
    GatekeeperOptions, Headers, RequestContext,
};

pub const PORTAL: &str = "https://naye-pankh-intern-portal.vercel.app";
pub const PORTAL_PREVIEW: &str = "https://naye-pankh-intern-portal-ox93.vercel.app";
pub const LOCAL_DEV: &str = "http://localhost:3000";
pub const EVIL: &str = "https://evil.example.com";

#[derive(Default)]
pub struct GatekeeperBuilder {
    origins: Option<Vec<String>>,
    fallback: Option<FallbackPolicy>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    preflight_status: Option<u16>,
}

impl GatekeeperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn strict(mut self) -> Self {
        self.fallback = Some(FallbackPolicy::Omit);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.preflight_status = Some(status);
        self
    }

    pub fn build(self) -> Gatekeeper {
        let GatekeeperOptions {
            allow_list: default_allow_list,
            fallback: default_fallback,
            methods: default_methods,
            allowed_headers: default_allowed_headers,
            preflight_status: default_preflight_status,
        } = GatekeeperOptions::default();

        Gatekeeper::new(GatekeeperOptions {
            allow_list: self
                .origins
                .map(AllowList::new)
                .unwrap_or(default_allow_list),
            fallback: self.fallback.unwrap_or(default_fallback),
            methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
            preflight_status: self.preflight_status.unwrap_or(default_preflight_status),
        })
        .expect("valid gatekeeper configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(&self, gatekeeper: &Gatekeeper) -> GateDecision {
        gatekeeper.check(&self.context())
    }

    pub fn decide(&self, gatekeeper: &Gatekeeper) -> Headers {
        gatekeeper.decide(&self.context())
    }

    fn context(&self) -> RequestContext<'_> {
        RequestContext::new(&self.method, self.origin.as_deref())
    }
}

pub fn gatekeeper() -> GatekeeperBuilder {
    GatekeeperBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn request(method: &str) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
