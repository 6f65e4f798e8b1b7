//! On-demand invocation adapter: one call per request, no listener.

use crate::app::App;
use crate::config::Config;
use crate::gatekeeper::Gatekeeper;
use crate::options::ValidationError;
use axum::{Router, extract::Request, response::Response};
use tower::ServiceExt;

#[derive(Clone)]
pub struct Handler {
    router: Router,
}

impl Handler {
    pub fn new(app: App) -> Self {
        Self {
            router: app.into_router(),
        }
    }

    /// Builds a handler with nothing mounted under the business prefixes.
    pub fn from_config(config: &Config) -> Result<Self, ValidationError> {
        let gatekeeper = Gatekeeper::new(config.gatekeeper_options())?;
        Ok(Self::new(App::new(gatekeeper)))
    }

    pub async fn handle(&self, request: Request) -> Response {
        match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}
