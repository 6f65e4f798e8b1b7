use crate::error::panic_response;
use crate::gatekeeper::Gatekeeper;
use crate::middleware::{SharedGatekeeper, gatekeeper_middleware};
use crate::routes::{self, ApiPrefix};
use axum::{Router, middleware::from_fn_with_state, routing::get};
use indexmap::IndexMap;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Application core shared by both lifecycle adapters.
///
/// Layer order, outermost first: gatekeeper, panic catcher, router. The
/// gatekeeper therefore sees every response, including faults.
#[derive(Clone)]
pub struct App {
    gatekeeper: SharedGatekeeper,
    mounts: IndexMap<ApiPrefix, Router>,
}

impl App {
    pub fn new(gatekeeper: Gatekeeper) -> Self {
        Self {
            gatekeeper: Arc::new(gatekeeper),
            mounts: IndexMap::new(),
        }
    }

    /// Mounts a business router under `prefix`. Mounting the same prefix
    /// twice merges both routers.
    pub fn mount(mut self, prefix: ApiPrefix, router: Router) -> Self {
        let router = match self.mounts.shift_remove(&prefix) {
            Some(existing) => existing.merge(router),
            None => router,
        };
        self.mounts.insert(prefix, router);
        self
    }

    pub fn mounted(&self) -> impl Iterator<Item = ApiPrefix> + '_ {
        self.mounts.keys().copied()
    }

    pub fn into_router(self) -> Router {
        let mut router = Router::new().route("/", get(routes::health));
        for (prefix, mounted) in self.mounts {
            router = router.nest(prefix.path(), mounted);
        }

        router
            .fallback(routes::not_found)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(from_fn_with_state(self.gatekeeper, gatekeeper_middleware))
    }
}
