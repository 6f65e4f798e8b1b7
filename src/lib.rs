pub mod constants;
mod allow_list;
mod allowed_headers;
mod allowed_methods;
mod context;
mod gatekeeper;
mod header_builder;
mod headers;
mod options;
mod origin;
mod result;
mod util;

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod serverless;
pub mod telemetry;

pub use allow_list::AllowList;
pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use gatekeeper::Gatekeeper;
pub use headers::{Headers, merge_vary};
pub use options::{GatekeeperOptions, ValidationError};
pub use origin::{FallbackPolicy, OriginDecision};
pub use result::{GateDecision, PreflightResult};
