use crate::constants::message;
use crate::error::not_found_response;
use axum::response::Response;

/// Path prefixes the business routers are mounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiPrefix {
    Auth,
    Users,
    Dashboard,
    Donate,
    Donations,
    Campaign,
}

impl ApiPrefix {
    pub const ALL: [ApiPrefix; 6] = [
        ApiPrefix::Auth,
        ApiPrefix::Users,
        ApiPrefix::Dashboard,
        ApiPrefix::Donate,
        ApiPrefix::Donations,
        ApiPrefix::Campaign,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ApiPrefix::Auth => "/api/auth",
            ApiPrefix::Users => "/api/users",
            ApiPrefix::Dashboard => "/api/dashboard",
            ApiPrefix::Donate => "/api/donate",
            ApiPrefix::Donations => "/api/donations",
            ApiPrefix::Campaign => "/api/campaign",
        }
    }
}

pub async fn health() -> &'static str {
    message::HEALTHY
}

pub async fn not_found() -> Response {
    not_found_response()
}
