pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Client-facing response bodies. Fault details never leave the process.
pub mod message {
    pub const HEALTHY: &str = "Server is healthy";
    pub const FAULT: &str = "Something went wrong!";
    pub const NOT_FOUND: &str = "Not found";
}

/// Origins the portal frontends are served from.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://naye-pankh-intern-portal.vercel.app",
    "https://naye-pankh-intern-portal-ox93.vercel.app",
    "http://localhost:3000",
];
