pub mod asserts;
pub mod builders;
pub mod headers;
pub mod http;
