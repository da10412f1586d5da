pub mod http;
pub mod logging;
pub mod owner_middleware;
