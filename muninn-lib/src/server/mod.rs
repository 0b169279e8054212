pub mod connection;
pub mod context;
pub mod handler;
pub mod http_result;
pub mod listener;
pub mod response;
pub mod routes;
pub mod transport;

pub use context::RequestContext;
pub use handler::{handle_request, respond};
pub use http_result::{HttpError, HttpResult};
pub use listener::{run, serve, shutdown_signal};
pub use routes::{pick_route, Route, FINGERPRINT_PATH};
