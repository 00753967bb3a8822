//! HTTP middleware stack for the portal.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame denial, etc.)
//! 5. Edge guard (role-based redirects from identity cookies)
//! 6. Session layer (tower-sessions with in-memory store)

pub mod edge_guard;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use edge_guard::edge_guard_middleware;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
