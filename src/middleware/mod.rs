// Middleware modules
pub mod logging;

// Export logging middleware
pub use logging::{logging_middleware, REQUEST_ID_HEADER};
