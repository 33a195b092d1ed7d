// Infrastructure models
pub mod service;

pub use service::ServiceKind;
