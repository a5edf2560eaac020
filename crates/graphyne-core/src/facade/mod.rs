mod config;
mod error;
mod request;

pub use config::RuntimeConfig;
pub use config::RuntimeConfigBuilder;
pub use error::RequestError;
pub use request::Request;
