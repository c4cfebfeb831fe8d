mod app;
mod config;
mod error;
mod presence;
mod registry;
mod relay;
mod service;
mod transport;

pub use app::*;
pub use config::*;
pub use error::*;
pub use presence::*;
pub use registry::*;
pub use relay::*;
pub use service::*;
pub use transport::*;
