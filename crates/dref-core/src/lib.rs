pub mod config;
pub mod error;
pub mod logging;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod session;

mod fetch;
mod handlers;

pub use error::ResolveError;
pub use resolver::Resolver;
