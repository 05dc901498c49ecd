mod error;
mod server;
pub mod services;

pub use error::StartupError;
pub use server::{build_app, run};
