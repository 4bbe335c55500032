//! Client-side screening, answering-service proxy, and presentation shell for the
//! mutual fund FAQ assistant.

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod pii;
pub mod proxy;
pub mod response;
pub mod shell;
pub mod telemetry;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub(crate) static APP_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
