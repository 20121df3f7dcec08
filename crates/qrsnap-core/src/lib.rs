pub mod config;
pub mod logging;

pub mod browser;
pub mod coordinator;
pub mod har;
pub mod observed;
pub mod provider;
pub mod router;
pub mod scan;
pub mod session;
pub mod strategy;
