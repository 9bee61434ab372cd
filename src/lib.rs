pub mod error;
pub mod config;
pub mod util;
pub mod storage;
pub mod ledger;
pub mod active_quest;
pub mod toast;
pub mod marketplace;
pub mod event;
pub mod app;
pub mod ui;

pub use config::AppConfig;
pub use error::{JugaadError, Result};
