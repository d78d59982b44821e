pub mod config;
pub use config::AppConfig as Config;

pub mod data;
pub use data::DataError;

pub mod logging;
pub mod poise;
pub mod secrets;
