//! Инфраструктурный слой вокруг доменной модели:
//! - конфиг игрока (TOML);
//! - инициализация логов.

pub mod config;
pub mod logging;

pub use config::PlayerConfig;
pub use logging::{env_filter, init_logging, DEFAULT_LOG_FILTER};
