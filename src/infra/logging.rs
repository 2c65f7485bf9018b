use tracing_subscriber::EnvFilter;

/// Фильтр по умолчанию, если `RUST_LOG` не задан.
pub const DEFAULT_LOG_FILTER: &str = "card_player=info,warn";

/// Выбрать фильтр логов: `RUST_LOG` приоритетнее, `debug` включает всё.
pub fn env_filter(debug: bool) -> EnvFilter {
    let fallback = if debug { "debug" } else { DEFAULT_LOG_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Поставить глобальный подписчик tracing. Повторный вызов игнорируется.
pub fn init_logging(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .try_init();
}
