use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{LogError, level_to_log_level, log_level_to_level, parse_log_level};
use std::sync::Once;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
            file: None,
            stdout: true,
        };

        assert!(crate::logging::init(&config).is_ok());
    });

    // A second initialisation is not an error
    assert!(crate::logging::init(&LoggingConfig::default()).is_ok());
}

#[test]
fn test_init_without_outputs_is_noop() {
    let config = LoggingConfig {
        stdout: false,
        file: None,
        ..LoggingConfig::default()
    };
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert_eq!(parse_log_level("info").unwrap(), LogLevel::Info);
    assert_eq!(parse_log_level("warn").unwrap(), LogLevel::Warn);
    assert_eq!(parse_log_level("error").unwrap(), LogLevel::Error);
    assert!(matches!(
        parse_log_level("invalid"),
        Err(LogError::InvalidLogLevel(_))
    ));

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);

    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        assert_eq!(level_to_log_level(log_level_to_level(level)), level);
    }
}
