/// Severity of a log message
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Browser-console logger tagging every line with the emitting component
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn debug_with_component(&self, component: &str, message: &str) {
        self.log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(&self, component: &str, message: &str) {
        self.log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(&self, component: &str, message: &str) {
        self.log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(&self, component: &str, message: &str) {
        self.log(LogLevel::Error, component, message);
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, component: &str, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let line = format_line(level, component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

fn format_line(level: LogLevel, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level.as_str(), component, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_level_filtering() {
        let logger = Logger::new(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[wasm_bindgen_test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[wasm_bindgen_test]
    fn test_format_line() {
        assert_eq!(
            format_line(LogLevel::Error, "daily-statistics", "fetch failed"),
            "[error] daily-statistics: fetch failed"
        );
    }
}
