use std::sync::{
    atomic::{AtomicU8, Ordering},
    Mutex, MutexGuard, OnceLock,
};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

static GLOBAL_LOG_LEVEL: OnceLock<AtomicU8> = OnceLock::new();
static GLOBAL_LOG_HANDLER: OnceLock<Mutex<Box<dyn LogHandler>>> = OnceLock::new();

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn from_u8(val: u8) -> LogLevel {
        match val {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }
}

fn level_cell() -> &'static AtomicU8 {
    GLOBAL_LOG_LEVEL.get_or_init(|| AtomicU8::new(LogLevel::Warning as u8))
}

fn current_global_level() -> LogLevel {
    LogLevel::from_u8(level_cell().load(Ordering::Relaxed))
}

fn should_log(level: LogLevel) -> bool {
    level >= current_global_level()
}

pub fn set_global_log_level(level: LogLevel) {
    level_cell().store(level as u8, Ordering::Relaxed);
}

pub trait LogHandler: Send + Sync {
    fn handle(&self, level: LogLevel, msg: &str);
}

/// Writes every record to stderr; stdout is reserved for encoded output.
pub struct ConsoleLogger;

impl LogHandler for ConsoleLogger {
    fn handle(&self, _level: LogLevel, msg: &str) {
        eprintln!("{}", msg);
    }
}

fn global_handler() -> MutexGuard<'static, Box<dyn LogHandler>> {
    let handler = GLOBAL_LOG_HANDLER.get_or_init(|| Mutex::new(Box::new(ConsoleLogger)));
    // Keep logging after a handler panicked while holding the lock.
    handler.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_global_log_handler(handler: Box<dyn LogHandler>) {
    *global_handler() = handler;
}

pub fn log(level: LogLevel, name: &str, msg: &str) {
    if !should_log(level) {
        return;
    }

    let formatted_msg = format!("[{}] [{}] {}", level.as_str(), name, msg);
    global_handler().handle(level, &formatted_msg);
}

pub fn debug(name: &str, msg: &str) {
    log(LogLevel::Debug, name, msg);
}

pub fn warn(name: &str, msg: &str) {
    log(LogLevel::Warning, name, msg);
}
