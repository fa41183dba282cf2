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

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
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

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn global_log_level() -> LogLevel {
    LogLevel::from_u8(GLOBAL_LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_global_log_level(level: LogLevel) {
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

fn should_log(level: LogLevel) -> bool {
    level >= global_log_level()
}

pub trait LogHandler: Send + Sync {
    fn handle(&self, level: LogLevel, msg: &str);
}

/// Writes everything to stderr so stdout only ever carries codec output.
pub struct ConsoleLogger;

impl LogHandler for ConsoleLogger {
    fn handle(&self, _level: LogLevel, msg: &str) {
        eprintln!("{}", msg);
    }
}

fn lock_handler<'a>() -> MutexGuard<'a, Box<dyn LogHandler>> {
    let handler = GLOBAL_LOG_HANDLER.get_or_init(|| Mutex::new(Box::new(ConsoleLogger)));
    // A panicking handler must not take logging down with it
    handler.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_global_log_handler(handler: Box<dyn LogHandler>) {
    *lock_handler() = handler;
}

pub fn log(level: LogLevel, target: &str, msg: &str) {
    if !should_log(level) {
        return;
    }

    let cur_thread = std::thread::current().id();
    let formatted_msg = format!("[{}] [{:?}] [{}] {}", level, cur_thread, target, msg);
    lock_handler().handle(level, &formatted_msg);
}

pub fn debug(target: &str, msg: &str) {
    log(LogLevel::Debug, target, msg);
}

pub fn info(target: &str, msg: &str) {
    log(LogLevel::Info, target, msg);
}

pub fn warn(target: &str, msg: &str) {
    log(LogLevel::Warning, target, msg);
}

pub fn error(target: &str, msg: &str) {
    log(LogLevel::Error, target, msg);
}
