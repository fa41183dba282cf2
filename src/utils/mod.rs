pub mod log;

pub use log::{
    ConsoleLogger,
    LogHandler,
    LogLevel,
    set_global_log_handler,
    set_global_log_level,
};
