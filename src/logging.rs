use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Log file written next to the working directory; the terminal is reserved for the maze.
pub const LOG_FILE_NAME: &str = "centre-maze.log";

/// Installs a file-backed subscriber. `DEBUG=1` lowers the level to `DEBUG`.
///
/// Keep the returned guard alive for the lifetime of the program, dropping it flushes the log.
pub fn init_tracing() -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    };
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
