use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

/// Initialise `env_logger` on stderr.
///
/// `RUST_LOG` is read first; `level` then overrides the global filter so
/// `--log-level` always wins.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.format(|buf, record| {
        let level = record.level();
        let colored_level = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };
        writeln!(
            buf,
            "{} [{}] {}",
            record.target().cyan(),
            colored_level,
            record.args()
        )
    });
    builder.try_init()
}
