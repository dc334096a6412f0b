use env_logger::WriteStyle;
use log::LevelFilter;
use std::io::Write;

/// Installs an `env_logger` backend for the `log` records emitted by the simulation.
///
/// Defaults to `Info`; `RUST_LOG` overrides the filter.
/// Fails if a global logger is already installed, which callers can ignore.
pub fn try_init_logging() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "[HSIM | {} | {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .try_init()
}
