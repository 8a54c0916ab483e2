use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Logs to stderr so computed results on stdout stay machine-readable.
pub fn setup_logging(log_level: LevelFilter) -> anyhow::Result<()> {
    Dispatch::new()
        .format(|out, msg, record| {
            out.finish(format_args!(
                "[{}] {: >5} [{}] {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                msg
            ))
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
