use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Initialize the logger with the given level, optionally teeing every line
/// into an append-only log file.
pub fn initialize_logger<P: AsRef<Path>>(
    log_path: Option<P>,
    log_level_str: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = match log_level_str.parse::<log::LevelFilter>() {
        Ok(level) => level,
        Err(_) => log::LevelFilter::Info,
    };

    let log_file = match log_path {
        Some(path) => Some(Mutex::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let logger = env_logger::Builder::new()
        .format(move |buf, record| {
            let line = format!(
                "{} [{}] - {}",
                Utc::now().to_rfc3339(),
                record.level(),
                record.args()
            );

            if let Some(file) = &log_file
                && let Ok(mut file) = file.lock()
            {
                let _ = writeln!(file, "{line}");
            }

            writeln!(buf, "{line}")
        })
        .filter_level(log_level)
        .build();

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(log_level);

    Ok(())
}
