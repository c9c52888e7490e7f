use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, info};

static EPOCH: OnceLock<Instant> = OnceLock::new();

fn epoch() -> Instant {
    *EPOCH.get_or_init(Instant::now)
}

/// Install the global logger. Lines are prefixed with level, time since start
/// and thread name.
pub fn init_logger(level_filter: LevelFilter) -> anyhow::Result<()> {
    epoch();
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let elapsed = epoch().elapsed().as_secs();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                elapsed / 3600,
                (elapsed / 60) % 60,
                elapsed % 60,
                thread_name,
            );
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("logger initialized at level {level_filter}");
    Ok(())
}
