//! Logging setup for the bounce tool and other binaries

use std::io::Write;

/// Install an `env_logger` backend for the `log` facade.
///
/// Defaults to INFO; `RUST_LOG` takes precedence when set. Calling it more
/// than once is harmless.
pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .try_init();
}
