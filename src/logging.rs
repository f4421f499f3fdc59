use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; `debug` can be enabled
/// via the settings file, in which case `RUST_LOG` may override it.
///
/// When `log_file` is set, output is also appended to that file. Keep the
/// returned guard alive for as long as logs should be flushed.
pub fn init(debug: bool, log_file: Option<&str>) -> Option<WorkerGuard> {
    // Without debug logging `RUST_LOG` is ignored so a stray variable in the
    // user's environment cannot turn on verbose output.
    let level = if debug { "debug" } else { "info" };
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    match log_file.map(Path::new) {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let name = path.file_name().unwrap_or(path.as_os_str());
            let appender = tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), name);
            let (file, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr.and(file))
                .try_init();
            Some(guard)
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
            None
        }
    }
}
