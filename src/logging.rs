use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber for the demo.
///
/// Plain runs log at `info`: mount/unmount and saved signatures. With
/// `debug_logging` on in the settings file, stroke begin/end, clears and
/// suppressed wheel events show up too, and `RUST_LOG` takes precedence.
pub fn init(debug_logging: bool) {
    let default_level = if debug_logging { "debug" } else { "info" };

    // RUST_LOG is only honoured in debug mode, so a stray variable in the
    // environment cannot flood a normal run.
    let filter = match debug_logging {
        true => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level)),
        false => EnvFilter::new(default_level),
    };

    // A subscriber may already be installed (e.g. by a host embedding the pad).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
