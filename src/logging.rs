use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber once. `PINSIM_LOG` takes an `EnvFilter`
/// directive; without it the level follows `verbosity` (0 = info).
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let fallback = match verbosity {
            0 => "pinsim=info",
            1 => "pinsim=debug",
            _ => "pinsim=trace",
        };
        let filter =
            EnvFilter::try_from_env("PINSIM_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
