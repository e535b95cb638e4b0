use std::sync::Once;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

static INIT: Once = Once::new();

/// Installs the global fmt subscriber on stderr. `RUST_LOG` overrides the
/// default level.
pub fn init_logging(verbose: bool) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
