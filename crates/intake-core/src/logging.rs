use crate::Result;

/// Initialize logging/tracing for the bot.
///
/// The default build keeps plain console diagnostics; the `tracing` feature
/// switches startup and handler logs to `tracing-subscriber`.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for our crates, warn for everything else.
        // Can be overridden with `RUST_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "info,intake_core=info,intake_telegram=info,{service_name}=info"
            ))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(true)
            .init();
    }

    Ok(())
}
