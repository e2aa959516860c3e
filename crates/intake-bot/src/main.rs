use std::sync::Arc;

use intake_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), intake_core::Error> {
    intake_core::logging::init("intake_bot")?;

    let cfg = Arc::new(Config::load()?);

    intake_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| intake_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
