use anyhow::Result;
use vocast_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    vocast_api::telemetry::init_telemetry();

    let (_state, router) = vocast_api::setup::initialize_app(config.clone()).await?;
    vocast_api::setup::server::start_server(&config, router).await
}
