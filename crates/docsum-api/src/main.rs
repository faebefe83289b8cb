use docsum_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    // Storage, queue, result store, workflow, routes and consumer
    let app = docsum_api::setup::initialize_app(config.clone()).await?;

    docsum_api::setup::server::start_server(&config, app).await?;

    Ok(())
}
