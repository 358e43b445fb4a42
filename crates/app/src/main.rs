mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spese={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    // State lives and dies with the process; there is nothing to hydrate.
    let engine = engine::Engine::new();
    tracing::info!("Starting expense API...");

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(engine, listener).await?;

    Ok(())
}
