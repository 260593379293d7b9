use finbooks_ledger::CompanyRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    finbooks_observability::init();

    let addr = std::env::var("FINBOOKS_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = finbooks_api::app::build_app(CompanyRegistry::standard());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
