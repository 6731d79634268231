use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use nutridish_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.server.log_json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state(args.clone()).await?;
    let app = router(app_state)?;

    let addr = SocketAddr::new(args.server.host, args.server.port);
    info!("listening on {}", addr);

    axum_server::bind(addr).serve(app.into_make_service()).await?;

    Ok(())
}
