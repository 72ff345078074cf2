use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use plately_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    match (&args.server.tls_cert, &args.server.tls_key) {
        (Some(cert), Some(key)) => {
            let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
            let config =
                axum_server::tls_rustls::RustlsConfig::from_pem_file(cert, key).await?;

            tracing::info!("listening on https://{}", addr);
            axum_server::bind_rustls(addr, config)
                .serve(router.into_make_service())
                .await?;
        }
        _ => {
            tracing::info!("listening on http://{}", addr);
            axum_server::bind(addr)
                .serve(router.into_make_service())
                .await?;
        }
    }

    Ok(())
}
