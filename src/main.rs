use std::{net::SocketAddr, process};

use notes_proxy::{config::Config, router};
use notes_store::SupabaseStore;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("refusing to start: {e}");
            process::exit(1);
        }
    };

    let store = SupabaseStore::new(cfg.supabase_url.clone(), cfg.supabase_key.clone());
    let app = router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("failed to bind {addr}: {e}");
            panic!("failed to bind {addr}: {e}");
        });

    tracing::info!(
        "notes proxy listening on {}, forwarding to {}",
        listener.local_addr().unwrap(),
        cfg.supabase_url
    );
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}
