//! Server binary: starts the axum web server and waits for Ctrl+C.

use qr_service_lib::app::SharedState;
use qr_service_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qr_service_lib::init_tracing();

    tracing::info!("Starting QR service");

    let config = qr_service_lib::init_foundation();
    let state = SharedState::new(config);

    let server_state = state.clone();
    let mut server_handle = tokio::spawn(async move { server::start_server(server_state).await });

    tracing::info!(
        port = state.server_port(),
        "QR service running. Press Ctrl+C to stop."
    );

    tokio::select! {
        res = &mut server_handle => {
            // Server exited on its own (bind failure, I/O error).
            return match res {
                Ok(inner) => inner,
                Err(e) => Err(e.into()),
            };
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
        }
    }

    tracing::info!("Shutting down...");
    state.shutdown_token().cancel();

    match server_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Server failed: {e}"),
        Err(e) => tracing::error!("Server task panicked: {e}"),
    }
    Ok(())
}
