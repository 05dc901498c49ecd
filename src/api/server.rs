use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{error::StartupError, services};
use crate::config::{Config, RedirectFile, validate_entries};
use crate::redirect::{RedirectHandler, RedirectTable, map_handler, parse};

/// Build the redirect chain described by `config`
///
/// Requests pass through the redirect file table (if one is configured),
/// then the inline table, then the hello router.
pub async fn build_app(config: &Config) -> Result<Router, StartupError> {
    let table = RedirectTable::build(config.redirects.iter().cloned());
    info!(routes = table.len(), "Inline redirect table ready");
    let inline = map_handler(table, services::router());

    let app = match config.source.redirect_file() {
        Some(file) => {
            let handler = load_redirect_file(&file, config.source.strict, inline).await?;
            Router::new().fallback_service(handler)
        }
        None => Router::new().fallback_service(inline),
    };

    Ok(app.layer(TraceLayer::new_for_http()))
}

async fn load_redirect_file<F>(
    file: &RedirectFile,
    strict: bool,
    fallback: F,
) -> Result<RedirectHandler<F>, StartupError> {
    info!(path = %file.path.display(), format = ?file.format, "Loading redirect file");

    let buf = tokio::fs::read(&file.path)
        .await
        .map_err(|source| StartupError::ReadFile {
            path: file.path.clone(),
            source,
        })?;

    let entries = parse(&buf, file.format).map_err(|source| StartupError::ParseFile {
        path: file.path.clone(),
        source,
    })?;

    if strict {
        validate_entries(&entries)?;
    }

    let table = RedirectTable::build(entries);
    info!(routes = table.len(), "Redirect file loaded");

    Ok(map_handler(table, fallback))
}

pub async fn run(config: Config) -> Result<(), StartupError> {
    let app = build_app(&config).await?;

    let address = config.server.bind_addr;
    let listener = TcpListener::bind(address).await?;
    info!(%address, "urlshort listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
