// gemtranslate - Structured multilingual translation over the Gemini API
// Author: kelexine (https://github.com/kelexine)

use anyhow::{Context, Result};
use clap::Parser;
use gemtranslate::cli::{check_target_language, Args, Command};
use gemtranslate::config::AppConfig;
use gemtranslate::gemini::GeminiClient;
use gemtranslate::languages;
use gemtranslate::server::create_router;
use gemtranslate::translation::{RequestBuilder, TranslationRequest, Translator};
use gemtranslate::utils::logging;
use gemtranslate::{classify, ImagePayload};
use std::net::SocketAddr;
use std::path::Path;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration (CLI flags take precedence)
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    }
    .with_api_key(args.api_key.clone());

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gemtranslate v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Languages => {
            for language in languages::all() {
                println!("{}  {:<4} {}", language.flag, language.code, language.name);
            }
            Ok(())
        }
        Command::Translate { text, target, image, pretty } => {
            run_translate(&config, text, target, image.as_deref(), pretty).await
        }
        Command::Serve { port } => run_server(config, port).await,
    }
}

async fn run_translate(
    config: &AppConfig,
    text: Option<String>,
    target: String,
    image: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    check_target_language(&target);

    let image = match image {
        Some(path) => {
            let data = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            Some(ImagePayload::from_bytes(data, None))
        }
        None => None,
    };

    let translator = Translator::new(
        GeminiClient::new(&config.gemini)?,
        RequestBuilder::from_config(&config.gemini),
    );
    let request = TranslationRequest {
        text,
        target_language: target,
        image,
    };

    match translator.translate(&request).await {
        Ok(result) => {
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            let user_error = classify(&e);
            error!("{}", user_error.detail);
            anyhow::bail!("{} ({})", user_error.message, user_error.kind.as_str())
        }
    }
}

async fn run_server(config: AppConfig, port: Option<u16>) -> Result<()> {
    let translator = Translator::new(
        GeminiClient::new(&config.gemini)?,
        RequestBuilder::from_config(&config.gemini),
    );
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", config.server.host, port).parse()?;

    let app = create_router(config, translator);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
