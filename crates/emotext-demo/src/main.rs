use clap::Parser;
use emotext_demo::cli::{Cli, Commands};
use emotext_demo::config::DemoConfig;
use emotext_demo::server::run_server;
use emotext_demo::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let common = cli.command.common().clone();

    init_logging(common.verbose);

    let mut config = DemoConfig::load(&common)?;
    let state = AppState::from_config(&config)?;

    match cli.command {
        Commands::Serve { port, address, .. } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(address) = address {
                config.server.address = address;
            }

            let addr: SocketAddr =
                format!("{}:{}", config.server.address, config.server.port).parse()?;

            println!();
            println!("  Text Emotion Detection");
            println!();
            println!("  Model:   {}", config.model_path.display());
            println!("  Classes: {}", state.pipeline.classes().join(", "));
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Predict { text, json, .. } => match state.pipeline.analyze(&text).await {
            Ok(analysis) if json => {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            }
            Ok(analysis) => {
                println!("Prediction: {}", analysis.prediction_line());
                println!("Confidence: {}", analysis.confidence);
                println!();
                for entry in analysis.distribution.iter() {
                    println!(
                        "  {:<12} {:>6.2}%  {}",
                        entry.label,
                        entry.probability * 100.0,
                        "█".repeat((entry.probability * 40.0).round() as usize)
                    );
                }
            }
            Err(err) if err.is_recoverable() => {
                eprintln!("{}", err);
                std::process::exit(2);
            }
            Err(err) => return Err(err.into()),
        },

        Commands::Inspect { .. } => {
            let glyphs = state.pipeline.glyphs();
            let classes = state.pipeline.classes();
            let coverage = glyphs.coverage(classes);

            println!("Model:   {}", config.model_path.display());
            println!("Name:    {}", state.pipeline.classifier().name());
            println!("Classes: {}", classes.len());
            for class in classes {
                let marker = if glyphs.contains(class) { "" } else { "  (default)" };
                println!("  {:<12} {}{}", class, glyphs.lookup(class), marker);
            }
            if !coverage.is_complete() {
                println!();
                println!(
                    "{} class(es) fall back to {}: {}",
                    coverage.unmapped.len(),
                    glyphs.default_glyph(),
                    coverage.unmapped.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "emotext_demo=debug,emotext_classifiers=debug,tower_http=debug"
    } else {
        "emotext_demo=info,emotext_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
