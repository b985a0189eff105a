use clap::Parser;
use contact_form::{
    api::routes,
    cli::{self, Cli, Commands},
    contact::ContactSubmission,
    Result, Settings,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,contact_form=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let settings = Settings::from_env()?;
            serve(settings, port, host).await?;
        }
        Commands::Check {
            name,
            email,
            message,
        } => {
            let accepted = cli::commands::check(&ContactSubmission::new(name, email, message))?;
            if !accepted {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    settings.apply_overrides(port, host);
    settings.validate()?;

    info!("Starting contact form server");
    info!("Static assets: {}", settings.server.static_dir.display());

    let app = routes::create_router(&settings);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    info!("Shutting down...");
    Ok(())
}
