use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use task_requests::backend::MemoryBackend;
use task_requests::config::Config;
use task_requests::ui::{run_app, AppComponent};
use task_requests::{logger, utils::datetime};

#[derive(Parser)]
#[command(name = "task-requests")]
#[command(about = "Create task requests from the terminal", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Path to a configuration file")]
    config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        help = "Write the default configuration (to PATH or the XDG config directory) and exit"
    )]
    generate_config: Option<Option<PathBuf>>,

    #[arg(long, help = "Open directly on the confirmation view for this request id")]
    request_id: Option<String>,

    #[arg(long, help = "Task the request is about; submission is disabled while set")]
    task_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(config.logging.enabled)?;
    log::info!("Starting task-requests with tracking host {}", config.tracking.host);

    let backend = Arc::new(MemoryBackend::new(config.backend.simulated_latency_ms));
    let app = AppComponent::new(&config, backend, datetime::today(), cli.request_id, cli.task_id);

    run_app(app, config.ui.mouse_enabled).await
}
