//! Deploy entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use shared::{ServiceId, logging};

use deployer::config::{
    DEFAULT_API_HEALTH_URL, DEFAULT_COMPOSE_FILE, DEFAULT_PROBE_TIMEOUT_SECS,
    DEFAULT_STARTUP_DELAY_SECS, DEFAULT_WEB_URL,
};
use deployer::services::{RealDockerCompose, RealHttpProber};
use deployer::{DeployConfig, DeployResult, Deployer, exit_code};

#[derive(Parser, Debug)]
#[command(name = "deploy")]
#[command(about = "Build and start the compose stack, then health-check it")]
struct Args {
    /// Compose file passed to `docker compose -f`
    #[arg(long, env = "DEPLOY_COMPOSE_FILE", default_value = DEFAULT_COMPOSE_FILE)]
    compose_file: PathBuf,

    /// Directory to run docker commands in
    #[arg(long, env = "DEPLOY_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Seconds to wait between starting containers and probing them
    #[arg(long, env = "DEPLOY_STARTUP_DELAY", default_value_t = DEFAULT_STARTUP_DELAY_SECS)]
    startup_delay: u64,

    /// Per-probe HTTP timeout in seconds
    #[arg(long, env = "DEPLOY_PROBE_TIMEOUT", default_value_t = DEFAULT_PROBE_TIMEOUT_SECS)]
    probe_timeout: u64,

    #[arg(long, env = "DEPLOY_WEB_URL", default_value = DEFAULT_WEB_URL)]
    web_url: String,

    #[arg(long, env = "DEPLOY_API_HEALTH_URL", default_value = DEFAULT_API_HEALTH_URL)]
    api_health_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

async fn deploy(args: Args) -> DeployResult<()> {
    let config = DeployConfig::new(&args.web_url, &args.api_health_url)?
        .with_compose_file(args.compose_file)
        .with_project_dir(args.project_dir)
        .with_startup_delay(Duration::from_secs(args.startup_delay))
        .with_probe_timeout(Duration::from_secs(args.probe_timeout));

    let orchestrator = RealDockerCompose::new(config.compose_file.clone())
        .with_project_dir(config.project_dir.clone());
    let prober = RealHttpProber::new(config.probe_timeout)?;

    let deployer = Deployer::new(orchestrator, prober, config);
    let mut stdout = std::io::stdout();
    deployer.run(&mut stdout).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ServiceId::init_deployer();
    if let Err(e) = logging::init_tracing(ServiceId::current(), &args.log_level) {
        eprintln!("❌ {e}");
        return ExitCode::FAILURE;
    }

    let result = deploy(args).await;
    if let Err(e) = &result {
        eprintln!("❌ {e}");
    }
    exit_code(&result)
}
