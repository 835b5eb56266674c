//! Dev server entry point

use anyhow::Context;
use clap::Parser;
use shared::{ServiceId, logging};
use std::path::PathBuf;

use devserver::config::{DEFAULT_INDEX, DEFAULT_PORT, DEFAULT_ROOT};
use devserver::services::{
    RealBrowserLauncher, RealNetworkInspector, RealPortProbe, RealSiteServer, RealStaticFileServer,
};
use devserver::{LaunchConfig, LaunchOutcome, Launcher};

#[derive(Parser, Debug)]
#[command(name = "devserver")]
#[command(about = "Serve the web front end locally and open it in a browser")]
struct Args {
    /// Port for the static site
    #[arg(long, env = "DEVSERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory to serve
    #[arg(long, env = "DEVSERVER_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Page opened in the browser
    #[arg(long, env = "DEVSERVER_INDEX", default_value = DEFAULT_INDEX)]
    index: String,

    /// Do not open a browser
    #[arg(long, env = "DEVSERVER_NO_BROWSER")]
    no_browser: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ServiceId::init_devserver();
    logging::init_tracing(ServiceId::current(), &args.log_level)?;
    logging::log_startup(ServiceId::current(), "static site launcher");

    let config = LaunchConfig::new(args.port, &args.root, &args.index, !args.no_browser)
        .context("invalid launcher configuration")?;

    let files = RealStaticFileServer::new(&config.root).with_index(&config.index);
    let launcher = Launcher::new(
        config,
        RealNetworkInspector::new(),
        RealPortProbe,
        RealBrowserLauncher::new(),
        RealSiteServer::new(files),
    );

    let mut stdout = std::io::stdout();
    let outcome = launcher
        .launch(&mut stdout)
        .await
        .context("dev server failed")?;

    if let LaunchOutcome::AlreadyRunning { url } = outcome {
        logging::log_success(ServiceId::current(), &format!("Reusing the server at {url}"));
    }
    Ok(())
}
