//! API server entry point

use clap::Parser;
use shared::{ServiceId, logging};

use apiserver::{ApiServer, ApiServerConfig, ApiServerResult};

#[derive(Parser, Debug)]
#[command(name = "apiserver")]
#[command(about = "Payroll data structures REST API")]
struct Args {
    /// Address to bind
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port for HTTP server
    #[arg(long, env = "API_PORT", default_value_t = apiserver::config::DEFAULT_PORT)]
    port: u16,

    /// Maximum number of items on the stack (unlimited if omitted)
    #[arg(long, env = "API_STACK_CAPACITY")]
    stack_capacity: Option<usize>,

    /// Maximum number of items in the queue (unlimited if omitted)
    #[arg(long, env = "API_QUEUE_CAPACITY")]
    queue_capacity: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ApiServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ServiceId::init_apiserver();
    logging::init_tracing(ServiceId::current(), &args.log_level)?;
    logging::log_startup(ServiceId::current(), "Payroll Data Structures API Server");

    let config = ApiServerConfig::from_parts(
        &args.host,
        args.port,
        args.stack_capacity,
        args.queue_capacity,
    )?;

    let server = ApiServer::new(config);
    if let Err(e) = server.run().await {
        logging::log_error(ServiceId::current(), "API server", &e);
        return Err(e);
    }

    logging::log_success(ServiceId::current(), "API server stopped gracefully");
    Ok(())
}
