//! `kennel` binary entrypoint.

use anyhow::Result;
use kennel_cli::{execute, load_config, logging, parse_from};

fn main() -> Result<()> {
    let options = match parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    let config = load_config(&options.invocation)?;
    logging::init(options.log.as_deref(), &config.log_filter)?;
    tracing::debug!("Running {:?}", options.invocation);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&options.invocation, &config, &mut out)
}
