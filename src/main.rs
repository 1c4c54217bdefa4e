//! The CGI adapter binary.
//!
//! Everything contract-shaped lives in the library; this file only wires
//! it to the process: environment in, stdin body in, report out on
//! stdout, logs on stderr. The hosting server maps a non-zero exit to its
//! own 500 page.

use std::process::ExitCode;

use tracing::{error, info, warn};

use ekho::{CgiEnv, NOT_SET, render_request};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the CGI response; logs must go to stderr, which the
    // server collects into its error log.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("request failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ekho::Error> {
    let env = CgiEnv::from_process();

    if env.display("GATEWAY_INTERFACE") == NOT_SET {
        warn!("GATEWAY_INTERFACE not set; likely invoked outside a CGI host");
    }
    info!(
        method = env.display("REQUEST_METHOD"),
        script = env.display("SCRIPT_NAME"),
        "rendering request report"
    );

    let mut stdin = tokio::io::stdin();
    let report = render_request(&env, &mut stdin).await?;

    let mut stdout = tokio::io::stdout();
    report.write_to(&mut stdout).await?;
    Ok(())
}
