use std::process::ExitCode;

use clap::Parser;

use entigraph_cli::{run, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let mut stdout = std::io::stdout().lock();
    let result = args
        .into_options(&mut stdout)
        .map_err(anyhow::Error::from)
        .and_then(|opts| run(&opts, &mut stdout));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
