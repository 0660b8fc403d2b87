// Entrypoint for the CLI.
// - Keeps `main` small: parse arguments, create an API client from the
//   environment, run the one upload and render the result.
// - Every failure surfaces as a single printed line and a nonzero exit.

use std::process::ExitCode;

use clap::Parser;
use tsh::{api::ApiClient, cli::Args, progress, ui};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            ui::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    // Endpoint and credentials come from TSH_URL / TSH_HTTP_AUTH_USER /
    // TSH_HTTP_AUTH_PASS. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    let bar = progress::transfer_bar(&args.file.display().to_string());
    let outcome = api.upload(&args.file, args.retention(), &bar)?;

    Ok(ui::render_outcome(&outcome))
}
