// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `learnvault-deploy`.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use learnvault_tools::ops;

use crate::error::DeployResult;

mod args;
mod constants;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "learnvault-deploy")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Deploy the LearnToEarnToken contract and set its DeFi protocol", long_about = None)]
#[command(version)]
struct Args {
    #[command(flatten)]
    plan: args::PlanArgs,
    #[command(flatten)]
    auth: args::AuthArgs,
    #[command(flatten)]
    provider: args::ProviderArgs,

    /// Write a JSON record of the deployment to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Every step waits on the one before it, so a single-threaded runtime is enough
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(exec(args)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}

async fn exec(args: Args) -> DeployResult {
    let plan = args.plan.resolve()?;
    let chain = args.provider.build_chain(&args.auth).await?;

    let mut stdout = std::io::stdout();
    let deployment = ops::deploy(&chain, &plan, &mut stdout).await?;

    if let Some(path) = &args.output {
        ops::write_record(&deployment, path)?;
    }
    Ok(())
}
