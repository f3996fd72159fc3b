//! bsearch host CLI
//!
//! Generate search images and run the guest against them.
//!
//! Usage:
//!   bsearch-host gen --size 1024 --output image.json --header bsearch.h
//!   bsearch-host run --image image.json --public 3

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bsearch_core::constants::ENTRY_POINT;
use bsearch_core::{render_header, SearchImage};
use bsearch_host::{Execution, HostEnv};

#[derive(Parser, Debug)]
#[command(name = "bsearch-host")]
#[command(about = "Build search images and run the bsearch guest")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the image for the table 0..size (RIGHT = size - 1, FAILED = size)
    Gen {
        /// Number of table entries
        #[arg(long)]
        size: u32,

        /// Output image (.bin for bincode, JSON otherwise)
        #[arg(long, default_value = "bsearch-image.json")]
        output: PathBuf,

        /// Also write the C configuration header
        #[arg(long)]
        header: Option<PathBuf>,
    },

    /// Invoke the guest once per public input
    Run {
        /// Image file written by `gen`
        #[arg(long)]
        image: PathBuf,

        /// Public input values, consumed in order
        #[arg(long = "public", required = true)]
        public: Vec<u64>,

        /// Private input values (queued, never read by bsearch)
        #[arg(long = "private")]
        private: Vec<u64>,

        /// Include every probe in the output
        #[arg(long)]
        trace: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Gen {
            size,
            output,
            header,
        } => generate(size, output, header),
        Command::Run {
            image,
            public,
            private,
            trace,
        } => run(image, public, private, trace),
    }
}

fn generate(size: u32, output: PathBuf, header: Option<PathBuf>) -> anyhow::Result<()> {
    let image = SearchImage::sequential(size)?;

    image
        .save(&output)
        .with_context(|| format!("writing image to {}", output.display()))?;

    tracing::info!(
        output = %output.display(),
        entries = image.table().len(),
        right = image.right(),
        failed = image.failed(),
        digest = %image.digest_hex(),
        "Wrote search image"
    );

    if let Some(path) = header {
        std::fs::write(&path, render_header(&image))
            .with_context(|| format!("writing header to {}", path.display()))?;
        tracing::info!(output = %path.display(), "Wrote configuration header");
    }

    Ok(())
}

fn run(image: PathBuf, public: Vec<u64>, private: Vec<u64>, trace: bool) -> anyhow::Result<()> {
    let loaded = SearchImage::load(&image)
        .with_context(|| format!("loading image from {}", image.display()))?;

    tracing::info!(
        image = %image.display(),
        entries = loaded.table().len(),
        digest = %loaded.digest_hex(),
        "Loaded search image"
    );

    let invocations = public.len();
    let mut env = HostEnv::new(loaded);
    env.register_inputs(public, private);

    for execution in execute(&mut env, invocations, trace)? {
        println!("{}", serde_json::to_string(&execution)?);
    }

    Ok(())
}

/// Invoke the entry point `invocations` times, dropping probes unless `trace`
fn execute(env: &mut HostEnv, invocations: usize, trace: bool) -> anyhow::Result<Vec<Execution>> {
    let mut executions = Vec::with_capacity(invocations);

    for _ in 0..invocations {
        let mut execution = env.invoke(ENTRY_POINT)?;
        if !trace {
            execution.probes.clear();
        }
        executions.push(execution);
    }

    Ok(executions)
}
