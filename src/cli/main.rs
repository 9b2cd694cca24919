//! qwires CLI
//!
//! Each subcommand reads one JSON document, runs one check and prints the
//! result on stdout. Failures exit non-zero with the error text.

use super::config::CliInput;
use crate::{
    config::TemplateContract,
    shape::{Bound, Shape},
    tracing_config::{init_cli_tracing, spans},
    utils::{ParameterValidator, ShapeValidator},
    wires::Wires,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

/// Template input checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "qwires")]
pub struct Cli {
    /// Enable verbose logging (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the shape of a JSON value
    Shape {
        /// JSON value (use "-" for stdin)
        input: String,
    },

    /// Check the shape of a JSON value against a target shape
    CheckShape {
        /// JSON value (use "-" for stdin)
        input: String,

        /// Target shape as comma-separated dimensions (e.g. 2,3); empty for a scalar
        #[arg(short, long)]
        target: Shape,

        /// Bound the leading dimension instead of matching it exactly (min, max)
        #[arg(short, long)]
        bound: Option<Bound>,

        /// Error text reported on mismatch
        #[arg(short, long, default_value = "shape does not match the target")]
        message: String,
    },

    /// Normalize a JSON wire list into wires
    Wires {
        /// JSON integer or list of integer-like numbers (use "-" for stdin)
        input: String,
    },

    /// Print the number of layers shared by a JSON list of parameters
    Layers {
        /// JSON list of per-layer parameters (use "-" for stdin)
        input: String,
    },

    /// Check a JSON object of inputs against a template contract
    Contract {
        /// Contract file
        #[arg(short, long, value_name = "FILE")]
        contract: PathBuf,

        /// Inputs file (use "-" for stdin)
        #[arg(short, long, value_name = "FILE")]
        inputs: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Shape { .. } => "shape",
            Self::CheckShape { .. } => "check-shape",
            Self::Wires { .. } => "wires",
            Self::Layers { .. } => "layers",
            Self::Contract { .. } => "contract",
        }
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    init_cli_tracing(cli.verbose).context("Failed to initialize tracing")?;

    let span = spans::command(cli.command.name());
    let _guard = span.enter();

    let output = run(&cli.command)?;
    println!("{output}");
    Ok(())
}

/// Execute one subcommand and render its result
fn run(command: &Command) -> Result<String> {
    match command {
        Command::Shape { input } => {
            let value = CliInput::parse_value(&CliInput::inline(input)?)?;
            let shape = ShapeValidator::get_shape(&value)?;
            debug!(%shape, "extracted shape");
            Ok(shape.to_string())
        },

        Command::CheckShape {
            input,
            target,
            bound,
            message,
        } => {
            let value = CliInput::parse_value(&CliInput::inline(input)?)?;
            ShapeValidator::check_shape(&value, target, *bound, message)?;
            Ok("ok".to_string())
        },

        Command::Wires { input } => {
            let value = CliInput::parse_value(&CliInput::inline(input)?)?;
            let wires = Wires::try_from(value)?;
            Ok(wires.to_string())
        },

        Command::Layers { input } => {
            let params = CliInput::parse_list(&CliInput::inline(input)?)?;
            let layers = ParameterValidator::check_number_of_layers(&params)?;
            Ok(layers.to_string())
        },

        Command::Contract { contract, inputs } => {
            let contract = TemplateContract::load(contract)
                .with_context(|| format!("Failed to load contract '{}'", contract.display()))?;
            let inputs = TemplateContract::parse_inputs(&CliInput::file(inputs)?)?;

            let span = spans::contract(&contract.name, contract.parameters.len());
            let _guard = span.enter();

            let report = contract.check(&inputs)?;
            info!(template = %report.template, "contract satisfied");
            Ok(serde_json::to_string_pretty(&report)?)
        },
    }
}
