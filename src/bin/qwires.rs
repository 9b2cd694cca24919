//! qwires CLI tool
//!
//! Command-line front end for checking template inputs: shapes, wires,
//! layer counts and whole template contracts.

use qwires::cli;

fn main() -> anyhow::Result<()> {
    cli::main()
}
