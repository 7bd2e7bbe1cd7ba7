// crates/esg-insight-contract/src/main.rs
// ============================================================================
// Module: ESG Insight Contract CLI
// Description: Command dispatcher for contract bundle and payload workflows.
// Purpose: Generate and verify the artifact bundle and check payload files.
// Dependencies: clap, esg-insight-contract, serde_json
// ============================================================================

//! ## Overview
//! The contract CLI wraps the library's three workflows: `generate` writes
//! the artifact bundle, `verify` checks an on-disk bundle fail-closed, and
//! `check` validates a JSON payload file against a named wire shape.
//! Exit codes: 0 on success, 1 on a contract violation, 2 on usage or I/O
//! failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use esg_insight_contract::ContractBuilder;
use esg_insight_contract::ContractError;
use esg_insight_contract::PayloadKind;
use esg_insight_contract::validate_payload;

// ============================================================================
// SECTION: Command Definitions
// ============================================================================

/// Contract tooling for the ESG Insight reporting API.
#[derive(Debug, Parser)]
#[command(name = "esg-insight-contract", version, about)]
struct Cli {
    /// Selected workflow.
    #[command(subcommand)]
    command: Commands,
}

/// Supported workflows.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the contract artifact bundle.
    Generate {
        /// Output directory (defaults to `docs/generated/esg-insight`).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Verify an on-disk bundle against the generated contract.
    Verify {
        /// Bundle directory (defaults to `docs/generated/esg-insight`).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check a JSON payload file against a wire shape.
    Check {
        /// Wire shape to check against.
        #[arg(long, value_enum)]
        kind: PayloadKind,
        /// Path to the JSON payload file.
        file: PathBuf,
    },
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Exit code for contract violations (mismatched bundles, non-conforming
/// payloads).
const EXIT_VIOLATION: u8 = 1;
/// Exit code for usage and I/O failures.
const EXIT_FAILURE: u8 = 2;

/// Parses arguments, dispatches the workflow, and renders failures.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(message) => {
            let _ = write_stderr_line(&message);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Dispatches the selected workflow.
///
/// # Errors
///
/// Returns a rendered message for usage and I/O failures; contract
/// violations are reported on stdout with [`EXIT_VIOLATION`] instead.
fn run(cli: Cli) -> Result<ExitCode, String> {
    match cli.command {
        Commands::Generate {
            output,
        } => {
            let output = output.unwrap_or_else(ContractBuilder::default_output_dir);
            let manifest = ContractBuilder::new(output.clone())
                .write()
                .map_err(|err| err.to_string())?;
            write_stdout_line(&format!(
                "wrote {} artifacts to {}",
                manifest.artifacts.len(),
                output.display()
            ))
            .map_err(|err| err.to_string())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify {
            output,
        } => {
            let output = output.unwrap_or_else(ContractBuilder::default_output_dir);
            match ContractBuilder::new(output.clone()).verify_output(&output) {
                Ok(()) => {
                    write_stdout_line("contract bundle verified").map_err(|err| err.to_string())?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err @ (ContractError::Generation(_) | ContractError::OutputPath(_))) => {
                    write_stdout_line(&format!("verification failed: {err}"))
                        .map_err(|render| render.to_string())?;
                    Ok(ExitCode::from(EXIT_VIOLATION))
                }
                Err(err) => Err(err.to_string()),
            }
        }
        Commands::Check {
            kind,
            file,
        } => {
            let payload = fs::read_to_string(&file)
                .map_err(|err| format!("cannot read {}: {err}", file.display()))?;
            let payload: serde_json::Value = serde_json::from_str(&payload)
                .map_err(|err| format!("{} is not valid JSON: {err}", file.display()))?;
            let violations = validate_payload(kind, &payload).map_err(|err| err.to_string())?;
            if violations.is_empty() {
                write_stdout_line(&format!("payload conforms to {kind}"))
                    .map_err(|err| err.to_string())?;
                return Ok(ExitCode::SUCCESS);
            }
            for violation in &violations {
                write_stdout_line(violation).map_err(|err| err.to_string())?;
            }
            write_stdout_line(&format!(
                "{} violation(s) against {kind}",
                violations.len()
            ))
            .map_err(|err| err.to_string())?;
            Ok(ExitCode::from(EXIT_VIOLATION))
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout without panicking on a closed pipe.
fn write_stdout_line(line: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(line.as_bytes())?;
    stdout.write_all(b"\n")
}

/// Writes one line to stderr without panicking on a closed pipe.
fn write_stderr_line(line: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr().lock();
    stderr.write_all(line.as_bytes())?;
    stderr.write_all(b"\n")
}
