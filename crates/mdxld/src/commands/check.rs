/*
 * check.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Check command implementation.
 */

//! Check command implementation.
//!
//! Runs each input through the pipeline and prints its diagnostics: text on
//! stderr, or JSON lines on stdout with `--json`. An unreadable input counts
//! as a failed document and the remaining inputs are still checked. The
//! command fails when any document fails.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use mdxld_core::{DiagnosticMessage, Pipeline, ProcessedDocument, build_pipeline};

use super::PipelineArgs;

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub inputs: Vec<String>,
    /// Print diagnostics as JSON lines instead of text
    pub json: bool,
    pub pipeline: PipelineArgs,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = args.pipeline.resolve()?;
    let pipeline = build_pipeline(&config);

    let mut failed = 0usize;
    for input in &args.inputs {
        let processed = match check_file(&pipeline, input) {
            Ok(processed) => processed,
            Err(err) => {
                warn!(input = %input, error = %err, "Skipping unreadable input");
                eprintln!("Error: {:#}", err);
                failed += 1;
                continue;
            }
        };

        let rendered = render_diagnostics(&processed.diagnostics, args.json);
        if args.json {
            print!("{}", rendered);
        } else {
            eprint!("{}", rendered);
        }
        if !processed.is_ok() {
            failed += 1;
        }
    }

    info!(checked = args.inputs.len(), failed, "Check finished");
    if failed > 0 {
        anyhow::bail!("{} of {} documents failed", failed, args.inputs.len());
    }
    Ok(())
}

fn check_file(pipeline: &Pipeline, input: &str) -> Result<ProcessedDocument> {
    let path = Path::new(input);
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(pipeline.run(input, &source))
}

/// Diagnostics as text blocks, or as one JSON object per line.
fn render_diagnostics(diagnostics: &[DiagnosticMessage], json: bool) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| {
            if json {
                format!("{}\n", diagnostic.to_json())
            } else {
                diagnostic.to_text()
            }
        })
        .collect()
}
