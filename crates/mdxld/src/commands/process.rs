/*
 * process.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Process command implementation.
 */

//! Process command implementation.
//!
//! Runs one document through the full pipeline and writes either the
//! re-serialized markdown or its YAML-LD data.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use mdxld_core::{ProcessedDocument, build_pipeline};

use super::PipelineArgs;

/// Arguments for the process command
#[derive(Debug)]
pub struct ProcessArgs {
    /// Input markdown file
    pub input: String,
    /// Output file; stdout when absent or `-`
    pub output: Option<String>,
    /// Write the side-channel JSON instead of the document
    pub data: bool,
    pub pipeline: PipelineArgs,
}

/// Execute the process command
pub fn execute(args: ProcessArgs) -> Result<()> {
    let rendered = render(&args)?;

    match args.output.as_deref() {
        None | Some("-") => print!("{}", rendered),
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(output = %path.display(), "Wrote output");
        }
    }

    Ok(())
}

/// Process the input and produce the text to write.
fn render(args: &ProcessArgs) -> Result<String> {
    let config = args.pipeline.resolve()?;
    let input = Path::new(&args.input);
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let pipeline = build_pipeline(&config);
    let processed = pipeline.run(&args.input, &source);
    report_warnings(&processed);

    let ProcessedDocument { output, data, diagnostics } = processed;
    let markdown = match output {
        Ok(markdown) => markdown,
        Err(err) => {
            for diagnostic in diagnostics.iter().filter(|d| d.is_error()) {
                eprint!("{}", diagnostic.to_text());
            }
            return Err(err).with_context(|| format!("Failed to process {}", input.display()));
        }
    };

    if args.data {
        let json = data
            .to_json()
            .context("YAML-LD data has no JSON representation")?;
        let mut text = serde_json::to_string_pretty(&json)?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(markdown)
    }
}

fn report_warnings(processed: &ProcessedDocument) {
    for diagnostic in processed.diagnostics.iter().filter(|d| !d.is_error()) {
        eprint!("{}", diagnostic.to_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = "---\n\"@type\": Doc\ntitle: T\ndescription: D\n---\n\n# Body\n";

    fn input_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(input: &tempfile::NamedTempFile) -> ProcessArgs {
        ProcessArgs {
            input: input.path().display().to_string(),
            output: None,
            data: false,
            pipeline: PipelineArgs::default(),
        }
    }

    #[test]
    fn test_render_markdown() {
        let input = input_file(DOC);
        let rendered = render(&args(&input)).unwrap();
        assert!(rendered.contains("# Body"));
    }

    #[test]
    fn test_render_data() {
        let input = input_file(DOC);
        let mut args = args(&input);
        args.data = true;

        let json: serde_json::Value = serde_json::from_str(&render(&args).unwrap()).unwrap();
        assert_eq!(json["yamlLd"]["$type"], "Doc");
        assert_eq!(json["yamlLd"]["frontmatter"]["title"], "T");
    }

    #[test]
    fn test_render_data_prefer_at() {
        let input = input_file(DOC);
        let mut args = args(&input);
        args.data = true;
        args.pipeline.prefer_at = true;

        let json: serde_json::Value = serde_json::from_str(&render(&args).unwrap()).unwrap();
        assert_eq!(json["yamlLd"]["@type"], "Doc");
        assert!(json["yamlLd"].get("$type").is_none());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let input = input_file(DOC);
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.md");

        let mut args = args(&input);
        args.output = Some(output.display().to_string());
        execute(args).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("# Body"));
    }

    #[test]
    fn test_invalid_document_fails() {
        let input = input_file("---\ntitle: T\n---\n");
        let err = render(&args(&input)).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Missing required frontmatter fields"));
    }

    #[test]
    fn test_missing_input() {
        let args = ProcessArgs {
            input: "/nonexistent/doc.md".to_string(),
            output: None,
            data: false,
            pipeline: PipelineArgs::default(),
        };
        let err = render(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
