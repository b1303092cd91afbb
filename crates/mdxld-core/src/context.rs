/*
 * context.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Per-document state carried through the pipeline.
 */

//! Per-document state carried through the pipeline.

use mdxld_error_reporting::{DiagnosticKind, DiagnosticMessage, SourceLocation};
use mdxld_yaml::YamlLdData;

/// Key under which the YAML-LD record appears in [`DocumentData::to_json`].
pub const YAML_LD_KEY: &str = "yamlLd";

/// Side-channel data attached to a document as it moves through the pipeline.
///
/// Stages write here instead of into the markdown tree, so the body is
/// serialized unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentData {
    yaml_ld: Option<YamlLdData>,
}

impl DocumentData {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validated YAML-LD record, if the frontmatter stage succeeded.
    pub fn yaml_ld(&self) -> Option<&YamlLdData> {
        self.yaml_ld.as_ref()
    }

    pub fn set_yaml_ld(&mut self, data: YamlLdData) {
        self.yaml_ld = Some(data);
    }

    pub fn take_yaml_ld(&mut self) -> Option<YamlLdData> {
        self.yaml_ld.take()
    }

    pub fn is_empty(&self) -> bool {
        self.yaml_ld.is_none()
    }

    /// Render as a JSON object, e.g. `{"yamlLd": {"$type": ..., "frontmatter": {...}}}`.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut object = serde_json::Map::new();
        if let Some(data) = &self.yaml_ld {
            object.insert(YAML_LD_KEY.to_string(), data.to_json()?);
        }
        Ok(serde_json::Value::Object(object))
    }
}

/// Context for processing a single document.
///
/// Owned by one pipeline run; never shared between documents.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// Name used in diagnostic locations (usually the input path)
    pub source_name: String,

    pub data: DocumentData,

    /// Diagnostics collected during processing, in emission order
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl DocumentContext {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            data: DocumentData::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn add_diagnostic(&mut self, diagnostic: DiagnosticMessage) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Warning)
    }

    /// A location in this document.
    pub fn location(&self, line: usize, column: usize) -> SourceLocation {
        SourceLocation::new(self.source_name.clone(), line, column)
    }
}
