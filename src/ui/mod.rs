pub mod reviews;
pub mod table;

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::config::{DisplayConfig, OutputFormat};
use crate::core::pipeline::PipelineOutput;

/// Item ids whose per-review breakdown is shown, fixed for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows {
    ids: BTreeSet<u32>,
    all: bool,
}

impl ExpandedRows {
    pub fn all() -> Self {
        Self {
            ids: BTreeSet::new(),
            all: true,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        if config.expand_all {
            return Self::all();
        }
        Self {
            ids: config.expanded.iter().copied().collect(),
            all: false,
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.all || self.ids.contains(&id)
    }

    /// Label of the row's expand/collapse action.
    pub fn action_label(&self, id: u32) -> &'static str {
        if self.is_expanded(id) {
            "Hide Reviews"
        } else {
            "View Reviews"
        }
    }
}

/// Render a pipeline result in the configured format.
pub fn render(
    output: &PipelineOutput,
    display: &DisplayConfig,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    match display.format {
        OutputFormat::Table => Ok(render_report(
            output,
            &ExpandedRows::from_config(display),
            generated_at,
        )),
        OutputFormat::Json => serde_json::to_string_pretty(output),
    }
}

/// Plain-text report: ranked table, then unscored and rejected items.
pub fn render_report(
    output: &PipelineOutput,
    expanded: &ExpandedRows,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Product Recommendation Ranking");
    let _ = writeln!(out, "Generated {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out);

    table::write_table(&mut out, output, expanded);

    if !output.ranking.unscored.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Not ranked (no reviews):");
        for item in &output.ranking.unscored {
            let _ = writeln!(out, "  - {} (id {})", item.name, item.id);
        }
    }

    if !output.rejected.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped (score could not be computed):");
        for rejected in &output.rejected {
            let _ = writeln!(out, "  - {} (id {}): {}", rejected.name, rejected.id, rejected.reason);
        }
    }

    out
}
