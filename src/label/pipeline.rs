//! Pipeline driver
//!
//! Composes the three stages for one label:
//!
//! ```text
//! raw -> normalize -> segment -> match_materials (per component) -> CompositionRecord
//! ```
//!
//! Every stage is a pure function of its input, so labels in a batch are
//! independent of each other.

use crate::label::canonical::normalize;
use crate::label::grammar::match_materials;
use crate::label::model::CompositionRecord;
use crate::label::segment::segment;
use tracing::debug;

/// Extract the composition of an already canonical label.
///
/// Components whose block matches nothing are kept with an empty list.
pub fn extract(canonical: &str) -> CompositionRecord {
    segment(canonical)
        .into_iter()
        .map(|(component, block)| {
            let materials = match_materials(&block);
            (component, materials)
        })
        .collect()
}

/// Canonicalize and extract a raw label.
pub fn parse_label(raw: &str) -> CompositionRecord {
    let canonical = normalize(raw);
    let record = extract(&canonical);
    debug!(
        raw,
        canonical = %canonical,
        components = record.len(),
        "parsed label"
    );
    record
}

/// Runs the pipeline over batches of labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelParser;

impl LabelParser {
    pub fn new() -> Self {
        LabelParser
    }

    pub fn parse(&self, raw: &str) -> CompositionRecord {
        parse_label(raw)
    }

    /// Parse every label, preserving input order.
    pub fn parse_batch<S: AsRef<str>>(&self, labels: &[S]) -> Vec<CompositionRecord> {
        labels.iter().map(|raw| self.parse(raw.as_ref())).collect()
    }
}
