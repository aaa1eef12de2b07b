//! Gold corpus validation
//!
//! Runs the pipeline over every corpus entry and compares the result with the
//! expected record. Exact equality is the pass criterion. Proportion totals
//! and unknown materials are reported as warnings only, since malformed labels
//! legitimately break both.

use crate::label::corpus::Corpus;
use crate::label::model::CompositionRecord;
use crate::label::pipeline::LabelParser;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Knobs for [`validate`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Allowed distance of a component total from 100.
    pub proportion_tolerance: f64,
    /// Warn about materials missing from the corpus vocabulary.
    pub check_vocabulary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            proportion_tolerance: 0.5,
            check_vocabulary: true,
        }
    }
}

/// One entry whose parsed record differs from the expected one.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub input: String,
    pub expected: CompositionRecord,
    pub actual: CompositionRecord,
}

/// Informational findings that never fail validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    ProportionTotal {
        index: usize,
        component: String,
        total: f64,
    },
    UnknownMaterial {
        index: usize,
        component: String,
        material: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ProportionTotal {
                index,
                component,
                total,
            } => write!(f, "#{} {}: proportions sum to {}", index, component, total),
            Warning::UnknownMaterial {
                index,
                component,
                material,
            } => write!(f, "#{} {}: unknown material {:?}", index, component, material),
        }
    }
}

/// Outcome of validating a corpus.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub total: usize,
    pub matched: usize,
    pub mismatches: Vec<Mismatch>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    /// Every entry reproduced its expected record exactly.
    pub fn is_exact(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} labels matched, {} mismatches, {} warnings",
            self.matched,
            self.total,
            self.mismatches.len(),
            self.warnings.len()
        )
    }
}

/// Components of `record` whose proportions do not add up to 100.
pub fn proportion_warnings(
    index: usize,
    record: &CompositionRecord,
    tolerance: f64,
) -> Vec<Warning> {
    record
        .iter()
        .filter(|(_, materials)| !materials.is_empty())
        .filter_map(|(component, materials)| {
            let total: f64 = materials.iter().map(|m| m.proportion).sum();
            ((total - 100.0).abs() > tolerance).then(|| Warning::ProportionTotal {
                index,
                component: component.to_string(),
                total,
            })
        })
        .collect()
}

fn vocabulary_warnings(
    index: usize,
    record: &CompositionRecord,
    vocabulary: &HashSet<&str>,
) -> Vec<Warning> {
    record
        .iter()
        .flat_map(move |(component, materials)| {
            materials
                .iter()
                .filter(move |m| !vocabulary.contains(m.material.as_str()))
                .map(move |m| Warning::UnknownMaterial {
                    index,
                    component: component.to_string(),
                    material: m.material.clone(),
                })
        })
        .collect()
}

/// Parse every corpus label and compare it with its expected record.
pub fn validate(corpus: &Corpus, parser: &LabelParser, options: &ReportOptions) -> ValidationReport {
    let vocabulary: HashSet<&str> = corpus
        .materials()
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .collect();
    let mut report = ValidationReport {
        total: corpus.len(),
        ..Default::default()
    };

    for (index, (input, expected)) in corpus.entries().enumerate() {
        let actual = parser.parse(input);

        for warning in proportion_warnings(index, &actual, options.proportion_tolerance) {
            warn!(%warning, "proportion total deviates from 100");
            report.warnings.push(warning);
        }
        if options.check_vocabulary && !vocabulary.is_empty() {
            report
                .warnings
                .extend(vocabulary_warnings(index, &actual, &vocabulary));
        }

        if &actual == expected {
            report.matched += 1;
        } else {
            report.mismatches.push(Mismatch {
                index,
                input: input.to_string(),
                expected: expected.clone(),
                actual,
            });
        }
    }

    report
}
