//! End-to-end validation against gold corpora
//!
//! The bundled fixture under `tests/fixtures/corpus` must be reproduced exactly.
//! The published corpus is fetched over the network, so that test is ignored by
//! default: `cargo test -- --ignored remote`.

use garment_label::label::corpus::{CorpusSource, DirectorySource, HttpSource};
use garment_label::label::report::{validate, ReportOptions, Warning};
use garment_label::LabelParser;
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("corpus")
}

#[test]
fn bundled_corpus_is_reproduced_exactly() {
    let corpus = DirectorySource::new(fixture_dir())
        .load()
        .expect("fixture corpus to load");
    assert_eq!(corpus.len(), 17);

    let report = validate(&corpus, &LabelParser::new(), &ReportOptions::default());
    for mismatch in &report.mismatches {
        eprintln!(
            "#{} {:?}\n  expected {:?}\n  actual   {:?}",
            mismatch.index, mismatch.input, mismatch.expected, mismatch.actual
        );
    }
    assert!(report.is_exact(), "{}", report);
    assert_eq!(report.matched, 17);
}

#[test]
fn bundled_corpus_warnings_are_informational() {
    let corpus = DirectorySource::new(fixture_dir()).load().unwrap();
    let report = validate(&corpus, &LabelParser::new(), &ReportOptions::default());

    // the unseparated lace block runs into the mesh component
    let totals: Vec<_> = report
        .warnings
        .iter()
        .filter_map(|w| match w {
            Warning::ProportionTotal { index, total, .. } => Some((*index, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(totals, vec![(10, 200.0)]);

    let unknown: Vec<_> = report
        .warnings
        .iter()
        .filter_map(|w| match w {
            Warning::UnknownMaterial { material, .. } => Some(material.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(unknown, vec!["polyester knitted", "spandex lace-"]);
}

#[test]
#[ignore = "fetches the published corpus over the network"]
fn remote_corpus_is_reproduced_exactly() {
    let base = label_config::load_defaults().unwrap().corpus.base;
    let corpus = HttpSource::new(base).load().expect("remote corpus to load");
    let report = validate(&corpus, &LabelParser::new(), &ReportOptions::default());
    eprintln!("{}", report);
    assert!(report.is_exact());
}
