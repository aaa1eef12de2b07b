//! Gold corpus loading
//!
//! A corpus is three aligned files under one base location:
//!
//! - `inputs.txt`: one raw label per line
//! - `outputs.json`: a JSON array of expected composition records
//! - `materials.txt`: the known material vocabulary, one per line
//!
//! Loading happens once, before any label is parsed. The parsing pipeline never
//! touches the filesystem or the network itself.

use crate::label::model::CompositionRecord;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const INPUTS_FILE: &str = "inputs.txt";
pub const OUTPUTS_FILE: &str = "outputs.json";
pub const MATERIALS_FILE: &str = "materials.txt";

/// Errors while loading a corpus
#[derive(Debug)]
pub enum CorpusError {
    /// Reading a local file failed
    Io { path: PathBuf, source: std::io::Error },
    /// Fetching a remote file failed
    Http { url: String, reason: String },
    /// `outputs.json` did not deserialize
    Json(serde_json::Error),
    /// Raw labels and expected outputs are not aligned
    LengthMismatch { inputs: usize, targets: usize },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            CorpusError::Http { url, reason } => write!(f, "Failed to fetch {}: {}", url, reason),
            CorpusError::Json(e) => write!(f, "Invalid expected outputs: {}", e),
            CorpusError::LengthMismatch { inputs, targets } => write!(
                f,
                "Corpus is misaligned: {} inputs but {} expected outputs",
                inputs, targets
            ),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io { source, .. } => Some(source),
            CorpusError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        CorpusError::Json(e)
    }
}

/// Raw labels, their expected records, and the material vocabulary.
#[derive(Debug, Clone)]
pub struct Corpus {
    inputs: Vec<String>,
    targets: Vec<CompositionRecord>,
    materials: Vec<String>,
}

impl Corpus {
    /// Build a corpus, rejecting misaligned inputs and targets.
    pub fn new(
        inputs: Vec<String>,
        targets: Vec<CompositionRecord>,
        materials: Vec<String>,
    ) -> Result<Self, CorpusError> {
        if inputs.len() != targets.len() {
            return Err(CorpusError::LengthMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        Ok(Self {
            inputs,
            targets,
            materials,
        })
    }

    /// Parse the three file bodies.
    pub fn from_texts(inputs: &str, outputs: &str, materials: &str) -> Result<Self, CorpusError> {
        let targets: Vec<CompositionRecord> = serde_json::from_str(outputs)?;
        Self::new(split_lines(inputs), targets, split_lines(materials))
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn targets(&self) -> &[CompositionRecord] {
        &self.targets
    }

    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Labels paired with their expected records.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CompositionRecord)> {
        self.inputs
            .iter()
            .map(String::as_str)
            .zip(self.targets.iter())
    }
}

/// Split on `\n` only. A trailing newline yields a trailing empty line.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Anything that can hand over a complete corpus.
pub trait CorpusSource {
    fn load(&self) -> Result<Corpus, CorpusError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Corpus files in a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, name: &str) -> Result<String, CorpusError> {
        let path = self.root.join(name);
        fs::read_to_string(&path).map_err(|source| CorpusError::Io { path, source })
    }
}

impl CorpusSource for DirectorySource {
    fn load(&self) -> Result<Corpus, CorpusError> {
        info!(location = %self.root.display(), "loading corpus from directory");
        Corpus::from_texts(
            &self.read(INPUTS_FILE)?,
            &self.read(OUTPUTS_FILE)?,
            &self.read(MATERIALS_FILE)?,
        )
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

/// Corpus files published under an http(s) base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    fn fetch(&self, name: &str) -> Result<String, CorpusError> {
        let url = self.url_for(name);
        let response = ureq::get(&url).call().map_err(|err| CorpusError::Http {
            url: url.clone(),
            reason: err.to_string(),
        })?;
        response
            .into_body()
            .read_to_string()
            .map_err(|err| CorpusError::Http {
                url,
                reason: format!("failed reading body: {err}"),
            })
    }
}

impl CorpusSource for HttpSource {
    fn load(&self) -> Result<Corpus, CorpusError> {
        info!(location = %self.base_url, "fetching corpus");
        Corpus::from_texts(
            &self.fetch(INPUTS_FILE)?,
            &self.fetch(OUTPUTS_FILE)?,
            &self.fetch(MATERIALS_FILE)?,
        )
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}

/// Pick a source for a configured base: URLs are fetched, anything else is a directory.
pub fn source_for(base: &str) -> Box<dyn CorpusSource> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Box::new(HttpSource::new(base))
    } else {
        Box::new(DirectorySource::new(Path::new(base)))
    }
}
