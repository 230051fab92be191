//! # Vectorizer Crate
//!
//! The fitted text-similarity model used by the recommendation engine.
//!
//! The offline pipeline fits a TF-IDF vectorizer over normalized oracle
//! text and exports it as `tfidf_model.json` (vocabulary + per-term IDF
//! weights). This crate loads that artifact and provides:
//!
//! - `TfidfModel::transform(text)` - a fixed-length, L2-normalized
//!   embedding of a text
//! - `cosine_similarity(a, b)` - similarity between two embeddings
//!
//! The model is immutable after load and shared read-only across all
//! queries. Fitting is out of scope; only the transform is ported.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the fitted model artifact
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The artifact has no terms at all
    #[error("Model vocabulary is empty")]
    EmptyVocabulary,

    /// A vocabulary entry points outside the IDF weight table
    #[error("Term '{term}' has index {index} but model dimension is {dimension}")]
    IndexOutOfRange {
        term: String,
        index: usize,
        dimension: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// A fitted TF-IDF vectorizer.
///
/// `vocabulary` maps a term to its position in the embedding vector;
/// `idf` holds the inverse-document-frequency weight for each position.
/// Dimensionality is `idf.len()` and is identical for every input.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Build a model from its parts, validating internal consistency.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Result<Self> {
        let model = Self { vocabulary, idf };
        model.validate()?;
        Ok(model)
    }

    /// Load the exported `tfidf_model.json` artifact
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let model: TfidfModel = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.idf.is_empty() || self.vocabulary.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }
        for (term, &index) in &self.vocabulary {
            if index >= self.idf.len() {
                return Err(ModelError::IndexOutOfRange {
                    term: term.clone(),
                    index,
                    dimension: self.idf.len(),
                });
            }
        }
        Ok(())
    }

    /// Embedding dimensionality, shared by every transform output
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Embed a normalized text as a fixed-length vector.
    ///
    /// Term counts are weighted by IDF and the result is L2-normalized,
    /// matching the fitted vectorizer's output. Empty text (or text with
    /// no in-vocabulary terms) yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                vector[index] += self.idf[index];
            }
        }

        l2_normalize(&mut vector);
        vector
    }
}

/// Lowercased alphanumeric tokens of length >= 2, matching the fitted
/// vectorizer's token pattern.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_lowercase())
}

fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Cosine similarity between two embeddings of the same dimension.
///
/// Returns 0.0 when either vector is all zeros (e.g. empty oracle text),
/// so textless cards read as "no similarity" rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
