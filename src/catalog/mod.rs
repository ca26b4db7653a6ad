//! Catalog index and similarity store
//!
//! Both are built once at startup from the precomputed recommender artifact
//! and shared read-only across requests; nothing here takes a lock.

pub mod artifact;

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::CatalogEntry,
};

pub use artifact::load_artifact;

/// The precomputed pairwise-similarity matrix. Row `i` holds the similarity
/// of catalog entry `i` to every entry, itself included.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    pub fn row(&self, row_index: usize) -> &[f32] {
        &self.rows[row_index]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Title catalog aligned with the similarity matrix
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Exact title -> row index; first occurrence wins on duplicate titles
    index: HashMap<String, usize>,
    similarity: SimilarityMatrix,
}

impl Catalog {
    pub fn new(titles: Vec<String>, similarity: SimilarityMatrix) -> Self {
        let mut index = HashMap::with_capacity(titles.len());
        let entries = titles
            .into_iter()
            .enumerate()
            .map(|(row_index, title)| {
                index.entry(title.clone()).or_insert(row_index);
                CatalogEntry { title, row_index }
            })
            .collect();

        Self {
            entries,
            index,
            similarity,
        }
    }

    /// Resolves an exact title to its row index. No fuzzy or normalized
    /// matching; a miss is the caller's 404.
    pub fn resolve(&self, title: &str) -> AppResult<usize> {
        self.index
            .get(title)
            .copied()
            .ok_or_else(|| AppError::NotFound(title.to_string()))
    }

    pub fn entry(&self, row_index: usize) -> &CatalogEntry {
        &self.entries[row_index]
    }

    pub fn similarity_row(&self, row_index: usize) -> &[f32] {
        self.similarity.row(row_index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
