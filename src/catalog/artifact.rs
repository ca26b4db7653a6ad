use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use anyhow::Context;
use serde::Deserialize;

use super::{Catalog, SimilarityMatrix};

/// On-disk form of the precomputed recommender artifact.
///
/// Some exports also carry a raw feature-vector table alongside the
/// similarity matrix; the retrieval path never reads it, so unknown fields
/// are simply ignored during deserialization.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    titles: Vec<String>,
    similarity: Vec<Vec<f32>>,
}

/// Loads and validates the recommender artifact.
///
/// Called once at process startup; any failure here is fatal.
pub fn load_artifact(path: impl AsRef<Path>) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open recommender artifact at {}", path.display()))?;

    let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse recommender artifact at {}", path.display()))?;

    let catalog = build_catalog(artifact)?;

    tracing::info!(
        titles = catalog.len(),
        path = %path.display(),
        "Loaded recommender artifact"
    );

    Ok(catalog)
}

fn build_catalog(artifact: ModelArtifact) -> anyhow::Result<Catalog> {
    if artifact.titles.is_empty() {
        anyhow::bail!("Recommender artifact contains no titles");
    }

    if artifact.similarity.len() != artifact.titles.len() {
        anyhow::bail!(
            "Similarity matrix has {} rows for {} titles",
            artifact.similarity.len(),
            artifact.titles.len()
        );
    }

    for (row_index, row) in artifact.similarity.iter().enumerate() {
        if row.len() != artifact.titles.len() {
            anyhow::bail!(
                "Similarity row {} has length {}, expected {}",
                row_index,
                row.len(),
                artifact.titles.len()
            );
        }
    }

    let mut seen = HashSet::new();
    for title in &artifact.titles {
        if !seen.insert(title.as_str()) {
            tracing::warn!(title = %title, "Duplicate title in catalog; first occurrence wins");
        }
    }

    Ok(Catalog::new(
        artifact.titles,
        SimilarityMatrix::new(artifact.similarity),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_artifact(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = write_artifact(
            r#"{
                "titles": ["A", "B"],
                "similarity": [[1.0, 0.3], [0.3, 1.0]]
            }"#,
        );

        let catalog = load_artifact(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("B").unwrap(), 1);
        assert_eq!(catalog.similarity_row(0), &[1.0, 0.3]);
    }

    #[test]
    fn test_ignores_vector_table() {
        let file = write_artifact(
            r#"{
                "titles": ["A"],
                "similarity": [[1.0]],
                "vectors": [[0.1, 0.2, 0.3]]
            }"#,
        );

        assert!(load_artifact(file.path()).is_ok());
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let file = write_artifact(
            r#"{
                "titles": ["A", "B"],
                "similarity": [[1.0, 0.3]]
            }"#,
        );

        let err = load_artifact(file.path()).unwrap_err();
        assert!(err.to_string().contains("1 rows for 2 titles"));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let file = write_artifact(
            r#"{
                "titles": ["A", "B"],
                "similarity": [[1.0, 0.3], [0.3]]
            }"#,
        );

        let err = load_artifact(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let file = write_artifact(r#"{ "titles": [], "similarity": [] }"#);
        assert!(load_artifact(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_artifact("/nonexistent/model.json").is_err());
    }
}
