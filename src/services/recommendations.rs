use crate::{
    catalog::Catalog,
    error::AppResult,
    models::CatalogEntry,
    services::ranking::select_top_k,
};

/// Produces up to `k` catalog entries most similar to `title`, best first.
///
/// Ranks the query's similarity row with one extra slot to cover the
/// guaranteed self-match, then excludes the query by row-index identity
/// rather than by position, so a row with a non-maximal self-score still
/// filters correctly.
pub fn recommend(catalog: &Catalog, title: &str, k: usize) -> AppResult<Vec<CatalogEntry>> {
    let query_index = catalog.resolve(title)?;
    let row = catalog.similarity_row(query_index);

    let recommendations: Vec<CatalogEntry> = select_top_k(row, k + 1)
        .into_iter()
        .filter(|candidate| candidate.row_index != query_index)
        .take(k)
        .map(|candidate| catalog.entry(candidate.row_index).clone())
        .collect();

    tracing::debug!(
        query = %title,
        count = recommendations.len(),
        "Ranked recommendations"
    );

    Ok(recommendations)
}
