use crate::models::RankedCandidate;

/// Ranks one similarity row and returns the top `k` candidates.
///
/// Candidates are enumerated in row order and sorted with a stable descending
/// sort, so equal scores keep their original row order (lower row index
/// first). Scores compare under IEEE total ordering, which keeps the sort
/// deterministic even for pathological NaN entries.
pub fn select_top_k(row: &[f32], k: usize) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = row
        .iter()
        .enumerate()
        .map(|(row_index, &score)| RankedCandidate { row_index, score })
        .collect();

    // Vec::sort_by is stable, which the tie-break contract depends on
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(k);
    ranked
}
