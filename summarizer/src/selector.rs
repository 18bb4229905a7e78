//! Top-N sentence selection in document order.

use std::cmp::Ordering;

use crate::scoring::ScoredSentence;
use crate::text::Sentence;

/// Pick the `n` best-scoring sentences and return them in document order.
///
/// Ties go to the earlier sentence. `n == 0` yields nothing; `n` at or above
/// the sentence count yields every sentence.
pub fn select(scored: &[ScoredSentence], n: usize) -> Vec<Sentence> {
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| by_rank(a, b));
    ranked.truncate(n);

    let mut chosen: Vec<Sentence> = ranked.into_iter().map(|s| s.sentence.clone()).collect();
    chosen.sort_by_key(|s| s.index);
    chosen
}

/// Score descending, then index ascending.
fn by_rank(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.sentence.index.cmp(&b.sentence.index))
}
