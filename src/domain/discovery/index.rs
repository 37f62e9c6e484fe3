//! Similarity scoring over the sample corpus.
//!
//! Scores are random draws nudged by keyword overlap; they carry no semantic relevance
//! signal and differ between calls unless the generator is seeded.

use super::corpus::{CorpusDocument, SAMPLE_CORPUS};
use super::{LiteratureQuery, SimilarPaper};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Mutex;

pub const SNIPPET_CHARS: usize = 150;
pub const SOURCE_URL_BASE: &str = "https://example.com/papers";

/// Search capability behind the discovery route.
pub trait EmbeddingIndex: Send + Sync {
    /// Best `top_k` documents for the query, highest score first.
    fn search(&self, query: &LiteratureQuery, top_k: usize) -> Vec<SimilarPaper>;
}

fn keyword_hits(keyword: &str, doc: &CorpusDocument) -> bool {
    let kw = keyword.to_lowercase();
    doc.title.to_lowercase().contains(&kw)
        || doc.abstract_text.to_lowercase().contains(&kw)
        || doc.keywords.iter().any(|k| k.to_lowercase() == kw)
}

/// Raw score for one document, clamped to `[0, 1]`.
///
/// Each matching keyword adds `U[0.3, 0.8)`; a supplied abstract adds `U[0.1, 0.3)`.
/// A zero score for an abstract query is replaced with `U[0.05, 0.2)`.
pub fn score_document<R: Rng + ?Sized>(
    query: &LiteratureQuery,
    doc: &CorpusDocument,
    rng: &mut R,
) -> f64 {
    let mut score: f64 = 0.0;
    for keyword in query.keywords() {
        if keyword_hits(keyword, doc) {
            score += rng.gen_range(0.3..0.8);
        }
    }
    if query.abstract_text().is_some() {
        score += rng.gen_range(0.1..0.3);
    }

    let clamped = f64::clamp(score, 0.0, 1.0);
    if clamped == 0.0 && query.abstract_text().is_some() {
        rng.gen_range(0.05..0.2)
    } else {
        clamped
    }
}

pub fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

fn snippet(text: &str) -> String {
    let mut s: String = text.chars().take(SNIPPET_CHARS).collect();
    s.push_str("...");
    s
}

fn to_similar_paper(doc: &CorpusDocument, score: f64) -> SimilarPaper {
    SimilarPaper {
        id: doc.id.to_string(),
        title: doc.title.to_string(),
        abstract_snippet: snippet(doc.abstract_text),
        similarity_score: round4(score),
        source_url: Some(format!("{}/{}", SOURCE_URL_BASE, doc.id)),
        authors: Some(doc.authors.iter().map(|a| a.to_string()).collect()),
        publication_date: Some(doc.publication_date.to_string()),
    }
}

/// Keyword-overlap stand-in for a real embedding index.
pub struct SimulatedIndex<R = StdRng> {
    corpus: Vec<CorpusDocument>,
    rng: Mutex<R>,
}

impl SimulatedIndex<StdRng> {
    /// Sample corpus with an OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(SAMPLE_CORPUS.to_vec(), StdRng::from_entropy())
    }

    /// Sample corpus with a seeded generator, for replayable rankings.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SAMPLE_CORPUS.to_vec(), StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> SimulatedIndex<R> {
    pub fn new(corpus: Vec<CorpusDocument>, rng: R) -> Self {
        Self {
            corpus,
            rng: Mutex::new(rng),
        }
    }
}

impl<R: RngCore + Send> EmbeddingIndex for SimulatedIndex<R> {
    fn search(&self, query: &LiteratureQuery, top_k: usize) -> Vec<SimilarPaper> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut results: Vec<SimilarPaper> = self
            .corpus
            .iter()
            .map(|doc| to_similar_paper(doc, score_document(query, doc, &mut *rng)))
            .collect();

        // stable: equal scores keep corpus order
        results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        results.truncate(top_k);
        results
    }
}
