//! AI literature discovery over a fixed sample corpus.

pub mod corpus;
pub mod index;

pub use corpus::{CorpusDocument, SAMPLE_CORPUS};
pub use index::{EmbeddingIndex, SimulatedIndex};

use crate::domain::error::{StoreError, StoreResult};
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use tracing::debug;
use utoipa::ToSchema;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SimilarPaper {
    pub id: String,
    pub title: String,
    pub abstract_snippet: String,
    pub similarity_score: f64,
    pub source_url: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publication_date: Option<String>,
}

/// Normalized discovery input. Holds at least one of keywords or abstract.
#[derive(Debug, Clone)]
pub struct LiteratureQuery {
    keywords: Vec<String>,
    abstract_text: Option<String>,
}

impl LiteratureQuery {
    /// Empty keyword lists and empty abstracts count as absent.
    pub fn new(keywords: Option<Vec<String>>, abstract_text: Option<String>) -> StoreResult<Self> {
        let keywords = keywords.unwrap_or_default();
        let abstract_text = abstract_text.filter(|a| !a.is_empty());
        if keywords.is_empty() && abstract_text.is_none() {
            return Err(StoreError::Validation(
                "Either keywords or an abstract must be provided.".to_string(),
            ));
        }
        Ok(Self {
            keywords,
            abstract_text,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.abstract_text.as_deref()
    }

    /// Keywords then abstract, space-joined.
    pub fn combined_input(&self) -> String {
        let mut parts: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        if let Some(a) = self.abstract_text() {
            parts.push(a);
        }
        parts.join(" ")
    }

    /// Echo of the query as received, for the response body.
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        if !self.keywords.is_empty() {
            map.insert("keywords".to_string(), json!(self.keywords));
        }
        if let Some(a) = self.abstract_text() {
            map.insert("abstract".to_string(), json!(a));
        }
        map.insert(
            "combined_input_for_similarity".to_string(),
            json!(self.combined_input()),
        );
        JsonValue::Object(map)
    }
}

/// Discovery service; the index carries its own lock, so this is shared without a mutex.
pub struct LiteratureDiscovery {
    index: Box<dyn EmbeddingIndex>,
}

impl LiteratureDiscovery {
    pub fn new(index: Box<dyn EmbeddingIndex>) -> Self {
        Self { index }
    }

    pub fn discover(&self, query: &LiteratureQuery, top_k: usize) -> Vec<SimilarPaper> {
        let papers = self.index.search(query, top_k);
        debug!(
            keywords = query.keywords().len(),
            has_abstract = query.abstract_text().is_some(),
            top_k,
            returned = papers.len(),
            "literature discovery served"
        );
        papers
    }
}
