use serde::Serialize;
use std::cmp::Ordering;

use crate::index::{Article, InvertedIndex};
use crate::rank::{tf_idf, QueryVector, Similarity};
use crate::snippet::{SnippetGenerator, PREVIEW_LEN};
use crate::store::JsonStore;
use crate::tokenizer::Tokenizer;

/// One ranked hit, produced only for documents with score > 0.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub score: f64,
    pub snippet: String,
    pub highlighted: String,
    pub source_tag: String,
}

/// Orchestrates one query evaluation: load the corpus, build a fresh index
/// and weight table, score every document, attach snippets, rank.
///
/// Nothing is cached across calls; concurrent queries are independent by
/// construction as long as the corpus file supports concurrent reads.
pub struct SearchEngine {
    store: JsonStore,
    tokenizer: Tokenizer,
    snippets: SnippetGenerator,
}

impl SearchEngine {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            tokenizer: Tokenizer::new(),
            snippets: SnippetGenerator::new(),
        }
    }

    /// Evaluate `query` against a freshly loaded corpus. A corpus that fails
    /// to load is logged and treated as empty; the query then matches
    /// nothing, which is a valid "no results", not an error.
    pub fn search(&self, query: &str, method: &str) -> Vec<SearchResult> {
        let articles = match self.store.load() {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(error = %err, "corpus load failed; searching an empty collection");
                Vec::new()
            }
        };
        self.search_in(&articles, query, method)
    }

    /// Evaluate `query` against an already-loaded collection.
    pub fn search_in(&self, articles: &[Article], query: &str, method: &str) -> Vec<SearchResult> {
        let index = InvertedIndex::build(articles, &self.tokenizer);
        let table = tf_idf(&index, articles.len());

        let mut query_vector = QueryVector::new();
        for term in self.tokenizer.process(query) {
            *query_vector.entry(term).or_insert(0.0) += 1.0;
        }

        let similarity = Similarity::from_name(method);
        let mut results = Vec::new();
        for (doc_id, article) in articles.iter().enumerate() {
            let score = similarity.score(&query_vector, &table, doc_id);
            if score > 0.0 {
                let snippet =
                    self.snippets
                        .preview(&self.tokenizer, &article.content, query, PREVIEW_LEN);
                let highlighted = self.snippets.highlight(&self.tokenizer, &snippet, query);
                results.push(SearchResult {
                    title: article.title.clone(),
                    url: article.url.clone(),
                    score,
                    snippet,
                    highlighted,
                    source_tag: source_tag(&article.url).to_string(),
                });
            }
        }

        // Stable sort: equal scores keep original collection order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        tracing::debug!(
            query,
            method,
            terms = query_vector.len(),
            hits = results.len(),
            "query evaluated"
        );
        results
    }
}

/// Fixed URL-prefix to source-tag mapping for result attribution.
pub fn source_tag(url: &str) -> &'static str {
    if url.starts_with("https://artikel.rumah123.com/") {
        "rumah123"
    } else if url.starts_with("https://propertiterkini.com/") {
        "propertiterkini"
    } else if url.starts_with("https://propertyandthecity.com/") {
        "propertyandthecity"
    } else {
        "web"
    }
}
