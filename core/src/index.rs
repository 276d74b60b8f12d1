use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tokenizer::Tokenizer;

/// Ordinal position of an article in the loaded collection. Stable for the
/// duration of one query evaluation; a reloaded corpus renumbers from zero.
pub type DocId = usize;

/// One harvested article as stored in the corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub url: String,
}

/// Occurrence record for one (term, document) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    /// Number of occurrences; always equals `positions.len()`.
    pub frequency: u32,
    /// Ascending token offsets within the document's normalized term stream.
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct PostingList {
    /// Number of distinct documents containing the term; always equals
    /// `postings.len()`.
    pub doc_frequency: u32,
    pub postings: HashMap<DocId, Posting>,
}

/// Term -> posting list over one loaded collection. Built fresh per query and
/// never mutated afterwards; only terms that survive normalization appear.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    pub index: HashMap<String, PostingList>,
}

impl InvertedIndex {
    /// Index every article in collection order (which fixes each `DocId`).
    /// Title and content are indexed as one stream, title first.
    pub fn build(articles: &[Article], tokenizer: &Tokenizer) -> Self {
        let mut index: HashMap<String, PostingList> = HashMap::new();

        for (doc_id, article) in articles.iter().enumerate() {
            let text = format!("{} {}", article.title, article.content);
            for (pos, term) in tokenizer.process(&text).into_iter().enumerate() {
                let list = index.entry(term).or_default();
                if !list.postings.contains_key(&doc_id) {
                    list.doc_frequency += 1;
                }
                let posting = list.postings.entry(doc_id).or_insert_with(|| Posting {
                    doc_id,
                    frequency: 0,
                    positions: Vec::new(),
                });
                posting.frequency += 1;
                posting.positions.push(pos);
            }
        }

        Self { index }
    }

    pub fn num_terms(&self) -> usize {
        self.index.len()
    }
}
