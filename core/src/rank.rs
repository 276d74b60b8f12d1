use std::collections::{HashMap, HashSet};

use crate::index::{DocId, InvertedIndex};

/// Sparse term -> (doc -> weight) table; entries exist only where the term
/// occurs in the document.
pub type TfIdfTable = HashMap<String, HashMap<DocId, f64>>;

/// Normalized query terms with raw occurrence counts.
pub type QueryVector = HashMap<String, f64>;

/// Compute `raw_tf * ln(total_docs / df)` for every posting.
///
/// Raw term frequency, natural log, no smoothing. Division by zero cannot
/// occur: every indexed term has `doc_frequency >= 1`, and an empty corpus
/// yields an empty index with nothing to iterate.
pub fn tf_idf(index: &InvertedIndex, total_docs: usize) -> TfIdfTable {
    let mut table = TfIdfTable::with_capacity(index.index.len());
    for (term, list) in &index.index {
        let idf = (total_docs as f64 / f64::from(list.doc_frequency)).ln();
        let column = list
            .postings
            .iter()
            .map(|(&doc_id, posting)| (doc_id, f64::from(posting.frequency) * idf))
            .collect();
        table.insert(term.clone(), column);
    }
    table
}

/// Scoring strategy for one document against the query vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Similarity {
    Cosine,
    Jaccard,
}

impl Similarity {
    /// `"jaccard"` selects Jaccard; any other name, including the empty
    /// string, falls back to cosine.
    pub fn from_name(name: &str) -> Self {
        match name {
            "jaccard" => Self::Jaccard,
            _ => Self::Cosine,
        }
    }

    pub fn score(self, query: &QueryVector, table: &TfIdfTable, doc_id: DocId) -> f64 {
        match self {
            Self::Cosine => cosine_score(query, table, doc_id),
            Self::Jaccard => jaccard_score(query, table, doc_id),
        }
    }
}

/// L2-normalize a sparse vector. A zero-magnitude vector normalizes to the
/// empty vector instead of dividing by zero.
fn normalize(vector: &HashMap<String, f64>) -> HashMap<String, f64> {
    let magnitude = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if magnitude > 0.0 {
        vector
            .iter()
            .map(|(term, weight)| (term.clone(), weight / magnitude))
            .collect()
    } else {
        HashMap::new()
    }
}

/// Dot product of the independently normalized query and document vectors.
/// The document vector is the `doc_id` column of the table. Range [0, 1].
fn cosine_score(query: &QueryVector, table: &TfIdfTable, doc_id: DocId) -> f64 {
    let mut doc_vector: HashMap<String, f64> = HashMap::new();
    for (term, column) in table {
        if let Some(&weight) = column.get(&doc_id) {
            doc_vector.insert(term.clone(), weight);
        }
    }

    let query = normalize(query);
    let doc = normalize(&doc_vector);

    query
        .iter()
        .filter_map(|(term, q_weight)| doc.get(term).map(|d_weight| q_weight * d_weight))
        .sum()
}

/// Set overlap between query terms and the document's terms, weights ignored:
/// |intersection| / |union|, 0 when the union is empty. Range [0, 1].
fn jaccard_score(query: &QueryVector, table: &TfIdfTable, doc_id: DocId) -> f64 {
    let query_set: HashSet<&str> = query.keys().map(String::as_str).collect();
    let doc_set: HashSet<&str> = table
        .iter()
        .filter(|(_, column)| column.contains_key(&doc_id))
        .map(|(term, _)| term.as_str())
        .collect();

    let intersection = query_set.intersection(&doc_set).count();
    let union = query_set.len() + doc_set.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
