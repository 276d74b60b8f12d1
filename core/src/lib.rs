pub mod engine;
pub mod index;
pub mod rank;
pub mod snippet;
pub mod store;
pub mod tokenizer;

pub use engine::{source_tag, SearchEngine, SearchResult};
pub use index::{Article, DocId, InvertedIndex, Posting, PostingList};
pub use rank::{tf_idf, QueryVector, Similarity, TfIdfTable};
pub use snippet::{SnippetGenerator, PREVIEW_LEN};
pub use store::JsonStore;
pub use tokenizer::{stem, Tokenizer};
