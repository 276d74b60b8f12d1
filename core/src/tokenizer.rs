use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Derivational prefixes, scanned in order. The first one that matches (and
/// leaves at least 4 bytes behind) is stripped, so `me` shadows `meng`/`meny`
/// for any word they would both match. That is intentional; the only contract
/// is that queries and documents are reduced the same way.
const PREFIXES: &[&str] = &[
    "me", "pe", "be", "te", "di", "ke", "se",
    "ber", "per", "ter", "mem", "pem", "pen",
    "meng", "peng", "meny", "peny",
];

/// Suffixes, scanned in order; the first match is stripped.
const SUFFIXES: &[&str] = &[
    "kan", "an", "i", "lah", "kah", "nya", "ku", "mu",
    "wan", "wati", "isme",
];

const STOPWORDS: &[&str] = &[
    // conjunctions
    "yang", "dan", "atau", "tetapi", "namun", "melainkan", "sedangkan", "sebaliknya",
    // prepositions
    "di", "ke", "dari", "dalam", "kepada", "pada", "oleh", "untuk", "bagi",
    "tentang", "menurut", "seperti", "sebagai",
    // demonstratives
    "ini", "itu", "tersebut", "berikut",
    // personal pronouns
    "saya", "anda", "dia", "mereka", "kita", "kami", "kamu", "ia", "beliau",
    // auxiliaries
    "akan", "sudah", "telah", "sedang", "masih", "hendak", "bisa", "dapat",
    "bukan", "jangan",
    // adverbs
    "sangat", "hanya", "juga", "saja", "lagi", "sekarang", "yakni", "yaitu",
    // question words
    "apa", "siapa", "dimana", "kapan", "kenapa", "bagaimana", "mengapa",
    // numerals
    "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan",
    "sembilan", "sepuluh", "pertama", "kedua", "ketiga", "keempat", "kelima",
];

/// Reduce a word to an approximate root by affix stripping.
///
/// Words shorter than 4 bytes pass through untouched. One suffix is removed
/// first, then one prefix (only if the remainder keeps at least 4 bytes).
/// If the result ends up shorter than 3 bytes the original word is returned.
pub fn stem(word: &str) -> String {
    if word.len() < 4 {
        return word.to_string();
    }

    let mut stemmed = word;

    for suffix in SUFFIXES {
        if let Some(rest) = stemmed.strip_suffix(suffix) {
            stemmed = rest;
            break;
        }
    }

    for prefix in PREFIXES {
        if let Some(rest) = stemmed.strip_prefix(prefix) {
            if rest.len() >= 4 {
                stemmed = rest;
                break;
            }
        }
    }

    if stemmed.len() < 3 {
        word.to_string()
    } else {
        stemmed.to_string()
    }
}

/// Text normalization pipeline shared by indexing, query parsing, and snippet
/// matching. All configuration (stopword set, compiled patterns) is owned by
/// the instance; construct one and pass it around by reference.
pub struct Tokenizer {
    stopwords: HashSet<&'static str>,
    punctuation: Regex,
    numbers: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            punctuation: Regex::new(r"[^\w\s]").expect("valid regex"),
            numbers: Regex::new(r"\b\d+\b").expect("valid regex"),
        }
    }

    fn strip_punctuation_and_numbers(&self, text: &str) -> String {
        let text = self.punctuation.replace_all(text, " ");
        let text = self.numbers.replace_all(&text, " ");
        text.trim().to_string()
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }

    /// Turn raw text into the final term sequence. The pass order is fixed:
    /// NFKC fold, punctuation/number removal, whitespace split, stopword
    /// filter, case fold, stem. Positions in the returned sequence are the
    /// token offsets the index records.
    pub fn process(&self, text: &str) -> Vec<String> {
        let folded: String = text.nfkc().collect();
        let cleaned = self.strip_punctuation_and_numbers(&folded);
        cleaned
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(|word| stem(&word.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_standalone_numbers() {
        let tok = Tokenizer::new();
        let terms = tok.process("Harga: rumah, 2024 naik!");
        assert_eq!(terms, vec!["harga", "rumah", "naik"]);
    }

    #[test]
    fn affix_stripping_is_first_match() {
        assert_eq!(stem("makanan"), "makan");
        // "me" is scanned before "meng", so the longer prefix never applies.
        assert_eq!(stem("mengatakan"), "ngata");
    }
}
