use regex::Regex;

use crate::tokenizer::Tokenizer;

/// Preview window width in characters. `preview` pins its output to this
/// regardless of the length the caller asks for; see the note there.
pub const PREVIEW_LEN: usize = 160;

/// How far before the first query match the preview window opens.
const CONTEXT_BEFORE: usize = 60;

/// Literal boilerplate phrases harvested pages carry around article bodies:
/// cross-links, follow prompts, share labels.
const BOILERPLATE: &[&str] = &[
    "Baca juga:",
    "Baca Juga:",
    "Simak breaking news",
    "Google News",
    "Terus ikuti",
    "Lebih banyak informasi",
    "Follow",
    "Instagram",
    "Twitter",
    "Facebook",
    "Bagikan:",
    "Share:",
    "Read more",
];

/// Produces cleaned, length-bounded previews of article content and marks
/// query-term occurrences for display. Owns its compiled patterns; construct
/// once and share by reference.
pub struct SnippetGenerator {
    urls: Vec<Regex>,
    email: Regex,
    social: Regex,
    special: Regex,
    numbers: Regex,
    whitespace: Regex,
    sentence_punct: Regex,
}

impl Default for SnippetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetGenerator {
    pub fn new() -> Self {
        Self {
            urls: vec![
                Regex::new(r"https?://\S+").expect("valid regex"),
                Regex::new(r"www\.\S+").expect("valid regex"),
                Regex::new(r"\S+\.(com|net|org)\S*").expect("valid regex"),
            ],
            email: Regex::new(r"\S+@\S+\.\S+").expect("valid regex"),
            social: Regex::new(r"@\S+").expect("valid regex"),
            special: Regex::new(r"[^a-zA-Z0-9\s]+").expect("valid regex"),
            numbers: Regex::new(r"\s+\d+\s+").expect("valid regex"),
            whitespace: Regex::new(r"\s+").expect("valid regex"),
            sentence_punct: Regex::new(r"\s*[.,!?;:]\s*").expect("valid regex"),
        }
    }

    /// Strip boilerplate and noise from article content. The passes run in a
    /// fixed order; later ones assume earlier ones already fired (URLs must go
    /// before the punctuation pass would shred them, duplicate-word collapse
    /// only sees single spaces).
    pub fn clean(&self, content: &str) -> String {
        let mut content = content.to_string();

        for phrase in BOILERPLATE {
            content = content.replace(phrase, "");
        }
        for pattern in &self.urls {
            content = pattern.replace_all(&content, "").into_owned();
        }
        content = self.email.replace_all(&content, "").into_owned();
        content = self.social.replace_all(&content, "").into_owned();
        content = self.special.replace_all(&content, " ").into_owned();
        content = self.numbers.replace_all(&content, " ").into_owned();
        content = self.whitespace.replace_all(&content, " ").into_owned();
        content = content.trim().to_string();
        content = self.sentence_punct.replace_all(&content, " ").into_owned();

        let mut deduped: Vec<&str> = Vec::new();
        for word in content.split_whitespace() {
            if deduped.last() != Some(&word) {
                deduped.push(word);
            }
        }
        let content = deduped.join(" ");

        self.whitespace.replace_all(content.trim(), " ").into_owned()
    }

    /// Cleaned, length-bounded preview of `content` centered on the first
    /// occurrence of the normalized query phrase.
    ///
    /// The window is pinned to [`PREVIEW_LEN`]; the `max_len` argument is
    /// accepted but currently overridden, so callers cannot widen or narrow
    /// the preview.
    pub fn preview(
        &self,
        tokenizer: &Tokenizer,
        content: &str,
        query: &str,
        max_len: usize,
    ) -> String {
        let _ = max_len;
        let max_len = PREVIEW_LEN;

        let cleaned = self.clean(content);
        if cleaned.len() <= max_len {
            return cleaned;
        }

        let query_text = tokenizer.process(query).join(" ").to_lowercase();
        let content_text = tokenizer.process(&cleaned).join(" ").to_lowercase();

        let Some(pos) = content_text.find(&query_text) else {
            let cut = floor_char_boundary(&cleaned, max_len);
            return format!("{}...", &cleaned[..cut]);
        };

        // Map the match back onto the cleaned (non-normalized) text: count the
        // normalized words before the match, then sum the lengths of that many
        // cleaned words to get a character offset.
        let word_count = content_text[..pos].split_whitespace().count();
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        let mut word_pos = 0usize;
        for word in words.iter().take(word_count) {
            word_pos += word.len() + 1;
        }

        let start = floor_char_boundary(&cleaned, word_pos.saturating_sub(CONTEXT_BEFORE));
        let end = floor_char_boundary(&cleaned, (start + max_len).min(cleaned.len()));

        let mut result = cleaned[start..end].to_string();
        if start > 0 {
            result = format!("...{result}");
        }
        if end < cleaned.len() {
            result.push_str("...");
        }
        result
    }

    /// Wrap case-insensitive whole-word matches of every query term of length
    /// >= 2 in `<em>` markup. Matches extend over adjacent word characters
    /// (plus the Cyrillic range, for mixed-script content) so inflected forms
    /// of a stemmed term light up whole. Terms are applied one after another,
    /// so overlapping matches from different terms may be wrapped twice.
    pub fn highlight(&self, tokenizer: &Tokenizer, text: &str, query: &str) -> String {
        if query.is_empty() {
            return text.to_string();
        }

        let mut highlighted = text.to_string();
        for term in tokenizer.process(query) {
            if term.len() < 2 {
                continue;
            }
            let pattern = format!(r"(?i)\b[\wа-я]*{}[\wа-я]*\b", regex::escape(&term));
            let re = Regex::new(&pattern).expect("escaped term is a valid pattern");
            highlighted = re.replace_all(&highlighted, "<em>$0</em>").into_owned();
        }
        highlighted
    }
}

/// Largest char-boundary index not past `i`. The cleaner reduces content to
/// ASCII so this is the identity on anything `preview` windows today; it only
/// guards slicing if non-ASCII ever survives cleaning.
fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
