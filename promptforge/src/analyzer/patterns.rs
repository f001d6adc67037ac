//! Detection vocabulary and the lowercase scanner the detectors share.
//!
//! The original product expressed its "missing X" checks as whole-string
//! negative lookaheads; here they are lowercased substring containment over
//! a keyword set, which is behaviorally equivalent for this corpus and
//! keeps the same coarse semantics (a keyword may match inside an unrelated
//! word). Term scanning for the vague/weak detectors is word-bounded and
//! reports the matched slices of the source text in their original casing.

/// Hedging/vague verbs. Order matters: scanning tries alternatives in this
/// order at each position, so `pode` must come before `poderia` falls back
/// to it only when the boundary check fails.
pub(crate) const VAGUE_TERMS: &[&str] = &["faça", "faz", "me ajude", "ajuda", "pode", "poderia"];

/// Qualifiers that discount a vague match when present anywhere after it.
pub(crate) const VAGUE_QUALIFIERS: &[&str] = &["específico", "exato", "preciso"];

/// Modal-hedge verbs.
pub(crate) const WEAK_TERMS: &[&str] =
    &["tente", "talvez", "possivelmente", "provavelmente", "se puder"];

/// Role-definition phrases; the prompt passes when it contains any of them.
pub(crate) const ROLE_TERMS: &[&str] = &["você é", "seu papel"];

/// Output-format keywords.
pub(crate) const FORMAT_TERMS: &[&str] = &["formato", "estrutura", "retorne", "output", "saída"];

/// Negative/limiting keywords.
pub(crate) const CONSTRAINT_TERMS: &[&str] =
    &["não", "nunca", "evite", "limite", "máximo", "mínimo"];

/// Example indicators (few-shot).
pub(crate) const EXAMPLE_TERMS: &[&str] = &["exemplo", "por exemplo", "como:", "e.g.", "ex:"];

/// Tool/function-call syntax markers (checked on the lowercased prompt).
pub(crate) const TOOL_MARKERS: &[&str] = &["<tool>", "<function>", "tool_call", "function_call"];

/// Quoted JSON keys that, between braces, indicate a tool definition
/// (checked case-sensitively on the source text).
pub(crate) const TOOL_JSON_KEYS: &[&str] = &["\"name\"", "\"type\"", "\"function\""];

/// One word-bounded term match.
pub(crate) struct Hit<'a> {
    /// Matched slice of the source text, original casing.
    pub text: &'a str,
    /// Byte offset just past the match in the lowercased text; the suffix
    /// from here is what qualifier checks inspect.
    pub lower_end: usize,
}

/// A source string paired with its lowercase form and a per-byte map back
/// to source spans, so matches found in the lowercase text can be reported
/// as slices of the original. Lowercasing is done once per analysis.
pub(crate) struct LowerText<'a> {
    source: &'a str,
    lower: String,
    /// For each byte of `lower`: (start, end) byte span of the source char
    /// it came from. Lowercasing may expand a char, so several lowercase
    /// bytes can map to the same source span.
    spans: Vec<(usize, usize)>,
}

impl<'a> LowerText<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lower = String::with_capacity(source.len());
        let mut spans = Vec::with_capacity(source.len());
        for (start, ch) in source.char_indices() {
            let end = start + ch.len_utf8();
            for lc in ch.to_lowercase() {
                let at = lower.len();
                lower.push(lc);
                for _ in at..lower.len() {
                    spans.push((start, end));
                }
            }
        }
        Self { source, lower, spans }
    }

    /// The lowercased text.
    pub fn as_str(&self) -> &str {
        &self.lower
    }

    /// Whether the lowercased text contains any of `terms` (terms must
    /// already be lowercase).
    pub fn contains_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.lower.contains(t))
    }

    /// Whether the lowercased text after byte offset `from` contains any of
    /// `terms`.
    pub fn suffix_contains_any(&self, from: usize, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.lower[from..].contains(t))
    }

    /// Scans left to right for word-bounded occurrences of `terms`, trying
    /// alternatives in the given order at each position and resuming after
    /// each match. A boundary is the text edge or a non-alphanumeric char.
    pub fn bounded_hits(&self, terms: &[&str]) -> Vec<Hit<'a>> {
        let lower = self.lower.as_str();
        let mut hits = Vec::new();
        let mut i = 0;
        while i < lower.len() {
            if !lower.is_char_boundary(i) {
                i += 1;
                continue;
            }
            if boundary_before(lower, i) {
                if let Some(term) = terms.iter().find(|t| bounded_match_at(lower, i, t)) {
                    let end = i + term.len();
                    let (src_start, _) = self.spans[i];
                    let (_, src_end) = self.spans[end - 1];
                    hits.push(Hit {
                        text: &self.source[src_start..src_end],
                        lower_end: end,
                    });
                    i = end;
                    continue;
                }
            }
            i += 1;
        }
        hits
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn boundary_before(text: &str, at: usize) -> bool {
    match text[..at].chars().next_back() {
        Some(c) => !is_word(c),
        None => true,
    }
}

fn bounded_match_at(text: &str, at: usize, term: &str) -> bool {
    if !text[at..].starts_with(term) {
        return false;
    }
    match text[at + term.len()..].chars().next() {
        Some(c) => !is_word(c),
        None => true,
    }
}
