use super::prefix::Prefix;
use rolo_diagnostics::Span;

/// A captured argument value: trimmed text plus the byte span of that text in
/// the raw input.
///
/// An empty `text` means the prefix occurrence had no trailing text before the
/// next prefix or end of input — the edit-style commands use this deliberately
/// as the clear-all-tags sentinel. The span of an empty value is zero-width at
/// the position where a value would have started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgValue {
    /// The trimmed raw text. Validation is the field validators' job; no
    /// normalization beyond trimming happens here.
    pub text: String,
    /// Byte span of `text` in the original input.
    pub span: Span,
}

impl ArgValue {
    /// Capture `input[start..end]`, trimmed, with the span of the kept text.
    fn slice(input: &str, start: usize, end: usize) -> Self {
        let raw = &input[start..end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self {
                text: String::new(),
                span: Span::empty(start),
            };
        }
        let lead = raw.len() - raw.trim_start().len();
        let s = start + lead;
        Self {
            text: trimmed.to_string(),
            span: Span::new(s, s + trimmed.len()),
        }
    }

    /// True when the captured text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Maps each recognized prefix to the ordered sequence of values captured
/// after its occurrences, plus the positional preamble.
///
/// Built once per parse call and immutable afterwards. Every recognized
/// prefix owns an entry even when absent from the input (empty sequence), so
/// "absent" and "present with an empty value" stay distinguishable.
#[derive(Debug)]
pub struct ArgumentMultimap {
    preamble: ArgValue,
    entries: Vec<(Prefix, Vec<ArgValue>)>,
}

impl ArgumentMultimap {
    /// All text before the first recognized prefix occurrence, trimmed.
    pub fn preamble(&self) -> &ArgValue {
        &self.preamble
    }

    /// The values captured for `prefix`, in order of occurrence.
    ///
    /// Empty slice when the prefix is absent (or not recognized by the
    /// tokenize call that built this map).
    pub fn all_values(&self, prefix: Prefix) -> &[ArgValue] {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map_or(&[], |(_, values)| values.as_slice())
    }

    /// The value of the last occurrence of `prefix`, if any.
    pub fn value_of(&self, prefix: Prefix) -> Option<&ArgValue> {
        self.all_values(prefix).last()
    }

    /// How many times `prefix` occurred.
    pub fn occurrences(&self, prefix: Prefix) -> usize {
        self.all_values(prefix).len()
    }
}

/// A located prefix occurrence, before value slicing.
struct PrefixHit {
    prefix: Prefix,
    start: usize,
    end: usize,
}

/// Tokenize `input` against the ordered list of prefixes recognized by the
/// calling command.
///
/// Single left-to-right pass, no backtracking. A prefix occurrence counts
/// only at a token boundary — byte 0 of the input or immediately after ASCII
/// whitespace — so prefix-shaped text inside a value (say a `p/` buried in an
/// address) stays part of that value rather than starting a new field. Text
/// before the first occurrence becomes the preamble; text between an
/// occurrence and the next (or end of input) becomes that occurrence's value.
///
/// All prefix markers are ASCII and byte offsets from `str::find` land on
/// UTF-8 boundaries, so the single-byte whitespace test before a hit cannot
/// misfire inside a multi-byte character.
pub fn tokenize(input: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut hits: Vec<PrefixHit> = Vec::new();
    for &prefix in prefixes {
        let marker = prefix.as_str();
        let mut from = 0;
        while let Some(rel) = input[from..].find(marker) {
            let at = from + rel;
            if at == 0 || input.as_bytes()[at - 1].is_ascii_whitespace() {
                hits.push(PrefixHit {
                    prefix,
                    start: at,
                    end: at + marker.len(),
                });
            }
            from = at + marker.len();
        }
    }
    hits.sort_by_key(|h| h.start);

    let first = hits.first().map_or(input.len(), |h| h.start);
    let preamble = ArgValue::slice(input, 0, first);

    let mut entries: Vec<(Prefix, Vec<ArgValue>)> =
        prefixes.iter().map(|&p| (p, Vec::new())).collect();
    for (i, hit) in hits.iter().enumerate() {
        let end = hits.get(i + 1).map_or(input.len(), |next| next.start);
        let value = ArgValue::slice(input, hit.end, end);
        if let Some((_, values)) = entries.iter_mut().find(|(p, _)| *p == hit.prefix) {
            values.push(value);
        }
    }

    ArgumentMultimap { preamble, entries }
}
