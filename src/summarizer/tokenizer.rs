use regex::Regex;
use std::sync::LazyLock;

/// A word starts with a letter and continues with letters, apostrophes or hyphens.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\W\d_](?:[^\W\d_]|['\-’])*").expect("valid word pattern"));

/// Lower-case forms of abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "no", "fig", "mt", "gen", "col", "sgt", "capt", "lt", "rev", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '”', '’', '»'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '“', '‘', '«'];

#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    pub words: Vec<String>,
    pub is_heading: bool,
}

impl Sentence {
    fn new(text: &str, is_heading: bool) -> Self {
        let text = text.trim().to_string();
        let words = tokenize_words(&text);
        Self {
            text,
            words,
            is_heading,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn headings(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter().filter(|s| s.is_heading)
    }
}

/// Plain text split into paragraphs of headings and sentences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Paragraphs are separated by blank lines. An all-upper-case line is a heading;
    /// the remaining lines of a paragraph are joined and split into sentences.
    pub fn parse(text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut current = Paragraph::default();
        let mut pending: Vec<&str> = Vec::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                flush_text(&mut current, &mut pending);
                if !current.sentences.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else if is_heading(line) {
                flush_text(&mut current, &mut pending);
                current.sentences.push(Sentence::new(line, true));
            } else {
                pending.push(line);
            }
        }

        flush_text(&mut current, &mut pending);
        if !current.sentences.is_empty() {
            paragraphs.push(current);
        }

        Self { paragraphs }
    }

    /// Body sentences in document order; headings are excluded.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .filter(|s| !s.is_heading)
    }

    /// Words of every sentence, headings included.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .flat_map(|s| s.words.iter().map(String::as_str))
    }
}

fn flush_text(paragraph: &mut Paragraph, pending: &mut Vec<&str>) {
    if pending.is_empty() {
        return;
    }
    let joined = pending.join(" ");
    pending.clear();
    paragraph.sentences.extend(
        split_sentences(&joined)
            .into_iter()
            .map(|s| Sentence::new(s, false)),
    );
}

/// A line is a heading when it has cased characters and all of them are upper-case.
pub fn is_heading(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .trim_end_matches(['\'', '-', '’'])
                .to_string()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Splits running text into sentences, keeping the original spelling of each one.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        // Swallow runs like "?!" or "..." and any closing quotes/brackets.
        let mut end = i + 1;
        while end < chars.len() && TERMINATORS.contains(&chars[end].1) {
            end += 1;
        }
        while end < chars.len() && CLOSERS.contains(&chars[end].1) {
            end += 1;
        }

        let byte_end = chars.get(end).map(|(b, _)| *b).unwrap_or(text.len());

        if end < chars.len() && !chars[end].1.is_whitespace() {
            i = end;
            continue;
        }

        let mut next = end;
        while next < chars.len() && chars[next].1.is_whitespace() {
            next += 1;
        }
        let starts_new = match chars.get(next) {
            None => true,
            Some((_, n)) => n.is_uppercase() || n.is_ascii_digit() || OPENERS.contains(n),
        };

        let abbreviated = c == '.' && end == i + 1 && is_abbreviation(&text[start..chars[i].0]);
        if starts_new && !abbreviated {
            let sentence = text[start..byte_end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = chars.get(next).map(|(b, _)| *b).unwrap_or(text.len());
        }
        i = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// `before` is the text preceding a period; checks the last token of it.
fn is_abbreviation(before: &str) -> bool {
    let token = before
        .rsplit(|c: char| c.is_whitespace() || OPENERS.contains(&c))
        .next()
        .unwrap_or("");
    if token.is_empty() {
        return false;
    }
    let mut letters = token.chars().filter(|c| c.is_alphabetic());
    if let (Some(first), None) = (letters.next(), letters.next()) {
        // Single-letter initial such as "J." in "J. Smith".
        if first.is_uppercase() && token.chars().count() == 1 {
            return true;
        }
    }
    ABBREVIATIONS.contains(&token.to_lowercase().as_str())
}
