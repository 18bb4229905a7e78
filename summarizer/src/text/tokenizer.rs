//! Sentence splitting with per-language abbreviation rules.

use super::Sentence;
use super::cleaner::paragraphs;
use crate::resources::LanguageResources;

/// Split text into indexed sentences.
///
/// Paragraph breaks always end a sentence. Inside a paragraph a sentence ends
/// after `.`, `!`, `?`, `…` or `‽` (and runs of them) unless the period
/// belongs to an abbreviation, an initial, a number or an ordinal.
pub fn tokenize(text: &str, resources: &LanguageResources) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for paragraph in paragraphs(text) {
        for piece in split_paragraph(&paragraph, resources) {
            let index = sentences.len();
            sentences.push(Sentence::new(index, piece));
        }
    }

    sentences
}

/// Split one cleaned paragraph into trimmed, non-empty pieces.
fn split_paragraph<'a>(paragraph: &'a str, resources: &LanguageResources) -> Vec<&'a str> {
    let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(paragraph.len(), |(offset, _)| *offset);

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut start_byte = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let mut run_end = i;
        while run_end < chars.len() && is_terminator(chars[run_end].1) {
            run_end += 1;
        }
        let mut end = run_end;
        while end < chars.len() && is_closing(chars[end].1) {
            end += 1;
        }

        let single_period = run_end - i == 1 && chars[i].1 == '.';
        if is_boundary(&chars, start, i, end, single_period, resources) {
            let end_byte = byte_at(end);
            push_piece(&mut pieces, &paragraph[start_byte..end_byte]);
            start = end;
            start_byte = end_byte;
        }
        i = end;
    }

    push_piece(&mut pieces, &paragraph[start_byte..]);
    pieces
}

fn push_piece<'a>(pieces: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        pieces.push(piece);
    }
}

/// Decide whether the terminator run at `at..end` closes a sentence.
fn is_boundary(
    chars: &[(usize, char)],
    start: usize,
    at: usize,
    end: usize,
    single_period: bool,
    resources: &LanguageResources,
) -> bool {
    let glued = chars.get(end).is_some_and(|(_, c)| !c.is_whitespace());
    let Some(following) = chars[end..]
        .iter()
        .map(|(_, c)| *c)
        .find(|c| !c.is_whitespace())
    else {
        return true;
    };

    let next_word = word_after(chars, end);

    // "example.com", "3.14" and friends
    if glued && !following.is_uppercase() {
        return false;
    }
    // Sentences don't start in lowercase; the period belongs to something
    // else. Camel-case names ("iPhone", "eBay") are the exception.
    if following.is_lowercase() && !is_camel_case(&next_word) {
        return false;
    }
    if !single_period {
        return true;
    }

    let token = token_before(chars, start, at);
    if token.is_empty() {
        return true;
    }
    if resources.is_abbreviation(&token) || is_initials(&token) {
        // "etc. Then", "the U.S. Her": the abbreviation also ends the
        // sentence when a capitalized function word follows
        return !is_title(&token) && is_sentence_starter(&next_word, resources);
    }
    if resources.uses_ordinal_dots() && is_ordinal_number(&token) {
        return false;
    }
    true
}

/// Case-folded word directly before position `at`, without leading
/// punctuation: `(Dr.` gives "dr", `e.g.` gives "e.g".
fn token_before(chars: &[(usize, char)], start: usize, at: usize) -> String {
    let mut from = at;
    while from > start && !chars[from - 1].1.is_whitespace() {
        from -= 1;
    }
    let token: String = chars[from..at].iter().map(|(_, c)| *c).collect();
    token
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Word starting at `from`, past whitespace and opening punctuation.
fn word_after(chars: &[(usize, char)], from: usize) -> String {
    chars[from..]
        .iter()
        .map(|(_, c)| *c)
        .skip_while(|c| !c.is_alphanumeric())
        .take_while(|c| c.is_alphanumeric())
        .collect()
}

/// Capitalized stopword of two or more letters: "Then", "It", "Her".
fn is_sentence_starter(word: &str, resources: &LanguageResources) -> bool {
    let mut letters = word.chars();
    let capitalized = letters.next().is_some_and(char::is_uppercase);
    capitalized && letters.next().is_some() && resources.is_stopword(&word.to_lowercase())
}

/// Lowercase first letter with an uppercase one later.
fn is_camel_case(word: &str) -> bool {
    let mut letters = word.chars();
    letters.next().is_some_and(char::is_lowercase) && letters.any(char::is_uppercase)
}

/// Honorifics always precede a name, never end a sentence.
fn is_title(token: &str) -> bool {
    const TITLES: &[&str] = &[
        "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "sra", "srta", "dra", "jr", "st",
        "m", "mm", "mme", "mlle", "hr", "fr", "frl", "d", "dña", "sig", "mgr", "ing", "doc",
    ];
    TITLES.contains(&token)
}

/// "j", "u.s", "j.r.r"
fn is_initials(token: &str) -> bool {
    token.split('.').all(|part| {
        let mut chars = part.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    })
}

/// One- or two-digit numbers such as the "3" in "am 3. Oktober".
fn is_ordinal_number(token: &str) -> bool {
    (1..=2).contains(&token.len()) && token.chars().all(|c| c.is_ascii_digit())
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…' | '‽')
}

/// Closing quotes and brackets stay with the sentence they close.
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | '»' | '›' | ')' | ']' | '}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::resources::BuiltinLoader;

    fn english() -> LanguageResources {
        BuiltinLoader::default().bundle(Language::English)
    }

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let sentences = tokenize("Dr. Smith arrived. He left.", &english());
        assert_eq!(texts(&sentences), vec!["Dr. Smith arrived.", "He left."]);
    }

    #[test]
    fn test_indices_are_contiguous() {
        let sentences = tokenize("One. Two!\n\nThree? Four.", &english());
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_trailing_empty_sentence() {
        let sentences = tokenize("Hello. World.   ", &english());
        assert_eq!(texts(&sentences), vec!["Hello.", "World."]);
    }

    #[test]
    fn test_split_without_following_space() {
        let sentences = tokenize("It ended.Then it began again.", &english());
        assert_eq!(texts(&sentences), vec!["It ended.", "Then it began again."]);
    }

    #[test]
    fn test_numbers_and_domains_do_not_split() {
        let sentences = tokenize("Pi is 3.14 roughly. Visit example.com today.", &english());
        assert_eq!(
            texts(&sentences),
            vec!["Pi is 3.14 roughly.", "Visit example.com today."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let sentences = tokenize("J. R. R. Tolkien wrote it. The U.S. Army read it.", &english());
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "J. R. R. Tolkien wrote it.");
    }

    #[test]
    fn test_dotted_abbreviation() {
        let sentences = tokenize("Bring fruit, e.g. Apples or pears. Then go.", &english());
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let sentences = tokenize("He said \"Stop.\" Then he left.", &english());
        assert_eq!(texts(&sentences), vec!["He said \"Stop.\"", "Then he left."]);
    }

    #[test]
    fn test_terminator_runs() {
        let sentences = tokenize("Really?! Yes... Fine.", &english());
        assert_eq!(texts(&sentences), vec!["Really?!", "Yes...", "Fine."]);
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        let sentences = tokenize("It cost approx. five dollars. Cheap.", &english());
        assert_eq!(
            texts(&sentences),
            vec!["It cost approx. five dollars.", "Cheap."]
        );
    }

    #[test]
    fn test_abbreviation_can_end_sentence() {
        let english = english();
        assert_eq!(
            texts(&tokenize("We bought apples, pears, etc. Then we left.", &english)),
            vec!["We bought apples, pears, etc.", "Then we left."]
        );
        assert_eq!(
            texts(&tokenize("She moved to the U.S. Her brother stayed.", &english)),
            vec!["She moved to the U.S.", "Her brother stayed."]
        );
        assert_eq!(
            texts(&tokenize("I bought vitamin C. It helps.", &english)),
            vec!["I bought vitamin C.", "It helps."]
        );
    }

    #[test]
    fn test_title_before_stopword_does_not_split() {
        let french = BuiltinLoader::default().bundle(Language::French);
        let sentences = tokenize("M. Le Gall est arrivé. Il est reparti.", &french);
        assert_eq!(
            texts(&sentences),
            vec!["M. Le Gall est arrivé.", "Il est reparti."]
        );
    }

    #[test]
    fn test_camel_case_word_starts_sentence() {
        let sentences = tokenize("The price rose. iPhone sales fell.", &english());
        assert_eq!(texts(&sentences), vec!["The price rose.", "iPhone sales fell."]);
    }

    #[test]
    fn test_paragraph_break_is_boundary() {
        let sentences = tokenize("A Heading Without Punctuation\n\nBody text here.", &english());
        assert_eq!(
            texts(&sentences),
            vec!["A Heading Without Punctuation", "Body text here."]
        );
    }

    #[test]
    fn test_german_ordinals() {
        let german = BuiltinLoader::default().bundle(Language::German);
        let sentences = tokenize("Er kam am 3. Oktober an. Es war 1990. Dann ging er.", &german);
        assert_eq!(
            texts(&sentences),
            vec!["Er kam am 3. Oktober an.", "Es war 1990.", "Dann ging er."]
        );
    }

    #[test]
    fn test_spanish_inverted_marks() {
        let spanish = BuiltinLoader::default().bundle(Language::Spanish);
        let sentences = tokenize("¿Vienes mañana? ¡Claro que sí! La Sra. García también.", &spanish);
        assert_eq!(
            texts(&sentences),
            vec!["¿Vienes mañana?", "¡Claro que sí!", "La Sra. García también."]
        );
    }

    #[test]
    fn test_fallback_ruleset_still_splits() {
        let fallback = LanguageResources::fallback();
        let sentences = tokenize("Dit is een zin. Nog een zin! En nog een?", &fallback);
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("", &english()).is_empty());
        assert!(tokenize("  \n\n ", &english()).is_empty());
        assert!(tokenize("...", &english()).len() <= 1);
    }

    #[test]
    fn test_word_helpers() {
        assert!(is_camel_case("iPhone"));
        assert!(!is_camel_case("iphone"));
        assert!(!is_camel_case("Phone"));
        assert!(is_title("dr"));
        assert!(!is_title("etc"));
    }

    #[test]
    fn test_is_initials() {
        assert!(is_initials("j"));
        assert!(is_initials("u.s"));
        assert!(!is_initials("dr"));
        assert!(!is_initials("3"));
    }
}
