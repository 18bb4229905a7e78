//! Text cleaning ahead of sentence splitting.

/// Invisible characters dropped outright and look-alike spaces turned into
/// plain spaces.
const REPLACED_CHARS: &[(char, &str)] = &[
    ('\u{00a0}', " "), // Non-breaking space
    ('\u{2007}', " "), // Figure space
    ('\u{202f}', " "), // Narrow no-break space
    ('\u{2028}', "\n"), // Line separator
    ('\u{2029}', "\n\n"), // Paragraph separator
    ('\u{00ad}', ""),  // Soft hyphen
    ('\u{200b}', ""),  // Zero-width space
    ('\u{200c}', ""),  // Zero-width non-joiner
    ('\u{200d}', ""),  // Zero-width joiner
    ('\u{2060}', ""),  // Word joiner
    ('\u{feff}', ""),  // BOM
];

/// Split text into cleaned paragraphs.
///
/// Look-alike spaces become plain spaces, zero-width and control characters
/// (except newlines and tabs) are dropped, and whitespace inside a paragraph
/// collapses to single spaces. A paragraph ends at a blank line; single
/// newlines are line wrapping.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut replaced = String::with_capacity(text.len());

    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let replacement = REPLACED_CHARS
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, r)| *r);

        if let Some(r) = replacement {
            replaced.push_str(r);
        } else if c == '\r' {
            // Lone CR is a line break; CRLF keeps only its LF
            if chars.peek() != Some(&'\n') {
                replaced.push('\n');
            }
        } else if is_allowed_char(c) {
            replaced.push(c);
        }
    }

    let mut result = Vec::new();
    let mut current = String::new();
    let mut blank_run = false;

    for line in replaced.split('\n') {
        let line = collapse_whitespace(line);
        if line.is_empty() {
            blank_run = true;
            continue;
        }
        if blank_run && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        blank_run = false;
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&line);
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Check if a character survives cleaning.
fn is_allowed_char(c: char) -> bool {
    if c == '\n' || c == '\t' {
        return true;
    }

    // Reject control characters (U+0000 to U+001F, U+007F, C1 controls)
    !c.is_control()
}

/// Collapse whitespace runs to a single space and trim the ends.
fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
