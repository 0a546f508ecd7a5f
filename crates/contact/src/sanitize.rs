//! Field sanitizers applied to every submission before validation.

/// Characters kept by [`sanitize_email`] besides ASCII letters and digits.
const EMAIL_PUNCTUATION: &str = "!#$%&'*+-=?^_`{|}~@.[]";

/// Removes markup from `input`.
///
/// A `<` followed by whitespace (or ending the input) is plain text. Anything
/// else opens a tag that runs until the matching `>`, skipping quoted
/// attribute values and `<!-- -->` comments. An unterminated tag swallows the
/// rest of the input.
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.chars().next() {
            Some(c) if !c.is_whitespace() => {}
            _ => {
                output.push('<');
                rest = after;
                continue;
            }
        }

        let Some(end) = tag_end(after) else {
            return output;
        };

        rest = &after[end..];
    }

    output.push_str(rest);
    output
}

/// Byte offset just past the `>` closing the tag body `input`.
fn tag_end(input: &str) -> Option<usize> {
    if let Some(comment) = input.strip_prefix("!--") {
        return comment.find("-->").map(|i| "!--".len() + i + "-->".len());
    }

    let mut quote = None;
    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i + 1),
            _ => {}
        }
    }

    None
}

/// Markup stripped, surrounding whitespace trimmed.
pub fn sanitize_text(input: &str) -> String {
    strip_tags(input).trim().to_owned()
}

/// Trims `input` and drops every character that cannot appear in an email
/// address.
pub fn sanitize_email(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || EMAIL_PUNCTUATION.contains(*c))
        .collect()
}
