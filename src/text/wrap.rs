/// Ellipsis marker appended when a line cap truncates content.
pub const ELLIPSIS: char = '\u{2026}';

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Words are accumulated onto a candidate line; when appending the next word
/// would exceed `max_width` (as reported by `measure`, in pixels for the
/// currently active font), the line is closed and the word starts a new one.
/// The first word of a line is never broken mid-word, so a single oversized
/// word can produce a line wider than `max_width`.
///
/// When `max_lines` is set and the wrap produces more lines, output is
/// truncated to the cap and, if words were dropped, the trailing character of
/// the last kept line is replaced with [`ELLIPSIS`].
///
/// All returned lines are trimmed. Empty input yields a single empty line.
pub fn wrap_lines(
    text: &str,
    max_width: f32,
    max_lines: Option<usize>,
    mut measure: impl FnMut(&str) -> f32,
) -> Vec<String> {
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for (n, word) in words.iter().enumerate() {
        let mut candidate = line.clone();
        candidate.push_str(word);
        candidate.push(' ');
        if measure(&candidate) > max_width && n > 0 {
            lines.push(line);
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }
    lines.push(line);

    if let Some(cap) = max_lines
        && cap > 0
        && lines.len() > cap
    {
        lines.truncate(cap);
        let kept_words: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
        if words.len() > kept_words
            && let Some(last) = lines.last_mut()
        {
            let mut trimmed: String = last.trim_end().to_string();
            trimmed.pop();
            trimmed.push(ELLIPSIS);
            *last = trimmed;
        }
    }

    lines.iter().map(|l| l.trim().to_string()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
