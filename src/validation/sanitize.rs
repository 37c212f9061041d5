/// Trim `input`, collapse whitespace runs into one space and drop control
/// characters.
pub(crate) fn inline_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| word.chars().filter(|ch| !ch.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize every line with [`inline_text`], strip blank lines at both ends
/// and keep at most one blank line between paragraphs.
pub(crate) fn multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in input.lines().map(inline_text) {
        let is_blank = line.is_empty();
        if is_blank && lines.last().is_none_or(|prev: &String| prev.is_empty()) {
            continue;
        }
        lines.push(line);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_collapses_whitespace() {
        assert_eq!(inline_text("  Deluxe \t Lamp\u{7}  "), "Deluxe Lamp");
    }

    #[test]
    fn inline_text_drops_words_made_of_control_characters() {
        assert_eq!(inline_text("Desk \u{1b}\u{7} Lamp"), "Desk Lamp");
        assert_eq!(inline_text("\u{0}"), "");
    }

    #[test]
    fn multiline_text_keeps_single_paragraph_breaks() {
        assert_eq!(
            multiline_text("\n\n First line.\n\n\n  Second   line. \n\n"),
            "First line.\n\nSecond line."
        );
    }

    #[test]
    fn multiline_text_of_blank_input_is_empty() {
        assert_eq!(multiline_text(" \n \n"), "");
    }
}
