use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            let mut remaining = word;
            while !remaining.is_empty() {
                let mut chunk = String::new();
                let mut chunk_width = 0;
                let mut chunk_byte_len = 0;

                for c in remaining.chars() {
                    let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                    if chunk_width + char_width > width && !chunk.is_empty() {
                        break;
                    }
                    chunk.push(c);
                    chunk_width += char_width;
                    chunk_byte_len += c.len_utf8();
                }

                if !current_line.is_empty() {
                    lines.push(current_line.trim().to_string());
                    current_line.clear();
                    current_width = 0;
                }

                lines.push(chunk);
                remaining = &remaining[chunk_byte_len..];
            }
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(current_line.trim().to_string());
            current_line.clear();
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line.trim().to_string());
    }

    lines
}

fn word_style(word: &str, base_style: Style, function_style: Style) -> Style {
    if mathsyn::is_function(word) {
        function_style
    } else {
        base_style
    }
}

/// Colours function names, numbers and operators of an expression line.
pub fn highlight_functions(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let function_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default().fg(Color::LightGreen);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_number = false;

    for c in expr.chars() {
        if in_word && c.is_ascii_alphanumeric() {
            current.push(c);
            continue;
        }
        if in_number && (c.is_ascii_digit() || c == '.') {
            current.push(c);
            continue;
        }

        if in_word {
            let style = word_style(&current, base_style, function_style);
            spans.push(Span::styled(std::mem::take(&mut current), style));
            in_word = false;
        } else if in_number {
            spans.push(Span::styled(std::mem::take(&mut current), number_style));
            in_number = false;
        }

        match c {
            _ if c.is_ascii_alphabetic() => {
                current.push(c);
                in_word = true;
            }
            _ if c.is_ascii_digit() || c == '.' => {
                current.push(c);
                in_number = true;
            }
            '+' | '-' | '*' | '/' | '^' | '%' => {
                spans.push(Span::styled(c.to_string(), operator_style));
            }
            ' ' => spans.push(Span::raw(" ")),
            _ => spans.push(Span::styled(c.to_string(), base_style)),
        }
    }

    if in_word {
        let style = word_style(&current, base_style, function_style);
        spans.push(Span::styled(current, style));
    } else if in_number {
        spans.push(Span::styled(current, number_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("2 + 3 * 4", 5), vec!["2 + 3", "* 4"]);
        assert_eq!(wrap_text("123456789", 4), vec!["1234", "5678", "9"]);
        assert_eq!(wrap_text("anything", 0), vec![""]);
    }

    #[test]
    fn highlights_known_functions_only() {
        let base = Style::default();
        let spans = highlight_functions("sin(x1)+12.5", base);
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["sin", "(", "x1", ")", "+", "12.5"]);
        assert_eq!(spans[0].style.fg, Some(Color::LightBlue));
        assert_eq!(spans[2].style, base);
        assert_eq!(spans[5].style.fg, Some(Color::LightGreen));
    }
}
