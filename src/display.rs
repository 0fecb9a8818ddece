//! Formatting shared by the interactive front ends.

pub fn format_number(x: f64) -> String {
    if x.is_nan() || x.is_infinite() {
        return x.to_string();
    }
    if x.abs() > 1e10 || (x.abs() < 1e-5 && x != 0.0) {
        format!("{:.6e}", x)
    } else {
        let s = format!("{:.6}", x);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" {
            "0".to_string()
        } else {
            s.to_string()
        }
    }
}

/// Splits a leading `details ` or trailing ` details` marker off the input.
#[cfg(any(feature = "tui", feature = "line"))]
pub fn split_details(input: &str) -> (bool, &str) {
    const PREFIX: &str = "details ";
    const SUFFIX: &str = " details";

    if input.eq_ignore_ascii_case(PREFIX.trim()) {
        return (true, "");
    }
    if let Some(head) = input.get(..PREFIX.len()) {
        if head.eq_ignore_ascii_case(PREFIX) {
            return (true, input[PREFIX.len()..].trim());
        }
    }
    if let Some(start) = input.len().checked_sub(SUFFIX.len()) {
        if let Some(tail) = input.get(start..) {
            if tail.eq_ignore_ascii_case(SUFFIX) {
                return (true, input[..start].trim());
            }
        }
    }
    (false, input)
}

/// Re-spaces an expression for echoing: one space around binary operators,
/// none between a function name and its `(`.
#[cfg(any(feature = "tui", feature = "line"))]
pub fn format_with_spaces(expr: &str) -> String {
    let mut result = String::new();
    let mut last_char = '\0';
    let mut in_function = false;

    for c in expr.chars() {
        match c {
            '+' | '-' | '*' | '/' | '^' | '%' => {
                if last_char != ' ' && last_char != '\0' && last_char != '(' {
                    result.push(' ');
                }
                result.push(c);
                result.push(' ');
                last_char = ' ';
            }
            '(' => {
                if !in_function && last_char != ' ' && last_char != '\0' && last_char != '(' {
                    result.push(' ');
                }
                result.push(c);
                in_function = false;
                last_char = '(';
            }
            ')' | ',' => {
                result.push(c);
                if c == ',' {
                    result.push(' ');
                }
                last_char = c;
            }
            _ if c.is_whitespace() => {
                continue;
            }
            _ => {
                if c.is_ascii_alphabetic() {
                    in_function = true;
                } else if !c.is_ascii_alphanumeric() {
                    in_function = false;
                }
                if last_char == ')' {
                    result.push(' ');
                }
                result.push(c);
                last_char = c;
            }
        }
    }

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}
