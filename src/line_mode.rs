use crate::display::{format_number, format_with_spaces, split_details};
use anyhow::{Context, Result};
use mathsyn::{evaluate_with, EvalConfig, EvaluationTrace};
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Expression: ";

// Позиция символа -> байтовая позиция
fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn run_line(config: EvalConfig) -> Result<()> {
    println!("mathsyn line mode");
    println!("Supports: +, -, *, /, %, ^, parentheses, sin, cos, tan");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'quit' to exit, 'clear' to reset history");
    println!("\rAdd 'details' before expression for step-by-step evaluation\n");

    let mut stdout = stdout()
        .into_raw_mode()
        .context("failed to switch terminal to raw mode")?;
    let mut keys = stdin().keys();
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    loop {
        write!(stdout, "{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut expression = String::new();
        let mut cursor_pos = 0; // в символах
        let (_, initial_y) = stdout.cursor_pos()?;

        loop {
            write!(
                stdout,
                "{}{}{}{}",
                Goto(1, initial_y),
                ClearLine,
                PROMPT,
                expression
            )?;

            let byte_pos = char_index_to_byte_index(&expression, cursor_pos);
            let column = PROMPT.len() + expression[..byte_pos].width() + 1;
            write!(stdout, "{}", Goto(column as u16, initial_y))?;
            stdout.flush()?;

            let Some(key) = keys.next() else {
                write!(stdout, "\r\n")?;
                return Ok(());
            };

            match key? {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Char(c) => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.insert(byte_idx, c);
                    cursor_pos += 1;
                }
                Key::Backspace if cursor_pos > 0 => {
                    cursor_pos -= 1;
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.remove(byte_idx);
                }
                Key::Delete if cursor_pos < expression.chars().count() => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.remove(byte_idx);
                }
                Key::Left if cursor_pos > 0 => cursor_pos -= 1,
                Key::Right if cursor_pos < expression.chars().count() => cursor_pos += 1,
                Key::Home => cursor_pos = 0,
                Key::End => cursor_pos = expression.chars().count(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    }
                }
                Key::Down => {
                    if history_index < history.len().saturating_sub(1) {
                        history_index += 1;
                        expression = history[history_index].clone();
                    } else {
                        history_index = history.len();
                        expression.clear();
                    }
                    cursor_pos = expression.chars().count();
                }
                _ => {}
            }
        }

        let input = expression.trim();
        if input.is_empty() {
            write!(stdout, "\r\n")?;
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                return Ok(());
            }
            "clear" | "reset" => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\n")?;
                continue;
            }
            _ => {}
        }

        let (detailed_mode, processed_input) = split_details(input);
        if processed_input.is_empty() {
            write!(stdout, "\r\nPlease enter a valid expression after 'details'\r\n")?;
            continue;
        }

        history.push(input.to_string());
        history_index = history.len();

        let mut trace = EvaluationTrace::new(detailed_mode);
        let formatted_expr = format_with_spaces(processed_input);
        match evaluate_with(processed_input, &config, &mut trace) {
            Ok(result) => {
                write!(stdout, "\r\n  {} = {}\r\n", formatted_expr, format_number(result))?;
                if detailed_mode && !trace.steps.is_empty() {
                    write!(stdout, "\r\n  Step-by-step evaluation:\r\n")?;
                    for (i, step) in trace.steps.iter().enumerate() {
                        write!(
                            stdout,
                            "  Step {}: {} = {}\r\n",
                            i + 1,
                            step.operation,
                            format_number(step.result)
                        )?;
                    }
                }
                write!(stdout, "\r\n")?;
            }
            Err(e) => {
                write!(stdout, "\r\n  {} = Error: {}\r\n\n", formatted_expr, e)?;
            }
        }
    }
}
