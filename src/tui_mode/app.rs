use crate::display::split_details;
use log::debug;
use mathsyn::{evaluate_with, CalcError, EvalConfig, EvaluationTrace, Step};
use std::time::{Duration, Instant};

/// Outcome of one submitted line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    Failed(CalcError),
    /// `details` with nothing after it.
    MissingExpression,
}

pub struct HistoryEntry {
    pub input: String,
    pub outcome: Outcome,
    pub detailed_steps: Vec<Step>,
    pub detailed_mode: bool,
    pub duration: Duration,
}

pub struct App {
    pub config: EvalConfig,
    pub input: String,
    pub cursor_position: usize,
    pub input_scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub item_start_indices: Vec<usize>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new(config: EvalConfig) -> Self {
        App {
            config,
            input: String::new(),
            cursor_position: 0,
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            item_start_indices: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
            terminal_too_small: false,
        }
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total_chars = self.input.chars().count();
        let cursor_pos = self.cursor_position;

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        } else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos + 1 - visible_width;
        }

        if self.input_scroll > total_chars.saturating_sub(visible_width) {
            self.input_scroll = total_chars.saturating_sub(visible_width);
        }
    }

    pub fn submit(&mut self) {
        let input = self.input.trim().to_string();
        if input.is_empty() {
            return;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                self.should_quit = true;
                return;
            }
            "clear" | "reset" => {
                self.history.clear();
                self.cursor_history = 0;
                self.history_scroll = 0;
                self.clear_input();
                return;
            }
            "help" => {
                self.show_help = true;
                self.help_scroll = 0;
                self.clear_input();
                return;
            }
            _ => {}
        }

        let (detailed_mode, processed_input) = split_details(&input);

        if processed_input.is_empty() {
            self.history.push(HistoryEntry {
                input: input.clone(),
                outcome: Outcome::MissingExpression,
                detailed_steps: Vec::new(),
                detailed_mode: false,
                duration: Duration::ZERO,
            });
            self.clear_input();
            return;
        }

        let start_time = Instant::now();
        let mut trace = EvaluationTrace::new(detailed_mode);
        let outcome = match evaluate_with(processed_input, &self.config, &mut trace) {
            Ok(value) => Outcome::Value(value),
            Err(e) => Outcome::Failed(e),
        };
        let duration = start_time.elapsed();
        debug!("tui evaluated {processed_input:?} in {duration:?}");

        self.history.push(HistoryEntry {
            input: processed_input.to_string(),
            outcome,
            detailed_steps: trace.steps,
            detailed_mode,
            duration,
        });

        self.cursor_history = self.history.len().saturating_sub(1);
        self.clear_input();
        self.scroll_to_bottom = true;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = Self::char_index_to_byte_index(&self.input, self.cursor_position);
        self.input.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_at_cursor();
        }
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let byte_idx = Self::char_index_to_byte_index(&self.input, self.cursor_position);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match direction {
            -1 => self.cursor_position = self.cursor_position.saturating_sub(1),
            1 => self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count()),
            _ => {}
        }
    }

    pub fn move_cursor_by_words(&mut self, direction: i32) {
        let input_chars: Vec<char> = self.input.chars().collect();
        let mut pos = self.cursor_position;

        if direction < 0 {
            while pos > 0 && input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }
            while pos > 0 && !input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }
        } else {
            let len = input_chars.len();
            while pos < len && !input_chars[pos].is_whitespace() {
                pos += 1;
            }
            while pos < len && input_chars[pos].is_whitespace() {
                pos += 1;
            }
        }

        self.cursor_position = pos.min(input_chars.len());
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if self.history.is_empty() {
            return;
        }
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len() - 1 {
            self.cursor_history += 1;
        }

        self.recall_selected();
    }

    pub fn scroll_history(&mut self, direction: i32) {
        if self.history.is_empty() {
            return;
        }
        let step = self.list_height.saturating_sub(1).max(1);
        if direction < 0 {
            self.cursor_history = self.cursor_history.saturating_sub(step);
        } else {
            self.cursor_history = self
                .cursor_history
                .saturating_add(step)
                .min(self.history.len() - 1);
        }

        self.recall_selected();
    }

    fn recall_selected(&mut self) {
        if let Some(entry) = self.history.get(self.cursor_history) {
            self.input = entry.input.clone();
        }
        self.cursor_position = self.input.chars().count();
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.input_scroll = 0;
    }

    pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
        s.char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(app: &mut App, line: &str) {
        app.input = line.to_string();
        app.cursor_position = line.chars().count();
        app.submit();
    }

    #[test]
    fn results_and_errors_land_in_history() {
        let mut app = App::new(EvalConfig::default());
        submit(&mut app, "2+3*4");
        submit(&mut app, "5/0");

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0].outcome, Outcome::Value(14.0));
        assert_eq!(app.history[1].outcome, Outcome::Failed(CalcError::DivisionByZero));
        assert_eq!(app.cursor_history, 1);
        assert!(app.input.is_empty());
        assert!(app.scroll_to_bottom);
    }

    #[test]
    fn details_prefix_keeps_steps() {
        let mut app = App::new(EvalConfig::default());
        submit(&mut app, "details 2^3^2");

        let entry = &app.history[0];
        assert!(entry.detailed_mode);
        assert_eq!(entry.input, "2^3^2");
        assert_eq!(entry.detailed_steps.len(), 2);
        assert_eq!(entry.detailed_steps[1].result, 512.0);

        submit(&mut app, "details");
        assert_eq!(app.history[1].outcome, Outcome::MissingExpression);
    }

    #[test]
    fn commands_are_not_evaluated() {
        let mut app = App::new(EvalConfig::default());
        submit(&mut app, "1+1");
        submit(&mut app, "help");
        assert!(app.show_help);
        submit(&mut app, "CLEAR");
        assert!(app.history.is_empty());
        submit(&mut app, "quit");
        assert!(app.should_quit);
    }

    #[test]
    fn history_navigation_recalls_input() {
        let mut app = App::new(EvalConfig::default());
        app.navigate_history(-1);
        assert!(app.input.is_empty());

        submit(&mut app, "1+1");
        submit(&mut app, "2+2");
        app.navigate_history(-1);
        assert_eq!(app.input, "1+1");
        assert_eq!(app.cursor_position, 3);
        app.navigate_history(1);
        assert_eq!(app.input, "2+2");
    }

    #[test]
    fn editing_respects_char_boundaries() {
        let mut app = App::new(EvalConfig::default());
        for c in "1é+2".chars() {
            app.insert_char(c);
        }
        app.move_cursor(-1);
        app.move_cursor(-1);
        app.delete_before_cursor();
        assert_eq!(app.input, "1+2");
        app.move_cursor_by_words(1);
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn input_scroll_follows_cursor() {
        let mut app = App::new(EvalConfig::default());
        app.input = "0123456789".into();
        app.cursor_position = 9;
        app.adjust_input_scroll(4);
        assert_eq!(app.input_scroll, 6);
        app.cursor_position = 2;
        app.adjust_input_scroll(4);
        assert_eq!(app.input_scroll, 2);
    }
}
