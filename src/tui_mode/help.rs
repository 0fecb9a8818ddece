use super::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" mathsyn Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "mathsyn - expression calculator",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Operators (lowest to highest precedence):"),
        Line::from("  + - : Addition, subtraction      (e.g., 10 - 4 + 1 = 7)"),
        Line::from("  * / : Multiplication, division  (e.g., 15 / 3 * 2 = 10)"),
        Line::from("  %   : Remainder, same level     (e.g., 10 % 3 = 1)"),
        Line::from("  ^   : Power, right-associative   (e.g., 2 ^ 3 ^ 2 = 512)"),
        Line::from("  ( ) : Grouping                   (e.g., (2 + 3) * 4 = 20)"),
        Line::from(""),
        heading("Functions (radians):"),
        Line::from("  sin(x) : Sine"),
        Line::from("  cos(x) : Cosine"),
        Line::from("  tan(x) : Tangent"),
        Line::from(""),
        heading("Limitations:"),
        Line::from("  No unary minus: write (0 - 5) instead of -5"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  details <expression> : Show step-by-step evaluation with time"),
        Line::from("  clear : Clear calculation history"),
        Line::from("  help  : Show this help screen"),
        Line::from("  quit  : Exit the calculator"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Navigate calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Mouse wheel : Scroll through history"),
        Line::from(""),
        heading("Examples:"),
        Line::from("  sin(0.5) ^ 2 + cos(0.5) ^ 2"),
        Line::from("  details (1 + 2) * 3 % 4"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
