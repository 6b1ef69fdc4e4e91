//! TUI rendering with ratatui
//!
//! Draws the classic board: one row per round with key pins on the left and
//! code pegs on the right, and the palette bar underneath.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, Palette, Peg, Symbol};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const PEG: &str = "●";
const HOLE: &str = "○";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board + side panel
            Constraint::Length(4),  // Palette
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_palette(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn symbol_color(symbol: Symbol) -> Color {
    let (r, g, b) = symbol.components();
    Color::Rgb(r, g, b)
}

fn peg_span(symbol: Option<Symbol>, under_cursor: bool) -> Span<'static> {
    let mut style = symbol.map_or_else(
        || Style::default().fg(Color::DarkGray),
        |s| Style::default().fg(symbol_color(s)),
    );
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(if symbol.is_some() { PEG } else { HOLE }, style)
}

fn pins_spans(pegs: &[Peg]) -> Vec<Span<'static>> {
    pegs.iter()
        .map(|peg| match peg {
            Peg::Exact => Span::styled("●", Style::default().fg(Color::White)),
            Peg::Misplaced => Span::styled("○", Style::default().fg(Color::White)),
            Peg::Empty => Span::styled("·", Style::default().fg(Color::DarkGray)),
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.session.secret_length();
    let mut lines = Vec::with_capacity(app.session.max_rounds() + 2);

    for round in 0..app.session.max_rounds() {
        let mut spans = vec![Span::styled(
            format!("{:>2}  ", round + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(row) = app.rows.get(round) {
            spans.extend(pins_spans(&row.feedback.pegs(length)));
            spans.push(Span::raw("   "));
            for &symbol in row.guess.symbols() {
                spans.push(peg_span(Some(symbol), false));
                spans.push(Span::raw(" "));
            }
        } else if round == app.rows.len() && !app.session.is_over() {
            spans.extend(pins_spans(&Feedback::default().pegs(length)));
            spans.push(Span::raw("   "));
            for (i, &slot) in app.slots.iter().enumerate() {
                spans.push(peg_span(slot, i == app.cursor));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled("◀", Style::default().fg(Color::Yellow)));
        } else {
            spans.extend(pins_spans(&Feedback::default().pegs(length)));
            spans.push(Span::raw("   "));
            for _ in 0..length {
                spans.push(peg_span(None, false));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    if let Some(secret) = &app.revealed {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                secret.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn palette_spans(palette: &Palette, selected: Option<Symbol>) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(palette.len() * 2);
    for (i, (symbol, label)) in palette.entries().enumerate() {
        let mut style = Style::default().fg(symbol_color(symbol));
        if selected == Some(symbol) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{}:{PEG} {label}", i + 1), style));
        spans.push(Span::raw("   "));
    }
    spans
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected.map_or_else(
        || Span::styled("none", Style::default().fg(Color::DarkGray)),
        |s| {
            Span::styled(
                format!("{PEG} {}", app.config.palette.label_of(s).unwrap_or("?")),
                Style::default()
                    .fg(symbol_color(s))
                    .add_modifier(Modifier::BOLD),
            )
        },
    );

    let content = vec![
        Line::from(palette_spans(&app.config.palette, app.selected)),
        Line::from(vec![Span::raw("Selected: "), selected]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Colours ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let state_text = match app.session.state() {
        GameState::InProgress => "Playing",
        GameState::Won => "Won",
        GameState::Lost => "Lost",
    };
    let state = Paragraph::new(format!("Game: {state_text}")).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let rounds_text = format!("Guesses left: {}", app.session.rounds_remaining());
    let rounds = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds, chunks[2]);

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "1-9: Colour | Space: Place | ←→: Move | Enter: Check"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn board_renders_all_rounds() {
        let app = App::new(GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("10"));
        assert!(text.contains("Selected: none"));
    }

    #[test]
    fn palette_marks_selection() {
        let palette = Palette::default();
        let spans = palette_spans(&palette, Some(Symbol::GREEN));
        assert_eq!(spans.len(), 12);
        assert!(spans[2].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
