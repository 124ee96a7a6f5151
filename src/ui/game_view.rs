use crate::ai::SEARCH_DEPTH;
use crate::game::{Board, Cell, GameState, GameStatus, MoveOutcome, Piece, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    last_move: Option<&MoveOutcome>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state.board(), selected_column, last_move, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_color(piece: Piece) -> Color {
    match piece {
        Piece::Player => Color::Red,
        Piece::Computer => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.status() {
        GameStatus::InProgress => {
            let piece = game_state.to_move();
            let text = match piece {
                Piece::Player => "Your move".to_string(),
                Piece::Computer => "Computer is thinking...".to_string(),
            };
            (text, piece_color(piece))
        }
        GameStatus::PlayerWins => ("Game Over  |  You win".to_string(), Color::Red),
        GameStatus::ComputerWins => ("Game Over  |  Computer wins".to_string(), Color::Yellow),
        GameStatus::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(format!("{status}  |  search depth {SEARCH_DEPTH}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    last_move: Option<&MoveOutcome>,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    // Row 0 is the bottom, so draw top-down from the last row
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Player => (" ● ", piece_color(Piece::Player)),
                Cell::Computer => (" ● ", piece_color(Piece::Computer)),
            };
            let mut style = Style::default().fg(color);
            if last_move.is_some_and(|m| m.row == row && m.column == col) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("←/→: Move  |  Enter or 1-7: Drop  |  R: Restart  |  Q: Quit   "),
        Span::styled("You", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" vs "),
        Span::styled("Computer", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
