use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::board::Cell;
use crate::engine::GameOverReason;
use crate::game::{Game, GameStatus};

/// What a board cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Snake,
    Food,
    ReversingFood,
}

impl CellKind {
    fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Snake => '#',
            Self::Food => '*',
            Self::ReversingFood => '@',
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Empty => Style::new().fg(Color::DarkGray),
            Self::Snake => Style::new().fg(Color::Green),
            Self::Food => Style::new().fg(Color::Red),
            Self::ReversingFood => Style::new().fg(Color::Magenta),
        }
    }
}

/// The snake is drawn over food.
pub fn cell_kind<R>(game: &Game<R>, cell: Cell) -> CellKind {
    let food = game.food();
    if game.snake().contains(cell) {
        CellKind::Snake
    } else if cell == food.cell {
        if food.reversing {
            CellKind::ReversingFood
        } else {
            CellKind::Food
        }
    } else {
        CellKind::Empty
    }
}

/// Print the board in simple ascii
pub fn board_to_string<R>(game: &Game<R>) -> String {
    game.board()
        .rows()
        .map(|row| row.map(|cell| cell_kind(game, cell).symbol()).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

fn board_lines<R>(game: &Game<R>) -> Vec<Line<'static>> {
    game.board()
        .rows()
        .map(|row| {
            Line::from(
                row.map(|cell| {
                    let kind = cell_kind(game, cell);
                    let glyph = if kind == CellKind::Empty { " ·" } else { "██" };
                    Span::styled(glyph, kind.style())
                })
                .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn reason_text(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::Wall => "You hit the wall.",
        GameOverReason::SelfCollision => "You ran into yourself.",
        GameOverReason::BoardFilled => "Board cleared!",
    }
}

/// Center a `width`×`height` box in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x.saturating_add(area.width.saturating_sub(w) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}

pub fn draw<R>(frame: &mut Frame, game: &Game<R>) {
    let area = frame.area();
    match game.status() {
        GameStatus::Running => {
            let title = format!(" Score: {} ", game.score());
            let block = Block::default().borders(Borders::ALL).title(title.bold());

            // Two terminal columns per cell, plus the border.
            let n = game.board().size() as u16;
            let frame_area = centered(area, n.saturating_mul(2).saturating_add(2), n.saturating_add(2));

            let para = Paragraph::new(board_lines(game))
                .block(block)
                .alignment(Alignment::Left);
            frame.render_widget(para, frame_area);
        }
        GameStatus::Over(reason) => {
            let lines = vec![
                Line::from("Game Over".bold()),
                Line::from(""),
                Line::from(reason_text(reason)),
                Line::from(format!("Your Score: {}", game.score())),
                Line::from(""),
                Line::from("r: restart  q: quit".dim()),
            ];
            let para = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center);
            frame.render_widget(para, centered(area, 32, 8));
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::direction::Direction;
    use crate::GameConfig;

    fn small_game() -> Game {
        let cfg = GameConfig {
            board_size: 5,
            ..Default::default()
        };
        Game::with_seed(cfg, 7).unwrap()
    }

    #[test]
    fn ascii_board_at_start() {
        let g = small_game();
        assert_eq!(
            board_to_string(&g),
            [".....", ".....", "..#..", "..*..", "....."].join("\n")
        );
    }

    #[test]
    fn cell_kinds() {
        let g = small_game();
        assert_eq!(cell_kind(&g, 13), CellKind::Snake);
        assert_eq!(cell_kind(&g, 18), CellKind::Food);
        assert_eq!(cell_kind(&g, 1), CellKind::Empty);
    }

    #[test]
    fn draws_score_then_game_over() {
        let mut g = small_game();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|f| draw(f, &g)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 0"));

        g.request_direction(Direction::Up);
        while !g.is_over() {
            g.tick();
        }
        terminal.draw(|f| draw(f, &g)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Game Over"));
        assert!(text.contains("You hit the wall."));
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        buf.content().iter().map(|c| c.symbol()).collect()
    }
}
