use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Canvas, Cell, GameState, Sprite};
use crate::metrics::SessionMetrics;

/// Cell buffer the game state paints into before it becomes terminal text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Sprite>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn from_state(state: &GameState) -> Self {
        let mut board = Self::new(state.grid.width(), state.grid.height());
        state.paint(&mut board);
        board
    }

    pub fn sprite_at(&self, cell: Cell) -> Option<Sprite> {
        self.index(cell).and_then(|index| self.cells[index])
    }

    /// One string per row: `@` head, `o` body, `*` target, `.` empty
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|sprite| match sprite {
                        Some(Sprite::Head) => '@',
                        Some(Sprite::Body) => 'o',
                        Some(Sprite::Target) => '*',
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(cell.y).ok().filter(|y| *y < self.height)?;
        Some(y * self.width + x)
    }
}

impl Canvas for Board {
    fn paint(&mut self, cell: Cell, sprite: Sprite) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = Some(sprite);
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &SessionMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_header(state, metrics, paused);
        frame.render_widget(header, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(&Board::from_state(state));
        frame.render_widget(grid, game_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, board: &Board) -> Paragraph<'static> {
        let lines: Vec<Line> = board
            .cells
            .chunks(board.width)
            .map(|row| {
                let spans: Vec<Span> = row.iter().map(|sprite| Self::span_for(*sprite)).collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn span_for(sprite: Option<Sprite>) -> Span<'static> {
        match sprite {
            Some(Sprite::Head) => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(Sprite::Body) => Span::styled("□ ", Style::default().fg(Color::Green)),
            Some(Sprite::Target) => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }

    fn render_header(
        &self,
        state: &GameState,
        metrics: &SessionMetrics,
        paused: bool,
    ) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("Grid: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}x{}", state.grid.width(), state.grid.height()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ];

        if paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Magenta)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
