use crate::models::{Direction, GameRenderState, Grid, Vec2};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn parse_board(s: &str) -> Grid {
    let mut cells: Vec<Vec<bool>> = Vec::new();
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);

    for line in s.lines() {
        let line = line.trim_matches('\n');
        if line.len() == 0 {
            continue;
        }

        let mut row = Vec::new();
        for ch in line.chars() {
            row.push(matches!(ch, 'O' | 'o'));
        }
        // Pad row to max width with unlit cells
        while row.len() < max_width {
            row.push(false);
        }
        cells.push(row);
    }

    Grid { cells }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Board area
        let board_text = render_board_with_cursor(&state.grid, state.cursor);
        let board_paragraph = Paragraph::new(board_text)
            .block(Block::default().borders(Borders::ALL).title("Lights Out"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        // Instructions
        let instructions = if state.won {
            "🎉 You Won! Press any key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, Space/Enter to toggle, Q to quit"
        };

        let instructions = format!("{} | Moves: {}", instructions, state.activations);

        let instructions = if let Some(last) = &state.last_activated {
            format!("{} | Last: ({}, {})", instructions, last.i, last.j)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_board_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in &grid.cells {
        for &lit in row {
            result.push(if lit { 'O' } else { '.' });
        }
        result.push('\n');
    }
    result
}

fn render_board_with_cursor(grid: &Grid, cursor: Vec2) -> String {
    let mut result = String::new();
    for (i, row) in grid.cells.iter().enumerate() {
        for (j, &lit) in row.iter().enumerate() {
            let at_cursor = cursor.i == i as i32 && cursor.j == j as i32;
            let symbol = if lit { 'O' } else { '.' };
            if at_cursor {
                result.push('[');
                result.push(symbol);
                result.push(']');
            } else {
                result.push(' ');
                result.push(symbol);
                result.push(' ');
            }
        }
        result.push('\n');
    }
    result
}

pub fn move_cursor(cursor: Vec2, direction: Direction, grid: &Grid) -> Vec2 {
    let (di, dj) = match direction {
        Direction::Up => (-1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
        Direction::Right => (0, 1),
    };
    let ni = cursor.i + di;
    let nj = cursor.j + dj;
    if ni < 0 || nj < 0 || ni >= grid.height() || nj >= grid.width() {
        return cursor;
    }
    Vec2 { i: ni, j: nj }
}

pub enum ConsoleInput {
    MoveCursor(Direction),
    Activate,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::Activate,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::MoveCursor(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::MoveCursor(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::MoveCursor(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::MoveCursor(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
