use std::{
    io::{Stdout, stdout},
    path::Path,
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

struct App {
    title: String,
    text: Text<'static>,
    scroll: u16,
}

impl App {
    fn scroll_down(&mut self) {
        let last = self.text.lines.len().saturating_sub(1);
        let last = u16::try_from(last).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(last);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Shows rendered text full screen until the user quits.
pub fn run_viewer(path: &Path, text: Text<'static>) -> Result<()> {
    let mut app = App {
        title: path.display().to_string(),
        text,
        scroll: 0,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content = Paragraph::new(app.text.clone())
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Quit | "),
        Span::styled("↑/k", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Up | "),
        Span::styled("↓/j", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Down"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(help), chunks[1]);
}
