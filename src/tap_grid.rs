// Interactive tap-grid demo: one section on screen at a time, arrow-key
// cursor, Space/Enter taps the cell under the cursor. Cells are drawn
// from the RenderSurface only, so what you see is exactly what the
// change descriptors delivered.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;
use tap_grid::display::{color_category_for, RenderSurface};
use tap_grid::{GridConfig, GridController};

const CELL_HEIGHT: u16 = 4;

struct AppState {
    controller: GridController,
    surface: RenderSurface,
    config: GridConfig,
    current_section: usize,
    cursor: usize,
    tap_count: usize,
    last_redraw: usize,
    show_help: bool,
    should_quit: bool,
}

impl AppState {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = GridConfig::default();
        let mut rng = rand::thread_rng();
        let controller = GridController::new(config.clone(), &mut rng)?;
        let mut surface = RenderSurface::new();
        surface.populate(controller.model());
        Ok(Self {
            controller,
            surface,
            config,
            current_section: 0,
            cursor: 0,
            tap_count: 0,
            last_redraw: 0,
            show_help: false,
            should_quit: false,
        })
    }

    fn section_len(&self) -> usize {
        self.controller
            .model()
            .cell_count(self.current_section)
            .unwrap_or(0)
    }

    fn tap(&mut self, section: usize, position: usize) {
        match self.controller.on_cell_selected(section, position) {
            Ok(descriptor) => {
                self.last_redraw = descriptor.reloaded_cells().len();
                self.surface.apply(&descriptor, self.controller.model());
                self.tap_count += 1;
            }
            Err(e) => info!("tap rejected: {}", e),
        }
    }

    fn tap_cursor(&mut self) {
        self.tap(self.current_section, self.cursor);
    }

    fn tap_random(&mut self) {
        let mut rng = rand::thread_rng();
        let section = rng.gen_range(0..self.controller.current_sections().len());
        let len = self.controller.model().cell_count(section).unwrap_or(1);
        self.tap(section, rng.gen_range(0..len));
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.section_len() as isize;
        let next = self.cursor as isize + delta;
        if next >= 0 && next < len {
            self.cursor = next as usize;
        }
    }

    fn switch_section(&mut self, forward: bool) {
        let count = self.controller.current_sections().len();
        self.current_section = if forward {
            (self.current_section + 1) % count
        } else {
            (self.current_section + count - 1) % count
        };
        self.cursor = self.cursor.min(self.section_len().saturating_sub(1));
    }

    fn toggle_mode(&mut self) {
        let mode = self.controller.reconcile_mode().toggled();
        self.controller.set_reconcile_mode(mode);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new()?;

    // Main loop
    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('h') => app.show_help = !app.show_help,
                        KeyCode::Char('m') => app.toggle_mode(),
                        KeyCode::Char('r') => app.tap_random(),
                        KeyCode::Enter | KeyCode::Char(' ') => app.tap_cursor(),
                        KeyCode::Left => app.move_cursor(-1),
                        KeyCode::Right => app.move_cursor(1),
                        KeyCode::Up => app.move_cursor(-(app.config.grid_columns as isize)),
                        KeyCode::Down => app.move_cursor(app.config.grid_columns as isize),
                        KeyCode::Tab => app.switch_section(true),
                        KeyCode::BackTab => app.switch_section(false),
                        _ => {}
                    }
                }
            }
        }

        terminal.draw(|f| {
            if app.show_help {
                render_help(f);
            } else {
                render_main_ui(f, &app);
            }
        })?;

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn render_main_ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Grid area
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_section_grid(f, chunks[1], app);

    let hints = Paragraph::new(
        "arrows: move  space: tap  r: random tap  tab: section  m: policy  h: help  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "🔢 Tap Grid",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Policy: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{:?}", app.controller.reconcile_mode()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(title, header_chunks[0]);

    let stats = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Taps: ", Style::default().fg(Color::White)),
            Span::styled(app.tap_count.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Last redraw: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} cells", app.last_redraw),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Stats"));
    f.render_widget(stats, header_chunks[1]);
}

fn render_section_grid(f: &mut Frame, area: Rect, app: &AppState) {
    let sections = app.surface.sections();
    let Some(section) = sections.get(app.current_section) else {
        return;
    };

    let title = format!(
        "{} ({} cells) - section {}/{}",
        section.title,
        section.ids.len(),
        app.current_section + 1,
        sections.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = app.config.grid_columns as u16;
    let cell_width = inner.width / columns.max(1);
    if cell_width < 12 || inner.height < CELL_HEIGHT {
        let msg = Paragraph::new("Area too small for grid display")
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(msg, inner);
        return;
    }

    for (position, id) in section.ids.iter().enumerate() {
        let row = position as u16 / columns;
        let col = position as u16 % columns;
        let cell_area = Rect {
            x: inner.x + col * cell_width,
            y: inner.y + row * CELL_HEIGHT,
            width: cell_width,
            height: CELL_HEIGHT,
        };
        if cell_area.bottom() > inner.bottom() {
            continue;
        }

        let selected = position == app.cursor;
        let Some(cell) = app.surface.displayed(*id) else {
            continue;
        };

        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cell_block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let cell_inner = cell_block.inner(cell_area);
        f.render_widget(cell_block, cell_area);

        let text = vec![
            Line::from(Span::styled(
                cell.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("v:{}", cell.value),
                    Style::default().fg(color_category_for(cell.value).color()),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("r:{}", cell.row_total),
                    Style::default().fg(color_category_for(cell.row_total).color()),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("c:{}", cell.column_total),
                    Style::default().fg(color_category_for(cell.column_total).color()),
                ),
            ]),
        ];
        f.render_widget(Paragraph::new(text), cell_inner);
    }
}

fn render_help(f: &mut Frame) {
    let help_text = vec![
        Line::from("Tap Grid Demo - Help"),
        Line::from(""),
        Line::from("Keys:"),
        Line::from("  arrows      - move the cell cursor"),
        Line::from("  space/enter - tap the cell under the cursor"),
        Line::from("  r           - tap a random cell in a random section"),
        Line::from("  tab/shift-tab - next/previous section"),
        Line::from("  m           - toggle reconciliation policy"),
        Line::from("  q/esc       - quit"),
        Line::from(""),
        Line::from("Each tap bumps the cell's value, the row totals of its"),
        Line::from("grid row, and the column totals of its grid column."),
        Line::from(""),
        Line::from("Counter colors:"),
        Line::from(vec![
            Span::styled("  green ", Style::default().fg(Color::Green)),
            Span::raw("divisible by 5"),
        ]),
        Line::from(vec![
            Span::styled("  blue  ", Style::default().fg(Color::Rgb(128, 128, 255))),
            Span::raw("divisible by 3"),
        ]),
        Line::from(vec![
            Span::styled("  cyan  ", Style::default().fg(Color::Cyan)),
            Span::raw("divisible by both"),
        ]),
        Line::from(""),
        Line::from("Press 'h' again to close this help screen"),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    let popup_area = centered_rect(70, 80, f.area());
    f.render_widget(help_widget, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
