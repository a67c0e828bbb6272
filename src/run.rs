use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;

use crate::grid::NavKey;
use crate::models::BudgetKind;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::render;

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Pick up store changes (and resolve a pending Enter move) before
        // the frame is laid out.
        app.sync();

        terminal.draw(|f| {
            let area = f.area();
            // The sheet gets everything above the status and command bars.
            let sheet_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(2));
            app.update_layout(sheet_area);
            render::render(f, app);
        })?;

        match event::read()? {
            Event::Key(key) => handle_key(key, app)?,
            Event::Mouse(mouse) => handle_mouse(mouse, app),
            _ => {}
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_key(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    if app.menu.visible {
        handle_menu_input(key, app);
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app)?,
        InputMode::Editing => handle_editing_input(key, app),
        InputMode::Command => handle_command_input(key, app)?,
    }
    Ok(())
}

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.grid.step(NavKey::Up);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.grid.step(NavKey::Down);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.grid.step(NavKey::Left);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.grid.step(NavKey::Right);
        }
        KeyCode::Tab => {
            app.grid.step(NavKey::Tab);
        }
        KeyCode::BackTab => {
            app.grid.step(NavKey::Left);
        }
        KeyCode::Enter => app.enter_pressed(),
        KeyCode::Esc => {
            app.grid.cancel_row_wait();
            app.status_message.clear();
        }
        KeyCode::Char('i') => app.begin_edit(None),
        KeyCode::Char('a') => {
            let kind = app
                .focused_row()
                .map(|row| row.kind)
                .unwrap_or(BudgetKind::Income);
            app.add_category(kind);
        }
        KeyCode::Char('s') => app.add_subcategory(),
        KeyCode::Char('m') => app.open_menu_at_focus(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('g') => {
            if let Some(pos) = app.grid.focus() {
                app.grid.set_focus(0, pos.col);
            }
        }
        KeyCode::Char('G') => {
            if let Some(pos) = app.grid.focus() {
                app.grid.set_focus(app.rows.len().saturating_sub(1), pos.col);
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            // Typing on an amount cell starts a fresh value.
            app.begin_edit(Some(c));
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            app.enter_pressed();
        }
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Tab => {
            app.commit_edit();
            app.grid.step(NavKey::Tab);
        }
        KeyCode::Up => {
            app.commit_edit();
            app.grid.step(NavKey::Up);
        }
        KeyCode::Down => {
            app.commit_edit();
            app.grid.step(NavKey::Down);
        }
        KeyCode::Left => {
            app.commit_edit();
            app.grid.step(NavKey::Left);
        }
        KeyCode::Right => {
            app.commit_edit();
            app.grid.step(NavKey::Right);
        }
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Char(c) => app.edit_char(c),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_menu_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.menu.close(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.select_next(),
        KeyCode::Enter => {
            if let Some(action) = app.menu.selected_action() {
                app.menu_execute(action);
            }
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => {
            if app.input_mode == InputMode::Editing {
                app.commit_edit();
            }
            // A fresh right-click overwrites any visible menu.
            if app.focus_cell_at(mouse.column, mouse.row) {
                app.open_menu_at_focus();
            } else {
                app.menu.close();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.menu.visible {
                if let Some(action) = app.menu.action_at(mouse.column, mouse.row) {
                    app.menu_execute(action);
                } else if !app.menu.contains(mouse.column, mouse.row) {
                    app.menu.close();
                }
            } else {
                if app.input_mode == InputMode::Editing {
                    app.commit_edit();
                }
                app.focus_cell_at(mouse.column, mouse.row);
            }
        }
        _ => {}
    }
}
