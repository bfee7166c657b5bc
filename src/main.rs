mod input;
mod routes;
mod widgets;
mod wizard;

use std::{cell::RefCell, io, rc::Rc};

use input::{ClickState, InputEvent};
use routes::PageId;
use wizard::WizardApp;

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Query the grid container's bounding rect and convert pixel coordinates
/// into a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    cs.cell_at(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// The route carried in the URL fragment, e.g. `#/page-7` → `/page-7`.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Write the page's canonical path back into the URL fragment so reload and
/// bookmarks land on the same page.
fn sync_path(page: PageId) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(page.path()) {
            web_sys::console::warn_1(&format!("route sync failed: {e:?}").into());
        }
    }
}

/// Feed one event to the app; on a page change, mirror it into the URL.
fn dispatch(app: &Rc<RefCell<WizardApp>>, event: &InputEvent) {
    let mut app = app.borrow_mut();
    let before = app.state.page;
    let consumed = app.handle_input(event);
    if consumed && app.state.page != before {
        sync_path(app.state.page);
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(WizardApp::new()));
    app.borrow_mut().route_to(PageId::resolve(&current_path()));

    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            let cell = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs);
            let action = cell.and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            web_sys::console::log_1(
                &format!("click: cell={:?}, action={:?}", cell, action).into(),
            );

            if let Some(action_id) = action {
                dispatch(&app, &InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Backspace => InputEvent::Backspace,
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Esc => InputEvent::Escape,
                _ => return,
            };
            dispatch(&app, &event);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let app = app.borrow();
            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            // Main layout: header, wizard content, footer
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Min(12),
                    Constraint::Length(3),
                ])
                .split(size);

            render_header(f, &app, chunks[0]);
            app.render(f, chunks[1], &click_state);
            render_footer(f, chunks[2]);
        }
    });

    Ok(())
}

fn render_header(f: &mut ratzilla::ratatui::Frame, app: &WizardApp, area: Rect) {
    let step = match app.state.page.number() {
        0 => "- 🎒 💻 ⚙ ✏️ -".to_string(),
        n => format!("Step {} of 20", n),
    };

    let lines = vec![
        Line::from(Span::styled(
            "📚 StudyCheckinator 900",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Welcome to Saxion University of Applied Sciences!",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(step, Style::default().fg(Color::DarkGray))),
    ];

    let header = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_footer(f: &mut ratzilla::ratatui::Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "© 2022 Saxion University of Applied Sciences (all rights reserved)",
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
