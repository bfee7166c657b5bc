//! Wizard rendering (read-only from state).
//!
//! Everything shown is derived on the fly: the confirmation line from the
//! stored choice, the chart from `score_for`, the checker verdict from
//! `check_submission`. Rendering never mutates `WizardState`; the only
//! side effect is click-target registration.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::routes::PageId;
use crate::widgets::ClickableList;

use super::actions::*;
use super::content::page_content;
use super::logic::{check_submission, confirmation_text, Verdict, DISABLED_PROMPT};
use super::state::{
    checker_on, score_for, InputMode, Program, ProgramChoice, WizardState, CHOICE_TOKENS,
};

pub fn render(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    render_page(state, f, chunks[0], click_state);
    render_nav(state, f, chunks[1], click_state);
}

fn render_page(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let inner_width = if is_narrow {
        area.width
    } else {
        area.width.saturating_sub(2)
    };

    let content = page_content(state.page);
    let mut cl = ClickableList::new();

    for (i, paragraph) in content.body.iter().enumerate() {
        if i > 0 {
            cl.push(Line::from(""));
        }
        cl.push(Line::from(Span::styled(
            *paragraph,
            Style::default().fg(Color::White),
        )));
    }

    match state.page {
        PageId::Page4 => push_choice_section(state, &mut cl),
        PageId::Page5 => push_chart_section(state, &mut cl, is_narrow),
        PageId::Page6 => push_project_intro(state, &mut cl),
        page if checker_on(page).is_some() => push_checker_section(state, &mut cl),
        _ => {}
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} ", content.title));

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, inner_width);
    }

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

// ── Page 4: programme choice ───────────────────────────────────────────

fn choice_label(choice: ProgramChoice) -> &'static str {
    match choice.program() {
        Some(p) => p.name(),
        None => "I have no preference yet",
    }
}

fn push_choice_section(state: &WizardState, cl: &mut ClickableList<'static>) {
    cl.push(Line::from(""));
    for (i, &(_, choice)) in CHOICE_TOKENS.iter().enumerate() {
        let selected = state.choice == choice;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    format!("{} [{}] ", marker, i + 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(choice_label(choice), style),
            ]),
            CHOICE_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        confirmation_text(state.choice),
        Style::default().fg(Color::Cyan),
    )));
}

// ── Page 5: results chart ──────────────────────────────────────────────

fn program_color(program: Program) -> Color {
    match program {
        Program::ElecEng => Color::Yellow,
        Program::ApsSci => Color::Cyan,
        Program::Mechatronics => Color::Green,
        Program::SoftwareEng => Color::Magenta,
        Program::ProductDesign => Color::Blue,
    }
}

fn score_bar_line(label: &str, value: u8, bar_width: usize, color: Color) -> Line<'static> {
    let filled = ((value as f64 / 100.0) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar: String = "█".repeat(filled) + &"░".repeat(empty);

    Line::from(vec![
        Span::styled(format!(" {:<26}", label), Style::default().fg(Color::Gray)),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(format!(" {:>3}%", value), Style::default().fg(Color::White)),
    ])
}

fn push_chart_section(state: &WizardState, cl: &mut ClickableList<'static>, is_narrow: bool) {
    cl.push(Line::from(""));
    match score_for(state.choice) {
        Some(row) => {
            let bar_width = if is_narrow { 12 } else { 24 };
            for (program, value) in row.entries() {
                cl.push(score_bar_line(
                    program.name(),
                    value,
                    bar_width,
                    program_color(program),
                ));
            }
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                format!("In this case it is {}.", row.best().name()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            cl.push(Line::from(Span::styled(
                DISABLED_PROMPT,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
}

// ── Page 6: choice-aware project intro ─────────────────────────────────

fn push_project_intro(state: &WizardState, cl: &mut ClickableList<'static>) {
    cl.push(Line::from(""));
    let line = match state.choice.program() {
        Some(p) => Line::from(Span::styled(
            format!("In your case that is {}.", p.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "You kept your options open, so the project tours all five programmes.",
            Style::default().fg(Color::Cyan),
        )),
    };
    cl.push(line);
}

// ── Pages 8 and 11: code checker ───────────────────────────────────────

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::NotRunYet => Style::default().fg(Color::DarkGray),
        Verdict::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Red),
    }
}

fn push_checker_section(state: &WizardState, cl: &mut ClickableList<'static>) {
    let Some(target) = checker_on(state.page) else {
        return;
    };
    let sub = state.submission(target);
    let editing = state.mode == InputMode::EditCode;

    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        "─── your code ───",
        Style::default().fg(Color::DarkGray),
    )));
    if sub.source.is_empty() && !editing {
        cl.push(Line::from(Span::styled(
            "(nothing yet — press the edit button and start typing)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let line_count = sub.source.split('\n').count();
        for (i, code_line) in sub.source.split('\n').enumerate() {
            let mut text = format!(" {}", code_line);
            if editing && i + 1 == line_count {
                text.push('▌');
            }
            cl.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::Green),
            )));
        }
    }
    cl.push(Line::from(Span::styled(
        "─────────────────",
        Style::default().fg(Color::DarkGray),
    )));

    let verdict = check_submission(sub, target);
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        verdict.message(),
        verdict_style(verdict),
    )));
    cl.push(Line::from(Span::styled(
        format!("Runs so far: {}", sub.run_count),
        Style::default().fg(Color::DarkGray),
    )));

    cl.push(Line::from(""));
    if editing {
        cl.push_clickable(button_line("[S] Stop editing"), STOP_EDIT);
    } else {
        cl.push_clickable(button_line("[E] Edit your code"), EDIT_CODE);
    }
    cl.push_clickable(button_line("[R] Run your code"), RUN_CODE);
    cl.push_clickable(button_line("[X] Start over"), CLEAR_CODE);
}

fn button_line(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

// ── Navigation bar ─────────────────────────────────────────────────────

fn render_nav(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    if state.page.next().is_some() {
        let label = if state.page == PageId::Index {
            "[N] Start the gadget!"
        } else {
            "[N] Next page"
        };
        cl.push_clickable(button_line(label), GO_NEXT);
    }
    if state.page.prev().is_some() {
        cl.push_clickable(
            Line::from(Span::styled(
                "[P] Previous page",
                Style::default().fg(Color::Gray),
            )),
            GO_PREV,
        );
    }
    if state.page != PageId::Index {
        cl.push_clickable(
            Line::from(Span::styled(
                "[H] Back to the start",
                Style::default().fg(Color::Gray),
            )),
            GO_HOME,
        );
    }

    let inner_width = area.width.saturating_sub(2);
    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, inner_width);
    }

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);
}
