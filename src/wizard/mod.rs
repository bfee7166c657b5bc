//! StudyCheckinator wizard — the linear study-choice flow.
//!
//! `WizardApp` owns one visitor's state and dispatches normalized input
//! events to pure transitions in `logic`. Rendering lives in `render` and
//! never mutates state.

pub mod actions;
pub mod content;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::routes::PageId;

use actions::*;
use state::{checker_on, InputMode, WizardState, CHOICE_TOKENS};

pub struct WizardApp {
    pub state: WizardState,
}

impl WizardApp {
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    /// Jump straight to a page (startup URL resolution).
    pub fn route_to(&mut self, page: PageId) {
        self.state.page = page;
        self.state.mode = InputMode::Browse;
    }

    /// Handle one input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.state.mode {
            InputMode::EditCode => self.handle_edit(event),
            InputMode::Browse => match event {
                InputEvent::Key(c) => self.handle_key(*c),
                InputEvent::Click(id) => self.handle_click(*id),
                InputEvent::Enter => self.go_next(),
                InputEvent::Backspace | InputEvent::Escape => false,
            },
        }
    }

    /// Editor mode: keys feed the submission; clicks still reach the buttons.
    fn handle_edit(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Escape => {
                self.state.mode = InputMode::Browse;
                true
            }
            InputEvent::Key(c) => logic::type_char(&mut self.state, *c),
            InputEvent::Enter => logic::type_newline(&mut self.state),
            InputEvent::Backspace => logic::erase_char(&mut self.state),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'n' => return self.go_next(),
            'p' => return self.go_prev(),
            'h' => return self.go_home(),
            _ => {}
        }

        if self.state.page == PageId::Page4 {
            if let Some(index) = key.to_digit(10) {
                let index = index as usize;
                if (1..=CHOICE_TOKENS.len()).contains(&index) {
                    logic::set_choice(&mut self.state, Some(CHOICE_TOKENS[index - 1].0));
                    return true;
                }
            }
            return false;
        }

        if checker_on(self.state.page).is_some() {
            return match key {
                'e' => {
                    self.state.mode = InputMode::EditCode;
                    true
                }
                'r' => logic::press_run(&mut self.state),
                'x' => logic::clear_submission(&mut self.state),
                _ => false,
            };
        }

        false
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            GO_NEXT => self.go_next(),
            GO_PREV => self.go_prev(),
            GO_HOME => self.go_home(),
            id if (CHOICE_BASE..CHOICE_BASE + CHOICE_TOKENS.len() as u16).contains(&id)
                && self.state.page == PageId::Page4 =>
            {
                let token = CHOICE_TOKENS[(id - CHOICE_BASE) as usize].0;
                logic::set_choice(&mut self.state, Some(token));
                true
            }
            EDIT_CODE if checker_on(self.state.page).is_some() => {
                self.state.mode = InputMode::EditCode;
                true
            }
            STOP_EDIT if self.state.mode == InputMode::EditCode => {
                self.state.mode = InputMode::Browse;
                true
            }
            RUN_CODE => logic::press_run(&mut self.state),
            CLEAR_CODE => logic::clear_submission(&mut self.state),
            _ => false,
        }
    }

    fn go_next(&mut self) -> bool {
        match self.state.page.next() {
            Some(page) => {
                self.route_to(page);
                true
            }
            None => false,
        }
    }

    fn go_prev(&mut self) -> bool {
        match self.state.page.prev() {
            Some(page) => {
                self.route_to(page);
                true
            }
            None => false,
        }
    }

    fn go_home(&mut self) -> bool {
        if self.state.page == PageId::Index {
            return false;
        }
        self.route_to(PageId::Index);
        true
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logic::{Verdict, CPP_TARGET};
    use state::{score_for, LanguageTarget, ProgramChoice};

    fn app_on(page: PageId) -> WizardApp {
        let mut app = WizardApp::new();
        app.route_to(page);
        app
    }

    #[test]
    fn starts_on_the_index_page() {
        let app = WizardApp::new();
        assert_eq!(app.state.page, PageId::Index);
        assert_eq!(app.state.choice, ProgramChoice::Unset);
    }

    #[test]
    fn key_navigation() {
        let mut app = WizardApp::new();
        assert!(app.handle_input(&InputEvent::Key('n')));
        assert_eq!(app.state.page, PageId::Page1);

        assert!(app.handle_input(&InputEvent::Key('p')));
        assert_eq!(app.state.page, PageId::Index);

        // No previous page on the index
        assert!(!app.handle_input(&InputEvent::Key('p')));
        assert!(!app.handle_input(&InputEvent::Key('h')));
    }

    #[test]
    fn click_navigation() {
        let mut app = WizardApp::new();
        assert!(app.handle_input(&InputEvent::Click(GO_NEXT)));
        assert!(app.handle_input(&InputEvent::Click(GO_NEXT)));
        assert_eq!(app.state.page, PageId::Page2);

        assert!(app.handle_input(&InputEvent::Click(GO_PREV)));
        assert_eq!(app.state.page, PageId::Page1);

        assert!(app.handle_input(&InputEvent::Click(GO_HOME)));
        assert_eq!(app.state.page, PageId::Index);
    }

    #[test]
    fn enter_advances_while_browsing() {
        let mut app = WizardApp::new();
        assert!(app.handle_input(&InputEvent::Enter));
        assert_eq!(app.state.page, PageId::Page1);
    }

    #[test]
    fn last_page_has_no_next() {
        let mut app = app_on(PageId::Page20);
        assert!(!app.handle_input(&InputEvent::Key('n')));
        assert_eq!(app.state.page, PageId::Page20);
    }

    #[test]
    fn choice_by_key_on_page_4() {
        let mut app = app_on(PageId::Page4);
        assert!(app.handle_input(&InputEvent::Key('1')));
        assert_eq!(app.state.choice, ProgramChoice::ApsSci);

        assert!(app.handle_input(&InputEvent::Key('6')));
        assert_eq!(app.state.choice, ProgramChoice::NoPreference);

        // Out-of-range digits are not options
        assert!(!app.handle_input(&InputEvent::Key('7')));
        assert!(!app.handle_input(&InputEvent::Key('0')));
    }

    #[test]
    fn choice_keys_do_nothing_off_page_4() {
        let mut app = app_on(PageId::Page3);
        assert!(!app.handle_input(&InputEvent::Key('1')));
        assert_eq!(app.state.choice, ProgramChoice::Unset);
    }

    #[test]
    fn choice_by_click() {
        let mut app = app_on(PageId::Page4);
        assert!(app.handle_input(&InputEvent::Click(CHOICE_BASE + 1)));
        assert_eq!(app.state.choice, ProgramChoice::ElecEng);

        // Choice clicks are page-4 only
        app.route_to(PageId::Page5);
        assert!(!app.handle_input(&InputEvent::Click(CHOICE_BASE)));
        assert_eq!(app.state.choice, ProgramChoice::ElecEng);
    }

    #[test]
    fn second_selection_overwrites_the_first() {
        let mut app = app_on(PageId::Page4);
        app.handle_input(&InputEvent::Key('1')); // ACS_SAX
        app.handle_input(&InputEvent::Key('2')); // EEE_SAX
        assert_eq!(app.state.choice, ProgramChoice::ElecEng);

        let row = score_for(app.state.choice).unwrap();
        assert_eq!(row.elec_eng, 95);
        assert_eq!(row.aps_sci, 30);
        assert_eq!(row.mechatronics, 56);
        assert_eq!(row.software_eng, 67);
        assert_eq!(row.product_design, 23);
    }

    #[test]
    fn editor_round_trip_to_success() {
        let mut app = app_on(PageId::Page8);

        assert!(app.handle_input(&InputEvent::Key('e')));
        assert_eq!(app.state.mode, InputMode::EditCode);

        for c in CPP_TARGET.chars() {
            assert!(app.handle_input(&InputEvent::Key(c)));
        }
        assert_eq!(app.state.cpp.source, CPP_TARGET);

        // Not run yet: verdict ignores the source until the first run click
        assert_eq!(
            logic::check_submission(&app.state.cpp, LanguageTarget::Cpp),
            Verdict::NotRunYet
        );

        assert!(app.handle_input(&InputEvent::Click(RUN_CODE)));
        assert_eq!(app.state.cpp.run_count, 1);
        assert_eq!(
            logic::check_submission(&app.state.cpp, LanguageTarget::Cpp),
            Verdict::Correct
        );
    }

    #[test]
    fn editing_captures_navigation_letters() {
        let mut app = app_on(PageId::Page8);
        app.handle_input(&InputEvent::Key('e'));
        app.handle_input(&InputEvent::Key('n'));
        app.handle_input(&InputEvent::Key('p'));
        assert_eq!(app.state.page, PageId::Page8);
        assert_eq!(app.state.cpp.source, "np");
    }

    #[test]
    fn escape_leaves_the_editor() {
        let mut app = app_on(PageId::Page8);
        app.handle_input(&InputEvent::Key('e'));
        assert!(app.handle_input(&InputEvent::Escape));
        assert_eq!(app.state.mode, InputMode::Browse);

        // Back in browse mode, 'n' navigates again
        assert!(app.handle_input(&InputEvent::Key('n')));
        assert_eq!(app.state.page, PageId::Page9);
    }

    #[test]
    fn backspace_edits_and_stop_button_works() {
        let mut app = app_on(PageId::Page11);
        app.handle_input(&InputEvent::Key('e'));
        app.handle_input(&InputEvent::Key('a'));
        app.handle_input(&InputEvent::Key('b'));
        app.handle_input(&InputEvent::Backspace);
        assert_eq!(app.state.python.source, "a");

        assert!(app.handle_input(&InputEvent::Click(STOP_EDIT)));
        assert_eq!(app.state.mode, InputMode::Browse);
        // Stop only counts while editing
        assert!(!app.handle_input(&InputEvent::Click(STOP_EDIT)));
    }

    #[test]
    fn clear_starts_the_submission_over() {
        let mut app = app_on(PageId::Page8);
        app.handle_input(&InputEvent::Key('e'));
        app.handle_input(&InputEvent::Key('z'));
        app.handle_input(&InputEvent::Escape);
        app.handle_input(&InputEvent::Key('r'));
        assert_eq!(app.state.cpp.run_count, 1);

        assert!(app.handle_input(&InputEvent::Key('x')));
        assert_eq!(app.state.cpp.source, "");
        assert_eq!(app.state.cpp.run_count, 0);
        assert_eq!(
            logic::check_submission(&app.state.cpp, LanguageTarget::Cpp),
            Verdict::NotRunYet
        );
    }

    #[test]
    fn run_counter_is_monotonic_across_runs() {
        let mut app = app_on(PageId::Page8);
        for expected in 1..=4 {
            app.handle_input(&InputEvent::Key('r'));
            assert_eq!(app.state.cpp.run_count, expected);
        }
    }

    #[test]
    fn editor_actions_do_nothing_off_checker_pages() {
        let mut app = app_on(PageId::Page3);
        assert!(!app.handle_input(&InputEvent::Key('e')));
        assert!(!app.handle_input(&InputEvent::Click(EDIT_CODE)));
        assert!(!app.handle_input(&InputEvent::Click(RUN_CODE)));
        assert_eq!(app.state.mode, InputMode::Browse);
    }

    #[test]
    fn navigating_away_leaves_edit_mode() {
        let mut app = app_on(PageId::Page8);
        app.handle_input(&InputEvent::Key('e'));
        assert!(app.handle_input(&InputEvent::Click(GO_NEXT)));
        assert_eq!(app.state.page, PageId::Page9);
        assert_eq!(app.state.mode, InputMode::Browse);
    }

    #[test]
    fn choice_survives_navigation() {
        let mut app = app_on(PageId::Page4);
        app.handle_input(&InputEvent::Key('4')); // SE_SAX
        app.handle_input(&InputEvent::Key('n'));
        app.handle_input(&InputEvent::Key('h'));
        assert_eq!(app.state.choice, ProgramChoice::SoftwareEng);
    }
}
