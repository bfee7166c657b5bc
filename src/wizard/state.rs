//! Wizard state: the visitor's study-programme choice, the fixed score
//! table behind the results chart, and the code-checker submissions.

use crate::routes::PageId;

/// The five study programmes the gadget can recommend, in chart order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Program {
    ElecEng,
    ApsSci,
    Mechatronics,
    SoftwareEng,
    ProductDesign,
}

pub const ALL_PROGRAMS: [Program; 5] = [
    Program::ElecEng,
    Program::ApsSci,
    Program::Mechatronics,
    Program::SoftwareEng,
    Program::ProductDesign,
];

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Program::ElecEng => "Electrical Engineering",
            Program::ApsSci => "Applied Computer Science",
            Program::Mechatronics => "Mechatronics",
            Program::SoftwareEng => "Software Engineering",
            Program::ProductDesign => "Industrial Product Design",
        }
    }
}

/// The visitor's selected field of study. Starts [`Unset`](ProgramChoice::Unset)
/// and is only ever overwritten by a valid dropdown token (last write wins).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgramChoice {
    ApsSci,
    ElecEng,
    Mechatronics,
    SoftwareEng,
    ProductDesign,
    NoPreference,
    #[default]
    Unset,
}

/// Dropdown token → choice, in the order the options are listed on page 4.
pub const CHOICE_TOKENS: [(&str, ProgramChoice); 6] = [
    ("ACS_SAX", ProgramChoice::ApsSci),
    ("EEE_SAX", ProgramChoice::ElecEng),
    ("MT_SAX", ProgramChoice::Mechatronics),
    ("SE_SAX", ProgramChoice::SoftwareEng),
    ("IPD_SAX", ProgramChoice::ProductDesign),
    ("NONE_SAX", ProgramChoice::NoPreference),
];

impl ProgramChoice {
    /// Exact-match token lookup; anything outside the fixed set is `None`.
    pub fn from_token(token: &str) -> Option<ProgramChoice> {
        CHOICE_TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|&(_, c)| c)
    }

    /// The programme this choice names, if it names one.
    pub fn program(self) -> Option<Program> {
        match self {
            ProgramChoice::ApsSci => Some(Program::ApsSci),
            ProgramChoice::ElecEng => Some(Program::ElecEng),
            ProgramChoice::Mechatronics => Some(Program::Mechatronics),
            ProgramChoice::SoftwareEng => Some(Program::SoftwareEng),
            ProgramChoice::ProductDesign => Some(Program::ProductDesign),
            ProgramChoice::NoPreference | ProgramChoice::Unset => None,
        }
    }
}

/// Fixed percentage-per-programme vector behind the results bar chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRow {
    pub elec_eng: u8,
    pub aps_sci: u8,
    pub mechatronics: u8,
    pub software_eng: u8,
    pub product_design: u8,
}

impl ScoreRow {
    pub fn get(self, program: Program) -> u8 {
        match program {
            Program::ElecEng => self.elec_eng,
            Program::ApsSci => self.aps_sci,
            Program::Mechatronics => self.mechatronics,
            Program::SoftwareEng => self.software_eng,
            Program::ProductDesign => self.product_design,
        }
    }

    /// All entries in chart order.
    pub fn entries(self) -> [(Program, u8); 5] {
        [
            (Program::ElecEng, self.elec_eng),
            (Program::ApsSci, self.aps_sci),
            (Program::Mechatronics, self.mechatronics),
            (Program::SoftwareEng, self.software_eng),
            (Program::ProductDesign, self.product_design),
        ]
    }

    /// The best-scoring programme (first wins on ties — no two table rows tie).
    pub fn best(self) -> Program {
        let mut best = (Program::ElecEng, self.elec_eng);
        for (p, v) in self.entries() {
            if v > best.1 {
                best = (p, v);
            }
        }
        best.0
    }
}

/// The fixed five-row score table, one row per known programme.
/// `Unset` and `NoPreference` have no row: the chart is omitted, not
/// zero-filled.
pub fn score_for(choice: ProgramChoice) -> Option<ScoreRow> {
    match choice {
        ProgramChoice::ApsSci => Some(ScoreRow {
            elec_eng: 66,
            aps_sci: 99,
            mechatronics: 45,
            software_eng: 23,
            product_design: 12,
        }),
        ProgramChoice::ElecEng => Some(ScoreRow {
            elec_eng: 95,
            aps_sci: 30,
            mechatronics: 56,
            software_eng: 67,
            product_design: 23,
        }),
        ProgramChoice::Mechatronics => Some(ScoreRow {
            elec_eng: 72,
            aps_sci: 41,
            mechatronics: 97,
            software_eng: 35,
            product_design: 58,
        }),
        ProgramChoice::SoftwareEng => Some(ScoreRow {
            elec_eng: 28,
            aps_sci: 81,
            mechatronics: 33,
            software_eng: 98,
            product_design: 14,
        }),
        ProgramChoice::ProductDesign => Some(ScoreRow {
            elec_eng: 39,
            aps_sci: 21,
            mechatronics: 57,
            software_eng: 26,
            product_design: 96,
        }),
        ProgramChoice::NoPreference | ProgramChoice::Unset => None,
    }
}

/// Which language a code-checker page tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageTarget {
    Cpp,
    Python,
}

/// The checker attached to a page, if the page has one.
pub fn checker_on(page: PageId) -> Option<LanguageTarget> {
    match page {
        PageId::Page8 => Some(LanguageTarget::Cpp),
        PageId::Page11 => Some(LanguageTarget::Python),
        _ => None,
    }
}

/// Free-text source plus the monotonically increasing run-click counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeSubmission {
    pub source: String,
    pub run_count: u32,
}

/// Whether key presses browse the wizard or feed the code editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    EditCode,
}

/// All state for one visitor's wizard session (one browser tab).
pub struct WizardState {
    pub page: PageId,
    pub choice: ProgramChoice,
    pub mode: InputMode,
    pub cpp: CodeSubmission,
    pub python: CodeSubmission,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            page: PageId::Index,
            choice: ProgramChoice::Unset,
            mode: InputMode::Browse,
            cpp: CodeSubmission::default(),
            python: CodeSubmission::default(),
        }
    }

    pub fn submission(&self, target: LanguageTarget) -> &CodeSubmission {
        match target {
            LanguageTarget::Cpp => &self.cpp,
            LanguageTarget::Python => &self.python,
        }
    }

    pub fn submission_mut(&mut self, target: LanguageTarget) -> &mut CodeSubmission {
        match target {
            LanguageTarget::Cpp => &mut self.cpp,
            LanguageTarget::Python => &mut self.python,
        }
    }

    /// The submission belonging to the current page's checker, if any.
    pub fn active_submission_mut(&mut self) -> Option<&mut CodeSubmission> {
        checker_on(self.page).map(|t| self.submission_mut(t))
    }
}
