//! Pure wizard transitions: choice recording, the score lookup, and the
//! code-submission checker.
//!
//! Nothing here can fail — every input has a defined, total result
//! (unknown token → disabled prompt, unmatched source → generic compile
//! error). Rendering derives everything it shows from these functions.

use super::state::{CodeSubmission, LanguageTarget, ProgramChoice, WizardState};

/// Shown while no valid programme has been chosen.
pub const DISABLED_PROMPT: &str = "Please pick one of the study programmes first.";

/// Confirmation text for a recorded choice; `Unset` gets the disabled prompt.
pub fn confirmation_text(choice: ProgramChoice) -> &'static str {
    match choice {
        ProgramChoice::ApsSci => {
            "Good choice! Applied Computer Science it is. On to your first small project."
        }
        ProgramChoice::ElecEng => {
            "Sparks will fly: Electrical and Electronic Engineering it is."
        }
        ProgramChoice::Mechatronics => {
            "Robots, motors and control loops: Mechatronics it is."
        }
        ProgramChoice::SoftwareEng => {
            "Building the apps of tomorrow: Software Engineering it is."
        }
        ProgramChoice::ProductDesign => {
            "From sketch to product: Industrial Product Design it is."
        }
        ProgramChoice::NoPreference => {
            "No preference at all? No problem, the gadget will show you a bit of everything."
        }
        ProgramChoice::Unset => DISABLED_PROMPT,
    }
}

/// Record a dropdown token into the shared choice and return the text to
/// display. A valid token overwrites any earlier choice (last write wins);
/// a null or unrecognized token returns the disabled prompt and leaves the
/// stored choice untouched.
pub fn set_choice(state: &mut WizardState, token: Option<&str>) -> &'static str {
    match token.and_then(ProgramChoice::from_token) {
        Some(choice) => {
            state.choice = choice;
            confirmation_text(choice)
        }
        None => DISABLED_PROMPT,
    }
}

// ── Code submission checker ──────────────────────────────────────────

/// The full C++ statement the exercise asks for.
pub const CPP_TARGET: &str = "std::cout << \"Hello, Saxion!\" << std::endl;";

/// The full Python statement the exercise asks for.
pub const PY_TARGET: &str = "print(\"Hello, Saxion!\")";

/// Outcome of one run of the simulated exercise checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    NotRunYet,
    Correct,
    MissingSemicolon,
    MissingNamespace,
    MissingArgument,
    OldStyleSyntax,
    GenericCompileError,
}

impl Verdict {
    pub fn is_success(self) -> bool {
        self == Verdict::Correct
    }

    /// The fixed user-facing text for this verdict.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::NotRunYet => "Press the run button to compile and run your code.",
            Verdict::Correct => "Great job! Your program prints: Hello, Saxion!",
            Verdict::MissingSemicolon => {
                "Almost there: every C++ statement ends with a semicolon."
            }
            Verdict::MissingNamespace => {
                "error: 'cout' was not declared in this scope; did you mean 'std::cout'?"
            }
            Verdict::MissingArgument => {
                "Your print statement is missing the message. What should it say?"
            }
            Verdict::OldStyleSyntax => {
                "SyntaxError: Missing parentheses in call to 'print'. That is Python 2 syntax."
            }
            Verdict::GenericCompileError => {
                "That did not compile. Compare your code with the example and try again."
            }
        }
    }
}

/// Check a submission against a language target.
///
/// This is a simulated educational checker, not a compiler: an ordered
/// sequence of substring-containment tests where the first match wins.
/// `run_count < 1` always yields [`Verdict::NotRunYet`].
pub fn check(source: &str, run_count: u32, target: LanguageTarget) -> Verdict {
    if run_count < 1 {
        return Verdict::NotRunYet;
    }

    match target {
        LanguageTarget::Cpp => {
            if source.contains(CPP_TARGET) {
                Verdict::Correct
            } else if source.contains("std::cout << \"Hello, Saxion!\" << std::endl") {
                Verdict::MissingSemicolon
            } else if source.contains("cout") && !source.contains("std::cout") {
                Verdict::MissingNamespace
            } else if source.contains("std::cout") {
                Verdict::MissingArgument
            } else {
                Verdict::GenericCompileError
            }
        }
        LanguageTarget::Python => {
            if source.contains(PY_TARGET) {
                Verdict::Correct
            } else if source.contains("print \"Hello, Saxion!\"") {
                Verdict::OldStyleSyntax
            } else if source.contains("print(") {
                Verdict::MissingArgument
            } else {
                Verdict::GenericCompileError
            }
        }
    }
}

/// Verdict for a stored submission.
pub fn check_submission(sub: &CodeSubmission, target: LanguageTarget) -> Verdict {
    check(&sub.source, sub.run_count, target)
}

// ── Editor transitions (operate on the current page's submission) ────

/// Append a printable character to the active submission.
pub fn type_char(state: &mut WizardState, c: char) -> bool {
    if c.is_control() {
        return false;
    }
    match state.active_submission_mut() {
        Some(sub) => {
            sub.source.push(c);
            true
        }
        None => false,
    }
}

/// Append a newline to the active submission.
pub fn type_newline(state: &mut WizardState) -> bool {
    match state.active_submission_mut() {
        Some(sub) => {
            sub.source.push('\n');
            true
        }
        None => false,
    }
}

/// Delete the last character of the active submission.
pub fn erase_char(state: &mut WizardState) -> bool {
    match state.active_submission_mut() {
        Some(sub) => {
            sub.source.pop();
            true
        }
        None => false,
    }
}

/// One run-button click: bumps the monotonic counter.
pub fn press_run(state: &mut WizardState) -> bool {
    match state.active_submission_mut() {
        Some(sub) => {
            sub.run_count += 1;
            true
        }
        None => false,
    }
}

/// Start over: empty source, counter back to "not run yet".
pub fn clear_submission(state: &mut WizardState) -> bool {
    match state.active_submission_mut() {
        Some(sub) => {
            *sub = CodeSubmission::default();
            true
        }
        None => false,
    }
}
