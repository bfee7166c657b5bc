//! Semantic action IDs for wizard click targets.

// ── Navigation (every page) ──────────────────────────────────
pub const GO_HOME: u16 = 1;
pub const GO_NEXT: u16 = 2;
pub const GO_PREV: u16 = 3;

// ── Programme choice (page 4) ────────────────────────────────
pub const CHOICE_BASE: u16 = 10; // +index 0..5 into CHOICE_TOKENS

// ── Code checker (pages 8 and 11) ────────────────────────────
pub const EDIT_CODE: u16 = 30;
pub const RUN_CODE: u16 = 31;
pub const CLEAR_CODE: u16 = 32;
pub const STOP_EDIT: u16 = 33;
