//! Interview pipeline — five stages threaded by an [`record::InterviewRecord`].
//!
//! Flow: collect_role → generate_question → collect_answer →
//!       evaluate_answer → present_feedback → done.
//!
//! Strictly linear: no stage is skipped, nothing loops back, and the first
//! failing stage ends the run.

pub mod console;
pub mod prompts;
pub mod record;
pub mod runner;
pub mod stages;
