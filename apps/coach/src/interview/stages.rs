//! The five stage operations. Each consumes the record and returns a new
//! one with exactly its own field set; a failed stage returns the error and
//! sets nothing.
//!
//! Empty-input policy (stages 1 and 3): reprompt once, then fail with
//! `EmptyInput`. Every downstream prompt template interpolates these fields,
//! so an empty value would only produce degenerate generations.

use std::io::{BufRead, Write};

use tracing::info;

use crate::errors::CoachError;
use crate::interview::console::Console;
use crate::interview::prompts::{
    EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM, FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM,
    QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM,
};
use crate::interview::record::{InterviewRecord, Speaker};
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::TextGenerator;

const ROLE_PROMPT: &str = "What role are you interviewing for? ";
const ROLE_REPROMPT: &str = "Please enter a role (e.g. 'backend engineer'): ";

/// Stage 1 — RoleCollector. Prompts for a free-text job role, trimmed.
pub fn collect_role<R: BufRead, W: Write>(
    record: InterviewRecord,
    console: &mut Console<R, W>,
) -> Result<InterviewRecord, CoachError> {
    let mut role = console.prompt_line(ROLE_PROMPT)?;
    if role.is_empty() {
        role = console.prompt_line(ROLE_REPROMPT)?;
    }
    if role.is_empty() {
        return Err(CoachError::EmptyInput("role"));
    }

    info!("Role collected: {role}");
    let mut record = record
        .log(Speaker::Coach, ROLE_PROMPT.trim())
        .log(Speaker::Candidate, role.clone());
    record.role = role;
    Ok(record)
}

/// Stage 2 — QuestionGenerator. One generation request from the role;
/// errors and empty completions abort the run, no retry.
pub async fn generate_question(
    record: InterviewRecord,
    llm: &dyn TextGenerator,
) -> Result<InterviewRecord, CoachError> {
    let prompt = QUESTION_PROMPT_TEMPLATE
        .replace("{role}", &record.role)
        .replace("{output_style}", PLAIN_TEXT_INSTRUCTION);
    let question = llm.complete(&prompt, QUESTION_SYSTEM).await?;

    info!("Question generated ({} chars)", question.len());
    let mut record = record.log(Speaker::Coach, question.clone());
    record.question = question;
    Ok(record)
}

/// Stage 3 — AnswerCollector. Presents the question and reads free text
/// until a blank line. Same empty-input policy as stage 1.
pub fn collect_answer<R: BufRead, W: Write>(
    record: InterviewRecord,
    console: &mut Console<R, W>,
) -> Result<InterviewRecord, CoachError> {
    console.say("")?;
    console.say(&record.question)?;
    console.say("\nYour answer (finish with a blank line):")?;

    let mut answer = console.read_until_blank()?;
    if answer.is_empty() {
        console.say("No answer received. One more try:")?;
        answer = console.read_until_blank()?;
    }
    if answer.is_empty() {
        return Err(CoachError::EmptyInput("answer"));
    }

    info!("Answer collected ({} chars)", answer.len());
    let mut record = record.log(Speaker::Candidate, answer.clone());
    record.answer = answer;
    Ok(record)
}

/// Stage 4 — AnswerEvaluator. One generation request from question + answer.
pub async fn evaluate_answer(
    record: InterviewRecord,
    llm: &dyn TextGenerator,
) -> Result<InterviewRecord, CoachError> {
    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{question}", &record.question)
        .replace("{answer}", &record.answer)
        .replace("{output_style}", PLAIN_TEXT_INSTRUCTION);
    let evaluation = llm.complete(&prompt, EVALUATION_SYSTEM).await?;

    info!("Evaluation generated ({} chars)", evaluation.len());
    let mut record = record.log(Speaker::Coach, evaluation.clone());
    record.evaluation = evaluation;
    Ok(record)
}

/// Stage 5 — FeedbackPresenter. One generation request from the evaluation
/// (with question/answer context), rendered to the user. Terminal stage.
pub async fn present_feedback<R: BufRead, W: Write>(
    record: InterviewRecord,
    llm: &dyn TextGenerator,
    console: &mut Console<R, W>,
) -> Result<InterviewRecord, CoachError> {
    let prompt = FEEDBACK_PROMPT_TEMPLATE
        .replace("{question}", &record.question)
        .replace("{answer}", &record.answer)
        .replace("{evaluation}", &record.evaluation)
        .replace("{output_style}", PLAIN_TEXT_INSTRUCTION);
    let feedback = llm.complete(&prompt, FEEDBACK_SYSTEM).await?;

    console.say("")?;
    console.say("── Coaching feedback ──")?;
    console.say(&feedback)?;

    info!("Feedback presented ({} chars)", feedback.len());
    let mut record = record.log(Speaker::Coach, feedback.clone());
    record.feedback = feedback;
    Ok(record)
}
