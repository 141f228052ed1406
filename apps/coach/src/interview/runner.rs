//! WorkflowRunner — sequences the five stages over one record.
//!
//! The topology is a straight line, so the "graph" is a plain ordered list
//! of stages. The runner walks it once: the first failing stage ends the
//! run and no later stage is invoked. There are no back-transitions and no
//! branch states.

use std::io::{BufRead, Write};

use tracing::info;
use uuid::Uuid;

use crate::errors::CoachError;
use crate::interview::console::Console;
use crate::interview::record::InterviewRecord;
use crate::interview::stages;
use crate::llm_client::TextGenerator;

/// The five stages, in invocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectRole,
    GenerateQuestion,
    CollectAnswer,
    EvaluateAnswer,
    PresentFeedback,
}

/// Fixed stage order. The runner walks this list exactly once per run.
pub const STAGE_ORDER: [Stage; 5] = [
    Stage::CollectRole,
    Stage::GenerateQuestion,
    Stage::CollectAnswer,
    Stage::EvaluateAnswer,
    Stage::PresentFeedback,
];

pub const SUCCESS_BANNER: &str = "Interview session complete. Thanks for practicing!";

/// Sequencing driver for one interview run.
pub struct WorkflowRunner<'a> {
    llm: &'a dyn TextGenerator,
    session_id: Uuid,
}

impl<'a> WorkflowRunner<'a> {
    pub fn new(llm: &'a dyn TextGenerator) -> Self {
        Self {
            llm,
            session_id: Uuid::new_v4(),
        }
    }

    /// Runs stages 1→5 over a fresh record and prints the success banner.
    /// Returns the completed record; the first stage failure is returned
    /// unmodified and remaining stages never run.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<InterviewRecord, CoachError> {
        let mut record = InterviewRecord::empty();

        for stage in STAGE_ORDER {
            info!(session_id = %self.session_id, ?stage, "Running stage");
            record = match stage {
                Stage::CollectRole => stages::collect_role(record, console)?,
                Stage::GenerateQuestion => stages::generate_question(record, self.llm).await?,
                Stage::CollectAnswer => stages::collect_answer(record, console)?,
                Stage::EvaluateAnswer => stages::evaluate_answer(record, self.llm).await?,
                Stage::PresentFeedback => {
                    stages::present_feedback(record, self.llm, console).await?
                }
            };
        }

        console.say("")?;
        console.say(SUCCESS_BANNER)?;
        info!(session_id = %self.session_id, "Interview session completed");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use std::io::Cursor;

    const USER_INPUT: &str = "backend engineer\nI'd use a token bucket...\n\n";

    fn scripted_happy_path() -> ScriptedGenerator {
        ScriptedGenerator::new(vec![
            Ok("Describe how you would design a rate limiter.".to_string()),
            Ok("Good use of token bucket, but missing concurrency discussion.".to_string()),
            Ok("Strong technical grasp; next time mention thread-safety.".to_string()),
        ])
    }

    async fn run_with(
        llm: &ScriptedGenerator,
        input: &str,
    ) -> (Result<InterviewRecord, CoachError>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let runner = WorkflowRunner::new(llm);
        let result = runner.run(&mut console).await;
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let llm = scripted_happy_path();
        let (result, output) = run_with(&llm, USER_INPUT).await;

        let record = result.unwrap();
        assert_eq!(record.role, "backend engineer");
        assert_eq!(record.question, "Describe how you would design a rate limiter.");
        assert_eq!(record.answer, "I'd use a token bucket...");
        assert_eq!(
            record.evaluation,
            "Good use of token bucket, but missing concurrency discussion."
        );
        assert_eq!(
            record.feedback,
            "Strong technical grasp; next time mention thread-safety."
        );
        assert_eq!(llm.calls(), 3);

        assert!(output.contains("Strong technical grasp; next time mention thread-safety."));
        assert!(output.contains(SUCCESS_BANNER));
    }

    #[tokio::test]
    async fn test_question_precedes_answer_collection() {
        // The question must be generated before any answer input is read:
        // with no scripted question, the run fails before touching stdin.
        let llm = ScriptedGenerator::new(vec![Err("unavailable".to_string())]);
        let (result, output) = run_with(&llm, "backend engineer\nnever read\n\n").await;

        assert!(matches!(result, Err(CoachError::Generation(_))));
        assert_eq!(llm.calls(), 1);
        assert!(!output.contains("Your answer"));
    }

    #[tokio::test]
    async fn test_failed_stage_halts_pipeline() {
        let llm = ScriptedGenerator::new(vec![Err("overloaded".to_string())]);
        let (result, output) = run_with(&llm, USER_INPUT).await;

        assert!(result.is_err());
        // Only the question call happened; evaluation and feedback never ran.
        assert_eq!(llm.calls(), 1);
        assert!(!output.contains(SUCCESS_BANNER));
    }

    #[tokio::test]
    async fn test_identical_inputs_produce_identical_outputs() {
        let first = run_with(&scripted_happy_path(), USER_INPUT).await;
        let second = run_with(&scripted_happy_path(), USER_INPUT).await;

        let (first_record, second_record) = (first.0.unwrap(), second.0.unwrap());
        assert_eq!(first_record.evaluation, second_record.evaluation);
        assert_eq!(first_record.feedback, second_record.feedback);
        assert_eq!(first.1, second.1);
    }

    #[tokio::test]
    async fn test_empty_role_after_reprompt_makes_no_service_calls() {
        let llm = scripted_happy_path();
        let (result, _) = run_with(&llm, "\n\n").await;

        assert!(matches!(result, Err(CoachError::EmptyInput("role"))));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_transcript_grows_monotonically_across_stages() {
        let llm = scripted_happy_path();
        let (result, _) = run_with(&llm, USER_INPUT).await;

        let record = result.unwrap();
        // role prompt + role, question, answer, evaluation, feedback
        assert_eq!(record.transcript.len(), 6);
        for pair in record.transcript.windows(2) {
            assert!(pair[0].at <= pair[1].at);
        }
    }
}
