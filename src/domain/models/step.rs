use std::fmt;

use thiserror::Error;

/// Identifies a step of the automation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Notify,
    ReadScreen,
    FirstClick,
    TypeMessage,
    PressEnter,
    SecondClick,
    NewConversation,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Notify => "notify",
            Step::ReadScreen => "read screen",
            Step::FirstClick => "first click",
            Step::TypeMessage => "type message",
            Step::PressEnter => "press enter",
            Step::SecondClick => "second click",
            Step::NewConversation => "new conversation",
        };
        f.write_str(name)
    }
}

/// A collaborator call that failed while performing a step
#[derive(Debug, Error)]
#[error("{step} step failed: {cause:#}")]
pub struct StepFailure {
    pub step: Step,
    pub cause: anyhow::Error,
}

impl StepFailure {
    pub fn new(step: Step, cause: anyhow::Error) -> Self {
        Self { step, cause }
    }

    /// Adapter for `map_err` on collaborator results
    pub fn at(step: Step) -> impl FnOnce(anyhow::Error) -> StepFailure {
        move |cause| StepFailure::new(step, cause)
    }
}

/// The pacer observed an interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("automation interrupted")]
pub struct Cancelled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_step_and_cause() {
        let failure = StepFailure::at(Step::SecondClick)(anyhow::anyhow!("no display"));
        assert_eq!(failure.step, Step::SecondClick);
        assert_eq!(failure.to_string(), "second click step failed: no display");
    }
}
