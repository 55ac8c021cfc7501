use crate::greeter::GreetError;
use crossterm::event::Event as CrosstermEvent;

pub type SubmissionId = usize;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The greeting service answered or failed a submission
    GreetingSettled {
        submission: SubmissionId,
        outcome: Result<String, GreetError>,
    },

    /// Tick for UI refresh
    Tick,
}
