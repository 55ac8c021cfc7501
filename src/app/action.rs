use crate::app::event::SubmissionId;

#[derive(Debug, PartialEq)]
pub enum Action {
    InvokeGreet { submission: SubmissionId, name: String },
    Quit,
}
