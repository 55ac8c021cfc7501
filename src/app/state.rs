use crate::app::event::SubmissionId;
use crate::config::AppConfig;
use crate::dom::{Document, NodeId, TextInput};
use crate::form::{FormError, PendingGreeting, SubmitHandler, GREETING_ID, NAME_INPUT_ID};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Input,
    Button,
}

pub struct AppState {
    pub config: AppConfig,
    pub document: Document,
    pub handler: SubmitHandler,
    pub name_input: NodeId,
    pub button: NodeId,
    pub greeting: NodeId,
    pub focus: FocusPanel,
    pub pending: Option<(SubmissionId, PendingGreeting)>,
    pub next_submission_id: SubmissionId,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    /// Builds the page and registers the submit handler on its form.
    pub fn new(config: AppConfig) -> Result<Self, FormError> {
        let document = Document::greeter_page(&config.ui.title);
        let form = document
            .query_selector_form()
            .ok_or(FormError::MissingElement("form"))?;
        let button = document
            .first_button_within(form)
            .ok_or(FormError::MissingButton)?;
        let name_input = document
            .get_element_by_id(NAME_INPUT_ID)
            .ok_or(FormError::MissingElement(NAME_INPUT_ID))?;
        let greeting = document
            .get_element_by_id(GREETING_ID)
            .ok_or(FormError::MissingElement(GREETING_ID))?;

        Ok(Self {
            config,
            document,
            handler: SubmitHandler::register(form),
            name_input,
            button,
            greeting,
            focus: FocusPanel::Input,
            pending: None,
            next_submission_id: 0,
            should_quit: false,
            dirty: true,
            tick_count: 0,
        })
    }

    pub fn allocate_submission_id(&mut self) -> SubmissionId {
        let id = self.next_submission_id;
        self.next_submission_id += 1;
        id
    }

    pub fn input(&self) -> Option<&TextInput> {
        match self.document.node(self.name_input).map(|n| &n.kind) {
            Some(crate::dom::NodeKind::TextInput(input)) => Some(input),
            _ => None,
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        self.document.input_mut(self.name_input).ok()
    }

    pub fn button_disabled(&self) -> bool {
        self.document.is_disabled(self.button)
    }

    pub fn greeting_text(&self) -> &str {
        self.document.text_content(self.greeting).unwrap_or_default()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::Button,
            FocusPanel::Button => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if self.pending.is_some() {
            return "Waiting for greeting service...".to_string();
        }
        if self.button_disabled() {
            return "Submit disabled".to_string();
        }
        format!("Ready | Submissions: {}", self.next_submission_id)
    }
}
