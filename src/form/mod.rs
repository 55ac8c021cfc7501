//! The submit handler that ties the greeting form to the greeting service.
//!
//! A submission runs in two halves around the single await point:
//! [`SubmitHandler::begin`] intercepts the event, reads the name and disables
//! the button; [`SubmitHandler::complete`] re-enables the button and shows the
//! greeting. [`SubmitHandler::settle`] routes the call's outcome to
//! `complete` or hands the rejection back. [`SubmitHandler::handle`] runs
//! `begin` and `settle` around one service call; the terminal loop calls them
//! itself so it can keep drawing while the call is outstanding.
//!
//! A rejected call is returned to the caller as [`FormError::Service`] and
//! nothing else happens: the button stays disabled and the greeting element
//! keeps its old text.

use crate::dom::{Document, DomError, NodeId, SubmitEvent};
use crate::greeter::{GreetError, GreetingService};
use thiserror::Error;
use tracing::{info, warn};

pub const NAME_INPUT_ID: &str = "name";
pub const GREETING_ID: &str = "greeting";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("submit event targets a form without a button")]
    MissingButton,
    #[error("no element with id `{0}`")]
    MissingElement(&'static str),
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("greeting service failed: {0}")]
    Service(#[from] GreetError),
}

/// A submission that has disabled its button and is waiting on the service.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGreeting {
    pub button: NodeId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SubmitHandler {
    form: NodeId,
}

impl SubmitHandler {
    /// Binds the handler to `form`. The caller locates the form once and
    /// hands it over; the handler never queries the document for it.
    pub fn register(form: NodeId) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn begin(
        &self,
        doc: &mut Document,
        event: &mut SubmitEvent,
    ) -> Result<PendingGreeting, FormError> {
        event.prevent_default();

        let button = doc
            .first_button_within(event.target())
            .ok_or(FormError::MissingButton)?;
        let name = doc
            .get_element_by_id(NAME_INPUT_ID)
            .and_then(|id| doc.input_value(id))
            .unwrap_or_default()
            .to_string();

        doc.set_disabled(button, true)?;
        info!(name_len = name.len(), "greeting form submitted");
        Ok(PendingGreeting { button, name })
    }

    pub fn complete(
        &self,
        doc: &mut Document,
        pending: PendingGreeting,
        greeting: &str,
    ) -> Result<(), FormError> {
        doc.set_disabled(pending.button, false)?;
        let display = doc
            .get_element_by_id(GREETING_ID)
            .ok_or(FormError::MissingElement(GREETING_ID))?;
        doc.set_text_content(display, greeting)?;
        info!("greeting displayed");
        Ok(())
    }

    /// Applies the outcome of the service call. A resolved call completes
    /// the submission; a rejected one is handed back as
    /// [`FormError::Service`] and the document is left as `begin` left it.
    pub fn settle(
        &self,
        doc: &mut Document,
        pending: PendingGreeting,
        outcome: Result<String, GreetError>,
    ) -> Result<(), FormError> {
        match outcome {
            Ok(greeting) => self.complete(doc, pending, &greeting),
            Err(e) => {
                warn!(error = %e, "greeting call rejected, button left disabled");
                Err(e.into())
            }
        }
    }

    pub async fn handle(
        &self,
        doc: &mut Document,
        event: &mut SubmitEvent,
        service: &dyn GreetingService,
    ) -> Result<(), FormError> {
        let pending = self.begin(doc, event)?;
        let outcome = service.greet(&pending.name).await;
        self.settle(doc, pending, outcome)
    }
}
