//! One-shot submission without a terminal.
//!
//! Builds the same page the interactive form shows, types `name` into it,
//! submits once through the registered handler and returns what the
//! greeting element displays.

use crate::dom::Document;
use crate::form::{FormError, SubmitHandler, GREETING_ID, NAME_INPUT_ID};
use crate::greeter::GreetingService;

pub async fn submit_once(
    title: &str,
    name: &str,
    service: &dyn GreetingService,
) -> Result<String, FormError> {
    let mut doc = Document::greeter_page(title);
    let form = doc
        .query_selector_form()
        .ok_or(FormError::MissingElement("form"))?;
    let input = doc
        .get_element_by_id(NAME_INPUT_ID)
        .ok_or(FormError::MissingElement(NAME_INPUT_ID))?;
    doc.set_input_value(input, name)?;

    let handler = SubmitHandler::register(form);
    let Some(mut event) = doc.dispatch_submit(form) else {
        return Err(FormError::MissingButton);
    };
    let result = handler.handle(&mut doc, &mut event, service).await;
    doc.finish_submit(&event);
    result?;

    let greeting = doc
        .get_element_by_id(GREETING_ID)
        .and_then(|id| doc.text_content(id))
        .unwrap_or_default();
    Ok(greeting.to_string())
}
