use crate::app::action::Action;
use crate::app::event::{AppEvent, SubmissionId};
use crate::app::state::*;
use crate::form::FormError;
use crate::greeter::{GreetError, GreetingService};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::GreetingSettled {
            submission,
            outcome,
        } => {
            handle_settled(state, submission, outcome);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Spinner
            if state.pending.is_some() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::Button => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit_form(state),
            _ => vec![],
        },
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter {
        return submit_form(state);
    }

    let Some(input) = state.input_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    vec![]
}

/// Implicit submission of the greeting form, then the registered handler's
/// first half. The service call itself is handed back as an action.
fn submit_form(state: &mut AppState) -> Vec<Action> {
    let form = state.handler.form();
    let Some(mut event) = state.document.dispatch_submit(form) else {
        debug!("submit ignored, button is disabled");
        return vec![];
    };

    let begun = state.handler.begin(&mut state.document, &mut event);
    state.document.finish_submit(&event);

    match begun {
        Ok(pending) => {
            let submission = state.allocate_submission_id();
            let name = pending.name.clone();
            state.pending = Some((submission, pending));
            vec![Action::InvokeGreet { submission, name }]
        }
        Err(e) => {
            warn!(error = %e, "submit handler failed");
            vec![]
        }
    }
}

fn take_pending(state: &mut AppState, submission: SubmissionId) -> Option<crate::form::PendingGreeting> {
    match state.pending.take() {
        Some((id, pending)) if id == submission => Some(pending),
        other => {
            warn!(submission, "reply for a submission that is not outstanding");
            state.pending = other;
            None
        }
    }
}

/// Runs the service call for an `InvokeGreet` action and packages the
/// outcome for the event loop.
pub async fn call_service(
    service: &dyn GreetingService,
    submission: SubmissionId,
    name: &str,
) -> AppEvent {
    AppEvent::GreetingSettled {
        submission,
        outcome: service.greet(name).await,
    }
}

// A rejection leaves the button disabled and the greeting untouched.
fn handle_settled(
    state: &mut AppState,
    submission: SubmissionId,
    outcome: Result<String, GreetError>,
) {
    let Some(pending) = take_pending(state, submission) else {
        return;
    };
    match state.handler.settle(&mut state.document, pending, outcome) {
        Ok(()) => {}
        Err(FormError::Service(_)) => debug!(submission, "submission rejected"),
        Err(e) => warn!(error = %e, submission, "could not display greeting"),
    }
    state.dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::greeter::testing::ScriptedGreeter;
    use crate::greeter::LocalGreeter;

    fn state() -> AppState {
        AppState::new(AppConfig::default()).unwrap()
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_submits_typed_name() {
        let mut s = state();
        type_text(&mut s, "Ada");
        let actions = handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::InvokeGreet {
                submission: 0,
                name: "Ada".into()
            }]
        );
        assert!(s.button_disabled());
        assert_eq!(s.document.navigations(), 0);
        // Input keeps its value; the page was not reloaded.
        assert_eq!(s.input().unwrap().text, "Ada");
    }

    #[test]
    fn test_second_submit_blocked_while_pending() {
        let mut s = state();
        type_text(&mut s, "Ada");
        handle_event(&mut s, key(KeyCode::Enter));
        assert!(handle_event(&mut s, key(KeyCode::Enter)).is_empty());
        assert_eq!(s.next_submission_id, 1);
    }

    #[test]
    fn test_resolution_displays_greeting() {
        let mut s = state();
        type_text(&mut s, "Ada");
        handle_event(&mut s, key(KeyCode::Enter));
        handle_event(
            &mut s,
            AppEvent::GreetingSettled {
                submission: 0,
                outcome: Ok("Hello, Ada!".into()),
            },
        );
        assert!(!s.button_disabled());
        assert!(s.pending.is_none());
        assert_eq!(s.greeting_text(), "Hello, Ada!");
    }

    #[test]
    fn test_rejection_keeps_form_locked() {
        let mut s = state();
        type_text(&mut s, "Ada");
        handle_event(&mut s, key(KeyCode::Enter));
        handle_event(
            &mut s,
            AppEvent::GreetingSettled {
                submission: 0,
                outcome: Err(GreetError::Rejected("boom".into())),
            },
        );
        assert!(s.pending.is_none());
        assert!(s.button_disabled());
        assert_eq!(s.greeting_text(), "");
        assert_eq!(s.status_line(), "Submit disabled");
        assert!(handle_event(&mut s, key(KeyCode::Enter)).is_empty());
    }

    async fn run_actions(
        state: &mut AppState,
        actions: Vec<Action>,
        service: &dyn GreetingService,
    ) {
        for action in actions {
            if let Action::InvokeGreet { submission, name } = action {
                let event = call_service(service, submission, &name).await;
                handle_event(state, event);
            }
        }
    }

    #[tokio::test]
    async fn test_service_rejection_reaches_the_form() {
        let mut s = state();
        type_text(&mut s, "Ada");
        let service = ScriptedGreeter::rejecting("replica unavailable");
        let actions = handle_event(&mut s, key(KeyCode::Enter));
        run_actions(&mut s, actions, &service).await;

        assert_eq!(service.calls(), vec!["Ada".to_string()]);
        assert!(s.pending.is_none());
        assert!(s.button_disabled());
        assert_eq!(s.greeting_text(), "");
    }

    #[tokio::test]
    async fn test_local_service_round_trip() {
        let mut s = state();
        type_text(&mut s, "Ada");
        let actions = handle_event(&mut s, key(KeyCode::Enter));
        run_actions(&mut s, actions, &LocalGreeter::default()).await;

        assert!(!s.button_disabled());
        assert_eq!(s.greeting_text(), "Hello my Lord Ada !");
        assert_eq!(s.status_line(), "Ready | Submissions: 1");
    }

    #[test]
    fn test_stale_reply_is_ignored() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Enter));
        handle_event(
            &mut s,
            AppEvent::GreetingSettled {
                submission: 7,
                outcome: Ok("late".into()),
            },
        );
        assert!(s.pending.is_some());
        assert!(s.button_disabled());
        assert_eq!(s.greeting_text(), "");
    }

    #[test]
    fn test_button_focus_submits_empty_name() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Tab));
        assert_eq!(s.focus, FocusPanel::Button);
        let actions = handle_event(&mut s, key(KeyCode::Char(' ')));
        assert_eq!(
            actions,
            vec![Action::InvokeGreet {
                submission: 0,
                name: String::new()
            }]
        );
    }

    #[test]
    fn test_input_editing_keys() {
        let mut s = state();
        type_text(&mut s, "Adaa");
        handle_event(&mut s, key(KeyCode::Backspace));
        handle_event(&mut s, key(KeyCode::Home));
        handle_event(&mut s, key(KeyCode::Delete));
        assert_eq!(s.input().unwrap().text, "da");
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, key(KeyCode::Esc)), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut s, ctrl_c), vec![Action::Quit]);
    }
}
