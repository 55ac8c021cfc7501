mod form_view;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    form_view::render_heading(frame, app_layout.heading, state);
    form_view::render_form(frame, app_layout.form, state);
    form_view::render_greeting(frame, app_layout.greeting, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &AppState) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_form_and_greeting() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state
            .document
            .set_text_content(state.greeting, "Hello my Lord Ada !")
            .unwrap();
        let text = screen_text(&state);
        assert!(text.contains("greetform"));
        assert!(text.contains("Enter your name:"));
        assert!(text.contains("Click Me!"));
        assert!(text.contains("Hello my Lord Ada !"));
        assert!(text.contains("[INPUT]"));
    }
}
