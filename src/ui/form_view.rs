use crate::app::state::*;
use crate::dom::NodeKind;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

pub fn render_heading(frame: &mut Frame, area: Rect, state: &AppState) {
    let heading = state
        .document
        .nodes()
        .find_map(|(_, n)| match &n.kind {
            NodeKind::Heading(text) => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or_else(|| state.document.title());
    let paragraph = Paragraph::new(Span::styled(heading, Theme::heading())).centered();
    frame.render_widget(paragraph, area);
}

pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = state.handler.form();
    let label = state
        .document
        .nodes()
        .find_map(|(id, n)| match &n.kind {
            NodeKind::Label(text) if state.document.is_descendant_of(id, form) => {
                Some(text.as_str())
            }
            _ => None,
        })
        .unwrap_or_default();
    let button_label = state.document.button_label(state.button).unwrap_or_default();

    let form_layout = layout::compute_form_layout(
        area,
        label.width() as u16,
        button_label.width() as u16 + 4,
    );

    // Vertically centre the label against the bordered input
    let label_area = Rect {
        y: form_layout.label.y + 1,
        height: 1,
        ..form_layout.label
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, Theme::label())),
        label_area,
    );

    render_input(frame, form_layout.input, state);
    render_button(frame, form_layout.button, state, button_label);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Input;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(input) = state.input() else {
        return;
    };
    frame.render_widget(
        Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text())),
        inner,
    );

    if focused && inner.width > 0 {
        let cursor_x = inner.x + input.cursor_column();
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState, label: &str) {
    let focused = state.focus == FocusPanel::Button;
    let style = if state.button_disabled() {
        Theme::button_disabled()
    } else if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let paragraph = Paragraph::new(Span::styled(format!(" {} ", label), style))
        .centered()
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_greeting(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let paragraph = Paragraph::new(Span::styled(state.greeting_text(), Theme::greeting()))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
