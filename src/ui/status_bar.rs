use crate::app::state::*;
use crate::config::ServiceKind;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let service = match state.config.service.kind {
        ServiceKind::Local => "local".to_string(),
        ServiceKind::Http => state.config.service.method.clone(),
    };
    parts.push(Span::styled(
        format!(" [{}] ", service),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    if state.pending.is_some() {
        let frame_idx = (state.tick_count / 2) as usize % SPINNER.len();
        parts.push(Span::styled(
            format!(" {} ", SPINNER[frame_idx]),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let focus_name = match state.focus {
        FocusPanel::Input => "INPUT",
        FocusPanel::Button => "BUTTON",
    };
    let remaining = padding_width(&parts, focus_name, area.width);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}

// Columns left between the status spans and the focus tag.
fn padding_width(parts: &[Span], focus_name: &str, width: u16) -> usize {
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    (width as usize).saturating_sub(used + focus_name.width() + 3)
}
