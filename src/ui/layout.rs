use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub heading: Rect,
    pub form: Rect,
    pub greeting: Rect,
    pub status_bar: Rect,
}

pub struct FormLayout {
    pub label: Rect,
    pub input: Rect,
    pub button: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let page = main_chunks[0];
    let status_bar = main_chunks[1];

    let page_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Form
            Constraint::Min(3),    // Greeting section
        ])
        .split(page);

    AppLayout {
        heading: page_chunks[0],
        form: page_chunks[1],
        greeting: page_chunks[2],
        status_bar,
    }
}

pub fn compute_form_layout(area: Rect, label_width: u16, button_width: u16) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(label_width),
            Constraint::Min(10),
            Constraint::Length(button_width),
        ])
        .split(area);

    FormLayout {
        label: chunks[0],
        input: chunks[1],
        button: chunks[2],
    }
}
