//! DNS 记录页

use ratatui::text::{Line, Span};

use crate::model::App;
use crate::view::format;
use crate::view::layout::{marker, Screen};
use crate::view::theme::ThemeColors;

pub fn render(app: &App, c: &ThemeColors, screen: &mut Screen) {
    let domain = app.active_domain.as_deref().unwrap_or_default();
    screen.push(Line::styled(format!("DNS Records for {domain}:"), c.heading()));
    screen.push(Line::default());

    if app.records.is_empty() {
        screen.push(Line::styled("  No DNS records found.", c.dim()));
        return;
    }

    screen.push(Line::styled(
        format!("{}{}", marker(false), format::record_header()),
        c.dim(),
    ));

    for (index, record) in app.records.iter().enumerate() {
        let selected = index == app.cursor;
        let line = Line::from(vec![
            Span::raw(marker(selected)),
            Span::styled(format::record_row(record), c.text()),
        ]);
        screen.push_row(line, selected, c);
    }
}
