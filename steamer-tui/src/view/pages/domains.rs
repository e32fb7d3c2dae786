//! 域名列表页

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::model::App;
use crate::view::format;
use crate::view::layout::{marker, Screen};
use crate::view::theme::ThemeColors;

const NAME_WIDTH: usize = 32;

/// 30 天内到期时高亮
const EXPIRY_WARNING_DAYS: i64 = 30;

pub fn render(app: &App, c: &ThemeColors, screen: &mut Screen) {
    screen.push(Line::styled("Your Domains:", c.heading()));
    screen.push(Line::default());

    if app.domains.is_empty() {
        screen.push(Line::styled("  No domains found.", c.dim()));
        return;
    }

    for (index, domain) in app.domains.iter().enumerate() {
        let selected = index == app.cursor;
        let mut spans = vec![
            Span::raw(marker(selected)),
            Span::styled(format::fit(&domain.name, NAME_WIDTH), c.text()),
        ];

        if let Some(days) = format::days_until_expiry(domain, app.today) {
            if let Some(text) = format::expiry_text(domain, app.today) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(text, expiry_style(days, c)));
            }
        }

        let labels = format::labels_text(domain);
        if !labels.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(labels, Style::default().fg(c.highlight)));
        }

        screen.push_row(Line::from(spans), selected, c);
    }
}

fn expiry_style(days: i64, c: &ThemeColors) -> Style {
    let color = if days < 0 {
        c.error
    } else if days <= EXPIRY_WARNING_DAYS {
        c.warning
    } else {
        c.muted
    };
    Style::default().fg(color)
}
