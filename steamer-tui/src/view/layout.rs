//! 主布局渲染
//!
//! 三层布局：标题栏 + 主内容区 + 状态栏

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::message::FetchRequest;
use crate::model::{App, Page};

use super::pages;
use super::theme::{colors, ThemeColors};

const TITLE: &str = " STEAMER - Porkbun Manager";

/// 渲染结果
#[derive(Debug, Default)]
pub struct Screen {
    pub lines: Vec<Line<'static>>,
    /// 光标所在行的下标
    pub cursor_line: Option<usize>,
}

impl Screen {
    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    /// 追加列表行，选中时记录光标位置并加上选中样式
    pub fn push_row(&mut self, line: Line<'static>, selected: bool, c: &ThemeColors) {
        if selected {
            self.cursor_line = Some(self.lines.len());
            self.lines.push(line.style(c.selected()));
        } else {
            self.lines.push(line);
        }
    }
}

/// 行首标记
pub fn marker(selected: bool) -> &'static str {
    if selected {
        "> "
    } else {
        "  "
    }
}

/// 把状态投影成文本行
///
/// 错误优先于加载中，加载中优先于列表。
pub fn browser_lines(app: &App, c: &ThemeColors) -> Screen {
    let mut screen = Screen::default();

    if let Some(error) = &app.error {
        screen.push(Line::styled(format!("Error: {error}"), c.error_style()));
        screen.push(Line::default());
        screen.push(Line::styled("Press esc to go back, q to quit.", c.dim()));
        return screen;
    }

    if app.loading {
        let text = match &app.pending {
            Some(FetchRequest::Records(domain)) => format!("Loading records for {domain}..."),
            _ => "Loading...".to_string(),
        };
        screen.push(Line::styled(text, c.dim()));
        return screen;
    }

    match app.page {
        Page::Domains => pages::domains::render(app, c, &mut screen),
        Page::Records => pages::records::render(app, c, &mut screen),
    }
    screen
}

/// 状态栏中的按键提示
pub fn help_text(app: &App) -> &'static str {
    if app.error.is_some() {
        return "esc: back, q: quit";
    }
    match app.page {
        Page::Domains => "j/k: navigate, enter: view records, r: reload, q: quit",
        Page::Records => "j/k: navigate, esc: back to domains, r: reload, q: quit",
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE).style(c.bar());
    frame.render_widget(title, main_layout[0]);

    render_content(app, &c, frame, main_layout[1]);

    let status = Paragraph::new(format!(" {}", help_text(app))).style(c.bar());
    frame.render_widget(status, main_layout[2]);
}

/// 渲染内容区，保证光标行可见
fn render_content(app: &App, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    // 留一列左边距
    let inner = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(1),
        ..area
    };
    let screen = browser_lines(app, c);
    let offset = scroll_offset(screen.cursor_line, usize::from(inner.height));
    let paragraph = Paragraph::new(screen.lines)
        .style(c.text())
        .scroll((offset, 0));
    frame.render_widget(paragraph, inner);
}

/// 光标行超出可见高度时的滚动量
fn scroll_offset(cursor_line: Option<usize>, height: usize) -> u16 {
    match cursor_line {
        Some(line) if height > 0 && line >= height => {
            u16::try_from(line + 1 - height).unwrap_or(u16::MAX)
        }
        _ => 0,
    }
}
