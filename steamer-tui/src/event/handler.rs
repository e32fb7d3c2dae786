//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{any_matches, DefaultKeymap};
use crate::message::{AppMessage, ContentMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(&key_event),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key) {
        return AppMessage::Quit;
    }
    if any_matches(DefaultKeymap::BACK, key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::REFRESH.matches(key) {
        return AppMessage::Refresh;
    }

    let content = if any_matches(DefaultKeymap::NAV_UP, key) {
        ContentMessage::SelectPrevious
    } else if any_matches(DefaultKeymap::NAV_DOWN, key) {
        ContentMessage::SelectNext
    } else if any_matches(DefaultKeymap::NAV_FIRST, key) {
        ContentMessage::SelectFirst
    } else if any_matches(DefaultKeymap::NAV_LAST, key) {
        ContentMessage::SelectLast
    } else if DefaultKeymap::NAV_CONFIRM.matches(key) {
        ContentMessage::Confirm
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Content(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn content(event: Event) -> Option<ContentMessage> {
        match handle_event(event) {
            AppMessage::Content(msg) => Some(msg),
            _ => None,
        }
    }

    #[test]
    fn quit_keys() {
        assert!(matches!(handle_event(press(KeyCode::Char('q'))), AppMessage::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c), AppMessage::Quit));
    }

    #[test]
    fn plain_c_is_ignored() {
        assert!(matches!(handle_event(press(KeyCode::Char('c'))), AppMessage::Noop));
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(content(press(KeyCode::Up)), Some(ContentMessage::SelectPrevious));
        assert_eq!(content(press(KeyCode::Char('k'))), Some(ContentMessage::SelectPrevious));
        assert_eq!(content(press(KeyCode::Down)), Some(ContentMessage::SelectNext));
        assert_eq!(content(press(KeyCode::Char('j'))), Some(ContentMessage::SelectNext));
        assert_eq!(content(press(KeyCode::Home)), Some(ContentMessage::SelectFirst));
        assert_eq!(content(press(KeyCode::Char('g'))), Some(ContentMessage::SelectFirst));
        assert_eq!(content(press(KeyCode::End)), Some(ContentMessage::SelectLast));
        assert_eq!(content(press(KeyCode::Enter)), Some(ContentMessage::Confirm));
    }

    #[test]
    fn shifted_g_jumps_to_last() {
        let key = Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(content(key), Some(ContentMessage::SelectLast));
    }

    #[test]
    fn back_and_refresh() {
        assert!(matches!(handle_event(press(KeyCode::Esc)), AppMessage::GoBack));
        assert!(matches!(handle_event(press(KeyCode::Backspace)), AppMessage::GoBack));
        assert!(matches!(handle_event(press(KeyCode::Char('r'))), AppMessage::Refresh));
    }

    #[test]
    fn release_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release), AppMessage::Noop));
    }

    #[test]
    fn resize_is_noop() {
        assert!(matches!(handle_event(Event::Resize(80, 24)), AppMessage::Noop));
    }
}
