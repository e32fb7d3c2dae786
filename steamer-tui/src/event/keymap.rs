//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 SHIFT：大写字母本身已经体现了它。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Esc),
        KeyBinding::key(KeyCode::Backspace),
    ];

    // 导航
    pub const NAV_UP: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const NAV_DOWN: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const NAV_FIRST: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Home),
        KeyBinding::key(KeyCode::Char('g')),
    ];
    pub const NAV_LAST: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::End),
        KeyBinding::key(KeyCode::Char('G')),
    ];
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
}

/// 任一绑定匹配
pub fn any_matches(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}
