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

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键允许额外的 SHIFT（`?`、`+` 等在多数键盘布局上需要 SHIFT）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        key.modifiers == self.modifiers
            || (matches!(self.code, KeyCode::Char(_))
                && key.modifiers == self.modifiers | KeyModifiers::SHIFT)
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 翻页
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const FIRST_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const LAST_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char(']'));
    pub const GO_TO_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('g'));

    // 页大小 / 标签
    pub const PAGE_SIZE_UP: KeyBinding = KeyBinding::key(KeyCode::Char('+'));
    pub const PAGE_SIZE_UP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('='));
    pub const PAGE_SIZE_DOWN: KeyBinding = KeyBinding::key(KeyCode::Char('-'));
    pub const NEXT_TAB: KeyBinding = KeyBinding::key(KeyCode::Char('t'));

    // 过滤
    pub const TOGGLE_FILTERS: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const CLEAR_FILTERS: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const NEXT_FILTER: KeyBinding = KeyBinding::key(KeyCode::Tab);
}
