//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    // 根据当前焦点和编辑模式生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let loading = app
        .current_browser()
        .is_some_and(|b| b.session.is_loading());
    if loading {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(t().common.loading, Style::default().fg(c.highlight)));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.is_editing_filters() {
        return vec![
            ("Tab", h.next_filter),
            ("Enter/Esc", h.done),
            ("Alt+r", h.refresh),
        ];
    }

    let mut hints = vec![("Tab", h.switch_panel)];
    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", h.select));
            hints.push(("Enter", h.open));
        }
        FocusPanel::Content => {
            hints.push(("↑↓", h.select));
            hints.push(("←→", h.page));
            hints.push(("[ ]", h.first_last));
            hints.push(("g", h.go_to));
            hints.push(("+/-", h.page_size));
            let has_tabs = app
                .current_browser()
                .is_some_and(|b| !b.session.dataset().tabs.is_empty());
            if has_tabs {
                hints.push(("t", h.tab));
            }
            hints.push(("/", h.filter));
        }
    }
    hints.push(("Alt+r", h.refresh));
    hints.push(("?", h.help));
    hints.push(("q", h.quit));
    hints
}
