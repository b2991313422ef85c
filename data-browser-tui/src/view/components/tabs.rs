//! 分类标签组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

use crate::model::BrowserState;
use crate::view::theme::{colors, Styles};

/// 渲染标签栏（数据集没有标签时不渲染）
pub fn render(browser: &BrowserState, frame: &mut Frame, area: Rect) {
    let dataset = browser.session.dataset();
    if dataset.tabs.is_empty() {
        return;
    }

    let c = colors();
    let active = browser
        .session
        .view()
        .active_tab()
        .and_then(|tab| dataset.tab_index(&tab.id))
        .unwrap_or(0);

    let titles: Vec<Line> = dataset
        .tabs
        .iter()
        .map(|tab| Line::from(tab.label.as_str()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active)
        .style(Styles::muted())
        .highlight_style(
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");

    frame.render_widget(tabs, area);
}
