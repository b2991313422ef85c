//! 过滤栏组件
//!
//! 每个可过滤列一个输入框，横向排列。编辑模式下聚焦的输入框高亮并显示光标。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::BrowserState;
use crate::view::theme::{colors, Styles};

/// 渲染过滤栏
pub fn render(browser: &BrowserState, frame: &mut Frame, area: Rect) {
    let columns = browser.filter_columns();
    if columns.is_empty() {
        return;
    }

    let count = u32::try_from(columns.len()).unwrap_or(u32::MAX);
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let editing = browser.filter_bar.editing;
    for (i, (column, slot)) in columns.iter().zip(boxes.iter()).enumerate() {
        let focused = editing && i == browser.filter_bar.focused;
        let value = browser.filter_value(&column.key);
        render_input(frame, *slot, column.filter_label(), value, focused);
    }
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(c.fg))];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(c.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
