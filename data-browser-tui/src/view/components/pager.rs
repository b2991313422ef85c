//! 分页栏组件
//!
//! 左侧：‹ 1 … 4 5 [6] 7 8 … 20 ›
//! 中间：Page 6/20 · 194 records
//! 右侧：可选的每页条数，当前值高亮

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use data_browser_core::PageSlot;

use crate::i18n::t;
use crate::model::BrowserState;
use crate::view::theme::{colors, Styles};

/// 渲染分页栏
pub fn render(browser: &BrowserState, frame: &mut Frame, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    frame.render_widget(Paragraph::new(window_line(browser)), parts[0]);
    frame.render_widget(
        Paragraph::new(vec![summary_line(browser), page_size_line(browser)])
            .alignment(ratatui::layout::Alignment::Right),
        parts[1],
    );
}

/// 页码窗口
fn window_line(browser: &BrowserState) -> Line<'static> {
    let c = colors();
    let view = browser.session.view();
    let current = view.current_page();
    let total_pages = view.total_pages();

    let arrow = |enabled: bool, text: &'static str| {
        let style = if enabled {
            Style::default().fg(c.fg)
        } else {
            Styles::muted()
        };
        Span::styled(text, style)
    };

    let mut spans = vec![arrow(current > 1, "‹ ")];
    for slot in browser.session.page_window() {
        match slot {
            PageSlot::Page(page) if page == current => spans.push(Span::styled(
                format!("[{page}]"),
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            )),
            PageSlot::Page(page) => {
                spans.push(Span::styled(format!(" {page} "), Style::default().fg(c.fg)));
            }
            PageSlot::Ellipsis => spans.push(Span::styled(" … ", Styles::muted())),
        }
    }
    spans.push(arrow(current < total_pages, " ›"));
    Line::from(spans)
}

/// 页码与总数
fn summary_line(browser: &BrowserState) -> Line<'static> {
    let texts = &t().pager;
    let view = browser.session.view();
    Line::styled(
        format!(
            "{} {}/{} · {} {}",
            texts.page,
            view.current_page(),
            view.total_pages(),
            view.total(),
            texts.records
        ),
        Styles::muted(),
    )
}

/// 每页条数选项
fn page_size_line(browser: &BrowserState) -> Line<'static> {
    let c = colors();
    let entries = t().pager.entries;
    let current = browser.session.view().page_size();

    let mut spans = Vec::new();
    for (i, &size) in browser.session.dataset().page_sizes.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if size == current {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(c.fg)
        };
        spans.push(Span::styled(format!("{size} {entries}"), style));
    }
    Line::from(spans)
}
