//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::GoToPage { input, error } => {
            let total_pages = app
                .current_browser()
                .map_or(1, |b| b.session.total_pages());
            render_go_to_page(frame, input, error.as_deref(), total_pages);
        }
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// 弹窗内边距后的区域
fn padded(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x + horizontal.min(area.width / 2),
        area.y + vertical.min(area.height / 2),
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

fn modal_block(title: &str, border: Style) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(colors().selected_bg))
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(title, Style::default().fg(c.error)), area);

    let lines = vec![
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(t().modal.press_to_close, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, padded(area, 2, 2));
}

fn render_go_to_page(frame: &mut Frame, input: &str, error: Option<&str>, total_pages: u32) {
    let c = colors();
    let texts = &t().modal;
    let area = centered_rect(44, 8, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(texts.go_to_page_title, Styles::border(true)), area);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} (1-{total_pages}): ", texts.go_to_page_prompt),
            Style::default().fg(c.fg),
        ),
        Span::styled(
            format!("{input}_"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.push(Line::from(""));
    match error {
        Some(error) => lines.push(Line::styled(error, Style::default().fg(c.error))),
        None => lines.push(Line::styled(texts.go_to_page_hint, Styles::muted())),
    }

    frame.render_widget(Paragraph::new(lines), padded(area, 2, 2));
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let h = &t().help;
    let area = centered_rect(56, 26, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(h.title, Styles::border(true)), area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.header_fg).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(h.global),
        entry("Tab", h.switch_panel),
        entry("Alt+r", h.refresh),
        entry("?", h.help),
        entry("q", h.quit),
        Line::from(""),
        section(h.browsing),
        entry("↑↓/jk", h.move_selection),
        entry("←→/hl", h.prev_next_page),
        entry("[ ]", h.first_last_page),
        entry("g", h.go_to_page),
        entry("+ -", h.page_size),
        entry("t", h.next_tab),
        Line::from(""),
        section(h.filtering),
        entry("/", h.toggle_filters),
        entry("Tab", h.next_filter),
        entry("Enter/Esc", h.leave_filter),
        entry("Alt+c", h.clear_filters),
        Line::from(""),
        Line::styled(h.close, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), padded(area, 2, 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 10, area), Rect::new(20, 15, 60, 10));

        let small = Rect::new(5, 5, 30, 6);
        let r = centered_rect(60, 10, small);
        assert_eq!(r, Rect::new(5, 5, 30, 6));
    }

    #[test]
    fn padded_never_underflows() {
        let r = padded(Rect::new(0, 0, 3, 1), 2, 2);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }
}
