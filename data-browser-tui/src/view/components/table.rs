//! 数据表格组件
//!
//! 表头取自数据集的列定义，单元格为字段的文本形式。
//! 请求进行中显示 "Loading..." 占位行，过滤后为空显示 "No data found"。

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Row, Table, TableState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use data_browser_core::ColumnSpec;
use data_browser_source::Record;

use crate::i18n::t;
use crate::model::BrowserState;
use crate::view::theme::{colors, Styles};

/// 单列最大显示宽度
const MAX_COLUMN_WIDTH: usize = 28;
const ELLIPSIS: char = '…';

/// 渲染表格
pub fn render(browser: &BrowserState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let columns = &browser.session.dataset().columns;
    let records = browser.session.visible_records();

    let header = Row::new(columns.iter().map(|col| Cell::from(col.label.as_str())))
        .style(Style::default().fg(c.header_fg).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let widths = column_widths(columns, &records);
    let constraints: Vec<Constraint> = widths
        .iter()
        .map(|&w| Constraint::Length(u16::try_from(w).unwrap_or(u16::MAX)))
        .collect();

    let (rows, selectable) = if browser.session.is_loading() {
        (vec![placeholder_row(texts.table.loading_row)], false)
    } else if records.is_empty() {
        (vec![placeholder_row(texts.table.empty_row)], false)
    } else {
        let rows = records
            .iter()
            .map(|record| {
                Row::new(
                    columns
                        .iter()
                        .zip(&widths)
                        .map(|(col, &w)| Cell::from(truncate(&cell_text(record, col), w))),
                )
            })
            .collect();
        (rows, true)
    };

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    if selectable {
        state.select(Some(browser.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn placeholder_row(text: &str) -> Row<'_> {
    Row::new([Cell::from(Line::styled(text, Styles::muted()))])
}

fn cell_text(record: &Record, column: &ColumnSpec) -> String {
    record.text(&column.key).unwrap_or_default()
}

/// 每列宽度：表头与当前可见单元格中的最大显示宽度，不超过上限
fn column_widths(columns: &[ColumnSpec], records: &[&Record]) -> Vec<usize> {
    columns
        .iter()
        .map(|col| {
            records
                .iter()
                .map(|r| cell_text(r, col).width())
                .chain(std::iter::once(col.label.width()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// 按显示宽度截断，超出时以 "…" 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("Ann", 5), "Ann");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("Christopher", 6), "Chris…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        // 每个汉字宽度为 2
        assert_eq!(truncate("数据浏览器", 5), "数据…");
        assert_eq!(truncate("数据浏览器", 10), "数据浏览器");
    }

    #[test]
    fn widths_cover_header_and_cells() {
        let columns = vec![
            ColumnSpec::new("id", "ID"),
            ColumnSpec::new("email", "Email"),
        ];
        let records: Vec<Record> = [
            json!({"id": 1, "email": "a@b.co"}),
            json!({"id": 12345, "email": "averyveryverylongaddress@example.com"}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect();
        let refs: Vec<&Record> = records.iter().collect();

        assert_eq!(column_widths(&columns, &refs), vec![5, MAX_COLUMN_WIDTH]);
        assert_eq!(column_widths(&columns, &[]), vec![2, 5]);
    }
}
