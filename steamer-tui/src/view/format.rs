//! 文本格式化工具
//!
//! 终端按显示宽度对齐，中日韩字符占两列，因此用 unicode-width 计算。

use chrono::{NaiveDate, NaiveDateTime};
use steamer_provider::{DnsRecord, Domain};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 注册商返回的时间格式
const REGISTRAR_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// 记录列宽：ID / NAME / TYPE / CONTENT
pub const RECORD_COLUMNS: [usize; 4] = [10, 25, 10, 30];

/// 按显示宽度截断或补齐到 `width`
///
/// 超宽时保留前缀并以 `…` 结尾。
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// 记录表的表头
pub fn record_header() -> String {
    columns(&["ID", "NAME", "TYPE", "CONTENT"])
}

/// 一行记录，按列宽对齐
pub fn record_row(record: &DnsRecord) -> String {
    columns(&[
        &record.id,
        &record.name,
        &record.record_type,
        &record.content,
    ])
}

fn columns(cells: &[&str; 4]) -> String {
    cells
        .iter()
        .zip(RECORD_COLUMNS)
        .map(|(cell, width)| fit(cell, width))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// 距到期的天数；日期无法解析时为 None
pub fn days_until_expiry(domain: &Domain, today: NaiveDate) -> Option<i64> {
    let expires = NaiveDateTime::parse_from_str(&domain.expire_date, REGISTRAR_DATETIME)
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(&domain.expire_date, "%Y-%m-%d"))
        .ok()?;
    Some((expires - today).num_days())
}

/// 到期描述，例如 `expires 2027-01-01 (in 365 days)`
pub fn expiry_text(domain: &Domain, today: NaiveDate) -> Option<String> {
    let days = days_until_expiry(domain, today)?;
    let date = domain.expire_date.split(' ').next().unwrap_or_default();
    Some(match days {
        d if d < 0 => format!("expired {date} ({} days ago)", -d),
        0 => format!("expires {date} (today)"),
        1 => format!("expires {date} (tomorrow)"),
        d => format!("expires {date} (in {d} days)"),
    })
}

/// 标签列表，例如 `[prod] [personal]`
pub fn labels_text(domain: &Domain) -> String {
    domain
        .labels
        .iter()
        .filter(|label| !label.title.is_empty())
        .map(|label| format!("[{}]", label.title))
        .collect::<Vec<_>>()
        .join(" ")
}
