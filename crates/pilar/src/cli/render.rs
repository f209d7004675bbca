//! # Rendering
//!
//! Turns a `CmdResult` into terminal text (styled with `console`, which
//! disables colors automatically when stdout is not a terminal) or JSON.

use anyhow::Result;
use chrono::{DateTime, Utc};
use console::Style;
use pilarapp::commands::{CmdMessage, CmdResult, MessageLevel};
use pilarapp::model::{CategoryBucket, ScanRecord};
use pilarapp::stats::ScanStats;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LABEL_WIDTH: usize = 28;
pub const CATEGORY_WIDTH: usize = 18;
pub const TIME_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
    Stats,
    Messages,
}

pub fn render(result: &CmdResult, view: View) -> String {
    let mut out = String::new();
    match view {
        View::List => out.push_str(&render_list(&result.listed_records)),
        View::Detail => {
            let records = if result.listed_records.is_empty() {
                &result.affected_records
            } else {
                &result.listed_records
            };
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&render_detail(record));
            }
        }
        View::Stats => {
            if let Some(stats) = &result.stats {
                out.push_str(&render_stats(stats));
            }
        }
        View::Messages => {}
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_json(result: &CmdResult) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(result)?))
}

fn bucket_style(bucket: CategoryBucket) -> Style {
    match bucket {
        CategoryBucket::Organic => Style::new().green(),
        CategoryBucket::Inorganic => Style::new().cyan(),
        CategoryBucket::Hazardous => Style::new().red().bold(),
        CategoryBucket::Other => Style::new().dim(),
    }
}

fn render_list(records: &[ScanRecord]) -> String {
    let now = Utc::now();
    let id_width = records.iter().map(|r| r.id.width()).max().unwrap_or(0);
    let mut out = String::new();
    for record in records {
        let label = pad_to_width(
            &truncate_to_width(&record.waste_label, LABEL_WIDTH),
            LABEL_WIDTH,
        );
        let category = pad_to_width(
            &truncate_to_width(&record.category, CATEGORY_WIDTH),
            CATEGORY_WIDTH,
        );
        out.push_str(&format!(
            "{}  {}  {}  {:>5.1}%  {}\n",
            Style::new()
                .yellow()
                .apply_to(format!("{:>width$}", record.id, width = id_width)),
            label,
            bucket_style(record.bucket()).apply_to(category),
            record.confidence_percent,
            Style::new()
                .dim()
                .italic()
                .apply_to(format_time_ago(record.scanned_at, now)),
        ));
    }
    out
}

fn render_detail(record: &ScanRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        Style::new().yellow().apply_to(&record.id),
        Style::new().bold().apply_to(&record.waste_label)
    ));
    out.push_str("--------------------------------\n");
    out.push_str(&format!(
        "Category:   {}\n",
        bucket_style(record.bucket()).apply_to(&record.category)
    ));
    out.push_str(&format!("Confidence: {:.1}%\n", record.confidence_percent));
    out.push_str(&format!(
        "Scanned:    {}\n",
        record.scanned_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("Image:      {}\n", record.image_reference));
    if !record.description.is_empty() {
        out.push_str(&format!("\n{}\n", record.description));
    }
    if !record.tips.is_empty() {
        out.push_str("\nTips:\n");
        for (i, tip) in record.tips.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {}\n",
                i + 1,
                tip.title,
                Style::new().dim().apply_to(&tip.color_hex)
            ));
        }
    }
    out
}

fn render_stats(stats: &ScanStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total scans: {}\n", stats.total));
    out.push_str(&format!(
        "Organic:     {}\n",
        bucket_style(CategoryBucket::Organic).apply_to(stats.organic_count)
    ));
    out.push_str(&format!(
        "Inorganic:   {}\n",
        bucket_style(CategoryBucket::Inorganic).apply_to(stats.inorganic_count)
    ));
    if stats.other_count() > 0 {
        out.push_str(&format!("Other:       {}\n", stats.other_count()));
    }
    if stats.total > 0 {
        out.push_str(&format!("Organic share: {:.0}%\n", stats.organic_share()));
    }
    out
}

fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => Style::new().dim(),
            MessageLevel::Success => Style::new().green(),
            MessageLevel::Warning => Style::new().yellow(),
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}
