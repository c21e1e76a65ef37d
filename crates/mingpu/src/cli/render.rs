use colored::{ColoredString, Colorize};
use mingpuapp::commands::{CmdMessage, MessageLevel};
use mingpuapp::error::Result;
use mingpuapp::model::{CatalogEntry, Luck};
use mingpuapp::state::PageView;
use mingpuapp::stats::CatalogStats;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 10;
const PINYIN_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 18;
const BAR_WIDTH: usize = 40;
const BAR: &str = "█";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn luck_colored(luck: &Luck) -> ColoredString {
    match luck {
        Luck::Auspicious => luck.glyph().green(),
        Luck::Neutral => luck.glyph().yellow(),
        Luck::Inauspicious => luck.glyph().red(),
        Luck::Unrecognized(raw) => raw.as_str().normal(),
    }
}

pub(super) fn render_page(view: &PageView) -> String {
    if view.entries.is_empty() {
        return "No names match.\n".to_string();
    }

    let mut out = String::new();
    for entry in &view.entries {
        out.push_str(&render_row(entry));
        out.push('\n');
    }

    let footer = if view.has_more {
        format!(
            "Showing {} of {}; more available",
            view.entries.len(),
            view.total_count
        )
    } else {
        format!("Showing {} of {}", view.entries.len(), view.total_count)
    };
    out.push_str(&format!("\n{}\n", footer.dimmed()));
    out
}

fn render_row(entry: &CatalogEntry) -> String {
    let lucks: Vec<String> = entry
        .numerology
        .grids()
        .iter()
        .map(|(_, grid)| luck_colored(&grid.luck).to_string())
        .collect();
    let risk = if entry.has_risk() {
        " !".red().to_string()
    } else {
        String::new()
    };

    format!(
        "{:>4}. {} {} {}{} {:>3}  {:>2}画  {}{}",
        entry.id,
        pad_to_width(&entry.name, NAME_WIDTH).bold(),
        pad_to_width(&entry.pinyin, PINYIN_WIDTH).dimmed(),
        entry.elements.first.element.glyph(),
        entry.elements.second.element.glyph(),
        entry.compatibility.score,
        entry.total_strokes,
        lucks.join(" "),
        risk
    )
}

pub(super) fn render_entry(entry: &CatalogEntry) -> String {
    let mut out = String::new();
    let line = |label: &str, value: String| {
        format!("{}{}\n", pad_to_width(label, LABEL_WIDTH).dimmed(), value)
    };

    out.push_str(&format!(
        "{} {}  {}\n",
        entry.id.to_string().yellow(),
        entry.name.bold(),
        entry.pinyin.dimmed()
    ));
    out.push_str("--------------------------------\n");

    for slot in [&entry.elements.first, &entry.elements.second] {
        out.push_str(&line(
            "Character",
            format!(
                "{}  {}画  {}  {}",
                slot.character,
                slot.strokes,
                slot.element.glyph(),
                slot.radical
            ),
        ));
    }
    out.push_str(&line("Strokes", entry.total_strokes.to_string()));

    let roots: Vec<&str> = entry
        .compatibility
        .favorable_roots
        .iter()
        .map(String::as_str)
        .collect();
    out.push_str(&line(
        "Zodiac",
        format!(
            "{}  score {}  roots {}",
            entry.compatibility.zodiac,
            entry.compatibility.score,
            roots.join(" ")
        ),
    ));

    for (name, grid) in entry.numerology.grids() {
        out.push_str(&line(
            name,
            format!(
                "{:>3}  {}  {}",
                grid.value,
                grid.element.glyph(),
                luck_colored(&grid.luck)
            ),
        ));
    }
    out.push_str(&line("Five elems", entry.numerology.five_elements.clone()));

    out.push_str(&line(
        "Hexagram",
        format!("{}  {}", entry.hexagram.name.bold(), entry.hexagram.meaning),
    ));
    if !entry.hexagram.derivation.is_empty() {
        out.push_str(&line("", entry.hexagram.derivation.dimmed().to_string()));
    }
    out.push_str(&line("Symbolism", entry.meaning.symbolism.clone()));
    out.push_str(&line("Meaning", entry.meaning.interpretation.clone()));

    for risk in &entry.risks {
        out.push_str(&line("Risk", risk.red().to_string()));
    }
    if let Some(notes) = &entry.notes {
        out.push_str(&line("Notes", notes.clone()));
    }
    out
}

pub(super) fn render_comparison(entries: &[CatalogEntry]) -> String {
    type Cell = fn(&CatalogEntry) -> String;
    let rows: [(&str, Cell); 8] = [
        ("Name", |e| e.name.clone()),
        ("Pinyin", |e| e.pinyin.clone()),
        ("Score", |e| e.compatibility.score.to_string()),
        ("Strokes", |e| e.total_strokes.to_string()),
        ("Elements", |e| {
            format!(
                "{}{}",
                e.elements.first.element.glyph(),
                e.elements.second.element.glyph()
            )
        }),
        ("Total luck", |e| e.numerology.total.luck.glyph().to_string()),
        ("Auspicious", |e| format!("{}/4", e.auspicious_grids())),
        ("Hexagram", |e| e.hexagram.name.clone()),
    ];

    let mut out = String::new();
    for (label, cell) in rows {
        out.push_str(&pad_to_width(label, LABEL_WIDTH).dimmed().to_string());
        for entry in entries {
            out.push_str(&pad_to_width(&cell(entry), COLUMN_WIDTH));
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}

pub(super) fn render_stats(stats: &CatalogStats) -> String {
    let mut out = format!("{} names\n", stats.entries);

    let elements: Vec<(String, usize)> = stats
        .elements
        .iter()
        .map(|(element, count)| (format!("{} {}", element.glyph(), element), *count))
        .collect();
    out.push_str(&render_chart("Elements", &elements));

    let luck: Vec<(String, usize)> = Luck::RECOGNIZED
        .iter()
        .map(|luck| {
            (
                format!("{} {}", luck.glyph(), luck.as_str()),
                stats.luck.get(luck),
            )
        })
        .collect();
    out.push_str(&render_chart("Total grid luck", &luck));

    let strokes: Vec<(String, usize)> = stats
        .strokes
        .iter()
        .map(|bucket| (format!("{}画", bucket.label), bucket.count))
        .collect();
    out.push_str(&render_chart("Strokes", &strokes));
    out
}

fn render_chart(title: &str, rows: &[(String, usize)]) -> String {
    let mut out = format!("\n{}\n", title.bold());
    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);

    for (label, count) in rows {
        let len = if max == 0 {
            0
        } else {
            (count * BAR_WIDTH).div_ceil(max)
        };
        out.push_str(&format!(
            "  {}{} {}\n",
            pad_to_width(label, LABEL_WIDTH + 2),
            BAR.repeat(len).cyan(),
            count
        ));
    }
    out
}

/// Truncate or right-pad `s` to exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let text = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
