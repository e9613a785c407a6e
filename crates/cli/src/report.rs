//! Day-by-day text report.

use std::io::Write;

use gildedrose_inventory::{Item, UpdateEngine};

/// Render one day's block: header, column names, one line per item, blank line.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Print day 0, then advance and print once per day until `days` is reached.
pub fn run<W: Write>(items: Vec<Item>, days: u32, out: &mut W) -> std::io::Result<UpdateEngine> {
    let mut engine = UpdateEngine::new(items);
    out.write_all(render_day(engine.day(), engine.items()).as_bytes())?;
    for _ in 0..days {
        engine.advance();
        out.write_all(render_day(engine.day(), engine.items()).as_bytes())?;
    }
    Ok(engine)
}
