use crate::consent_cache::ConsentCache;
use crate::exceptions::ContribError;
use crate::settings::Settings;
use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, Color, Table};

fn yes_no_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").add_attribute(Attribute::Dim)
    }
}

pub fn run(settings: &Settings, json_output: bool) -> Result<(), ContribError> {
    let cache = ConsentCache::read(&settings.cache_path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&cache)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_width(crate::console::get_terminal_width() as u16);
    table.set_header(vec![
        Cell::new("Prompt").add_attribute(Attribute::Bold),
        Cell::new("Shown").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("contribution announcement"),
        yes_no_cell(cache.displayed_contribution_message()),
    ]);
    table.add_row(vec![
        Cell::new("contribute past conversations"),
        yes_no_cell(cache.asked_to_contribute_past()),
    ]);
    table.add_row(vec![
        Cell::new("contribute future conversations"),
        yes_no_cell(cache.asked_to_contribute_future()),
    ]);

    println!("{table}");
    println!("Cache file: {}", settings.cache_path.display());
    Ok(())
}
