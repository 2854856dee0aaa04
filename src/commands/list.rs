use crate::exceptions::ContribError;
use crate::history::{conversation_files, load_conversation};
use crate::settings::Settings;
use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::Serialize;

#[derive(Serialize)]
struct ConversationSummary {
    file: String,
    messages: usize,
}

pub fn run(settings: &Settings, json_output: bool) -> Result<(), ContribError> {
    let files = conversation_files(&settings.history_path)?;
    let mut summaries = Vec::with_capacity(files.len());
    for path in &files {
        let record = load_conversation(path)?;
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        summaries.push(ConversationSummary {
            file,
            messages: record.len(),
        });
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!(
            "No conversations found in {}",
            settings.history_path.display()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_width(crate::console::get_terminal_width() as u16);
    table.set_header(vec![
        Cell::new("Messages").add_attribute(Attribute::Bold),
        Cell::new("Conversation").add_attribute(Attribute::Bold),
    ]);
    for summary in &summaries {
        table.add_row(vec![
            Cell::new(summary.messages).set_alignment(CellAlignment::Right),
            Cell::new(&summary.file),
        ]);
    }
    println!("{table}");
    println!(
        "{} conversation(s) in {}",
        summaries.len(),
        settings.history_path.display()
    );
    Ok(())
}
