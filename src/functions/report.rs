use serde::Serialize;

use super::FunctionEntry;

pub fn print_report(entries: &[FunctionEntry]) {
    if entries.is_empty() {
        println!("No functions found.");
        return;
    }

    let max_loc_len = entries
        .iter()
        .map(|e| format!("{}:{}", e.path.display(), e.start_line).len())
        .max()
        .unwrap_or(8)
        .max(8);
    let max_name_len = entries.iter().map(|e| e.name.len()).max().unwrap_or(8).max(8);

    let separator = "─".repeat(max_loc_len + max_name_len + 22);

    println!("Functions by Complexity");
    println!("{separator}");
    println!(
        " {:<lw$}  {:<nw$} {:>7} {:>10}",
        "Location",
        "Function",
        "Lines",
        "Complexity",
        lw = max_loc_len,
        nw = max_name_len
    );
    println!("{separator}");

    for e in entries {
        println!(
            " {:<lw$}  {:<nw$} {:>7} {:>10}",
            format!("{}:{}", e.path.display(), e.start_line),
            e.name,
            e.end_line - e.start_line + 1,
            e.complexity,
            lw = max_loc_len,
            nw = max_name_len
        );
    }

    println!("{separator}");
}

#[derive(Serialize)]
struct JsonEntry {
    path: String,
    name: String,
    start_line: usize,
    end_line: usize,
    complexity: usize,
}

pub fn print_json(entries: &[FunctionEntry]) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<JsonEntry> = entries
        .iter()
        .map(|e| JsonEntry {
            path: e.path.display().to_string(),
            name: e.name.clone(),
            start_line: e.start_line,
            end_line: e.end_line,
            complexity: e.complexity,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
