use comfy_table::{ContentArrangement, Table};
use necros_core::Phase;
use necros_core::content::{files_visible_in, find_document};

pub fn run(phase: Option<&str>) -> Result<(), String> {
    let phase = phase.map(parse_phase).transpose()?;
    // Glitch is the only phase where every file is on disk.
    let files = files_visible_in(phase.unwrap_or(Phase::Glitch));
    let always = files_visible_in(Phase::Boot);

    if files.is_empty() {
        println!("  No documents found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Directory", "Kind", "Title", "Appears", "Voice"]);

    let mut count = 0;
    for &(dir, name) in &files {
        let Some(doc) = find_document(name) else {
            continue;
        };
        let appears = if always.contains(&(dir, name)) {
            "always"
        } else {
            "glitch"
        };
        table.add_row(vec![
            doc.name,
            dir,
            doc.kind.label(),
            doc.title,
            appears,
            doc.audio.unwrap_or("-"),
        ]);
        count += 1;
    }

    println!("{table}");
    println!();
    println!("  {count} documents");

    Ok(())
}

fn parse_phase(name: &str) -> Result<Phase, String> {
    Phase::ALL
        .into_iter()
        .find(|p| p.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("unknown phase '{name}'"))
}
