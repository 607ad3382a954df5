use taskdb_core::{codec, Field, TaskTable};

/// Entry timestamp used for the n-th fixture row.
pub fn entry(n: usize) -> String {
    format!("2025-10-{:02}T{:02}:{:02}:00", 1 + n % 28, n % 24, (n * 7) % 60)
}

/// Builds a table with `titles.len()` rows, one title each.
pub fn table_with_titles(titles: &[&str]) -> TaskTable {
    let mut table = TaskTable::create_empty();
    for (n, title) in titles.iter().enumerate() {
        let row = table.add_row(entry(n));
        table
            .update_field(row, Field::Title, title)
            .expect("Failed to set title");
    }
    table
}

/// Serializes, parses and normalizes a table.
pub fn reload(table: &TaskTable) -> TaskTable {
    let bytes = table.serialize().expect("Failed to serialize table");
    let records = codec::parse_records(&bytes).expect("Failed to parse serialized table");
    TaskTable::normalize(records)
}
