//! Resolves command-line arguments against the catalog: an offset such as
//! `+05:30` lists every suggestion at that offset, anything else is treated
//! as a tz code or name fragment.
//!
//! Run with: `cargo run --example offset_lookup -- +05:30 Europe/Berlin Eastern`

use minizone::{UtcOffset, entries_at_offset, find_by_name, get_by_tz_code};

fn main() {
    let queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        eprintln!("usage: offset_lookup <+HH:MM | tz code | name fragment>...");
        return;
    }

    for query in &queries {
        if let Ok(offset) = query.parse::<UtcOffset>() {
            println!("{} ->", offset);
            for entry in entries_at_offset(offset) {
                println!("  {:<34} {}", entry.tz_code, entry.label);
            }
            continue;
        }
        if let Some(entry) = get_by_tz_code(query) {
            println!("{} -> {}", query, entry.label);
            continue;
        }
        let matches = find_by_name(query);
        if matches.is_empty() {
            println!("{} -> no match", query);
        } else {
            println!("{} ->", query);
            for entry in matches {
                println!("  {:<34} {}", entry.tz_code, entry.label);
            }
        }
    }
}
