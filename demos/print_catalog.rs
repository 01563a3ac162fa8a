//! Prints both catalog tables: the minimal set as a ready-to-use picker
//! listing, then the full list grouped under each offset.
//!
//! Run with: `cargo run --example print_catalog`

use minizone::{entries_at_offset, full_list, minimal_list};

fn main() {
    println!("Minimal set ({} offsets):", minimal_list().len());
    for entry in minimal_list() {
        println!("  {:<34} {}", entry.tz_code, entry.label);
    }

    println!("\nFull list ({} suggestions):", full_list().len());
    for representative in minimal_list() {
        println!("{}:", representative.offset);
        for entry in entries_at_offset(representative.utc_offset()) {
            println!("  [{:<9}] {:<34} {}", entry.short_label, entry.tz_code, entry.label);
        }
    }
}
