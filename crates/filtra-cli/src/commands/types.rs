//! `types` command: list every filter type and which parameters it
//! responds to.

use filtra_core::FilterType;

pub fn run() {
    println!("Available filter types:");
    println!();
    println!(
        "  {:<20} {:<6} {:<4} {:<5} Description",
        "Name", "Short", "Q", "Gain"
    );
    println!("  {:-<20} {:-<6} {:-<4} {:-<5} {:-<40}", "", "", "", "", "");

    for t in FilterType::ALL {
        println!(
            "  {:<20} {:<6} {:<4} {:<5} {}",
            t.long_name(),
            t.short_name(),
            yes_no(t.uses_q()),
            yes_no(t.uses_gain()),
            t.description(),
        );
    }

    println!();
    println!("Names are case-insensitive; short names and spaced or hyphenated");
    println!("forms (e.g. \"one-pole lowpass\") are accepted.");
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}
