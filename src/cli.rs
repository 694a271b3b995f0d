// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Schedwiz v{} - Turn plain-English requests into calendar events",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [--root <path>] [--now <rfc3339>] [--json] [--verbose] <request...>",
        binary_name
    );
    println!("    echo <request> | {} [OPTIONS]", binary_name);
    println!("    {} config", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    -n, --now <rfc3339>   Resolve relative dates against this instant.");
    println!("    -j, --json            Print the event as JSON.");
    println!("    -v, --verbose         Log parser decisions to stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("CONFIG COMMAND:");
    println!(
        "    {} config                 Show the config path and current values",
        binary_name
    );
    println!();
    println!("UNDERSTOOD PHRASES:");
    println!("    Dates             today, tomorrow, friday, next monday, this evening,");
    println!("                      march 3rd, 3rd of march, 2026-03-03, 3/14");
    println!("    Times             3pm, 9:30, at 5, noon, midnight, morning");
    println!("    Ranges            2-3pm, from 9 to 11am, between 1 and 2pm");
    println!("    Relative          in 2 hours, in 3 days at 10am, 2 weeks from now");
    println!("    Participants      with Jack, and Sarah Lee, for Mom");
    println!("    Location          at Bistro Garden, in room 4, on the terrace");
    println!();
    println!("EXAMPLES:");
    println!("    {} Schedule a call with Jack on Thursday at 3pm", binary_name);
    println!("    {} Lunch with Sarah at Bistro Garden tomorrow at noon", binary_name);
    println!("    {} --json Team meeting next monday from 2-3pm", binary_name);
    println!();
    println!("MORE INFO:");
    println!("    License:    GPL-3.0");
}
