// Binary entry point: parse one request and print the resulting event.
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};
use schedwiz::color_utils::random_event_color;
use schedwiz::config::Config;
use schedwiz::context::{AppContext, StandardContext};
use schedwiz::{Event, ScheduleParser};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        schedwiz::cli::print_help("schedwiz");
        return Ok(());
    }

    let mut override_root: Option<PathBuf> = None;
    let mut now: Option<DateTime<FixedOffset>> = None;
    let mut json = false;
    let mut verbose = false;
    let mut words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 < args.len() {
                    override_root = Some(args[i + 1].clone().into());
                    i += 1;
                }
            }
            "--now" | "-n" => {
                if i + 1 < args.len() {
                    let value = &args[i + 1];
                    now = Some(DateTime::parse_from_rfc3339(value).map_err(|e| {
                        anyhow::anyhow!("Invalid --now value '{}': {}", value, e)
                    })?);
                    i += 1;
                }
            }
            "--json" | "-j" => json = true,
            "--verbose" | "-v" => verbose = true,
            arg if !arg.starts_with('-') => words.push(arg.to_string()),
            _ => { /* Ignore unknown flags */ }
        }
        i += 1;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let ctx = StandardContext::new(override_root);

    if words.first().map(String::as_str) == Some("config") && words.len() == 1 {
        return show_config(&ctx);
    }

    let config = Config::load_or_default(&ctx)?;

    let text = if words.is_empty() {
        read_stdin()?
    } else {
        words.join(" ")
    };

    let reference = now.unwrap_or_else(|| Local::now().fixed_offset());
    let parser = ScheduleParser::new(config.parser_options());

    let schedule = match parser.parse(&text, reference) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("Parse failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
    };

    let event = Event::from_schedule(schedule, random_event_color(&config.palette()));

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        print_event(&event);
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

fn show_config(ctx: &dyn AppContext) -> Result<()> {
    let config = match Config::load(ctx) {
        Ok(config) => config,
        Err(e) if Config::is_missing_config_error(&e) => {
            let config = Config::default();
            config.save(ctx)?;
            log::info!("Wrote default config");
            config
        }
        Err(e) => return Err(e),
    };
    println!("Config file: {}", Config::get_path_string(ctx)?);
    println!();
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn print_event(event: &Event) {
    println!("{}", event.title);
    let end_fmt = if event.end_time.date_naive() == event.start_date() {
        "%H:%M"
    } else {
        "%a %b %-d %Y, %H:%M"
    };
    println!(
        "  When:  {} - {}",
        event.start_time.format("%a %b %-d %Y, %H:%M"),
        event.end_time.format(end_fmt)
    );
    if !event.participants.is_empty() {
        println!("  With:  {}", event.participants.join(", "));
    }
    if let Some(location) = &event.location {
        println!("  Where: {}", location);
    }
    println!("  Color: {}", event.color);
}
