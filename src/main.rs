use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use ecoscan::data::footprints::{self, Category};
use ecoscan::data::levels::LEVELS;
use ecoscan::{Classification, EcoScanService, SqliteStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("EcoScan progression engine (debug console)");
    let db_path = parse_db_path(env::args().collect());

    let store = match SqliteStore::open(&db_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Failed to open progress DB at {}: {}", db_path.display(), err);
            std::process::exit(1);
        }
    };
    let mut service = EcoScanService::new(store);

    println!("Progress DB: {}", db_path.display());
    println!("Commands: scan <category> <item> | raw <category> <grams> | status | badges | levels | search <term> | reset | quit");

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match command {
            "scan" => run_catalog_scan(&mut service, &rest),
            "raw" => run_raw_scan(&mut service, &rest),
            "status" => print_status(&service),
            "badges" => print_badges(&service),
            "levels" => print_levels(),
            "search" => run_search(&rest),
            "reset" => match service.reset() {
                Ok(()) => println!("Progress cleared."),
                Err(err) => eprintln!("Reset failed: {}", err),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command: {}", other),
        }
    }
}

fn parse_db_path(args: Vec<String>) -> PathBuf {
    let mut path = PathBuf::from("./ecoscan_progress.db");
    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            if let Some(value) = iter.next() {
                path = PathBuf::from(value);
            }
        }
    }
    path
}

fn run_catalog_scan(service: &mut EcoScanService<SqliteStore>, args: &[&str]) {
    let (category_arg, item_args) = match args.split_first() {
        Some(split) => split,
        None => {
            println!("Usage: scan <category> <item>   e.g. scan food apple");
            return;
        }
    };
    let Some(category) = Category::from_label(category_arg) else {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        println!("Unknown category '{}'. Known: {}", category_arg, known.join(", "));
        return;
    };
    let item = item_args.join(" ");
    let Some(entry) = footprints::lookup(category, &item) else {
        println!("No footprint entry for '{}' in {}.", item, category.label());
        return;
    };

    println!(
        "{}: {} g CO2e {} ({} impact)",
        entry.key,
        entry.co2_grams,
        entry.unit,
        entry.impact.as_str()
    );
    println!("Tip: {}", entry.eco_tip);

    let classification = Classification {
        category: category.label().to_string(),
        co2_grams: entry.co2_grams,
    };
    apply_scan(service, &classification);
}

fn run_raw_scan(service: &mut EcoScanService<SqliteStore>, args: &[&str]) {
    if args.len() < 2 {
        println!("Usage: raw <category-label> <grams>   e.g. raw transportation 250");
        return;
    }
    let grams: f64 = match args[args.len() - 1].parse() {
        Ok(value) => value,
        Err(_) => {
            println!("Grams must be a number.");
            return;
        }
    };
    let classification = Classification {
        category: args[..args.len() - 1].join(" "),
        co2_grams: grams,
    };
    apply_scan(service, &classification);
}

fn apply_scan(service: &mut EcoScanService<SqliteStore>, classification: &Classification) {
    match service.accept_scan(classification) {
        Ok(outcome) => {
            println!("+{} EcoPoints", outcome.points_earned);
            for badge in &outcome.new_badges {
                println!(
                    "Badge unlocked: {} [{}] - {}",
                    badge.name,
                    badge.rarity.as_str(),
                    badge.description
                );
            }
            if let Some(level) = outcome.new_level {
                println!("Level up! You are now: {}", level);
            }
        }
        Err(err) => eprintln!("Scan not recorded: {}", err),
    }
}

fn print_status(service: &EcoScanService<SqliteStore>) {
    let progress = service.progress();
    let level = progress.level();
    println!(
        "Level {} ({}) | {} EcoPoints | {}% to next",
        level.name,
        level.description,
        progress.eco_points,
        service.progress_to_next_level()
    );
    println!(
        "Scans: {} | Streak: {} day(s) | CO2 tracked: {:.0} g | Weekly goal: {}",
        progress.total_scans, progress.daily_streak, progress.co2_tracked, progress.weekly_goal
    );
    for achievement in &progress.achievements {
        let marker = if achievement.completed { "done" } else { "open" };
        println!(
            "  [{}] {}: {}/{} (reward {})",
            marker, achievement.name, achievement.progress, achievement.target, achievement.reward
        );
    }
}

fn print_badges(service: &EcoScanService<SqliteStore>) {
    let progress = service.progress();
    if progress.badges.is_empty() {
        println!("No badges yet.");
        return;
    }
    for badge in &progress.badges {
        println!(
            "{} [{}] unlocked {} - {}",
            badge.name,
            badge.rarity.as_str(),
            badge.unlocked_at.format("%Y-%m-%d"),
            badge.description
        );
    }
}

fn print_levels() {
    for level in &LEVELS {
        match level.max_points {
            Some(max) => println!(
                "{:>5}-{:<5} {} - {}",
                level.min_points, max, level.name, level.description
            ),
            None => println!(
                "{:>5}+      {} - {}",
                level.min_points, level.name, level.description
            ),
        }
    }
}

fn run_search(args: &[&str]) {
    let term = args.join(" ");
    let hits = footprints::search(&term);
    if hits.is_empty() {
        println!("No matches.");
        return;
    }
    for entry in hits {
        println!(
            "{} ({}): {} g CO2e {}",
            entry.key,
            entry.category.label(),
            entry.co2_grams,
            entry.unit
        );
    }
}
