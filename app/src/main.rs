//! FILENAME: app/src/main.rs
// PURPOSE: Headless entry point: fetch the equipment list, print the
// aggregate statistics, and optionally export the current view.
//
// Usage: console [global|categorie|service] [output-dir]

use std::path::PathBuf;

use console_lib::commands;
use console_lib::{create_app_state, ApiClient, DisplayMode, Notifier};

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

fn parse_mode(arg: &str) -> Option<DisplayMode> {
    match arg {
        "global" => Some(DisplayMode::Global),
        "categorie" => Some(DisplayMode::Category),
        "service" => Some(DisplayMode::Service),
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = console_lib::init_log_file(&console_lib::logging::default_log_path()) {
        eprintln!("{}", e);
    }

    let base_url = std::env::var("MATERIELS_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string());

    let mut args = std::env::args().skip(1);
    let mode = match args.next() {
        Some(arg) => match parse_mode(&arg) {
            Some(mode) => Some(mode),
            None => {
                eprintln!("Mode inconnu: {} (global|categorie|service)", arg);
                std::process::exit(2);
            }
        },
        None => None,
    };
    let output_dir: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| ".".into());

    let state = create_app_state();
    let api = match ApiClient::new(&base_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::refresh_materiels(&state, &api).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let stats = match commands::stats_view(&state) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Matériels enregistrés: {}", stats.total_records);
    println!("Quantité disponible: {}", stats.total_quantity);
    for (title, breakdown) in [
        ("Par catégorie", &stats.by_category),
        ("Par service", &stats.by_service),
        ("Par état", &stats.by_state),
    ] {
        println!("{}:", title);
        for entry in breakdown {
            println!("  {}: {}", entry.label, entry.quantity);
        }
    }

    if let Some(mode) = mode {
        commands::set_display_mode(&state, mode);
        match commands::export_current_view(&state, &output_dir, &ConsoleNotifier) {
            Ok(path) => println!("Export écrit: {}", path.display()),
            Err(_) => std::process::exit(1),
        }
    }
}
