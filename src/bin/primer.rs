//! Command-line interface for primer
//! This binary runs the Rust-fundamentals walkthrough and prints its output.
//!
//! Usage:
//!   primer                                  - Run the full walkthrough
//!   primer --section `<name>`                 - Run a single section
//!   primer --format `<text|json|yaml>`        - Select the output format
//!   primer --list-sections                  - List all sections
//!   primer --list-formats                   - List available output formats

use clap::{Arg, ArgAction, Command};
use primer::walkthrough::{RendererRegistry, Walkthrough};

fn main() {
    let matches = Command::new("primer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("An annotated, runnable walkthrough of Rust fundamentals")
        .arg(
            Arg::new("section")
                .long("section")
                .short('s')
                .help("Run a single section by name (e.g., 'containers', 'generators')"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'json', 'yaml')")
                .default_value("text"),
        )
        .arg(
            Arg::new("list-sections")
                .long("list-sections")
                .help("List available walkthrough sections")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-sections") {
        handle_list_sections_command();
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let section = matches.get_one::<String>("section");
    let format = matches.get_one::<String>("format").unwrap();
    handle_run_command(section.map(String::as_str), format);
}

/// Handle a walkthrough run (full, or one section)
fn handle_run_command(section: Option<&str>, format: &str) {
    let walkthrough = Walkthrough::new();

    let transcript = match section {
        Some(name) => walkthrough.run_section(name),
        None => walkthrough.run_all(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Execution error: {}", e);
        eprintln!("\nAvailable sections:");
        for section in walkthrough.registry().iter() {
            eprintln!("  {} - {}", section.name(), section.title());
        }
        std::process::exit(1);
    });

    let renderers = RendererRegistry::with_defaults();
    let output = renderers.render(&transcript, format).unwrap_or_else(|e| {
        eprintln!("Render error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in renderers.list_renderers() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-sections command
fn handle_list_sections_command() {
    let walkthrough = Walkthrough::new();
    println!("Available walkthrough sections:\n");

    for section in walkthrough.registry().iter() {
        println!("  {} - {}", section.name(), section.title());
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let renderers = RendererRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in renderers.list_renderers() {
        let description = renderers.get(&name).map(|r| r.description()).unwrap_or("");
        println!("  {} - {}", name, description);
    }
}
