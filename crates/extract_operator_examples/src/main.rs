// crates/extract_operator_examples/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use extract_operator_examples::audit::{audit_operators, discover_operators};
use extract_operator_examples::config::{AuditConfig, DEFAULT_URL_BASE};

fn main() -> Result<()> {
    let matches = Command::new("extract_operator_examples")
        .version("0.1.0")
        .about("Extracts example code blocks from operator reference pages into fixture folders")
        .arg(
            Arg::new("docs_root")
                .long("docs-root")
                .num_args(1)
                .required(true)
                .help("Directory containing one <operator>.txt reference page per operator"),
        )
        .arg(
            Arg::new("resource_root")
                .long("resource-root")
                .num_args(1)
                .required(true)
                .help("Directory the example fixtures are written under"),
        )
        .arg(
            Arg::new("url_base")
                .long("url-base")
                .num_args(1)
                .default_value(DEFAULT_URL_BASE)
                .help("Base of the reference-manual URL operator pages live at"),
        )
        .arg(
            Arg::new("operator")
                .long("operator")
                .action(clap::ArgAction::Append)
                .help("Restrict the run to the named operator(s)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = AuditConfig {
        docs_root: PathBuf::from(matches.get_one::<String>("docs_root").unwrap()),
        resource_root: PathBuf::from(matches.get_one::<String>("resource_root").unwrap()),
        url_base: matches.get_one::<String>("url_base").unwrap().clone(),
    };

    let names: Vec<String> = matches
        .get_many::<String>("operator")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let names = if names.is_empty() {
        discover_operators(&config.docs_root)?
    } else {
        names
    };

    println!("--------------------------------------------------");
    println!("Docs root: {}", config.docs_root.display());
    println!("Resource root: {}", config.resource_root.display());
    println!("Auditing {} operator page(s)", names.len());
    println!("--------------------------------------------------");

    let report = audit_operators(&config, &names)?;

    for operator in &report.operators {
        let emitted = operator
            .examples
            .iter()
            .filter(|example| !example.is_empty())
            .count();
        println!("{}: {} example folder(s)", operator, emitted);
    }
    println!("--------------------------------------------------");

    let newly_created = report
        .operators
        .iter()
        .filter(|operator| !operator.created && !operator.examples.iter().all(|e| e.is_empty()))
        .count();

    println!("Operators processed: {}", report.operators.len());
    println!("Example files written: {}", report.written.len());
    println!("Resource folders newly created: {}", newly_created);
    if !report.without_examples.is_empty() {
        println!("No examples found for: {}", report.without_examples.join(", "));
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} page(s):", report.skipped.len());
        for (name, reason) in &report.skipped {
            println!("  - {}: {}", name, reason);
        }
    }
    println!("--------------------------------------------------");

    Ok(())
}
