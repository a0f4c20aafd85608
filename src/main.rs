//! Fixture Forge - randomized but plausible fixture data
//!
//! A small CLI that prints one sample per category so the generated output
//! can be eyeballed or piped into other tooling as JSON.

use anyhow::Result;
use chrono::Utc;
use fixture_forge::{
    hacker, internet, person,
    types::{Country, HttpHeaderKind, SampleConfig, SampleRecord},
    Entropy, FixtureForgeError,
};
use std::env;
use std::process;
use std::str::FromStr;
use tracing::Level;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let config = match parse_config(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Use --help for usage information");
            process::exit(1);
        }
    };

    run_fixture_forge(&config)
}

/// Main sampling workflow
fn run_fixture_forge(config: &SampleConfig) -> Result<()> {
    let entropy = match config.seed {
        Some(seed) => Entropy::seeded(seed),
        None => Entropy::new(),
    };

    let mut records = Vec::new();
    for _ in 0..config.count {
        records.extend(collect_samples(&entropy, config.locale)?);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        display_samples(&records);
    }

    Ok(())
}

/// Generate one record per category
fn collect_samples(entropy: &Entropy, locale: Country) -> Result<Vec<SampleRecord>> {
    let locale = Some(locale);

    let samples = [
        ("name", person::full_name(entropy, None, locale)?),
        ("username", internet::username(entropy, None, None, locale)?),
        ("email", internet::email(entropy, None, None, None)?),
        ("example-email", internet::example_email(entropy, None, None)?),
        ("anonymous-username", internet::anonymous_username(entropy, 12)?),
        ("password", internet::password(entropy, None)?),
        ("domain", internet::domain_name(entropy)?),
        ("url", internet::url(entropy, None, None)?),
        ("ipv4", internet::ipv4(entropy, None)),
        ("ipv6", internet::ipv6(entropy)),
        ("mac", internet::mac(entropy)),
        ("port", internet::port(entropy).to_string()),
        ("protocol", internet::protocol(entropy)?.to_string()),
        ("http-method", internet::http_method(entropy)?.to_string()),
        ("http-status", internet::http_status_code(entropy, None)?.to_string()),
        (
            "http-request-header",
            internet::http_header(entropy, HttpHeaderKind::Request)?.to_string(),
        ),
        ("http-media-type", internet::http_media_type(entropy)?.to_string()),
        ("emoji", internet::emoji(entropy, None)?.to_string()),
        ("hacker-phrase", hacker::phrase(entropy)?),
    ];

    tracing::debug!(count = samples.len(), "collected sample round");

    Ok(samples
        .into_iter()
        .map(|(category, value)| SampleRecord {
            category: category.to_string(),
            value,
            generated_at: Utc::now(),
        })
        .collect())
}

/// Pretty-print records grouped as generated
fn display_samples(records: &[SampleRecord]) {
    let width = records
        .iter()
        .map(|record| record.category.len())
        .max()
        .unwrap_or(0);

    for record in records {
        println!("{:>width$}  {}", record.category, record.value, width = width);
    }
}

/// Parse CLI flags into a sample configuration
fn parse_config(args: &[String]) -> Result<SampleConfig> {
    let mut config = SampleConfig::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => config.json = true,
            "--locale" => {
                let tag = iter
                    .next()
                    .ok_or_else(|| FixtureForgeError::validation("--locale requires a value"))?;
                config.locale = Country::from_str(tag)?;
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| FixtureForgeError::validation("--seed requires a value"))?;
                config.seed = Some(value.parse().map_err(|_| {
                    FixtureForgeError::validation(format!("invalid seed: {}", value))
                })?);
            }
            other => {
                config.count = other.parse().map_err(|_| {
                    FixtureForgeError::validation(format!("unrecognized argument: {}", other))
                })?;
            }
        }
    }

    Ok(config)
}

fn print_help() {
    println!("🔥 Fixture Forge - randomized but plausible fixture data");
    println!();
    println!("USAGE:");
    println!("    fixture-forge [COUNT] [OPTIONS]");
    println!();
    println!("ARGS:");
    println!("    COUNT                rounds of samples to generate (default: 1)");
    println!();
    println!("OPTIONS:");
    println!("    --locale <TAG>       name locale: england, france, germany,");
    println!("                         italy, romania, southafrica (default: england)");
    println!("    --seed <N>           seed the random source for reproducible output");
    println!("    --json               emit samples as a JSON array");
    println!("    -h, --help           show this help");
    println!();
    println!("EXAMPLES:");
    println!("    fixture-forge");
    println!("    fixture-forge 3 --locale romania");
    println!("    fixture-forge --seed 42 --json");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config(&[]).unwrap();
        assert_eq!(config.count, 1);
        assert_eq!(config.locale, Country::England);
        assert_eq!(config.seed, None);
        assert!(!config.json);
    }

    #[test]
    fn test_parse_config_full() {
        let args: Vec<String> = ["3", "--locale", "romania", "--seed", "42", "--json"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let config = parse_config(&args).unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.locale, Country::Romania);
        assert_eq!(config.seed, Some(42));
        assert!(config.json);
    }

    #[test]
    fn test_parse_config_rejects_unknown_locale() {
        let args: Vec<String> = ["--locale", "atlantis"].iter().map(|s| s.to_string()).collect();
        assert!(parse_config(&args).is_err());
    }

    #[test]
    fn test_collect_samples_covers_every_category() {
        let entropy = Entropy::seeded(7);
        let records = collect_samples(&entropy, Country::England).unwrap();

        assert_eq!(records.len(), 19);
        assert!(records.iter().all(|record| !record.value.is_empty()));
    }
}
