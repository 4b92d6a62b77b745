//! Subcommand implementations for the fixstr CLI.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fixstr_core::config::{
    global_config_path, resolve_config, ConfigSource, ReduceConfig, LOCAL_CONFIG,
};
use fixstr_core::verify::{self, VerifyResult};
use fixstr_core::{first_bad_pair, Strategy};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Reduce
// ---------------------------------------------------------------------------

/// One reduced input, as printed by `--json`.
#[derive(Debug, Serialize)]
struct Report {
    input: String,
    output: String,
    removed_pairs: usize,
}

pub fn cmd_reduce(
    text: &[String],
    strategy: Option<Strategy>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let (mut config, source) = resolve_config(config_path)?;
    log::debug!("using config from {source}");
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }

    let inputs = if text.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        split_inputs(&buf, config.per_line)
    } else {
        text.to_vec()
    };

    for report in reduce_inputs(&config, inputs) {
        println!("{}", render(&report, json)?);
    }
    Ok(())
}

/// Split stdin into independent inputs.
fn split_inputs(buf: &str, per_line: bool) -> Vec<String> {
    if per_line {
        buf.lines().map(String::from).collect()
    } else {
        let whole = buf
            .strip_suffix("\r\n")
            .or_else(|| buf.strip_suffix('\n'))
            .unwrap_or(buf);
        vec![whole.to_string()]
    }
}

fn reduce_inputs(config: &ReduceConfig, inputs: Vec<String>) -> Vec<Report> {
    inputs
        .into_iter()
        .map(|input| {
            let reduction = config.reduce(&input);
            Report {
                input,
                output: reduction.output,
                removed_pairs: reduction.removed_pairs,
            }
        })
        .collect()
}

fn render(report: &Report, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(report).context("failed to serialize report")
    } else {
        Ok(report.output.clone())
    }
}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

pub fn cmd_check(text: &str) -> Result<()> {
    match first_bad_pair(text) {
        None => {
            println!("reduced");
            Ok(())
        }
        Some(idx) => {
            let pair: String = text.chars().skip(idx).take(2).collect();
            println!("bad pair {pair:?} at index {idx}");
            std::process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Verify
// ---------------------------------------------------------------------------

pub fn cmd_verify(extra: &[PathBuf]) -> Result<()> {
    let mut total = 0;
    let mut passed = 0;

    // 1. Embedded acceptance cases (compiled into the binary)
    let embedded = verify::verify_embedded()?;
    report_results(&embedded, &mut total, &mut passed);

    // 2. Case files given on the command line
    for path in extra {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read case file {}", path.display()))?;
        let cases = verify::parse_cases(&contents)
            .with_context(|| format!("in case file {}", path.display()))?;
        println!("{}:", path.display());
        report_results(&verify::verify_cases(&cases), &mut total, &mut passed);
    }

    println!("\n{passed}/{total} tests passed");
    if passed < total {
        std::process::exit(1);
    }
    Ok(())
}

fn report_results(result: &VerifyResult, total: &mut usize, passed: &mut usize) {
    for tr in &result.results {
        *total += 1;
        if tr.passed {
            *passed += 1;
            println!("  PASS  {}", tr.name);
        } else {
            println!("  FAIL  {}", tr.name);
            println!("    - {:?}", tr.expected);
            println!("    + {:?}", tr.actual);
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let (config, source) = resolve_config(config_path)?;
    let text = toml::to_string(&config).context("failed to serialize config")?;
    println!("# source: {source}");
    if source == ConfigSource::Default {
        match global_config_path() {
            Some(global) => println!(
                "# create {LOCAL_CONFIG} or {} to override",
                global.display()
            ),
            None => println!("# create {LOCAL_CONFIG} to override"),
        }
    }
    print!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_inputs_per_line() {
        let inputs = split_inputs("aA\nefFE\r\nxyz\n", true);
        assert_eq!(inputs, vec!["aA", "efFE", "xyz"]);
    }

    #[test]
    fn split_inputs_whole() {
        assert_eq!(split_inputs("aA\nb\n", false), vec!["aA\nb"]);
        assert_eq!(split_inputs("", false), vec![""]);
    }

    #[test]
    fn split_inputs_empty_stdin_per_line() {
        assert!(split_inputs("", true).is_empty());
    }

    #[test]
    fn reduce_inputs_applies_config() {
        let config = ReduceConfig {
            strategy: Strategy::Rescan,
            trim: true,
            ..Default::default()
        };
        let reports = reduce_inputs(&config, vec!["  efFEFiiIxyeEYeZdDzd ".to_string()]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].output, "Fixed");
        assert_eq!(reports[0].removed_pairs, 7);
        assert_eq!(reports[0].input, "  efFEFiiIxyeEYeZdDzd ");
    }

    #[test]
    fn render_plain_and_json() {
        let report = Report {
            input: "xaA".to_string(),
            output: "x".to_string(),
            removed_pairs: 1,
        };
        assert_eq!(render(&report, false).unwrap(), "x");
        assert_eq!(
            render(&report, true).unwrap(),
            r#"{"input":"xaA","output":"x","removed_pairs":1}"#
        );
    }
}
