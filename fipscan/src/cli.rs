// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{Config, load_config, load_config_file};
use crate::core::lab::{abnormal_results, analyze_lab_data};
use crate::core::pattern::analyze_parameter_patterns;
use crate::core::ratio::compute;
use crate::core::report::read_lab_report;
use crate::core::risk::assess_fip_risk;
use crate::messages::{self, Heading, Language, heading};
use crate::models::{Gammopathy, LabData, RivaltaStatus};
use crate::records::source_from;
use crate::utils::collect_report_files;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output language, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub lang: Option<Language>,

    /// Config file to use instead of searching for .fipscan.toml
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the albumin/globulin ratio
    Ratio {
        #[arg(allow_hyphen_values = true)]
        albumin: String,
        #[arg(allow_hyphen_values = true)]
        globulin: String,
    },

    /// List stored cats and their A/G ratios
    Cats {
        /// YAML file with records (defaults to the configured one, then the sample list)
        #[arg(long)]
        records: Option<PathBuf>,
    },

    /// Show the configured contact card
    Contact,

    /// Print the data extracted from a lab report
    Extract { file: PathBuf },

    /// Comment on lab results and match them against FIP profiles
    Analyze {
        /// Report file, or a directory to search
        path: PathBuf,

        /// File name pattern used when `path` is a directory (e.g., "*.csv")
        #[arg(long)]
        glob: Option<String>,
    },

    /// Estimate FIP risk from protein electrophoresis
    Risk {
        /// Report file, or a directory to search
        path: PathBuf,

        /// Rivalta test result (pozytywna, negatywna, nie wykonano)
        #[arg(long)]
        rivalta: Option<RivaltaStatus>,

        /// Gammopathy description (e.g., "polyclonal")
        #[arg(long)]
        gammopathy: Option<Gammopathy>,

        /// File name pattern used when `path` is a directory
        #[arg(long)]
        glob: Option<String>,
    },
}

/// Runs one subcommand, printing its output to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * A report or record file cannot be read
/// * The report glob is invalid
pub fn run(args: Args) -> Result<()> {
    // `ratio` falls back to defaults when the config cannot be loaded.
    let config = match (&args.command, args.lang) {
        (Command::Ratio { .. }, Some(_)) => Config::default(),
        (Command::Ratio { .. }, None) => {
            read_config(args.config.as_deref()).unwrap_or_else(|err| {
                warn!("ignoring config: {err:#}");
                Config::default()
            })
        }
        _ => read_config(args.config.as_deref())?,
    };
    let lang = args.lang.unwrap_or(config.language);

    match args.command {
        Command::Ratio { albumin, globulin } => {
            let result = compute(&albumin, &globulin);
            info!(?result, "ratio");
            println!("{}", messages::ratio(&result, lang));
        }
        Command::Cats { records } => {
            let source = source_from(records.or(config.records));
            let records: Vec<String> = source.records()?.iter().map(ToString::to_string).collect();
            let mut lines = Vec::new();
            section(&mut lines, Heading::Records, &records, lang);
            print_lines(&lines);
        }
        Command::Contact => match &config.contact {
            Some(contact) => println!("{contact}"),
            None => println!("{}", messages::no_contact(lang)),
        },
        Command::Extract { file } => {
            let data = read_lab_report(&file)?;
            print_lines(&render_lab_data(&data, lang));
        }
        Command::Analyze { path, glob } => {
            for_each_report(&path, glob.as_deref(), &config, lang, |data| {
                render_analysis(data, lang)
            })?;
        }
        Command::Risk {
            path,
            rivalta,
            gammopathy,
            glob,
        } => {
            let rivalta = rivalta.unwrap_or(config.rivalta);
            let gammopathy = gammopathy.unwrap_or_default();
            for_each_report(&path, glob.as_deref(), &config, lang, |data| {
                render_risk(data, rivalta, gammopathy, lang)
            })?;
        }
    }

    Ok(())
}

fn read_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            load_config(&cwd)
        }
    }
}

fn for_each_report<F>(
    path: &Path,
    glob: Option<&str>,
    config: &Config,
    lang: Language,
    render: F,
) -> Result<()>
where
    F: Fn(&LabData) -> Vec<String>,
{
    let files = collect_report_files(path, glob.unwrap_or(&config.report_glob))?;
    if files.is_empty() {
        println!("{}", messages::no_reports(lang));
        return Ok(());
    }

    let show_names = files.len() > 1 || path.is_dir();
    for file in &files {
        let data = read_lab_report(file)?;
        if data.is_empty() {
            warn!(file = %file.display(), "no lab data recognised");
        }
        info!(file = %file.display(), parameters = data.parameters.len(), "report");
        if show_names {
            println!("== {} ==", file.display());
        }
        print_lines(&render(&data));
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn section(lines: &mut Vec<String>, title: Heading, items: &[String], lang: Language) {
    if items.is_empty() {
        return;
    }
    lines.push(format!("{}:", heading(title, lang)));
    lines.extend(items.iter().map(|item| format!("  {item}")));
}

fn render_lab_data(data: &LabData, lang: Language) -> Vec<String> {
    let mut lines = Vec::new();

    let patient: Vec<String> = data
        .patient
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    section(&mut lines, Heading::Patient, &patient, lang);

    if let Some(date) = &data.collection_date {
        lines.push(format!("{}: {date}", heading(Heading::CollectionDate, lang)));
    }

    section(&mut lines, Heading::Results, &data.results, lang);
    lines
}

fn render_analysis(data: &LabData, lang: Language) -> Vec<String> {
    let mut lines = Vec::new();

    let abnormal: Vec<String> = abnormal_results(data)
        .into_iter()
        .map(|param| messages::abnormal_result(param, lang))
        .collect();
    section(&mut lines, Heading::Abnormal, &abnormal, lang);

    let lab = analyze_lab_data(data);
    let findings: Vec<String> = lab
        .findings
        .iter()
        .map(|finding| messages::lab_finding(finding, lang))
        .collect();
    section(&mut lines, Heading::LabComments, &findings, lang);

    let supplements: Vec<String> = if lab.supplements.is_empty() {
        vec![messages::no_supplements(lang).to_owned()]
    } else {
        lab.supplements
            .iter()
            .map(|s| messages::supplement(*s, lang).to_owned())
            .collect()
    };
    section(&mut lines, Heading::Supplements, &supplements, lang);
    section(
        &mut lines,
        Heading::Consultation,
        &[messages::consultation(lab.consultation, lang)],
        lang,
    );

    let patterns = analyze_parameter_patterns(data);
    lines.push(format!(
        "{}: {}",
        heading(Heading::Profile, lang),
        messages::profile_name(patterns.primary, lang)
    ));
    lines.push(format!(
        "{}: {}%",
        heading(Heading::Strength, lang),
        messages::decimal(f64::from(patterns.strength), 1, lang)
    ));
    lines.push(messages::profile_description(&patterns, lang));

    let key_findings: Vec<String> = patterns
        .findings
        .iter()
        .map(|f| messages::key_finding(*f, lang).to_owned())
        .collect();
    section(&mut lines, Heading::KeyFindings, &key_findings, lang);

    let suggestions: Vec<String> = patterns
        .suggestions
        .iter()
        .map(|s| messages::suggestion(*s, lang).to_owned())
        .collect();
    section(&mut lines, Heading::Suggestions, &suggestions, lang);

    lines
}

fn render_risk(
    data: &LabData,
    rivalta: RivaltaStatus,
    gammopathy: Gammopathy,
    lang: Language,
) -> Vec<String> {
    let risk = assess_fip_risk(data, rivalta, gammopathy);
    let mut lines = vec![
        messages::risk_headline(&risk, lang),
        format!("{}: {}", heading(Heading::Colour, lang), risk.level.color()),
    ];

    lines.extend(
        risk.comments
            .iter()
            .map(|comment| messages::risk_comment(comment, lang)),
    );

    let tests: Vec<String> = messages::further_tests(risk.level, lang)
        .into_iter()
        .map(str::to_owned)
        .collect();
    section(&mut lines, Heading::FurtherTests, &tests, lang);
    section(
        &mut lines,
        Heading::Supplements,
        &[messages::risk_supplements(risk.level, lang).to_owned()],
        lang,
    );
    section(
        &mut lines,
        Heading::Consultation,
        &[messages::risk_consultation(risk.level, lang)],
        lang,
    );
    lines
}
