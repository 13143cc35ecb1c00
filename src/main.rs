//! # studyplan CLI
//!
//! Usage:
//!   studyplan plan.json -o plan.pdf
//!   echo '{ ... }' | studyplan --format html
//!   studyplan --example > plan.json

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use studyplan::layout::BreakPolicy;
use studyplan::locale::Locale;
use studyplan::{ExportOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "studyplan", version, about = "Export a generated learning plan as PDF, HTML or layout JSON")]
struct Cli {
    /// Plan JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Output file [default: learning-plan.<format>]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: pdf, html or json
    #[arg(short, long, default_value_t = OutputFormat::Pdf)]
    format: OutputFormat,

    /// Export options JSON file (page geometry, locale, break policy)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Label language: en, es, fr or de. Overrides the options file.
    #[arg(long)]
    locale: Option<Locale>,

    /// Page break policy: week-blocks or every-block. Overrides the options file.
    #[arg(long)]
    break_policy: Option<BreakPolicy>,

    /// Print an example plan and exit
    #[arg(long)]
    example: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.example {
        print!("{}", example_plan_json());
        return Ok(());
    }

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut options = match &cli.options {
        Some(path) => ExportOptions::load(path)?,
        None => ExportOptions::default(),
    };
    if let Some(locale) = cli.locale {
        options.locale = Some(locale);
    }
    if let Some(policy) = cli.break_policy {
        options.break_policy = policy;
    }

    let plan = studyplan::parse_plan(&input).context("failed to parse plan")?;
    let backend = cli.format.backend();
    let bytes = studyplan::export(&plan, &options, backend.as_ref())?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("learning-plan.{}", backend.file_extension())));
    fs::write(&output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(format = %cli.format, bytes = bytes.len(), "export finished");
    eprintln!("✓ Written {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

fn example_plan_json() -> &'static str {
    r##"{
  "isLearningRelated": true,
  "responseLanguage": "en",
  "subject": "Python",
  "overview": "A practical path from first scripts to small, tested Python programs.",
  "duration": { "estimatedWeeks": 4, "hoursPerWeek": 6 },
  "topics": [
    {
      "name": "Python basics",
      "description": "Syntax, variables, control flow and functions.",
      "estimatedTimeToMaster": "2 weeks",
      "resources": [
        {
          "type": "Book",
          "name": "Automate the Boring Stuff with Python",
          "link": "https://automatetheboringstuff.com/",
          "description": "Free online book built around everyday scripts."
        },
        {
          "type": "Docs",
          "name": "The Python Tutorial",
          "link": "https://docs.python.org/3/tutorial/"
        }
      ]
    },
    {
      "name": "Testing",
      "description": "Writing and running tests with pytest.",
      "estimatedTimeToMaster": "1 week",
      "resources": [
        {
          "type": "Docs",
          "name": "pytest documentation",
          "link": "https://docs.pytest.org/"
        }
      ]
    }
  ],
  "weeklySchedule": [
    {
      "week": 1,
      "focus": "Getting set up",
      "goals": ["Install Python", "Run a first script"],
      "dailyBreakdown": {
        "Monday": ["Install Python and an editor"],
        "Wednesday": ["Variables and types", "String formatting"],
        "Friday": ["Write a number guessing game"]
      },
      "milestones": ["First program runs"]
    },
    {
      "week": 2,
      "focus": "Control flow and functions",
      "goals": ["Use loops and conditionals", "Split code into functions"],
      "dailyBreakdown": {
        "Monday": ["if, for and while"],
        "Thursday": ["Functions and return values"]
      },
      "milestones": ["Refactor the game into functions"]
    },
    {
      "week": 3,
      "focus": "Working with files",
      "goals": ["Read and write text files"],
      "dailyBreakdown": {
        "Tuesday": ["Open, read and write files"],
        "Saturday": ["Build a tiny note-taking tool"]
      },
      "milestones": ["Notes persist between runs"]
    },
    {
      "week": 4,
      "focus": "Testing",
      "goals": ["Write unit tests"],
      "dailyBreakdown": {
        "Monday": ["Install pytest"],
        "Wednesday": ["Test the note-taking tool"]
      },
      "milestones": ["All tests pass"]
    }
  ],
  "assessmentMethods": ["Weekly mini project", "Self-review against the milestones"],
  "additionalTips": ["Code a little every day", "Read other people's code"]
}
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_plan_lays_out_fully() {
        let plan = studyplan::parse_plan(example_plan_json()).unwrap();
        let doc = studyplan::layout(&plan, &ExportOptions::default());
        let lines: Vec<&str> = doc
            .pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.as_str()))
            .collect();

        assert_eq!(doc.title, "Learning Plan: Python");
        assert_eq!(lines[0], "Learning Plan: Python");
        let mastery: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| l.starts_with("Time to master: "))
            .collect();
        assert_eq!(mastery, vec!["Time to master: 2 weeks", "Time to master: 1 week"]);
        assert!(lines.contains(&"Week 4: Testing"));
        assert!(lines.contains(&"Additional Tips"));
    }

    #[test]
    fn test_example_plan_exports() {
        let plan = studyplan::parse_plan(example_plan_json()).unwrap();
        for format in [OutputFormat::Pdf, OutputFormat::Html, OutputFormat::Json] {
            let bytes = studyplan::export(&plan, &ExportOptions::default(), format.backend().as_ref())
                .unwrap();
            assert!(!bytes.is_empty());
        }
    }

    #[test]
    fn test_cli_flags_parse() {
        let cli = Cli::try_parse_from([
            "studyplan",
            "plan.json",
            "--format",
            "html",
            "--locale",
            "de",
            "--break-policy",
            "every-block",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("plan.json")));
        assert_eq!(cli.format, OutputFormat::Html);
        assert_eq!(cli.locale, Some(Locale::German));
        assert_eq!(cli.break_policy, Some(BreakPolicy::EveryBlock));
        assert!(Cli::try_parse_from(["studyplan", "--format", "docx"]).is_err());
    }
}
