//! LetHimCook command-line interface
//!
//! Commands:
//! - `lethimcook <query...>`: natural-language conversion ("2 cups to ml")
//! - `lethimcook --json <query...>`: same, printed as JSON
//! - `lethimcook scale <recipe.json> <servings>`: scale a recipe file
//!
//! Logging goes to stderr and is controlled by RUST_LOG (default: warn).

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use lethimcook::{
    natural_conversion, scale_recipe, Category, ConversionError, ErrorReport, Recipe,
    RecipeError, UNITS,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = "LetHimCook";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
enum Command {
    Convert { query: String, json: bool },
    Scale { path: PathBuf, servings: i64 },
    /// Banner requested with -h/--help
    Help,
    /// Banner shown because nothing was asked
    Usage,
}

/// What the process writes and how it exits
#[derive(Debug, PartialEq)]
struct Outcome {
    stdout: Option<String>,
    stderr: Option<String>,
    status: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    fn report(&self) -> ErrorReport {
        match self {
            CliError::Conversion(e) => e.report(),
            CliError::Recipe(e) => e.report(),
            CliError::Io { .. } => ErrorReport::new("IO_ERROR", self.to_string(), None),
            CliError::Json(_) => ErrorReport::new("INTERNAL", self.to_string(), None),
            CliError::Usage(_) => ErrorReport::new(
                "USAGE",
                self.to_string(),
                Some("Run without arguments for usage".to_string()),
            ),
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Usage),
        Some("-h") | Some("--help") => Ok(Command::Help),
        Some("scale") => {
            let [_, path, servings] = args else {
                return Err(CliError::Usage("scale expects <recipe.json> <servings>".to_string()));
            };
            let servings = servings.parse().map_err(|_| {
                CliError::Usage(format!("servings must be a whole number, got '{}'", servings))
            })?;
            Ok(Command::Scale { path: PathBuf::from(path), servings })
        }
        Some("--json") => {
            if args.len() < 2 {
                return Ok(Command::Usage);
            }
            Ok(Command::Convert { query: args[1..].join(" "), json: true })
        }
        Some(_) => Ok(Command::Convert { query: args.join(" "), json: false }),
    }
}

fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Convert { query, json } => {
            debug!(%query, "converting");
            let conversion = natural_conversion(query)?;
            if *json {
                Ok(serde_json::to_string(&conversion)?)
            } else {
                Ok(conversion.to_string())
            }
        }
        Command::Scale { path, servings } => {
            debug!(path = %path.display(), servings, "scaling recipe file");
            let text = fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            let recipe = Recipe::from_json(&text)?;
            let scaled = scale_recipe(&recipe, *servings)?;
            Ok(scaled.to_json_pretty()?)
        }
        Command::Help | Command::Usage => Ok(usage()),
    }
}

fn usage() -> String {
    let mut out = format!("{} v{} - Unit Conversion Library\n", APP_NAME, VERSION);
    out.push_str("\nUsage:\n");
    out.push_str("  lethimcook '2 cups to ml'\n");
    out.push_str("  lethimcook 'convert 1 pound to grams'\n");
    out.push_str("  lethimcook 'how many ml in 3 teaspoons'\n");
    out.push_str("  lethimcook --json '350 fahrenheit to celsius'\n");
    out.push_str("  lethimcook scale recipe.json 8\n");
    out.push_str("\nSupported units:\n");
    for category in Category::ALL {
        let names: Vec<&str> = UNITS.by_category(category)
            .iter()
            .map(|u| u.name)
            .collect();
        out.push_str(&format!("  {}: {}\n", capitalize(category.label()), names.join(", ")));
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = match parse_args(&args) {
        Ok(command) => {
            let result = run(&command);
            finish(&command, result)
        }
        Err(e) => Outcome {
            stdout: None,
            stderr: Some(format!("Error: {}", e)),
            status: 1,
        },
    };

    if let Some(out) = &outcome.stdout {
        print!("{}", out);
    }
    if let Some(err) = &outcome.stderr {
        eprintln!("{}", err);
    }
    ExitCode::from(outcome.status)
}

fn finish(command: &Command, result: Result<String, CliError>) -> Outcome {
    match result {
        Ok(output) if *command == Command::Usage => Outcome {
            stdout: Some(output),
            stderr: None,
            status: 1,
        },
        Ok(output) if *command == Command::Help => Outcome {
            stdout: Some(output),
            stderr: None,
            status: 0,
        },
        Ok(output) => Outcome {
            stdout: Some(format!("{}\n", output)),
            stderr: None,
            status: 0,
        },
        Err(e) => {
            let message = if matches!(command, Command::Convert { json: true, .. }) {
                e.report().to_json()
            } else {
                format!("Error: {}", e)
            };
            Outcome { stdout: None, stderr: Some(message), status: 1 }
        }
    }
}
