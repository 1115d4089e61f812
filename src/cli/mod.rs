//! Command-line front end for the categorizer.

pub mod output;

use std::{env, path::PathBuf};

use crate::{
    config::{Config, ConfigManager},
    engine::{CategorySuggester, SuggestionTrace},
    errors::{CategorizerError, CliError},
    service::SuggestionService,
    store::{seed_defaults, CategoryStore, JsonCategoryStore},
};

pub const USAGE: &str = "\
categorizer_cli [--config <path>] <command>

Commands:
  suggest <description...> [--threshold N]   Print the suggested category as JSON
  explain <description...> [--threshold N]   Show which matching stage decided
  lexicon                                     List keywords in priority order
  categories                                  List categories in the store
  check                                       Report lexicon categories missing from the store
  help                                        Show this message";

/// Result of a successful command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    DriftDetected,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Suggest {
        description: String,
        threshold: Option<u8>,
    },
    Explain {
        description: String,
        threshold: Option<u8>,
    },
    Lexicon,
    Categories,
    Check,
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    config_path: Option<PathBuf>,
    command: Command,
}

/// Runs the CLI against the process arguments.
pub fn run_cli() -> Result<Outcome, CliError> {
    run(env::args().skip(1))
}

pub fn run<I, A>(args: I) -> Result<Outcome, CliError>
where
    I: IntoIterator<Item = A>,
    A: Into<String>,
{
    let invocation = parse(args.into_iter().map(Into::into).collect())?;
    if invocation.command == Command::Help {
        println!("{}", USAGE);
        return Ok(Outcome::Success);
    }

    let manager = match invocation.config_path {
        Some(path) => ConfigManager::with_config_file(path),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;
    tracing::debug!(config = %manager.path().display(), "configuration loaded");

    match invocation.command {
        Command::Suggest {
            description,
            threshold,
        } => {
            let service = build_service(&manager, &config, threshold)?;
            let suggestion = service.suggest(&description);
            println!(
                "{}",
                serde_json::to_string(&suggestion).map_err(CategorizerError::from)?
            );
        }
        Command::Explain {
            description,
            threshold,
        } => {
            let suggester = CategorySuggester::new(config.load_lexicon()?);
            let threshold = threshold.unwrap_or(config.threshold);
            print_trace(&suggester.explain(&description, threshold));
        }
        Command::Lexicon => {
            let lexicon = config.load_lexicon()?;
            output::section("Lexicon");
            for (idx, entry) in lexicon.entries().iter().enumerate() {
                println!("{:>3}. {:<16} -> {}", idx + 1, entry.keyword, entry.category);
            }
        }
        Command::Categories => {
            let store = open_seeded_store(&manager, &config)?;
            output::section("Categories");
            for record in store.list()? {
                println!("{}  {}", record.id, record.name);
            }
        }
        Command::Check => {
            let service = build_service(&manager, &config, None)?;
            let missing = service.drift()?;
            if missing.is_empty() {
                output::success("Every lexicon category exists in the store.");
            } else {
                for category in &missing {
                    output::warning(format!("Category `{}` is missing from the store", category));
                }
                return Ok(Outcome::DriftDetected);
            }
        }
        Command::Help => println!("{}", USAGE),
    }
    Ok(Outcome::Success)
}

fn open_seeded_store(
    manager: &ConfigManager,
    config: &Config,
) -> Result<JsonCategoryStore, CliError> {
    let store = manager.open_store(config);
    seed_defaults(&store)?;
    Ok(store)
}

fn build_service(
    manager: &ConfigManager,
    config: &Config,
    threshold: Option<u8>,
) -> Result<SuggestionService<JsonCategoryStore>, CliError> {
    let suggester = CategorySuggester::new(config.load_lexicon()?);
    let store = open_seeded_store(manager, config)?;
    let threshold = threshold.unwrap_or(config.threshold);
    Ok(SuggestionService::new(suggester, store).with_threshold(threshold))
}

fn print_trace(trace: &SuggestionTrace) {
    match trace {
        SuggestionTrace::Exact { keyword, category } => {
            output::success(format!("{} (exact keyword `{}`)", category, keyword));
        }
        SuggestionTrace::Fuzzy {
            keyword,
            category,
            score,
        } => {
            output::success(format!(
                "{} (fuzzy keyword `{}`, score {})",
                category, keyword, score
            ));
        }
        SuggestionTrace::Rejected {
            keyword,
            score,
            threshold,
        } => {
            output::info(format!(
                "No category: best keyword `{}` scored {} (threshold {})",
                keyword, score, threshold
            ));
        }
        SuggestionTrace::NoCandidates => output::info("No category: nothing to match"),
    }
}

fn parse(args: Vec<String>) -> Result<Invocation, CliError> {
    let mut config_path = None;
    let mut threshold = None;
    let mut positional = Vec::new();
    let mut help = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--config requires a path".into()))?;
                config_path = Some(PathBuf::from(value));
            }
            "--threshold" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--threshold requires a value".into()))?;
                threshold = Some(parse_threshold(&value)?);
            }
            "-h" | "--help" => help = true,
            _ => positional.push(arg),
        }
    }

    if help {
        return Ok(Invocation {
            config_path,
            command: Command::Help,
        });
    }

    let mut positional = positional.into_iter();
    let name = positional.next().unwrap_or_else(|| "help".to_string());
    let rest: Vec<String> = positional.collect();

    let command = match name.as_str() {
        "suggest" | "explain" => {
            let description = rest.join(" ");
            if name == "suggest" {
                Command::Suggest {
                    description,
                    threshold,
                }
            } else {
                Command::Explain {
                    description,
                    threshold,
                }
            }
        }
        "lexicon" | "categories" | "check" | "help" if !rest.is_empty() => {
            return Err(CliError::Usage(format!("`{}` takes no arguments", name)));
        }
        "lexicon" => Command::Lexicon,
        "categories" => Command::Categories,
        "check" => Command::Check,
        "help" => Command::Help,
        other => {
            return Err(CliError::Usage(format!(
                "unknown command `{}`\n\n{}",
                other, USAGE
            )))
        }
    };

    Ok(Invocation {
        config_path,
        command,
    })
}

fn parse_threshold(value: &str) -> Result<u8, CliError> {
    match value.parse::<u8>() {
        Ok(threshold) if threshold <= 100 => Ok(threshold),
        _ => Err(CliError::Usage(format!(
            "threshold must be an integer between 0 and 100, got `{}`",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_multi_word_descriptions() {
        let invocation =
            parse(args(&["suggest", "UBER", "TRIP", "--threshold", "60"])).expect("parse");
        assert_eq!(
            invocation.command,
            Command::Suggest {
                description: "UBER TRIP".into(),
                threshold: Some(60),
            }
        );
    }

    #[test]
    fn parses_global_config_flag() {
        let invocation = parse(args(&["--config", "cfg.json", "check"])).expect("parse");
        assert_eq!(invocation.config_path, Some(PathBuf::from("cfg.json")));
        assert_eq!(invocation.command, Command::Check);
    }

    #[test]
    fn empty_arguments_show_help() {
        assert_eq!(parse(Vec::new()).expect("parse").command, Command::Help);
        assert_eq!(
            parse(args(&["suggest", "--help"])).expect("parse").command,
            Command::Help
        );
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert!(matches!(
            parse(args(&["suggest", "x", "--threshold", "101"])),
            Err(CliError::Usage(_))
        ));
        assert!(parse(args(&["suggest", "x", "--threshold", "high"])).is_err());
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(matches!(parse(args(&["frobnicate"])), Err(CliError::Usage(_))));
        assert!(parse(args(&["lexicon", "extra"])).is_err());
    }
}
