use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use versiculo_core::{
    keytext, Config, Direction, Granularity, Locale, LocaleManager, MemoryModule, Module,
    VerseKeyEngine, Versification,
};

#[derive(Parser)]
#[command(name = "versiculo")]
#[command(about = "Parse, render and step through scripture verse keys")]
struct Cli {
    /// Locale to display book names in (overrides the config file)
    #[arg(short, long, global = true)]
    locale: Option<String>,
    /// Testaments the module contains
    #[arg(short, long, global = true, value_enum, default_value_t = Testaments::Both)]
    testaments: Testaments,
    /// Versification file to use instead of the built-in KJV scheme
    #[arg(long, global = true)]
    versification: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a key in localized, canonical and OSIS form
    Show {
        /// Verse key, e.g. "John 3:16"
        key: String,
    },
    /// Step from a key and print every key reached
    Step {
        /// Starting verse key
        key: String,
        /// Unit to step by
        #[arg(short, long, value_enum, default_value_t = Unit::Verse)]
        by: Unit,
        /// Step backwards
        #[arg(long)]
        back: bool,
        /// Number of steps
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// List the books of the active versification
    Books,
    /// List available locales
    Locales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Testaments {
    Both,
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    Book,
    Chapter,
    Verse,
}

impl From<Unit> for Granularity {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Book => Granularity::Book,
            Unit::Chapter => Granularity::Chapter,
            Unit::Verse => Granularity::Verse,
        }
    }
}

/// Everything a command needs, after merging the config file with flags.
struct Session {
    locales: LocaleManager,
    module: Rc<MemoryModule>,
}

impl Session {
    fn open(cli: &Cli, config: Config) -> Result<Self> {
        let mut locales = LocaleManager::new();
        if let Some(dir) = &config.locales_dir {
            locales.load_dir(dir)?;
        }
        if let Some(name) = cli.locale.as_ref().or(config.locale.as_ref()) {
            locales.set_default(name)?;
        }

        let mut module = MemoryModule::bible("versiculo").with_locale(locales.default_locale());
        if let Some(path) = cli.versification.as_ref().or(config.versification.as_ref()) {
            module = module.with_versification(Arc::new(Versification::load(path)?));
        }
        module = match cli.testaments {
            Testaments::Both => module,
            Testaments::Old => module.with_testaments(true, false),
            Testaments::New => module.with_testaments(false, true),
        };

        Ok(Self {
            locales,
            module: Rc::new(module),
        })
    }

    fn engine(&self) -> VerseKeyEngine {
        let module: Rc<dyn Module> = self.module.clone();
        VerseKeyEngine::bound(module)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

/// Run the selected command. `Ok(false)` means it ran but the key did not
/// resolve cleanly.
fn run(cli: &Cli) -> Result<bool> {
    let config = Config::load().unwrap_or_else(|err| {
        debug!(error = %err, "ignoring unreadable config");
        Config::new()
    });
    let session = Session::open(cli, config)?;

    match &cli.command {
        Commands::Show { key } => show_key(&session, key),
        Commands::Step {
            key,
            by,
            back,
            count,
        } => step_key(&session, key, (*by).into(), *back, *count),
        Commands::Books => {
            list_books(&session);
            Ok(true)
        }
        Commands::Locales => {
            list_locales(&session.locales);
            Ok(true)
        }
    }
}

fn show_key(session: &Session, text: &str) -> Result<bool> {
    let mut engine = session.engine();
    let outcome = engine.try_set_key(text);

    println!("{}", engine.key().bold().green());
    println!("  {} {}", "canonical:".dimmed(), engine.raw_key());
    println!("  {} {}", "osis:".dimmed(), engine.osis_ref().cyan());

    match outcome {
        Ok(()) => Ok(true),
        Err(err) => {
            println!("{}", err.to_string().yellow());
            Ok(false)
        }
    }
}

fn step_key(
    session: &Session,
    text: &str,
    granularity: Granularity,
    back: bool,
    count: usize,
) -> Result<bool> {
    let mut engine = session.engine();
    if let Err(err) = engine.try_set_key(text) {
        println!("{}", err.to_string().yellow());
        return Ok(false);
    }
    println!("{}", engine.key().bold());

    let direction = if back {
        Direction::Backward
    } else {
        Direction::Forward
    };
    for _ in 0..count {
        let before = engine.position();
        let outcome = engine.step(direction, granularity);
        if engine.position() != before {
            println!("{}", engine.key().bold().green());
        }
        if let Err(err) = outcome {
            println!("{}", err.to_string().yellow());
            return Ok(false);
        }
    }
    Ok(true)
}

fn list_books(session: &Session) {
    let v11n = session.module.versification();
    let locale = session.module.locale();
    let testaments = [
        (session.module.has_old_testament(), "Old Testament"),
        (session.module.has_new_testament(), "New Testament"),
    ];

    for (testament, (present, title)) in (1u8..).zip(testaments) {
        if !present {
            continue;
        }
        println!("\n{}", title.bold().blue());
        for (_, book, info) in v11n.books().filter(|(t, _, _)| *t == testament) {
            println!(
                "{:>3}. {} {}",
                book,
                keytext::book_display_name(info, Some(&locale)).bold().yellow(),
                format!("({} chapters)", info.chapter_count()).dimmed()
            );
        }
    }
}

fn list_locales(locales: &LocaleManager) {
    for name in locales.names() {
        let Some(locale) = locales.get(name) else {
            continue;
        };
        let marker = if name == locales.default_name() {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!(
            "{} {} {}",
            marker,
            locale_label(&locale).bold(),
            locale.description.dimmed()
        );
    }
}

fn locale_label(locale: &Locale) -> String {
    if locale.is_canonical() {
        format!("{} (canonical)", locale.name)
    } else {
        locale.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_show() {
        let cli = parse(&["versiculo", "--locale", "de", "show", "Joh 3:16"]);
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.testaments, Testaments::Both);
        assert!(matches!(cli.command, Commands::Show { ref key } if key == "Joh 3:16"));
    }

    #[test]
    fn test_parse_step() {
        let cli = parse(&["versiculo", "step", "Gen 1:1", "--by", "chapter", "--back", "-n", "3"]);
        match cli.command {
            Commands::Step {
                by, back, count, ..
            } => {
                assert_eq!(Granularity::from(by), Granularity::Chapter);
                assert!(back);
                assert_eq!(count, 3);
            }
            _ => panic!("expected step"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["versiculo", "step", "Gen 1:1", "--by", "word"]).is_err());
    }

    #[test]
    fn test_session_merges_config_and_flags() {
        let cli = parse(&["versiculo", "--testaments", "new", "--locale", "es", "books"]);
        let config = Config {
            locale: Some("de".to_string()),
            ..Config::new()
        };
        let session = Session::open(&cli, config).unwrap();

        assert_eq!(session.locales.default_name(), "es");
        assert!(!session.module.has_old_testament());
        assert_eq!(session.engine().key(), "Mateo 1:1");
    }

    #[test]
    fn test_session_rejects_unknown_locale() {
        let cli = parse(&["versiculo", "--locale", "xx", "books"]);
        assert!(Session::open(&cli, Config::new()).is_err());
    }

    #[test]
    fn test_show_reports_clamped_key() {
        let cli = parse(&["versiculo", "--testaments", "old", "show", "Mal 5:1"]);
        let session = Session::open(&cli, Config::new()).unwrap();
        assert!(!show_key(&session, "Mal 5:1").unwrap());
        assert!(show_key(&session, "Mal 4:6").unwrap());
    }

    #[test]
    fn test_step_stops_at_first_failure() {
        let cli = parse(&["versiculo", "books"]);
        let session = Session::open(&cli, Config::new()).unwrap();
        assert!(step_key(&session, "Rev 22:19", Granularity::Verse, false, 2).unwrap());
        assert!(!step_key(&session, "Rev 22:19", Granularity::Verse, false, 3).unwrap());
    }

    #[test]
    fn test_locale_label() {
        assert_eq!(locale_label(&Locale::english()), "en (canonical)");
        assert_eq!(locale_label(&Locale::german()), "de");
    }
}
