//! Book-name locales.
//!
//! Keys are stored canonically (English names from the versification
//! table); a [`Locale`] only changes how book names are displayed and which
//! extra spellings are accepted when parsing. Books a locale does not
//! translate fall back to the canonical name.
//!
//! Locale files are JSON:
//!
//! ```json
//! {
//!   "name": "pt",
//!   "description": "Português",
//!   "books": { "Gen": "Gênesis", "John": "João" },
//!   "aliases": { "Gn": "Gen", "Jo": "John" }
//! }
//! ```
//!
//! `books` and `aliases` are keyed and valued by OSIS book identifiers.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Name of the canonical, untranslated locale.
pub const CANONICAL_LOCALE: &str = "en";

static ENGLISH: Lazy<Arc<Locale>> = Lazy::new(|| {
    Arc::new(Locale {
        name: CANONICAL_LOCALE.to_string(),
        description: "English".to_string(),
        books: BTreeMap::new(),
        aliases: BTreeMap::new(),
    })
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// OSIS id → localized display name.
    #[serde(default)]
    pub books: BTreeMap<String, String>,
    /// Extra accepted spelling → OSIS id.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Locale {
    /// The canonical locale: no translations, display names come from the
    /// versification table.
    pub fn english() -> Arc<Locale> {
        Arc::clone(&ENGLISH)
    }

    pub fn german() -> Locale {
        Self::from_table("de", "Deutsch", GERMAN_BOOKS, GERMAN_ALIASES)
    }

    pub fn spanish() -> Locale {
        Self::from_table("es", "Español", SPANISH_BOOKS, SPANISH_ALIASES)
    }

    fn from_table(
        name: &str,
        description: &str,
        books: &[(&str, &str)],
        aliases: &[(&str, &str)],
    ) -> Locale {
        Locale {
            name: name.to_string(),
            description: description.to_string(),
            books: owned_pairs(books),
            aliases: owned_pairs(aliases),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let locale: Locale = serde_json::from_str(json).context("Invalid locale JSON")?;
        if locale.name.trim().is_empty() {
            return Err(anyhow!("Locale is missing a name"));
        }
        Ok(locale)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Failed to load locale {:?}", path))
    }

    /// Localized display name of the book with OSIS id `osis`, if this
    /// locale translates it.
    pub fn book_name(&self, osis: &str) -> Option<&str> {
        self.books.get(osis).map(String::as_str)
    }

    /// `true` for locales that translate nothing.
    pub fn is_canonical(&self) -> bool {
        self.books.is_empty()
    }
}

fn owned_pairs(table: &[(&str, &str)]) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The set of locales available to a process, plus the default choice.
///
/// Owned by whoever sets up the application; there is no global instance.
#[derive(Debug, Clone)]
pub struct LocaleManager {
    locales: BTreeMap<String, Arc<Locale>>,
    default: String,
}

impl Default for LocaleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleManager {
    /// A manager holding the built-in `en`, `de` and `es` locales, with
    /// `en` as the default.
    pub fn new() -> Self {
        let mut manager = Self {
            locales: BTreeMap::new(),
            default: CANONICAL_LOCALE.to_string(),
        };
        manager.insert(Locale::english());
        manager.insert(Arc::new(Locale::german()));
        manager.insert(Arc::new(Locale::spanish()));
        manager
    }

    /// Add or replace a locale.
    pub fn insert(&mut self, locale: Arc<Locale>) {
        self.locales.insert(locale.name.clone(), locale);
    }

    /// Load every `*.json` file in `dir` as a locale. Returns how many were
    /// loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read locale directory {:?}", dir))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let locale = Locale::load(&path)?;
            debug!(locale = %locale.name, path = ?path, "locale file parsed");
            self.insert(Arc::new(locale));
            loaded += 1;
        }
        info!(count = loaded, dir = ?dir, "loaded locales");
        Ok(loaded)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Locale>> {
        self.locales.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn default_locale(&self) -> Arc<Locale> {
        self.get(&self.default).unwrap_or_else(Locale::english)
    }

    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.locales.contains_key(name) {
            return Err(anyhow!("Unknown locale: {}", name));
        }
        self.default = name.to_string();
        Ok(())
    }
}

const GERMAN_BOOKS: &[(&str, &str)] = &[
    ("Gen", "1. Mose"),
    ("Exod", "2. Mose"),
    ("Lev", "3. Mose"),
    ("Num", "4. Mose"),
    ("Deut", "5. Mose"),
    ("Josh", "Josua"),
    ("Judg", "Richter"),
    ("Ruth", "Rut"),
    ("1Sam", "1. Samuel"),
    ("2Sam", "2. Samuel"),
    ("1Kgs", "1. Könige"),
    ("2Kgs", "2. Könige"),
    ("1Chr", "1. Chronik"),
    ("2Chr", "2. Chronik"),
    ("Ezra", "Esra"),
    ("Neh", "Nehemia"),
    ("Esth", "Ester"),
    ("Job", "Hiob"),
    ("Ps", "Psalmen"),
    ("Prov", "Sprüche"),
    ("Eccl", "Prediger"),
    ("Song", "Hoheslied"),
    ("Isa", "Jesaja"),
    ("Jer", "Jeremia"),
    ("Lam", "Klagelieder"),
    ("Ezek", "Hesekiel"),
    ("Dan", "Daniel"),
    ("Hos", "Hosea"),
    ("Joel", "Joel"),
    ("Amos", "Amos"),
    ("Obad", "Obadja"),
    ("Jonah", "Jona"),
    ("Mic", "Micha"),
    ("Nah", "Nahum"),
    ("Hab", "Habakuk"),
    ("Zeph", "Zefanja"),
    ("Hag", "Haggai"),
    ("Zech", "Sacharja"),
    ("Mal", "Maleachi"),
    ("Matt", "Matthäus"),
    ("Mark", "Markus"),
    ("Luke", "Lukas"),
    ("John", "Johannes"),
    ("Acts", "Apostelgeschichte"),
    ("Rom", "Römer"),
    ("1Cor", "1. Korinther"),
    ("2Cor", "2. Korinther"),
    ("Gal", "Galater"),
    ("Eph", "Epheser"),
    ("Phil", "Philipper"),
    ("Col", "Kolosser"),
    ("1Thess", "1. Thessalonicher"),
    ("2Thess", "2. Thessalonicher"),
    ("1Tim", "1. Timotheus"),
    ("2Tim", "2. Timotheus"),
    ("Titus", "Titus"),
    ("Phlm", "Philemon"),
    ("Heb", "Hebräer"),
    ("Jas", "Jakobus"),
    ("1Pet", "1. Petrus"),
    ("2Pet", "2. Petrus"),
    ("1John", "1. Johannes"),
    ("2John", "2. Johannes"),
    ("3John", "3. Johannes"),
    ("Jude", "Judas"),
    ("Rev", "Offenbarung"),
];

const GERMAN_ALIASES: &[(&str, &str)] = &[
    ("1Mo", "Gen"),
    ("2Mo", "Exod"),
    ("3Mo", "Lev"),
    ("4Mo", "Num"),
    ("5Mo", "Deut"),
    ("Ps", "Ps"),
    ("Spr", "Prov"),
    ("Pred", "Eccl"),
    ("Hes", "Ezek"),
    ("Mt", "Matt"),
    ("Mk", "Mark"),
    ("Lk", "Luke"),
    ("Joh", "John"),
    ("Jh", "John"),
    ("Apg", "Acts"),
    ("Röm", "Rom"),
    ("Hebr", "Heb"),
    ("Jak", "Jas"),
    ("Offb", "Rev"),
];

const SPANISH_BOOKS: &[(&str, &str)] = &[
    ("Gen", "Génesis"),
    ("Exod", "Éxodo"),
    ("Lev", "Levítico"),
    ("Num", "Números"),
    ("Deut", "Deuteronomio"),
    ("Josh", "Josué"),
    ("Judg", "Jueces"),
    ("Ruth", "Rut"),
    ("1Sam", "1 Samuel"),
    ("2Sam", "2 Samuel"),
    ("1Kgs", "1 Reyes"),
    ("2Kgs", "2 Reyes"),
    ("1Chr", "1 Crónicas"),
    ("2Chr", "2 Crónicas"),
    ("Ezra", "Esdras"),
    ("Neh", "Nehemías"),
    ("Esth", "Ester"),
    ("Job", "Job"),
    ("Ps", "Salmos"),
    ("Prov", "Proverbios"),
    ("Eccl", "Eclesiastés"),
    ("Song", "Cantares"),
    ("Isa", "Isaías"),
    ("Jer", "Jeremías"),
    ("Lam", "Lamentaciones"),
    ("Ezek", "Ezequiel"),
    ("Dan", "Daniel"),
    ("Hos", "Oseas"),
    ("Joel", "Joel"),
    ("Amos", "Amós"),
    ("Obad", "Abdías"),
    ("Jonah", "Jonás"),
    ("Mic", "Miqueas"),
    ("Nah", "Nahúm"),
    ("Hab", "Habacuc"),
    ("Zeph", "Sofonías"),
    ("Hag", "Hageo"),
    ("Zech", "Zacarías"),
    ("Mal", "Malaquías"),
    ("Matt", "Mateo"),
    ("Mark", "Marcos"),
    ("Luke", "Lucas"),
    ("John", "Juan"),
    ("Acts", "Hechos"),
    ("Rom", "Romanos"),
    ("1Cor", "1 Corintios"),
    ("2Cor", "2 Corintios"),
    ("Gal", "Gálatas"),
    ("Eph", "Efesios"),
    ("Phil", "Filipenses"),
    ("Col", "Colosenses"),
    ("1Thess", "1 Tesalonicenses"),
    ("2Thess", "2 Tesalonicenses"),
    ("1Tim", "1 Timoteo"),
    ("2Tim", "2 Timoteo"),
    ("Titus", "Tito"),
    ("Phlm", "Filemón"),
    ("Heb", "Hebreos"),
    ("Jas", "Santiago"),
    ("1Pet", "1 Pedro"),
    ("2Pet", "2 Pedro"),
    ("1John", "1 Juan"),
    ("2John", "2 Juan"),
    ("3John", "3 Juan"),
    ("Jude", "Judas"),
    ("Rev", "Apocalipsis"),
];

const SPANISH_ALIASES: &[(&str, &str)] = &[
    ("Gn", "Gen"),
    ("Ex", "Exod"),
    ("Lv", "Lev"),
    ("Nm", "Num"),
    ("Dt", "Deut"),
    ("Sal", "Ps"),
    ("Pr", "Prov"),
    ("Ec", "Eccl"),
    ("Cnt", "Song"),
    ("Is", "Isa"),
    ("Mt", "Matt"),
    ("Mc", "Mark"),
    ("Lc", "Luke"),
    ("Jn", "John"),
    ("Hch", "Acts"),
    ("Ro", "Rom"),
    ("Stg", "Jas"),
    ("Ap", "Rev"),
];
