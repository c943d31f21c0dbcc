//! Versification schemes.
//!
//! A [`Versification`] is the bounds table for one canon tradition: the
//! ordered books of each testament and, per book, the verse count of every
//! chapter. Every [`Position`] the engine hands out is valid under its
//! active scheme, and [`Versification::normalize`] is the routine that
//! makes it so.
//!
//! ## Normalization
//!
//! Chapter and verse numbers are accepted as signed values and rolled into
//! range the way a reader would page through the text:
//!
//! - `Gen 1:32` becomes `Gen 2:1`, `Mal 5:1` becomes `Matt 1:1`
//! - `Gen 2:0` becomes `Gen 1:31`, `Matt 1:0` becomes `Mal 4:6`
//! - anything before `Gen 1:1` or after `Rev 22:21` is clamped to that end
//!   of the canon and flagged
//!
//! With headings enabled, verse 0 of each chapter is a slot of its own.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::position::{Position, NEW_TESTAMENT, OLD_TESTAMENT};

static KJV: Lazy<Arc<Versification>> =
    Lazy::new(|| Arc::new(Versification::from_table("KJV", KJV_OLD, KJV_NEW)));

/// The built-in King James versification, shared process-wide.
pub fn kjv() -> Arc<Versification> {
    Arc::clone(&KJV)
}

/// One book of a versification scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    /// OSIS book identifier, e.g. `"Gen"`, `"1John"`.
    pub osis: String,
    /// Canonical English name used in raw keys.
    pub name: String,
    #[serde(default)]
    pub abbreviations: Vec<String>,
    /// `verses[c - 1]` is the number of verses in chapter `c`.
    pub verses: Vec<u16>,
}

impl BookInfo {
    pub fn chapter_count(&self) -> u16 {
        self.verses.len() as u16
    }

    pub fn verse_count(&self, chapter: u16) -> Option<u16> {
        let index = usize::from(chapter.checked_sub(1)?);
        self.verses.get(index).copied()
    }
}

/// Result of [`Versification::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub position: Position,
    /// Set when the input fell off either end of the canon.
    pub clamped: bool,
}

/// Book/chapter/verse numbering for one canon tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versification {
    name: String,
    old_testament: Vec<BookInfo>,
    new_testament: Vec<BookInfo>,
}

impl Versification {
    fn from_table(name: &str, old: &[BookDef], new: &[BookDef]) -> Self {
        Self {
            name: name.to_string(),
            old_testament: old.iter().map(BookDef::to_info).collect(),
            new_testament: new.iter().map(BookDef::to_info).collect(),
        }
    }

    /// Parse and validate a scheme from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let scheme: Versification =
            serde_json::from_str(json).context("Invalid versification JSON")?;
        scheme.validate()?;
        Ok(scheme)
    }

    /// Load a scheme from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read versification {:?}", path))?;
        let scheme = Self::from_json(&content)
            .with_context(|| format!("Failed to load versification {:?}", path))?;
        info!(
            versification = %scheme.name,
            books = scheme.old_testament.len() + scheme.new_testament.len(),
            "loaded versification"
        );
        Ok(scheme)
    }

    fn validate(&self) -> Result<()> {
        if self.old_testament.is_empty() || self.new_testament.is_empty() {
            bail!("Versification {} must define books for both testaments", self.name);
        }
        let mut seen = HashSet::new();
        for book in self.old_testament.iter().chain(&self.new_testament) {
            if !seen.insert(book.osis.as_str()) {
                bail!("Duplicate book {} in versification {}", book.osis, self.name);
            }
            if book.verses.is_empty() || book.verses.len() > usize::from(u16::MAX) {
                bail!("Book {} has an invalid chapter count", book.osis);
            }
            if book.verses.contains(&0) {
                bail!("Book {} has a chapter without verses", book.osis);
            }
        }
        if self.old_testament.len() > usize::from(u8::MAX)
            || self.new_testament.len() > usize::from(u8::MAX)
        {
            bail!("Versification {} has too many books", self.name);
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn testament(&self, testament: u8) -> &[BookInfo] {
        match testament {
            OLD_TESTAMENT => &self.old_testament,
            NEW_TESTAMENT => &self.new_testament,
            _ => &[],
        }
    }

    /// Highest valid book index of `testament` (the BMAX table).
    pub fn book_max(&self, testament: u8) -> u8 {
        self.testament(testament).len() as u8
    }

    pub fn book(&self, testament: u8, book: u8) -> Option<&BookInfo> {
        let index = usize::from(book.checked_sub(1)?);
        self.testament(testament).get(index)
    }

    pub fn chapter_max(&self, testament: u8, book: u8) -> u16 {
        self.book(testament, book).map_or(0, BookInfo::chapter_count)
    }

    pub fn verse_max(&self, testament: u8, book: u8, chapter: u16) -> u16 {
        self.book(testament, book)
            .and_then(|info| info.verse_count(chapter))
            .unwrap_or(0)
    }

    /// Every book in canon order with its `(testament, book)` index.
    pub fn books(&self) -> impl Iterator<Item = (u8, u8, &BookInfo)> {
        let old = self
            .old_testament
            .iter()
            .enumerate()
            .map(|(i, info)| (OLD_TESTAMENT, i as u8 + 1, info));
        let new = self
            .new_testament
            .iter()
            .enumerate()
            .map(|(i, info)| (NEW_TESTAMENT, i as u8 + 1, info));
        old.chain(new)
    }

    /// Look up a book by its OSIS identifier.
    pub fn find_osis(&self, osis: &str) -> Option<(u8, u8)> {
        self.books()
            .find(|(_, _, info)| info.osis.eq_ignore_ascii_case(osis))
            .map(|(testament, book, _)| (testament, book))
    }

    /// First verse of the canon.
    pub fn first(&self) -> Position {
        self.testament_first(OLD_TESTAMENT)
    }

    /// Last verse of the canon.
    pub fn last(&self) -> Position {
        self.testament_last(NEW_TESTAMENT)
    }

    pub fn testament_first(&self, testament: u8) -> Position {
        Position::new(testament, 1, 1, 1)
    }

    pub fn testament_last(&self, testament: u8) -> Position {
        let book = self.book_max(testament);
        let chapter = self.chapter_max(testament, book);
        Position::new(testament, book, chapter, self.verse_max(testament, book, chapter))
    }

    /// Whether `position` names an existing verse.
    pub fn contains(&self, position: Position) -> bool {
        position.verse >= 1
            && position.verse
                <= self.verse_max(position.testament, position.book, position.chapter)
    }

    fn book_count(&self) -> i64 {
        (self.old_testament.len() + self.new_testament.len()) as i64
    }

    fn book_at(&self, flat: i64) -> &BookInfo {
        let old = self.old_testament.len();
        let flat = flat as usize;
        if flat < old {
            &self.old_testament[flat]
        } else {
            &self.new_testament[flat - old]
        }
    }

    fn position_at(&self, flat: i64, chapter: i64, verse: i64) -> Position {
        let old = self.old_testament.len() as i64;
        let (testament, book) = if flat < old {
            (OLD_TESTAMENT, flat + 1)
        } else {
            (NEW_TESTAMENT, flat - old + 1)
        };
        Position::new(testament, book as u8, chapter as u16, verse as u16)
    }

    /// Roll an arbitrary `(testament, book, chapter, verse)` into a valid
    /// position. See the module documentation for the rules.
    pub fn normalize(
        &self,
        testament: i64,
        book: i64,
        chapter: i64,
        verse: i64,
        headings: bool,
    ) -> Normalized {
        let floor = i64::from(!headings);
        let heading_slot = i64::from(headings);
        let before = Normalized {
            position: Position::new(OLD_TESTAMENT, 1, 1, floor as u16),
            clamped: true,
        };
        let after = Normalized {
            position: self.last(),
            clamped: true,
        };

        let mut flat = match testament {
            t if t < i64::from(OLD_TESTAMENT) => return before,
            1 => book.saturating_sub(1),
            2 => (self.old_testament.len() as i64).saturating_add(book.saturating_sub(1)),
            _ => return after,
        };
        let (mut chapter, mut verse) = (chapter, verse);

        loop {
            if flat < 0 {
                return before;
            }
            if flat >= self.book_count() {
                return after;
            }
            let chapters = i64::from(self.book_at(flat).chapter_count());
            if chapter < 1 {
                flat -= 1;
                if flat < 0 {
                    return before;
                }
                chapter += i64::from(self.book_at(flat).chapter_count());
                continue;
            }
            if chapter > chapters {
                chapter -= chapters;
                flat += 1;
                continue;
            }
            let verses = i64::from(self.book_at(flat).verses[(chapter - 1) as usize]);
            if verse < floor {
                chapter -= 1;
                if chapter < 1 {
                    flat -= 1;
                    if flat < 0 {
                        return before;
                    }
                    chapter = i64::from(self.book_at(flat).chapter_count());
                }
                let previous = i64::from(self.book_at(flat).verses[(chapter - 1) as usize]);
                verse += previous + heading_slot;
                continue;
            }
            if verse > verses {
                verse -= verses + heading_slot;
                chapter += 1;
                continue;
            }
            break;
        }

        Normalized {
            position: self.position_at(flat, chapter, verse),
            clamped: false,
        }
    }

    /// [`normalize`](Self::normalize) for an already structured position.
    pub fn normalize_position(&self, position: Position, headings: bool) -> Normalized {
        self.normalize(
            i64::from(position.testament),
            i64::from(position.book),
            i64::from(position.chapter),
            i64::from(position.verse),
            headings,
        )
    }
}

struct BookDef {
    osis: &'static str,
    name: &'static str,
    abbreviations: &'static [&'static str],
    verses: &'static [u16],
}

impl BookDef {
    fn to_info(&self) -> BookInfo {
        BookInfo {
            osis: self.osis.to_string(),
            name: self.name.to_string(),
            abbreviations: self.abbreviations.iter().map(|a| a.to_string()).collect(),
            verses: self.verses.to_vec(),
        }
    }
}

const KJV_OLD: &[BookDef] = &[
    BookDef {
        osis: "Gen",
        name: "Genesis",
        abbreviations: &["Ge", "Gn"],
        verses: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16,
            27, 33, 38, 18, 34, 24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32,
            20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34, 28, 34, 31, 22,
            33, 26,
        ],
    },
    BookDef {
        osis: "Exod",
        name: "Exodus",
        abbreviations: &["Ex", "Exo"],
        verses: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36,
            16, 27, 25, 26, 36, 31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35,
            23, 35, 35, 38, 29, 31, 43, 38,
        ],
    },
    BookDef {
        osis: "Lev",
        name: "Leviticus",
        abbreviations: &["Le", "Lv"],
        verses: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34,
            16, 30, 37, 27, 24, 33, 44, 23, 55, 46, 34,
        ],
    },
    BookDef {
        osis: "Num",
        name: "Numbers",
        abbreviations: &["Nu", "Nm"],
        verses: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50,
            13, 32, 22, 29, 35, 41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42,
            56, 29, 34, 13,
        ],
    },
    BookDef {
        osis: "Deut",
        name: "Deuteronomy",
        abbreviations: &["Dt", "De"],
        verses: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22,
            20, 22, 21, 20, 23, 30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52,
            29, 12,
        ],
    },
    BookDef {
        osis: "Josh",
        name: "Joshua",
        abbreviations: &["Jos", "Jsh"],
        verses: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10,
            18, 28, 51, 9, 45, 34, 16, 33,
        ],
    },
    BookDef {
        osis: "Judg",
        name: "Judges",
        abbreviations: &["Jdg", "Jg"],
        verses: &[
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31,
            13, 31, 30, 48, 25,
        ],
    },
    BookDef {
        osis: "Ruth",
        name: "Ruth",
        abbreviations: &["Ru", "Rth"],
        verses: &[22, 23, 18, 22],
    },
    BookDef {
        osis: "1Sam",
        name: "1 Samuel",
        abbreviations: &["1Sa", "1Sm"],
        verses: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23,
            58, 30, 24, 42, 15, 23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
    },
    BookDef {
        osis: "2Sam",
        name: "2 Samuel",
        abbreviations: &["2Sa", "2Sm"],
        verses: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23,
            29, 33, 43, 26, 22, 51, 39, 25,
        ],
    },
    BookDef {
        osis: "1Kgs",
        name: "1 Kings",
        abbreviations: &["1Ki", "1Kg"],
        verses: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34,
            24, 46, 21, 43, 29, 53,
        ],
    },
    BookDef {
        osis: "2Kgs",
        name: "2 Kings",
        abbreviations: &["2Ki", "2Kg"],
        verses: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20,
            41, 37, 37, 21, 26, 20, 37, 20, 30,
        ],
    },
    BookDef {
        osis: "1Chr",
        name: "1 Chronicles",
        abbreviations: &["1Ch", "1Chron"],
        verses: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43,
            27, 17, 19, 8, 30, 19, 32, 31, 31, 32, 34, 21, 30,
        ],
    },
    BookDef {
        osis: "2Chr",
        name: "2 Chronicles",
        abbreviations: &["2Ch", "2Chron"],
        verses: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14,
            19, 34, 11, 37, 20, 12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33,
            25, 33, 27, 23,
        ],
    },
    BookDef {
        osis: "Ezra",
        name: "Ezra",
        abbreviations: &["Ezr"],
        verses: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
    },
    BookDef {
        osis: "Neh",
        name: "Nehemiah",
        abbreviations: &["Ne"],
        verses: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
    },
    BookDef {
        osis: "Esth",
        name: "Esther",
        abbreviations: &["Est", "Es"],
        verses: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
    },
    BookDef {
        osis: "Job",
        name: "Job",
        abbreviations: &["Jb"],
        verses: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22,
            16, 21, 29, 29, 34, 30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22,
            33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
    },
    BookDef {
        osis: "Ps",
        name: "Psalms",
        abbreviations: &["Psa", "Psalm", "Pss"],
        verses: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11,
            15, 50, 14, 9, 13, 31, 6, 10, 22, 12, 14, 9, 11, 12, 24, 11,
            22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14,
            20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10,
            13, 20, 7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19,
            16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23, 11, 13,
            12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10,
            9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6,
            8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15,
            21, 10, 20, 14, 9, 6,
        ],
    },
    BookDef {
        osis: "Prov",
        name: "Proverbs",
        abbreviations: &["Pr", "Prv"],
        verses: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33,
            28, 24, 29, 30, 31, 29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
    },
    BookDef {
        osis: "Eccl",
        name: "Ecclesiastes",
        abbreviations: &["Ec", "Ecc", "Qoh"],
        verses: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
    },
    BookDef {
        osis: "Song",
        name: "Song of Solomon",
        abbreviations: &["So", "Sng", "Canticles"],
        verses: &[17, 17, 11, 16, 16, 13, 13, 14],
    },
    BookDef {
        osis: "Isa",
        name: "Isaiah",
        abbreviations: &["Is"],
        verses: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14,
            14, 7, 25, 6, 17, 25, 18, 23, 12, 21, 13, 29, 24, 33, 9, 20,
            24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15, 22,
            26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12,
            25, 24,
        ],
    },
    BookDef {
        osis: "Jer",
        name: "Jeremiah",
        abbreviations: &["Je", "Jr"],
        verses: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21,
            27, 23, 15, 18, 14, 30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44,
            26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5, 28, 7, 47,
            39, 46, 64, 34,
        ],
    },
    BookDef {
        osis: "Lam",
        name: "Lamentations",
        abbreviations: &["La"],
        verses: &[22, 22, 66, 22, 22],
    },
    BookDef {
        osis: "Ezek",
        name: "Ezekiel",
        abbreviations: &["Eze", "Ezk"],
        verses: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63,
            24, 32, 14, 49, 32, 31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32,
            33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24, 23, 35,
        ],
    },
    BookDef {
        osis: "Dan",
        name: "Daniel",
        abbreviations: &["Da", "Dn"],
        verses: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
    },
    BookDef {
        osis: "Hos",
        name: "Hosea",
        abbreviations: &["Ho"],
        verses: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
    },
    BookDef {
        osis: "Joel",
        name: "Joel",
        abbreviations: &["Jl"],
        verses: &[20, 32, 21],
    },
    BookDef {
        osis: "Amos",
        name: "Amos",
        abbreviations: &["Am"],
        verses: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
    },
    BookDef {
        osis: "Obad",
        name: "Obadiah",
        abbreviations: &["Ob", "Oba"],
        verses: &[21],
    },
    BookDef {
        osis: "Jonah",
        name: "Jonah",
        abbreviations: &["Jon", "Jnh"],
        verses: &[17, 10, 10, 11],
    },
    BookDef {
        osis: "Mic",
        name: "Micah",
        abbreviations: &["Mi"],
        verses: &[16, 13, 12, 13, 15, 16, 20],
    },
    BookDef {
        osis: "Nah",
        name: "Nahum",
        abbreviations: &["Na"],
        verses: &[15, 13, 19],
    },
    BookDef {
        osis: "Hab",
        name: "Habakkuk",
        abbreviations: &["Hb"],
        verses: &[17, 20, 19],
    },
    BookDef {
        osis: "Zeph",
        name: "Zephaniah",
        abbreviations: &["Zep", "Zp"],
        verses: &[18, 15, 20],
    },
    BookDef {
        osis: "Hag",
        name: "Haggai",
        abbreviations: &["Hg"],
        verses: &[15, 23],
    },
    BookDef {
        osis: "Zech",
        name: "Zechariah",
        abbreviations: &["Zec", "Zc"],
        verses: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
    },
    BookDef {
        osis: "Mal",
        name: "Malachi",
        abbreviations: &["Ml"],
        verses: &[14, 17, 18, 6],
    },
];

const KJV_NEW: &[BookDef] = &[
    BookDef {
        osis: "Matt",
        name: "Matthew",
        abbreviations: &["Mt", "Mat"],
        verses: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28,
            27, 35, 30, 34, 46, 46, 39, 51, 46, 75, 66, 20,
        ],
    },
    BookDef {
        osis: "Mark",
        name: "Mark",
        abbreviations: &["Mk", "Mr", "Mrk"],
        verses: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
    },
    BookDef {
        osis: "Luke",
        name: "Luke",
        abbreviations: &["Lk", "Lu"],
        verses: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31,
            37, 43, 48, 47, 38, 71, 56, 53,
        ],
    },
    BookDef {
        osis: "John",
        name: "John",
        abbreviations: &["Jn", "Jhn", "Joh"],
        verses: &[
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33,
            26, 40, 42, 31, 25,
        ],
    },
    BookDef {
        osis: "Acts",
        name: "Acts",
        abbreviations: &["Ac", "Act"],
        verses: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40,
            34, 28, 41, 38, 40, 30, 35, 27, 27, 32, 44, 31,
        ],
    },
    BookDef {
        osis: "Rom",
        name: "Romans",
        abbreviations: &["Ro", "Rm"],
        verses: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
    },
    BookDef {
        osis: "1Cor",
        name: "1 Corinthians",
        abbreviations: &["1Co"],
        verses: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
    },
    BookDef {
        osis: "2Cor",
        name: "2 Corinthians",
        abbreviations: &["2Co"],
        verses: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
    },
    BookDef {
        osis: "Gal",
        name: "Galatians",
        abbreviations: &["Ga"],
        verses: &[24, 21, 29, 31, 26, 18],
    },
    BookDef {
        osis: "Eph",
        name: "Ephesians",
        abbreviations: &["Ep"],
        verses: &[23, 22, 21, 32, 33, 24],
    },
    BookDef {
        osis: "Phil",
        name: "Philippians",
        abbreviations: &["Php", "Pp"],
        verses: &[30, 30, 21, 23],
    },
    BookDef {
        osis: "Col",
        name: "Colossians",
        abbreviations: &["Co"],
        verses: &[29, 23, 25, 18],
    },
    BookDef {
        osis: "1Thess",
        name: "1 Thessalonians",
        abbreviations: &["1Th", "1Thes"],
        verses: &[10, 20, 13, 18, 28],
    },
    BookDef {
        osis: "2Thess",
        name: "2 Thessalonians",
        abbreviations: &["2Th", "2Thes"],
        verses: &[12, 17, 18],
    },
    BookDef {
        osis: "1Tim",
        name: "1 Timothy",
        abbreviations: &["1Ti", "1Tm"],
        verses: &[20, 15, 16, 16, 25, 21],
    },
    BookDef {
        osis: "2Tim",
        name: "2 Timothy",
        abbreviations: &["2Ti", "2Tm"],
        verses: &[18, 26, 17, 22],
    },
    BookDef {
        osis: "Titus",
        name: "Titus",
        abbreviations: &["Tit", "Ti"],
        verses: &[16, 15, 15],
    },
    BookDef {
        osis: "Phlm",
        name: "Philemon",
        abbreviations: &["Phm", "Philem"],
        verses: &[25],
    },
    BookDef {
        osis: "Heb",
        name: "Hebrews",
        abbreviations: &["He"],
        verses: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
    },
    BookDef {
        osis: "Jas",
        name: "James",
        abbreviations: &["Jm", "Jam"],
        verses: &[27, 26, 18, 17, 20],
    },
    BookDef {
        osis: "1Pet",
        name: "1 Peter",
        abbreviations: &["1Pe", "1Pt"],
        verses: &[25, 25, 22, 19, 14],
    },
    BookDef {
        osis: "2Pet",
        name: "2 Peter",
        abbreviations: &["2Pe", "2Pt"],
        verses: &[21, 22, 18],
    },
    BookDef {
        osis: "1John",
        name: "1 John",
        abbreviations: &["1Jn", "1Jo"],
        verses: &[10, 29, 24, 21, 21],
    },
    BookDef {
        osis: "2John",
        name: "2 John",
        abbreviations: &["2Jn", "2Jo"],
        verses: &[13],
    },
    BookDef {
        osis: "3John",
        name: "3 John",
        abbreviations: &["3Jn", "3Jo"],
        verses: &[14],
    },
    BookDef {
        osis: "Jude",
        name: "Jude",
        abbreviations: &["Jud", "Jd"],
        verses: &[25],
    },
    BookDef {
        osis: "Rev",
        name: "Revelation",
        abbreviations: &["Re", "Rv", "Apocalypse"],
        verses: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21,
            18, 24, 21, 15, 27, 21,
        ],
    },
];
