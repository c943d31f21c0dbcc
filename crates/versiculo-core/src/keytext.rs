//! Textual verse keys: parsing `"Jn 3:16"`-style input and rendering
//! positions back to text.
//!
//! Accepted input is `<book> [<chapter> [(:|.|,) <verse>]]`, case-insensitive,
//! with missing chapter or verse defaulting to 1. The book part may carry a
//! numeric ordinal (`1 John`, `1. Mose`, `1Jn`) and a trailing dot, so OSIS
//! references such as `John.3.16` parse through the same grammar.
//!
//! Chapter and verse come back unnormalized; rolling them into range is the
//! versification's job.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::locale::Locale;
use crate::position::{Position, NEW_TESTAMENT, OLD_TESTAMENT};
use crate::versification::{BookInfo, Versification};

/// Both testaments; the unrestricted book search range.
pub const ALL_TESTAMENTS: RangeInclusive<u8> = OLD_TESTAMENT..=NEW_TESTAMENT;

static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<book>(?:[1-5]\s*\.?\s*)?[^\d\s:.,][^\d:,]*?)\s*(?:(?P<chapter>\d+)(?:\s*[:.,]\s*(?P<verse>\d+))?)?\s*$",
    )
    .expect("verse key pattern compiles")
});

/// A parsed key whose book is resolved but whose chapter and verse have not
/// been checked against the versification yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKey {
    pub testament: u8,
    pub book: u8,
    pub chapter: i64,
    pub verse: i64,
}

/// Parse `input`, resolving the book against `locale` first and the
/// canonical names second. Returns `None` when the text is not a key or the
/// book is unknown.
pub fn parse_key(input: &str, v11n: &Versification, locale: Option<&Locale>) -> Option<RawKey> {
    let caps = KEY_PATTERN.captures(input)?;
    let (testament, book) = resolve_book(&caps["book"], v11n, locale, ALL_TESTAMENTS)?;

    let number = |name: &str| match caps.name(name) {
        Some(m) => m.as_str().parse::<i64>().ok(),
        None => Some(1),
    };

    Some(RawKey {
        testament,
        book,
        chapter: number("chapter")?,
        verse: number("verse")?,
    })
}

/// Resolve a book name to `(testament, book)`.
///
/// Exact matches win over prefixes. Exact candidates are the locale's
/// display names and aliases, then the canonical names, OSIS ids and
/// abbreviations. Prefix matching then tries the locale's display names and
/// the canonical names, taking the first book in canon order. Only books in
/// `testaments` are considered.
pub fn resolve_book(
    name: &str,
    v11n: &Versification,
    locale: Option<&Locale>,
    testaments: RangeInclusive<u8>,
) -> Option<(u8, u8)> {
    let wanted = fold(name);
    if wanted.is_empty() {
        return None;
    }

    let candidates = || books_in(v11n, &testaments);
    let localized = |info: &BookInfo| locale.and_then(|l| l.book_name(&info.osis)).map(fold);

    let exact_localized = candidates()
        .find(|(_, _, info)| localized(info).as_deref() == Some(wanted.as_str()))
        .map(|(t, b, _)| (t, b));
    if exact_localized.is_some() {
        return exact_localized;
    }

    if let Some(locale) = locale {
        let alias = locale
            .aliases
            .iter()
            .filter(|(alias, _)| fold(alias) == wanted)
            .filter_map(|(_, osis)| v11n.find_osis(osis))
            .find(|(testament, _)| testaments.contains(testament));
        if alias.is_some() {
            return alias;
        }
    }

    let exact_canonical = candidates()
        .find(|(_, _, info)| {
            fold(&info.name) == wanted
                || fold(&info.osis) == wanted
                || info.abbreviations.iter().any(|a| fold(a) == wanted)
        })
        .map(|(t, b, _)| (t, b));
    if exact_canonical.is_some() {
        return exact_canonical;
    }

    candidates()
        .find(|(_, _, info)| {
            localized(info).is_some_and(|name| name.starts_with(wanted.as_str()))
        })
        .or_else(|| candidates().find(|(_, _, info)| fold(&info.name).starts_with(wanted.as_str())))
        .map(|(t, b, _)| (t, b))
}

fn books_in<'a>(
    v11n: &'a Versification,
    testaments: &'a RangeInclusive<u8>,
) -> impl Iterator<Item = (u8, u8, &'a BookInfo)> + 'a {
    v11n.books()
        .filter(move |(testament, _, _)| testaments.contains(testament))
}

/// Lowercase and drop whitespace and dots, so `"1. Mose"`, `"1 mose"` and
/// `"1Mose"` compare equal.
fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display name of `info` under `locale`, falling back to the canonical name.
pub fn book_display_name<'a>(info: &'a BookInfo, locale: Option<&'a Locale>) -> &'a str {
    locale
        .and_then(|l| l.book_name(&info.osis))
        .unwrap_or(&info.name)
}

pub fn format_key(book_name: &str, chapter: u16, verse: u16) -> String {
    format!("{} {}:{}", book_name, chapter, verse)
}

/// Render `position` as `"<book> <chapter>:<verse>"`. Without a locale the
/// result is the canonical key.
pub fn render_key(position: Position, v11n: &Versification, locale: Option<&Locale>) -> String {
    match v11n.book(position.testament, position.book) {
        Some(info) => format_key(
            book_display_name(info, locale),
            position.chapter,
            position.verse,
        ),
        None => position.to_string(),
    }
}

/// Render `position` as an OSIS reference, e.g. `"John.3.16"`.
pub fn render_osis(position: Position, v11n: &Versification) -> String {
    match v11n.book(position.testament, position.book) {
        Some(info) => format!("{}.{}.{}", info.osis, position.chapter, position.verse),
        None => position.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versification::kjv;

    fn parse(input: &str) -> Option<RawKey> {
        parse_key(input, &kjv(), None)
    }

    fn raw(testament: u8, book: u8, chapter: i64, verse: i64) -> RawKey {
        RawKey {
            testament,
            book,
            chapter,
            verse,
        }
    }

    #[test]
    fn test_parse_canonical_forms() {
        assert_eq!(parse("John 3:16"), Some(raw(2, 4, 3, 16)));
        assert_eq!(parse("  jn 3:16 "), Some(raw(2, 4, 3, 16)));
        assert_eq!(parse("Jn3:16"), Some(raw(2, 4, 3, 16)));
        assert_eq!(parse("1 John 2:3"), Some(raw(2, 23, 2, 3)));
        assert_eq!(parse("1Jn 2,3"), Some(raw(2, 23, 2, 3)));
        assert_eq!(parse("Song of Solomon 2:1"), Some(raw(1, 22, 2, 1)));
        assert_eq!(parse("Psalm 119:105"), Some(raw(1, 19, 119, 105)));
    }

    #[test]
    fn test_parse_defaults_missing_numbers_to_one() {
        assert_eq!(parse("Genesis"), Some(raw(1, 1, 1, 1)));
        assert_eq!(parse("Gen. 3"), Some(raw(1, 1, 3, 1)));
    }

    #[test]
    fn test_parse_osis_reference() {
        assert_eq!(parse("John.3.16"), Some(raw(2, 4, 3, 16)));
        assert_eq!(parse("1Cor.13.4"), Some(raw(2, 7, 13, 4)));
    }

    #[test]
    fn test_parse_keeps_out_of_range_numbers() {
        assert_eq!(parse("Mal 5:1"), Some(raw(1, 39, 5, 1)));
        assert_eq!(parse("Gen 1:0"), Some(raw(1, 1, 1, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("3:16"), None);
        assert_eq!(parse("Tobit 1:1"), None);
        assert_eq!(parse("Gen 1:1 and more"), None);
        assert_eq!(parse("Gen 1:-1"), None);
        assert_eq!(parse("Gen 99999999999999999999"), None);
    }

    #[test]
    fn test_prefix_match_takes_first_in_canon_order() {
        assert_eq!(parse("Gene 1:1"), Some(raw(1, 1, 1, 1)));
        assert_eq!(parse("Jo 1:1"), Some(raw(1, 6, 1, 1)));
        assert_eq!(
            resolve_book("Jo", &kjv(), None, NEW_TESTAMENT..=NEW_TESTAMENT),
            Some((2, 4))
        );
        assert_eq!(
            resolve_book("Genesis", &kjv(), None, NEW_TESTAMENT..=NEW_TESTAMENT),
            None
        );
    }

    #[test]
    fn test_parse_localized_names() {
        let v11n = kjv();
        let es = Locale::spanish();
        let de = Locale::german();

        assert_eq!(parse_key("Juan 3:16", &v11n, Some(&es)), Some(raw(2, 4, 3, 16)));
        assert_eq!(parse_key("apocalipsis 22", &v11n, Some(&es)), Some(raw(2, 27, 22, 1)));
        assert_eq!(parse_key("1. Mose 3:1", &v11n, Some(&de)), Some(raw(1, 1, 3, 1)));
        assert_eq!(parse_key("Offb 22:21", &v11n, Some(&de)), Some(raw(2, 27, 22, 21)));
        // Canonical names keep working under any locale.
        assert_eq!(parse_key("John 3:16", &v11n, Some(&de)), Some(raw(2, 4, 3, 16)));
        // "Jn" is a Spanish alias and an English abbreviation for the same book.
        assert_eq!(parse_key("Jn 1:1", &v11n, Some(&es)), Some(raw(2, 4, 1, 1)));
    }

    #[test]
    fn test_render() {
        let v11n = kjv();
        let john = Position::new(2, 4, 3, 16);

        assert_eq!(render_key(john, &v11n, None), "John 3:16");
        assert_eq!(render_key(john, &v11n, Some(&Locale::spanish())), "Juan 3:16");
        assert_eq!(
            render_key(Position::new(1, 1, 1, 1), &v11n, Some(&Locale::german())),
            "1. Mose 1:1"
        );
        assert_eq!(render_osis(john, &v11n), "John.3.16");
        assert_eq!(render_key(Position::new(3, 1, 1, 1), &v11n, None), "3.1.1.1");
    }

    #[test]
    fn test_localized_rendering_parses_back() {
        let v11n = kjv();
        let de = Locale::german();
        for (testament, book, info) in v11n.books() {
            let last = info.chapter_count();
            let position = Position::new(testament, book, last, 1);
            let text = render_key(position, &v11n, Some(&de));
            assert_eq!(
                parse_key(&text, &v11n, Some(&de)),
                Some(raw(testament, book, i64::from(last), 1)),
                "{}",
                text
            );
        }
    }
}
