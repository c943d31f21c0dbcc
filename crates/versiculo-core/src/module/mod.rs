//! The module collaborator a verse key binds to.
//!
//! A module is a scripture text (Bible, commentary, ...) that supplies a
//! versification, a valid range, a display locale and, while it is live, a
//! cursor of its own. The key engine only consumes this interface; storage
//! and rendering of module text are someone else's concern.

pub mod memory;

use std::cell::RefMut;
use std::ops::{Deref, DerefMut, RangeInclusive};
use std::sync::Arc;

use thiserror::Error;

use crate::keytext;
use crate::locale::Locale;
use crate::position::ModuleBounds;
use crate::versification::Versification;

pub use memory::MemoryModule;

/// What kind of text a module holds. Versified kinds carry their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Bible(ModuleBounds),
    Commentary(ModuleBounds),
    GenericBook,
    Lexicon,
    Unknown,
}

impl ModuleKind {
    pub fn bounds(&self) -> Option<ModuleBounds> {
        match self {
            Self::Bible(bounds) | Self::Commentary(bounds) => Some(*bounds),
            Self::GenericBook | Self::Lexicon | Self::Unknown => None,
        }
    }

    /// `true` for Bibles and commentaries, the kinds a verse key can bind to.
    pub fn is_versified(&self) -> bool {
        self.bounds().is_some()
    }

    pub fn is_bible(&self) -> bool {
        matches!(self, Self::Bible(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bible(_) => "bible",
            Self::Commentary(_) => "commentary",
            Self::GenericBook => "generic book",
            Self::Lexicon => "lexicon",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor moved outside the module")]
    OutOfBounds,
    #[error("cursor cannot be placed at {0:?}")]
    InvalidKey(String),
}

/// Transient settings of a module cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorFlags {
    /// Step over entries linked to the one before them.
    pub skip_consecutive_links: bool,
    /// Never stop on a chapter's introductory heading (verse 0).
    pub suppress_intro_headings: bool,
}

impl CursorFlags {
    /// The settings verse navigation runs with.
    pub const NAVIGATION: CursorFlags = CursorFlags {
        skip_consecutive_links: true,
        suppress_intro_headings: true,
    };
}

/// A module's own position, shared by every consumer of the module.
pub trait ModuleCursor {
    fn flags(&self) -> CursorFlags;
    fn set_flags(&mut self, flags: CursorFlags);

    /// Current position as a canonical key.
    fn text(&self) -> String;
    fn set_text(&mut self, key: &str) -> Result<(), CursorError>;

    fn advance(&mut self) -> Result<(), CursorError>;
    fn retreat(&mut self) -> Result<(), CursorError>;
}

pub trait Module {
    fn name(&self) -> &str;
    fn kind(&self) -> ModuleKind;
    fn versification(&self) -> Arc<Versification>;
    fn has_old_testament(&self) -> bool;
    fn has_new_testament(&self) -> bool;

    /// Locale the module displays book names in.
    fn locale(&self) -> Arc<Locale>;

    /// Borrow the module's cursor. `None` while the module is not live.
    fn cursor(&self) -> Option<RefMut<'_, dyn ModuleCursor>>;

    fn versification_bounds(&self) -> Option<ModuleBounds> {
        self.kind().bounds()
    }

    /// Localized name of book `(testament, book)`.
    fn locale_book_name(&self, testament: u8, book: u8) -> Option<String> {
        let v11n = self.versification();
        let locale = self.locale();
        let info = v11n.book(testament, book)?;
        Some(keytext::book_display_name(info, Some(&locale)).to_string())
    }

    /// Resolve a (possibly localized) book name within `testaments`.
    fn resolve_localized_book_name(
        &self,
        name: &str,
        testaments: RangeInclusive<u8>,
    ) -> Option<(u8, u8)> {
        let locale = self.locale();
        keytext::resolve_book(name, &self.versification(), Some(&locale), testaments)
    }
}

/// Exclusive, scoped use of a module cursor.
///
/// Acquiring installs the caller's flags; dropping puts the previous flags
/// back, whichever way the scope is left.
pub struct CursorSession<'a> {
    cursor: RefMut<'a, dyn ModuleCursor>,
    saved: CursorFlags,
}

impl<'a> CursorSession<'a> {
    pub fn acquire(mut cursor: RefMut<'a, dyn ModuleCursor>, flags: CursorFlags) -> Self {
        let saved = cursor.flags();
        cursor.set_flags(flags);
        Self { cursor, saved }
    }
}

impl<'a> Deref for CursorSession<'a> {
    type Target = dyn ModuleCursor + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl DerefMut for CursorSession<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}

impl Drop for CursorSession<'_> {
    fn drop(&mut self) {
        self.cursor.set_flags(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_kind_bounds() {
        let bounds = ModuleBounds::new(Position::new(1, 1, 1, 1), Position::new(2, 27, 22, 21));

        assert_eq!(ModuleKind::Bible(bounds).bounds(), Some(bounds));
        assert!(ModuleKind::Commentary(bounds).is_versified());
        assert!(!ModuleKind::Commentary(bounds).is_bible());
        assert!(!ModuleKind::GenericBook.is_versified());
        assert_eq!(ModuleKind::Lexicon.label(), "lexicon");
    }

    #[test]
    fn test_session_restores_flags_on_drop() {
        let module = MemoryModule::bible("KJV");
        let original = CursorFlags {
            skip_consecutive_links: false,
            suppress_intro_headings: false,
        };
        module.cursor().unwrap().set_flags(original);

        {
            let cursor = module.cursor().unwrap();
            let mut session = CursorSession::acquire(cursor, CursorFlags::NAVIGATION);
            assert_eq!(session.flags(), CursorFlags::NAVIGATION);
            session.set_text("Gen 1:1").unwrap();
            session.advance().unwrap();
        }
        assert_eq!(module.cursor().unwrap().flags(), original);
    }

    #[test]
    fn test_session_restores_flags_after_failure() {
        let module = MemoryModule::bible("KJV");
        let outcome = (|| -> Result<(), CursorError> {
            let mut session =
                CursorSession::acquire(module.cursor().unwrap(), CursorFlags::NAVIGATION);
            session.set_text("Rev 22:21")?;
            session.advance()
        })();

        assert_eq!(outcome, Err(CursorError::OutOfBounds));
        assert_eq!(module.cursor().unwrap().flags(), CursorFlags::default());
    }
}
