//! # The Verse Key Engine
//!
//! [`VerseKeyEngine`] holds one position in a scripture text and converts
//! it to and from its textual form (`"John 3:16"`). It optionally binds to a
//! [`Module`], which supplies the versification, the valid range, the
//! display locale and a cursor used for verse stepping.
//!
//! ## Invariants
//!
//! - The position is always a valid verse of the active versification and,
//!   when a Bible or commentary is bound, lies inside the module's bounds.
//!   Out-of-range input is clamped, never stored.
//! - Failures are reported, not raised: every mutating operation clears the
//!   one-shot error slot on entry and consumes it before returning, so a
//!   failed call never taints the next one.
//!
//! ## Change notifications
//!
//! Listeners registered with [`VerseKeyEngine::subscribe`] receive a
//! [`ChangePhase::Before`] event carrying the old position, then the
//! mutation happens, then a [`ChangePhase::After`] event carrying the new
//! one. [`VerseKeyEngine::set_key`] always emits the `After` event, even when
//! nothing was parsed, because redraw logic downstream depends on it.
//!
//! ## Navigation
//!
//! | Granularity | Forward | Backward |
//! |---|---|---|
//! | Book | next book, Malachi rolls to Matthew, stops after Revelation | previous book, Matthew rolls to Malachi, stops before Genesis |
//! | Chapter | next chapter, normalization rolls across books | previous chapter, same |
//! | Verse | delegated to the module cursor when live, else `verse + 1` | mirrored |
//!
//! Book and chapter steps land on verse 1 of the target chapter.
//!
//! The engine uses `Rc` and `RefCell` and is meant to live on a single
//! thread.

use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{KeyError, KeyResult};
use crate::keytext::{self, ALL_TESTAMENTS};
use crate::module::{CursorFlags, CursorSession, Module, ModuleKind};
use crate::position::{ModuleBounds, Position, NEW_TESTAMENT, OLD_TESTAMENT};
use crate::versification::{self, Normalized, Versification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Book,
    Chapter,
    Verse,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Book => "book",
            Self::Chapter => "chapter",
            Self::Verse => "verse",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "after",
            Self::Backward => "before",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePhase {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChange {
    pub phase: ChangePhase,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&KeyChange)>;

pub struct VerseKeyEngine {
    position: Position,
    versification: Arc<Versification>,
    module: Option<Rc<dyn Module>>,
    error: Option<KeyError>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl VerseKeyEngine {
    /// Create a key, optionally bound to `module`.
    ///
    /// A Bible or commentary lends the key its versification and the key
    /// starts at the module's lower bound. Any other module, or none, leaves
    /// the key at Genesis 1:1 of the built-in versification.
    pub fn new(module: Option<Rc<dyn Module>>) -> Self {
        let mut key = Self {
            position: Position::default(),
            versification: versification::kjv(),
            module: None,
            error: None,
            listeners: Vec::new(),
            next_listener: 0,
        };
        if let Some(module) = module {
            if let Some(bounds) = module.versification_bounds() {
                key.versification = module.versification();
                key.position = bounds.lower;
            }
            key.module = Some(module);
        }
        key
    }

    pub fn unbound() -> Self {
        Self::new(None)
    }

    pub fn bound(module: Rc<dyn Module>) -> Self {
        Self::new(Some(module))
    }

    /// Bind to another Bible or commentary.
    ///
    /// Adopts the module's versification and snaps the current position into
    /// its bounds. This is a structural change: no notifications are sent.
    pub fn rebind(&mut self, module: Rc<dyn Module>) -> KeyResult<()> {
        if let Some(current) = &self.module {
            if std::ptr::addr_eq(Rc::as_ptr(current), Rc::as_ptr(&module)) {
                return Ok(());
            }
        }
        let kind = module.kind();
        let Some(bounds) = kind.bounds() else {
            return Err(KeyError::UnsupportedModule { kind: kind.label() });
        };

        self.versification = module.versification();
        let renormalized = self
            .versification
            .normalize_position(self.position, false)
            .position;
        let (position, moved) = bounds.clamp(renormalized);
        debug!(
            module = module.name(),
            from = %self.position,
            to = %position,
            clamped = moved,
            "verse key rebound"
        );
        self.position = position;
        self.module = Some(module);
        self.error = None;
        Ok(())
    }

    pub fn module(&self) -> Option<&Rc<dyn Module>> {
        self.module.as_ref()
    }

    pub fn versification(&self) -> &Arc<Versification> {
        &self.versification
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn testament(&self) -> u8 {
        self.position.testament
    }

    pub fn book_index(&self) -> u8 {
        self.position.book
    }

    pub fn chapter(&self) -> u16 {
        self.position.chapter
    }

    pub fn verse(&self) -> u16 {
        self.position.verse
    }

    /// Parse `text` and move there. Returns `true` when the text resolved to
    /// a position without clamping. See [`try_set_key`](Self::try_set_key).
    pub fn set_key(&mut self, text: &str) -> bool {
        self.try_set_key(text).is_ok()
    }

    /// Parse `text` and move there.
    ///
    /// Empty text resets a key bound to a Bible to the module's lower bound.
    /// Unparseable text leaves the position alone. Either way the `After`
    /// notification is sent.
    pub fn try_set_key(&mut self, text: &str) -> KeyResult<()> {
        self.error = None;

        if !text.trim().is_empty() {
            self.emit(ChangePhase::Before);
            match self.parse(text) {
                Some(normalized) => self.assign(normalized),
                None => {
                    debug!(input = text, "verse key did not parse");
                    self.error = Some(KeyError::Parse {
                        input: text.to_string(),
                    });
                }
            }
        } else if let Some(ModuleKind::Bible(bounds)) = self.module.as_ref().map(|m| m.kind()) {
            self.emit(ChangePhase::Before);
            self.position = bounds.lower;
        }

        self.emit(ChangePhase::After);
        self.take_error()
    }

    /// Move to a structured position, normalizing and clamping it like any
    /// parsed key.
    pub fn set_position(&mut self, position: Position) -> KeyResult<()> {
        self.error = None;
        self.emit(ChangePhase::Before);
        let normalized = self.versification.normalize_position(position, false);
        self.assign(normalized);
        self.emit(ChangePhase::After);
        self.take_error()
    }

    /// The key in the bound module's locale, or the canonical key when no
    /// Bible or commentary is bound.
    pub fn key(&self) -> String {
        let Position {
            testament,
            book,
            chapter,
            verse,
        } = self.position;
        match self
            .versified_module()
            .and_then(|m| m.locale_book_name(testament, book))
        {
            Some(name) => keytext::format_key(&name, chapter, verse),
            None => self.raw_key(),
        }
    }

    /// The canonical, untranslated key.
    pub fn raw_key(&self) -> String {
        keytext::render_key(self.position, &self.versification, None)
    }

    pub fn osis_ref(&self) -> String {
        keytext::render_osis(self.position, &self.versification)
    }

    /// Query, and optionally change, the current book by name.
    ///
    /// The name is resolved among the testaments the bound module contains.
    /// A name that does not resolve leaves the position alone and sets the
    /// error slot. Returns the localized name of the current book, or `None`
    /// when it lies outside the module's testaments (always the case for a
    /// module with neither testament).
    pub fn book(&mut self, new_name: Option<&str>) -> Option<String> {
        self.error = None;
        let testaments = self.testament_range();

        if let Some(name) = new_name.filter(|n| !n.trim().is_empty()) {
            let resolved = testaments
                .clone()
                .and_then(|range| self.resolve_book(name, range));
            match resolved {
                Some((testament, book)) => {
                    self.emit(ChangePhase::Before);
                    self.assign(Normalized {
                        position: Position::new(testament, book, 1, 1),
                        clamped: false,
                    });
                    self.emit(ChangePhase::After);
                }
                None => {
                    debug!(book = name, "book name did not resolve");
                    self.error = Some(KeyError::Parse {
                        input: name.to_string(),
                    });
                }
            }
        }

        let range = testaments?;
        let Position { testament, book, .. } = self.position;
        if range.contains(&testament) && book <= self.versification.book_max(testament) {
            Some(self.book_name(testament, book))
        } else {
            None
        }
    }

    pub fn next(&mut self, granularity: Granularity) -> bool {
        self.step(Direction::Forward, granularity).is_ok()
    }

    pub fn previous(&mut self, granularity: Granularity) -> bool {
        self.step(Direction::Backward, granularity).is_ok()
    }

    /// Move one book, chapter or verse.
    ///
    /// Steps off either end of the canon, and failed module cursor steps,
    /// leave the position untouched and send no notifications. Steps that
    /// land outside the bound module's range are clamped to it and reported
    /// as [`KeyError::Range`].
    ///
    /// Book and chapter steps land on verse 1 of their target, so a book step
    /// forward and back returns to the start only from a book's first verse.
    pub fn step(&mut self, direction: Direction, granularity: Granularity) -> KeyResult<()> {
        self.error = None;

        let target = match self.step_target(direction, granularity) {
            Ok(target) => target,
            Err(err) => {
                debug!(error = %err, key = %self.position, "verse key step refused");
                return Err(err);
            }
        };

        self.emit(ChangePhase::Before);
        self.assign(target);
        self.emit(ChangePhase::After);
        self.take_error()
    }

    /// Take the pending error, if any.
    pub fn pop_error(&mut self) -> Option<KeyError> {
        self.error.take()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&KeyChange) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    fn versified_module(&self) -> Option<&Rc<dyn Module>> {
        self.module.as_ref().filter(|m| m.kind().is_versified())
    }

    fn bounds(&self) -> Option<ModuleBounds> {
        self.module.as_ref().and_then(|m| m.versification_bounds())
    }

    fn emit(&mut self, phase: ChangePhase) {
        let change = KeyChange {
            phase,
            position: self.position,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }

    fn take_error(&mut self) -> KeyResult<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Store a normalized position, clamping it into the module's bounds.
    fn assign(&mut self, normalized: Normalized) {
        self.position = normalized.position;
        if normalized.clamped {
            self.error = Some(KeyError::Range {
                clamped_to: self.position,
            });
        }

        if let Some(bounds) = self.bounds() {
            let (position, moved) = bounds.clamp(self.position);
            if moved {
                debug!(
                    requested = %self.position,
                    clamped_to = %position,
                    "verse key clamped to module bounds"
                );
                self.position = position;
                self.error = Some(KeyError::Range {
                    clamped_to: position,
                });
            }
        }
    }

    fn parse(&self, text: &str) -> Option<Normalized> {
        let locale = self.versified_module().map(|m| m.locale());
        let raw = keytext::parse_key(text, &self.versification, locale.as_deref())?;
        Some(self.normalize_raw(raw))
    }

    fn normalize_raw(&self, raw: keytext::RawKey) -> Normalized {
        self.versification.normalize(
            i64::from(raw.testament),
            i64::from(raw.book),
            raw.chapter,
            raw.verse,
            false,
        )
    }

    fn step_target(&self, direction: Direction, granularity: Granularity) -> KeyResult<Normalized> {
        let Position {
            testament,
            book,
            chapter,
            verse,
        } = self.position;
        let v11n = &self.versification;
        let at = |t: u8, b: i64, c: i64, v: i64| v11n.normalize(i64::from(t), b, c, v, false);
        let terminal = KeyError::NavigationTerminal {
            direction,
            granularity,
        };
        let (book, chapter, verse) = (i64::from(book), i64::from(chapter), i64::from(verse));

        let target = match (granularity, direction) {
            (Granularity::Book, Direction::Forward) => {
                let last = i64::from(v11n.book_max(testament));
                if testament == NEW_TESTAMENT && book >= last {
                    return Err(terminal);
                } else if testament == OLD_TESTAMENT && book >= last {
                    at(NEW_TESTAMENT, 1, 1, 1)
                } else {
                    at(testament, book + 1, 1, 1)
                }
            }
            (Granularity::Book, Direction::Backward) => {
                if book == 1 && testament == OLD_TESTAMENT {
                    return Err(terminal);
                } else if book == 1 && testament == NEW_TESTAMENT {
                    at(OLD_TESTAMENT, i64::from(v11n.book_max(OLD_TESTAMENT)), 1, 1)
                } else {
                    at(testament, book - 1, 1, 1)
                }
            }
            (Granularity::Chapter, Direction::Forward) => at(testament, book, chapter + 1, 1),
            (Granularity::Chapter, Direction::Backward) => at(testament, book, chapter - 1, 1),
            (Granularity::Verse, direction) => match self.cursor_step(direction)? {
                Some(stepped) => stepped,
                None => {
                    let delta = match direction {
                        Direction::Forward => 1,
                        Direction::Backward => -1,
                    };
                    at(testament, book, chapter, verse + delta)
                }
            },
        };
        Ok(target)
    }

    /// Step through the bound module's own cursor, which knows about linked
    /// verses. `Ok(None)` means there is no live cursor to use.
    fn cursor_step(&self, direction: Direction) -> KeyResult<Option<Normalized>> {
        let Some(module) = self.versified_module() else {
            return Ok(None);
        };
        let Some(cursor) = module.cursor() else {
            return Ok(None);
        };

        let origin = self.raw_key();
        let mut session = CursorSession::acquire(cursor, CursorFlags::NAVIGATION);
        session.set_text(&origin)?;
        let stepped = match direction {
            Direction::Forward => session.advance(),
            Direction::Backward => session.retreat(),
        };
        if let Err(err) = stepped {
            if let Err(restore) = session.set_text(&origin) {
                warn!(error = %restore, key = %origin, "module cursor could not be restored");
            }
            debug!(error = %err, key = %origin, module = module.name(), "module cursor step failed");
            return Err(err.into());
        }
        let text = session.text();
        drop(session);

        match keytext::parse_key(&text, &self.versification, None) {
            Some(raw) => Ok(Some(self.normalize_raw(raw))),
            None => Err(KeyError::Parse { input: text }),
        }
    }

    /// Testaments a book may be picked from: those the bound module
    /// contains, or both when no Bible or commentary is bound.
    fn testament_range(&self) -> Option<RangeInclusive<u8>> {
        match self.versified_module() {
            Some(module) => match (module.has_old_testament(), module.has_new_testament()) {
                (true, true) => Some(ALL_TESTAMENTS),
                (true, false) => Some(OLD_TESTAMENT..=OLD_TESTAMENT),
                (false, true) => Some(NEW_TESTAMENT..=NEW_TESTAMENT),
                (false, false) => None,
            },
            None => Some(ALL_TESTAMENTS),
        }
    }

    fn resolve_book(&self, name: &str, testaments: RangeInclusive<u8>) -> Option<(u8, u8)> {
        match self.versified_module() {
            Some(module) => module.resolve_localized_book_name(name, testaments),
            None => keytext::resolve_book(name, &self.versification, None, testaments),
        }
    }

    fn book_name(&self, testament: u8, book: u8) -> String {
        let localized = self
            .versified_module()
            .and_then(|m| m.locale_book_name(testament, book));
        localized
            .or_else(|| {
                self.versification
                    .book(testament, book)
                    .map(|info| info.name.clone())
            })
            .unwrap_or_default()
    }
}

impl Default for VerseKeyEngine {
    fn default() -> Self {
        Self::unbound()
    }
}

/// Copies share the module binding but not the listeners.
impl Clone for VerseKeyEngine {
    fn clone(&self) -> Self {
        Self {
            position: self.position,
            versification: Arc::clone(&self.versification),
            module: self.module.clone(),
            error: self.error.clone(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }
}

impl fmt::Debug for VerseKeyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerseKeyEngine")
            .field("position", &self.position)
            .field("versification", &self.versification.name())
            .field("module", &self.module.as_ref().map(|m| m.name().to_string()))
            .field("error", &self.error)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
