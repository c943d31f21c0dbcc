//! An in-memory module: versification, testament coverage and verse links,
//! without any stored text.

use std::cell::{RefCell, RefMut};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::{CursorError, CursorFlags, Module, ModuleCursor, ModuleKind};
use crate::keytext;
use crate::locale::Locale;
use crate::position::{ModuleBounds, Position, NEW_TESTAMENT, OLD_TESTAMENT};
use crate::versification::{self, Versification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Bible,
    Commentary,
    GenericBook,
    Lexicon,
}

#[derive(Debug)]
pub struct MemoryModule {
    name: String,
    flavor: Flavor,
    versification: Arc<Versification>,
    old_testament: bool,
    new_testament: bool,
    live: bool,
    locale: RefCell<Arc<Locale>>,
    cursor: RefCell<MemoryCursor>,
}

impl MemoryModule {
    fn with_flavor(name: &str, flavor: Flavor) -> Self {
        let versification = versification::kjv();
        let bounds = ModuleBounds::new(versification.first(), versification.last());
        Self {
            name: name.to_string(),
            flavor,
            cursor: RefCell::new(MemoryCursor::new(Arc::clone(&versification), bounds)),
            versification,
            old_testament: true,
            new_testament: true,
            live: true,
            locale: RefCell::new(Locale::english()),
        }
    }

    /// A KJV Bible covering both testaments.
    pub fn bible(name: &str) -> Self {
        Self::with_flavor(name, Flavor::Bible)
    }

    pub fn commentary(name: &str) -> Self {
        Self::with_flavor(name, Flavor::Commentary)
    }

    pub fn generic_book(name: &str) -> Self {
        Self::with_flavor(name, Flavor::GenericBook)
    }

    pub fn lexicon(name: &str) -> Self {
        Self::with_flavor(name, Flavor::Lexicon)
    }

    pub fn with_versification(mut self, versification: Arc<Versification>) -> Self {
        self.versification = versification;
        self.reset_cursor();
        self
    }

    /// Which testaments the module contains.
    pub fn with_testaments(mut self, old: bool, new: bool) -> Self {
        self.old_testament = old;
        self.new_testament = new;
        self.reset_cursor();
        self
    }

    pub fn with_locale(self, locale: Arc<Locale>) -> Self {
        self.set_locale(locale);
        self
    }

    /// Mark `position` as linked to the verse before it, the way combined
    /// verses are stored.
    pub fn with_link(mut self, position: Position) -> Self {
        self.cursor.get_mut().links.insert(position);
        self
    }

    /// A module whose cursor is unavailable, as if its backing data were not
    /// open.
    pub fn detached(mut self) -> Self {
        self.live = false;
        self
    }

    /// Change the display locale. Keys already bound to this module render
    /// with the new locale from then on.
    pub fn set_locale(&self, locale: Arc<Locale>) {
        *self.locale.borrow_mut() = locale;
    }

    /// Range covered by the module, derived from its testaments.
    pub fn bounds(&self) -> ModuleBounds {
        let v11n = &self.versification;
        match (self.old_testament, self.new_testament) {
            (true, false) => ModuleBounds::new(v11n.first(), v11n.testament_last(OLD_TESTAMENT)),
            (false, true) => ModuleBounds::new(v11n.testament_first(NEW_TESTAMENT), v11n.last()),
            _ => ModuleBounds::new(v11n.first(), v11n.last()),
        }
    }

    fn reset_cursor(&mut self) {
        let bounds = self.bounds();
        let cursor = self.cursor.get_mut();
        cursor.versification = Arc::clone(&self.versification);
        cursor.bounds = bounds;
        cursor.position = bounds.lower;
    }
}

impl Module for MemoryModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ModuleKind {
        match self.flavor {
            Flavor::Bible => ModuleKind::Bible(self.bounds()),
            Flavor::Commentary => ModuleKind::Commentary(self.bounds()),
            Flavor::GenericBook => ModuleKind::GenericBook,
            Flavor::Lexicon => ModuleKind::Lexicon,
        }
    }

    fn versification(&self) -> Arc<Versification> {
        Arc::clone(&self.versification)
    }

    fn has_old_testament(&self) -> bool {
        self.old_testament
    }

    fn has_new_testament(&self) -> bool {
        self.new_testament
    }

    fn locale(&self) -> Arc<Locale> {
        Arc::clone(&self.locale.borrow())
    }

    fn cursor(&self) -> Option<RefMut<'_, dyn ModuleCursor>> {
        if !self.live {
            return None;
        }
        Some(RefMut::map(self.cursor.borrow_mut(), |cursor| {
            cursor as &mut dyn ModuleCursor
        }))
    }
}

#[derive(Debug)]
struct MemoryCursor {
    versification: Arc<Versification>,
    bounds: ModuleBounds,
    links: BTreeSet<Position>,
    position: Position,
    flags: CursorFlags,
}

impl MemoryCursor {
    fn new(versification: Arc<Versification>, bounds: ModuleBounds) -> Self {
        Self {
            versification,
            bounds,
            links: BTreeSet::new(),
            position: bounds.lower,
            flags: CursorFlags::default(),
        }
    }

    fn headings(&self) -> bool {
        !self.flags.suppress_intro_headings
    }

    fn step(&mut self, delta: i64) -> Result<(), CursorError> {
        let mut current = self.position;
        loop {
            let next = self.versification.normalize(
                i64::from(current.testament),
                i64::from(current.book),
                i64::from(current.chapter),
                i64::from(current.verse) + delta,
                self.headings(),
            );
            if next.clamped || !self.bounds.contains(next.position) {
                return Err(CursorError::OutOfBounds);
            }
            current = next.position;
            if !(self.flags.skip_consecutive_links && self.links.contains(&current)) {
                break;
            }
        }
        self.position = current;
        Ok(())
    }
}

impl ModuleCursor for MemoryCursor {
    fn flags(&self) -> CursorFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: CursorFlags) {
        self.flags = flags;
    }

    fn text(&self) -> String {
        keytext::render_key(self.position, &self.versification, None)
    }

    fn set_text(&mut self, key: &str) -> Result<(), CursorError> {
        let raw = keytext::parse_key(key, &self.versification, None)
            .ok_or_else(|| CursorError::InvalidKey(key.to_string()))?;
        let normalized = self.versification.normalize(
            i64::from(raw.testament),
            i64::from(raw.book),
            raw.chapter,
            raw.verse,
            self.headings(),
        );
        if normalized.clamped {
            return Err(CursorError::InvalidKey(key.to_string()));
        }
        self.position = normalized.position;
        Ok(())
    }

    fn advance(&mut self) -> Result<(), CursorError> {
        self.step(1)
    }

    fn retreat(&mut self) -> Result<(), CursorError> {
        self.step(-1)
    }
}
