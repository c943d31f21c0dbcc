pub mod config;
pub mod error;
pub mod keytext;
pub mod locale;
pub mod module;
pub mod position;
pub mod versekey;
pub mod versification;

// Re-export main types for convenience
pub use config::Config;
pub use error::{KeyError, KeyResult};
pub use locale::{Locale, LocaleManager, CANONICAL_LOCALE};
pub use module::{
    CursorError, CursorFlags, CursorSession, MemoryModule, Module, ModuleCursor, ModuleKind,
};
pub use position::{ModuleBounds, Position, NEW_TESTAMENT, OLD_TESTAMENT};
pub use versekey::{
    ChangePhase, Direction, Granularity, KeyChange, ListenerId, VerseKeyEngine,
};
pub use versification::{kjv, BookInfo, Normalized, Versification};
