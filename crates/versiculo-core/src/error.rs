use thiserror::Error;

use crate::module::CursorError;
use crate::position::Position;
use crate::versekey::{Direction, Granularity};

/// Why a verse key operation did not fully succeed.
///
/// None of these are fatal: the key is always left at a valid position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Not a verse key: {input:?}")]
    Parse { input: String },

    #[error("Key out of range, clamped to {clamped_to}")]
    Range { clamped_to: Position },

    #[error("No {granularity} {direction} the current one")]
    NavigationTerminal {
        direction: Direction,
        granularity: Granularity,
    },

    #[error("Module cursor error: {0}")]
    ModuleCursor(#[from] CursorError),

    #[error("A verse key cannot bind to a {kind} module")]
    UnsupportedModule { kind: &'static str },
}

pub type KeyResult<T> = std::result::Result<T, KeyError>;
