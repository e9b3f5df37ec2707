//! Translate Chinese Xiangqi move notation into ICCS coordinate moves.
//!
//! ```
//! use xiangqi_notation::board::Board;
//! use xiangqi_notation::translate::{translate, TranslateOptions};
//!
//! let board = Board::new();
//! let result = translate(&board, "炮二平五", &TranslateOptions::default()).unwrap();
//! assert_eq!(result.iccs.to_string(), "h2e2");
//! ```

// Log records only exist with the `logging` feature; otherwise these expand
// to nothing.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    };
}

macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::warn!($($arg)*);
        }
    };
}

pub mod board;
pub mod protocol;
pub mod translate;

pub use board::{Board, Color, Move, MoveDescriptor, Piece, Square};
pub use translate::{translate, translate_fen, TranslateError, TranslateOptions, Translation};
