//! One-call translation from Chinese notation to ICCS moves.
//!
//! These functions wrap parsing, resolution and move application behind
//! a single error type, for callers that start from FEN text and want a
//! coordinate move back.

use std::fmt;

use crate::board::{
    Board, Color, FenError, Move, MoveDescriptor, MoveParseError, NotationError, ResolveError,
    Square, SquareError,
};

/// Options for [`translate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Attach the position after the move to the result
    pub include_board_after: bool,
}

impl TranslateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include_board_after(mut self, include: bool) -> Self {
        self.include_board_after = include;
        self
    }
}

/// A successfully translated move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub iccs: Move,
    pub descriptor: MoveDescriptor,
    pub board_after: Option<Board>,
}

impl Translation {
    /// FEN of the position after the move, when it was requested.
    #[must_use]
    pub fn fen_after(&self) -> Option<String> {
        self.board_after.as_ref().map(Board::to_fen)
    }
}

/// Error type for the translation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The position text could not be parsed
    Fen(FenError),
    /// The move text is not valid Chinese notation
    Notation(NotationError),
    /// The notation does not name exactly one legal move
    Resolve(ResolveError),
    /// A square name could not be parsed
    Square(SquareError),
    /// A coordinate move could not be parsed or is illegal
    Move(MoveParseError),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Fen(e) => write!(f, "Invalid FEN: {e}"),
            TranslateError::Notation(e) => write!(f, "Invalid notation: {e}"),
            TranslateError::Resolve(e) => write!(f, "{e}"),
            TranslateError::Square(e) => write!(f, "Invalid square: {e}"),
            TranslateError::Move(e) => write!(f, "Invalid move: {e}"),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Fen(e) => Some(e),
            TranslateError::Notation(e) => Some(e),
            TranslateError::Resolve(e) => Some(e),
            TranslateError::Square(e) => Some(e),
            TranslateError::Move(e) => Some(e),
        }
    }
}

impl From<FenError> for TranslateError {
    fn from(e: FenError) -> Self {
        TranslateError::Fen(e)
    }
}

impl From<NotationError> for TranslateError {
    fn from(e: NotationError) -> Self {
        TranslateError::Notation(e)
    }
}

impl From<ResolveError> for TranslateError {
    fn from(e: ResolveError) -> Self {
        TranslateError::Resolve(e)
    }
}

impl From<SquareError> for TranslateError {
    fn from(e: SquareError) -> Self {
        TranslateError::Square(e)
    }
}

impl From<MoveParseError> for TranslateError {
    fn from(e: MoveParseError) -> Self {
        TranslateError::Move(e)
    }
}

/// Translate Chinese notation for the side to move into an ICCS move.
///
/// # Errors
/// Returns `Notation` for unparsable text and `Resolve` when the text does
/// not describe exactly one legal move.
pub fn translate(
    board: &Board,
    text: &str,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    let descriptor = MoveDescriptor::parse(text, board.side_to_move())?;
    let iccs = board.resolve(&descriptor)?;
    debug_log!("translated {} to {iccs}", text.trim());

    let board_after = options
        .include_board_after
        .then(|| board.apply_move(iccs));
    Ok(Translation {
        iccs,
        descriptor,
        board_after,
    })
}

/// Translate Chinese notation against a position given as FEN.
///
/// # Example
/// ```
/// use xiangqi_notation::board::START_FEN;
/// use xiangqi_notation::translate::{translate_fen, TranslateOptions};
///
/// let options = TranslateOptions::new().include_board_after(true);
/// let result = translate_fen(START_FEN, "马二进三", &options).unwrap();
/// assert_eq!(result.iccs.to_string(), "h0g2");
/// assert!(result.fen_after().unwrap().contains(" b "));
/// ```
///
/// # Errors
/// Returns `Fen` for malformed position text, otherwise as [`translate`].
pub fn translate_fen(
    fen: &str,
    text: &str,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    let board = Board::try_from_fen(fen)?;
    translate(&board, text, options)
}

/// Translate a sequence of moves, playing each one before the next.
///
/// The result holds one entry per attempted move and ends at the first
/// failure. Every successful entry carries the position after its move.
pub fn translate_sequence<'a, I>(
    board: &Board,
    texts: I,
) -> Vec<Result<Translation, TranslateError>>
where
    I: IntoIterator<Item = &'a str>,
{
    let options = TranslateOptions::new().include_board_after(true);
    let mut current = board.clone();
    let mut results = Vec::new();
    for text in texts {
        match translate(&current, text, &options) {
            Ok(translation) => {
                if let Some(next) = &translation.board_after {
                    current = next.clone();
                }
                results.push(Ok(translation));
            }
            Err(e) => {
                debug_log!("sequence stopped at {}: {e}", text.trim());
                results.push(Err(e));
                break;
            }
        }
    }
    results
}

/// Check whether moving the piece on `from` to `to` is legal.
///
/// The piece's owner moves, whatever the side to move in `fen` is.
///
/// # Errors
/// Returns `Fen` or `Square` when the inputs cannot be parsed.
pub fn validate_move(fen: &str, from: &str, to: &str) -> Result<bool, TranslateError> {
    let board = Board::try_from_fen(fen)?;
    let from: Square = from.parse()?;
    let to: Square = to.parse()?;
    Ok(board.is_legal(from, to))
}

/// All legal moves for `color`, or for the side to move when `None`.
///
/// # Errors
/// Returns `Fen` when the position cannot be parsed.
pub fn legal_moves(fen: &str, color: Option<Color>) -> Result<Vec<Move>, TranslateError> {
    let board = Board::try_from_fen(fen)?;
    let color = color.unwrap_or(board.side_to_move());
    Ok(board.generate_moves_for(color).into_iter().collect())
}
