//! Line-based command driver.
//!
//! Reads one command per line and answers with single-line replies such as
//! `move h2e2`, `valid true` or `error <message>`. Moves given to `play` and
//! after `position ... moves` may be ICCS text or Chinese notation.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, GameStatus, Move, MoveDescriptor};
use crate::translate::{translate, TranslateError, TranslateOptions};

pub mod command;
pub mod options;

use command::{parse_command, Command};
use options::{parse_setoption, SessionOptions};

/// Error type for driver commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A move, square or position argument was rejected
    Translate(TranslateError),
    /// Invalid move in a `position ... moves` list
    InvalidMove { move_str: String, error: TranslateError },
    /// The command needs an argument that was not given
    MissingArgument { command: &'static str },
    /// `setoption` named an option the driver does not have
    UnknownOption { name: String },
    /// `legal` was given something other than red or black
    InvalidColor { found: String },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Translate(e) => write!(f, "{e}"),
            ProtocolError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            ProtocolError::MissingArgument { command } => {
                write!(f, "Missing argument for {command}")
            }
            ProtocolError::UnknownOption { name } => write!(f, "Unknown option: {name}"),
            ProtocolError::InvalidColor { found } => write!(f, "Invalid color: {found}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Translate(e) | ProtocolError::InvalidMove { error: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<TranslateError> for ProtocolError {
    fn from(e: TranslateError) -> Self {
        ProtocolError::Translate(e)
    }
}

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Lines to print, possibly none
    Reply(Vec<String>),
    /// The session should end
    Quit,
}

/// Read a move as ICCS text, falling back to Chinese notation.
///
/// # Errors
/// Returns the ICCS error for ASCII text and the notation or resolution
/// error otherwise.
pub fn parse_any_move(board: &Board, text: &str) -> Result<Move, TranslateError> {
    let text = text.trim();
    if text.is_ascii() {
        return Ok(board.parse_move(text)?);
    }
    let desc = MoveDescriptor::parse(text, board.side_to_move())?;
    Ok(board.resolve(&desc)?)
}

/// Parse a `position` command into a new board.
///
/// Supports "position startpos" and "position fen <fields>", optionally
/// followed by "moves <move1> <move2> ...".
pub fn try_parse_position_command(parts: &[&str]) -> Result<Board, ProtocolError> {
    let missing = ProtocolError::MissingArgument {
        command: "position",
    };
    let moves_at = parts.iter().position(|p| *p == "moves").unwrap_or(parts.len());

    let mut board = match parts.get(1) {
        Some(&"startpos") => Board::new(),
        Some(&"fen") => {
            if moves_at <= 2 {
                return Err(missing);
            }
            let fen = parts[2..moves_at].join(" ");
            Board::try_from_fen(&fen).map_err(TranslateError::from)?
        }
        _ => return Err(missing),
    };

    for text in parts.iter().skip(moves_at + 1) {
        let mv = parse_any_move(&board, text).map_err(|error| ProtocolError::InvalidMove {
            move_str: (*text).to_string(),
            error,
        })?;
        board = board.apply_move(mv);
    }

    Ok(board)
}

fn parse_color(text: &str) -> Result<Color, ProtocolError> {
    match text.to_ascii_lowercase().as_str() {
        "red" | "r" | "w" => Ok(Color::Red),
        "black" | "b" => Ok(Color::Black),
        _ => Err(ProtocolError::InvalidColor {
            found: text.to_string(),
        }),
    }
}

fn status_line(board: &Board) -> String {
    match board.status() {
        GameStatus::Ongoing => "status ongoing".to_string(),
        GameStatus::Checkmate { winner } => {
            format!("status checkmate {}", winner.to_string().to_lowercase())
        }
        GameStatus::Stalemate => "status stalemate".to_string(),
    }
}

fn board_lines(board: &Board) -> Vec<String> {
    board.to_string().lines().map(str::to_string).collect()
}

/// Driver state: the current position and session options.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    options: SessionOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Process one input line. Failures become a single `error` line.
    pub fn process_line(&mut self, line: &str) -> CommandResult {
        let Some(cmd) = parse_command(line) else {
            return CommandResult::Reply(Vec::new());
        };
        if cmd == Command::Quit {
            return CommandResult::Quit;
        }
        match self.execute(cmd) {
            Ok(lines) => CommandResult::Reply(lines),
            Err(e) => {
                warn_log!("rejected '{}': {e}", line.trim());
                CommandResult::Reply(vec![format!("error {e}")])
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> Result<Vec<String>, ProtocolError> {
        let lines = match cmd {
            Command::IsReady => vec!["readyok".to_string()],
            Command::NewGame => {
                self.board = Board::new();
                Vec::new()
            }
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.board = try_parse_position_command(&parts)?;
                self.position_report()
            }
            Command::Translate(text) => {
                let mv = self.translate_text(&text, "translate")?;
                vec![format!("move {mv}")]
            }
            Command::Play(text) => {
                if text.is_empty() {
                    return Err(ProtocolError::MissingArgument { command: "play" });
                }
                let mv = parse_any_move(&self.board, &text)?;
                self.board = self.board.apply_move(mv);
                let mut lines = vec![format!("move {mv}")];
                lines.extend(self.position_report());
                lines
            }
            Command::Validate(text) => {
                if text.is_empty() {
                    return Err(ProtocolError::MissingArgument {
                        command: "validate",
                    });
                }
                let mv: Move = text.parse().map_err(TranslateError::from)?;
                vec![format!("valid {}", self.board.is_legal_move(mv))]
            }
            Command::Notation(text) => {
                if text.is_empty() {
                    return Err(ProtocolError::MissingArgument {
                        command: "notation",
                    });
                }
                let mv: Move = text.parse().map_err(TranslateError::from)?;
                let notation = self
                    .board
                    .move_to_notation(mv)
                    .map_err(TranslateError::from)?;
                vec![format!("notation {notation}")]
            }
            Command::Legal(color) => {
                let color = match color {
                    Some(text) => parse_color(&text)?,
                    None => self.board.side_to_move(),
                };
                let moves: Vec<String> = self
                    .board
                    .generate_moves_for(color)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                if moves.is_empty() {
                    vec!["moves".to_string()]
                } else {
                    vec![format!("moves {}", moves.join(" "))]
                }
            }
            Command::Status => vec![status_line(&self.board)],
            Command::Fen => vec![format!("fen {}", self.board.to_fen())],
            Command::Display => {
                let mut lines = board_lines(&self.board);
                lines.push(format!("fen {}", self.board.to_fen()));
                lines
            }
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) = parse_setoption(&parts).ok_or(
                    ProtocolError::MissingArgument {
                        command: "setoption",
                    },
                )?;
                if !self.options.apply_setoption(&name, value.as_deref()) {
                    return Err(ProtocolError::UnknownOption { name });
                }
                Vec::new()
            }
            Command::Quit => Vec::new(),
            Command::Unknown(text) => {
                debug_log!("ignoring unknown command '{text}'");
                vec![format!("error Unknown command: {text}")]
            }
        };
        Ok(lines)
    }

    fn translate_text(&self, text: &str, command: &'static str) -> Result<Move, ProtocolError> {
        if text.is_empty() {
            return Err(ProtocolError::MissingArgument { command });
        }
        let translation = translate(&self.board, text, &TranslateOptions::default())?;
        Ok(translation.iccs)
    }

    fn position_report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.options.show_board {
            lines.extend(board_lines(&self.board));
        }
        if self.options.show_fen {
            lines.push(format!("fen {}", self.board.to_fen()));
        }
        lines
    }
}

/// Run the driver on stdin and stdout until `quit` or end of input.
pub fn run_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();
    for option in session.options().describe() {
        writeln!(stdout, "{option}")?;
    }
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match session.process_line(&line) {
            CommandResult::Reply(lines) => {
                for reply in lines {
                    writeln!(stdout, "{reply}")?;
                }
            }
            CommandResult::Quit => break,
        }
        stdout.flush()?;
    }
    Ok(())
}
