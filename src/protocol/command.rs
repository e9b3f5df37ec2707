/// A single driver command, split from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    IsReady,
    NewGame,
    Position(Vec<String>),
    Translate(String),
    Play(String),
    Validate(String),
    Notation(String),
    Legal(Option<String>),
    Status,
    Fen,
    Display,
    SetOption(Vec<String>),
    Quit,
    Unknown(String),
}

/// Text following the command word, with inner spacing kept.
fn argument(trimmed: &str, word: &str) -> String {
    trimmed[word.len()..].trim().to_string()
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let word = parts[0];

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match word {
        "isready" => Command::IsReady,
        "newgame" => Command::NewGame,
        "position" => Command::Position(owned_parts()),
        "translate" => Command::Translate(argument(trimmed, word)),
        "play" => Command::Play(argument(trimmed, word)),
        "validate" => Command::Validate(argument(trimmed, word)),
        "notation" => Command::Notation(argument(trimmed, word)),
        "legal" => Command::Legal(parts.get(1).map(|v| (*v).to_string())),
        "status" => Command::Status,
        "fen" => Command::Fen,
        "d" => Command::Display,
        "setoption" => Command::SetOption(owned_parts()),
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
