/// Per-session switches controlled by `setoption`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print the FEN after every `play` and `position`
    pub show_fen: bool,
    /// Print the board diagram after every `play` and `position`
    pub show_board: bool,
}

impl SessionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines announcing the available options.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option name ShowFen type check default {}", self.show_fen),
            format!("option name ShowBoard type check default {}", self.show_board),
        ]
    }

    /// Apply one option. Returns `false` when the name is not known.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let enabled = value.is_some_and(|v| {
            matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on")
        });
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "showfen" | "show fen" => self.show_fen = enabled,
            "showboard" | "show board" => self.show_board = enabled,
            _ => return false,
        }
        true
    }
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setoption() {
        let parts = ["setoption", "name", "Show", "Fen", "value", "true"];
        assert_eq!(
            parse_setoption(&parts),
            Some(("Show Fen".to_string(), Some("true".to_string())))
        );
        assert_eq!(parse_setoption(&["setoption", "value", "1"]), None);
        assert_eq!(parse_setoption(&["position", "name", "x"]), None);
    }

    #[test]
    fn test_apply_setoption() {
        let mut options = SessionOptions::new();
        assert!(options.apply_setoption("ShowFen", Some("true")));
        assert!(options.show_fen);
        assert!(options.apply_setoption("show board", Some("ON")));
        assert!(options.show_board);
        assert!(options.apply_setoption("ShowFen", Some("false")));
        assert!(!options.show_fen);
        assert!(!options.apply_setoption("Hash", Some("64")));
    }
}
