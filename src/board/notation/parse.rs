use super::super::error::NotationError;
use super::super::{Color, Piece};
use super::{MoveDescriptor, Movement, Tandem};

/// Piece named by a character, simplified or traditional, either side's form.
pub(crate) fn piece_from_char(c: char) -> Option<Piece> {
    match c {
        '帅' | '帥' | '将' | '將' => Some(Piece::King),
        '仕' | '士' => Some(Piece::Advisor),
        '相' | '象' => Some(Piece::Elephant),
        '马' | '馬' | '傌' => Some(Piece::Horse),
        '车' | '車' | '俥' => Some(Piece::Chariot),
        '炮' | '砲' | '包' => Some(Piece::Cannon),
        '兵' | '卒' => Some(Piece::Pawn),
        _ => None,
    }
}

/// Value 1-9 of a Chinese, full-width or ASCII numeral.
pub(crate) fn number_from_char(c: char) -> Option<u8> {
    let value = match c {
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '１'..='９' => c as u32 - '０' as u32,
        '1'..='9' => c as u32 - '0' as u32,
        _ => return None,
    };
    u8::try_from(value).ok()
}

pub(crate) fn movement_from_char(c: char) -> Option<Movement> {
    match c {
        '进' | '進' | '上' => Some(Movement::Advance),
        '退' | '下' => Some(Movement::Retreat),
        '平' | '横' | '橫' => Some(Movement::Traverse),
        _ => None,
    }
}

pub(crate) fn tandem_from_char(c: char) -> Option<Tandem> {
    match c {
        '前' => Some(Tandem::Front),
        '中' => Some(Tandem::Middle),
        '后' | '後' => Some(Tandem::Back),
        _ => None,
    }
}

impl MoveDescriptor {
    /// Parse four-character Chinese notation for a move by `color`.
    ///
    /// Two shapes are accepted: piece, source file, movement, target
    /// (`马八进七`) and 前/中/后, piece, movement, target (`前炮平五`).
    /// Surrounding whitespace is ignored.
    pub fn parse(text: &str, color: Color) -> Result<Self, NotationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NotationError::Empty);
        }
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 4 {
            return Err(NotationError::WrongLength {
                notation: text.to_string(),
                len: chars.len(),
            });
        }

        let (piece_char, tandem, source_file) = match tandem_from_char(chars[0]) {
            Some(tandem) => (chars[1], Some(tandem), None),
            None => {
                let file = number_from_char(chars[1])
                    .ok_or(NotationError::UnknownNumber { char: chars[1] })?;
                (chars[0], None, Some(file))
            }
        };
        let piece =
            piece_from_char(piece_char).ok_or(NotationError::UnknownPiece { char: piece_char })?;
        let movement = movement_from_char(chars[2])
            .ok_or(NotationError::UnknownMovement { char: chars[2] })?;
        let target =
            number_from_char(chars[3]).ok_or(NotationError::UnknownNumber { char: chars[3] })?;

        Ok(MoveDescriptor {
            piece,
            color,
            source_file,
            movement,
            target,
            tandem,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard() {
        let desc = MoveDescriptor::parse("马八进七", Color::Red).unwrap();
        assert_eq!(
            desc,
            MoveDescriptor::new(Piece::Horse, Color::Red, 8, Movement::Advance, 7)
        );

        let desc = MoveDescriptor::parse("车九退一", Color::Black).unwrap();
        assert_eq!(desc.piece, Piece::Chariot);
        assert_eq!(desc.color, Color::Black);
        assert_eq!(desc.source_file, Some(9));
        assert_eq!(desc.movement, Movement::Retreat);
        assert_eq!(desc.target, 1);
    }

    #[test]
    fn test_parse_table() {
        let cases = [
            ("兵三进一", Piece::Pawn, 3, Movement::Advance, 1),
            ("将五进一", Piece::King, 5, Movement::Advance, 1),
            ("帥5平4", Piece::King, 5, Movement::Traverse, 4),
            ("俥１平２", Piece::Chariot, 1, Movement::Traverse, 2),
            ("砲二平五", Piece::Cannon, 2, Movement::Traverse, 5),
            ("相三上五", Piece::Elephant, 3, Movement::Advance, 5),
            ("士4下5", Piece::Advisor, 4, Movement::Retreat, 5),
            ("馬2横3", Piece::Horse, 2, Movement::Traverse, 3),
        ];
        for (text, piece, file, movement, target) in cases {
            let desc = MoveDescriptor::parse(text, Color::Red).unwrap();
            assert_eq!(
                desc,
                MoveDescriptor::new(piece, Color::Red, file, movement, target),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_tandem() {
        let desc = MoveDescriptor::parse("前马进二", Color::Red).unwrap();
        assert_eq!(desc.tandem, Some(Tandem::Front));
        assert_eq!(desc.source_file, None);
        assert_eq!(desc.piece, Piece::Horse);

        let desc = MoveDescriptor::parse("后车退一", Color::Red).unwrap();
        assert_eq!(desc.tandem, Some(Tandem::Back));

        let desc = MoveDescriptor::parse("中兵平四", Color::Red).unwrap();
        assert_eq!(desc.tandem, Some(Tandem::Middle));
        assert_eq!(desc.movement, Movement::Traverse);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(MoveDescriptor::parse("  炮二平五\n", Color::Red).is_ok());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            MoveDescriptor::parse("   ", Color::Red),
            Err(NotationError::Empty)
        );
        assert!(matches!(
            MoveDescriptor::parse("马八进", Color::Red),
            Err(NotationError::WrongLength { len: 3, .. })
        ));
        assert!(matches!(
            MoveDescriptor::parse("马八进七七", Color::Red),
            Err(NotationError::WrongLength { len: 5, .. })
        ));
        assert_eq!(
            MoveDescriptor::parse("将十进十", Color::Red),
            Err(NotationError::UnknownNumber { char: '十' })
        );
        assert_eq!(
            MoveDescriptor::parse("后王进一", Color::Red),
            Err(NotationError::UnknownPiece { char: '王' })
        );
        assert_eq!(
            MoveDescriptor::parse("X2平5", Color::Red),
            Err(NotationError::UnknownPiece { char: 'X' })
        );
        assert_eq!(
            MoveDescriptor::parse("炮二走五", Color::Red),
            Err(NotationError::UnknownMovement { char: '走' })
        );
        assert_eq!(
            MoveDescriptor::parse("炮0平五", Color::Red),
            Err(NotationError::UnknownNumber { char: '0' })
        );
    }
}
