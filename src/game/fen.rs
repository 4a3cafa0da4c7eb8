use super::board::{Board, Cells};
use super::pieces::{Color, Piece};
use super::square::{Square, SquareExt};
use std::fmt;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w -";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedPositionError {
    MissingPlacement,
    WrongRankCount(usize),
    /// A rank (0 = rank 1) that does not describe exactly eight cells.
    WrongCellCount { rank: usize, cells: u32 },
    UnknownPiece(char),
    InvalidTurn(String),
    InvalidEnPassant(String),
}

impl fmt::Display for MalformedPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPositionError::MissingPlacement => write!(f, "missing piece placement"),
            MalformedPositionError::WrongRankCount(count) => {
                write!(f, "expected 8 ranks, found {}", count)
            }
            MalformedPositionError::WrongCellCount { rank, cells } => {
                write!(f, "rank {} describes {} cells instead of 8", rank + 1, cells)
            }
            MalformedPositionError::UnknownPiece(c) => write!(f, "unknown piece letter '{}'", c),
            MalformedPositionError::InvalidTurn(token) => {
                write!(f, "invalid side to move '{}'", token)
            }
            MalformedPositionError::InvalidEnPassant(token) => {
                write!(f, "invalid en passant target '{}'", token)
            }
        }
    }
}

impl std::error::Error for MalformedPositionError {}

/// Reads a rank-major placement (rank 8 first, `/` between ranks) into cells.
pub fn parse_placement(placement: &str) -> Result<Cells, MalformedPositionError> {
    let ranks = placement.split('/').collect::<Vec<_>>();

    if ranks.len() != 8 {
        return Err(MalformedPositionError::WrongRankCount(ranks.len()));
    }

    let mut cells: Cells = [None; 64];

    for (i, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0u32;

        for char in rank_text.chars() {
            // Numbers encode runs of empty cells
            if let Some(run) = char.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(MalformedPositionError::WrongCellCount {
                        rank,
                        cells: file + run,
                    });
                }

                file += run;
                continue;
            }

            let piece = Piece::from_char(char).ok_or(MalformedPositionError::UnknownPiece(char))?;

            if file < 8 {
                cells[Square::from_position(file as u8, rank as u8) as usize] = Some(piece);
            }

            file += 1;
        }

        if file != 8 {
            return Err(MalformedPositionError::WrongCellCount { rank, cells: file });
        }
    }

    Ok(cells)
}

pub fn parse_turn(token: &str) -> Result<Color, MalformedPositionError> {
    let mut chars = token.chars();

    match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(MalformedPositionError::InvalidTurn(token.to_string())),
    }
}

/// `-` means no target; otherwise a square on rank 3 or rank 6.
pub fn parse_en_passant(token: &str) -> Result<Option<Square>, MalformedPositionError> {
    if token == "-" {
        return Ok(None);
    }

    match Square::parse(token) {
        Some(square) if square.get_rank() == 2 || square.get_rank() == 5 => Ok(Some(square)),
        _ => Err(MalformedPositionError::InvalidEnPassant(token.to_string())),
    }
}

pub fn unparse_placement(cells: &Cells) -> String {
    let mut ranks = Vec::with_capacity(8);

    for rank in (0..8).rev() {
        let mut text = String::new();
        let mut empty = 0;

        for file in 0..8 {
            match cells[Square::from_position(file, rank) as usize] {
                Some(piece) => {
                    if empty != 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_char());
                }
                None => empty += 1,
            }
        }

        if empty != 0 {
            text.push_str(&empty.to_string());
        }

        ranks.push(text);
    }

    ranks.join("/")
}

impl Board {
    /// Accepts `placement turn [en-passant]` or a full six-field FEN string.
    /// Castling rights and the move counters are read past and ignored.
    pub fn from_fen(fen: &str) -> Result<Board, MalformedPositionError> {
        let parts = fen.split_whitespace().collect::<Vec<_>>();

        let placement = parts
            .first()
            .ok_or(MalformedPositionError::MissingPlacement)?;
        let turn = parse_turn(parts.get(1).copied().unwrap_or(""))?;

        // Full FEN carries castling rights between the turn and the en passant target
        let en_passant_token = match parts.len() {
            0..=2 => "-",
            3 => parts[2],
            _ => parts[3],
        };

        if parts.len() > 3 {
            log::debug!("Ignoring castling field '{}'", parts[2]);
        }

        Board::initialize(placement, turn, parse_en_passant(en_passant_token)?)
    }

    /// The minimal position description: placement, side to move and en passant target.
    pub fn fen(&self) -> String {
        format!(
            "{} {} {}",
            unparse_placement(self.cells()),
            self.turn().to_char(),
            self.en_passant_target()
                .map(|square| square.unparse())
                .unwrap_or("-".to_string())
        )
    }
}
