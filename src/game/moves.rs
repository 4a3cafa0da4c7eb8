use super::pieces::{Piece, PieceKind};
use super::square::{Square, SquareExt};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoubleStep,
    /// The captured pawn sits on `capture_square`, not on the destination.
    EnPassant { capture_square: Square },
    Promotion(PieceKind),
}

/// A complete description of one state transition, carrying everything
/// needed to apply it and to take it back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub previous_en_passant: Option<Square>,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(
        from: Square,
        to: Square,
        moved: Piece,
        captured: Option<Piece>,
        previous_en_passant: Option<Square>,
        kind: MoveKind,
    ) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            previous_en_passant,
            kind,
        }
    }

    /// Square whose occupant this move removes; only en passant differs from `to`.
    pub fn capture_square(&self) -> Square {
        match self.kind {
            MoveKind::EnPassant { capture_square } => capture_square,
            _ => self.to,
        }
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// The piece standing on `to` once the move is applied.
    pub fn resulting_piece(&self) -> Piece {
        match self.kind {
            MoveKind::Promotion(kind) => Piece::new(kind, self.moved.color),
            _ => self.moved,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether `other` describes the same transition: same squares, same
    /// promotion and same captured square. Piece fields are not compared.
    pub fn matches(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion() == other.promotion()
            && self.capture_square() == other.capture_square()
    }

    /// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
    pub fn unparse(&self) -> String {
        MoveRequest::from(*self).unparse()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unparse())
    }
}

/// What a front end knows about a move it wants to make.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    pub fn parse(notation: &str) -> Option<MoveRequest> {
        if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
            return None;
        }

        let from = Square::parse(&notation[0..2])?;
        let to = Square::parse(&notation[2..4])?;

        let promotion = match notation[4..].chars().next() {
            Some(c) => match PieceKind::from_char(c.to_ascii_lowercase()) {
                Some(kind) if kind.is_promotable() => Some(kind),
                _ => return None,
            },
            None => None,
        };

        Some(MoveRequest {
            from,
            to,
            promotion,
        })
    }

    pub fn unparse(&self) -> String {
        format!(
            "{}{}{}",
            self.from.unparse(),
            self.to.unparse(),
            self.promotion
                .map(|p| p.to_char().to_string())
                .unwrap_or_default()
        )
    }
}

impl From<Move> for MoveRequest {
    fn from(board_move: Move) -> Self {
        MoveRequest::new(board_move.from, board_move.to, board_move.promotion())
    }
}
