use super::fen::{MalformedPositionError, STARTING_FEN, parse_placement};
use super::moves::{Move, MoveKind, MoveRequest};
use super::pieces::{Color, Piece, PieceKind};
use super::square::{Square, SquareExt};
use std::fmt;

/// Occupants indexed by square.
pub type Cells = [Option<Piece>; 64];

/// A read-only view of one board coordinate and what stands on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub square: Square,
    pub occupant: Option<Piece>,
}

impl Cell {
    pub fn rank(&self) -> u8 {
        self.square.get_rank()
    }

    pub fn file(&self) -> u8 {
        self.square.get_file()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: Cells,
    turn: Color,
    en_passant_target: Option<Square>,
    move_log: Vec<Move>,
    legal_moves_cache: Option<Vec<Move>>,
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Board {
    /// Builds a board from a placement string, the side to move and an en passant target.
    pub fn initialize(
        placement: &str,
        turn: Color,
        en_passant_target: Option<Square>,
    ) -> Result<Board, MalformedPositionError> {
        let cells = parse_placement(placement)?;

        log::debug!(
            "Loaded position '{}', {} to move, en passant {:?}",
            placement,
            turn,
            en_passant_target.map(|s| s.unparse())
        );

        Ok(Board {
            cells,
            turn,
            en_passant_target,
            move_log: vec![],
            legal_moves_cache: None,
        })
    }

    pub fn starting_position() -> Board {
        match Board::from_fen(STARTING_FEN) {
            Ok(board) => board,
            Err(error) => unreachable!("starting position is well-formed: {}", error),
        }
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn cell(&self, square: Square) -> Cell {
        Cell {
            square,
            occupant: self.cells[square as usize],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    /// Every cell, a1 first and h8 last.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..64).map(|square| self.cell(square))
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// The legal moves of the side to move, computed on first use after a mutation.
    pub fn legal_moves(&mut self) -> &[Move] {
        if self.legal_moves_cache.is_none() {
            let candidates = self.pseudo_legal_moves();
            let legal = self.filter_legal(candidates);

            log::debug!("{} has {} legal moves", self.turn, legal.len());

            self.legal_moves_cache = Some(legal);
        }

        self.legal_moves_cache.as_deref().unwrap_or_default()
    }

    /// Legal moves starting on `square`.
    pub fn legal_moves_from(&mut self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .filter(|m| m.from == square)
            .copied()
            .collect()
    }

    /// Applies `candidate` if it matches a legal move; otherwise nothing changes.
    pub fn try_move(&mut self, candidate: &Move) -> bool {
        let legal_move = self
            .legal_moves()
            .iter()
            .find(|legal| legal.matches(candidate))
            .copied();

        match legal_move {
            Some(board_move) => {
                self.make_move(board_move);
                true
            }
            None => false,
        }
    }

    pub fn try_request(&mut self, request: MoveRequest) -> bool {
        match self.build_move(request) {
            Some(candidate) => self.try_move(&candidate),
            None => false,
        }
    }

    /// Takes back the most recent move. With an empty log this is reported and ignored.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undone = self.unmake_move();

        if undone.is_none() {
            log::warn!("No moves to undo");
        }

        undone
    }

    /// Resolves a front-end request into a candidate move using the current
    /// position. Returns `None` when the origin is empty or when a promotion
    /// kind is given for a move that does not reach the last rank with a pawn.
    pub fn build_move(&self, request: MoveRequest) -> Option<Move> {
        let MoveRequest {
            from,
            to,
            promotion,
        } = request;

        let moved = self.piece_at(from)?;
        let previous = self.en_passant_target;

        let promotes =
            moved.kind == PieceKind::Pawn && to.get_rank() == moved.color.promotion_rank();
        if promotion.is_some() && !promotes {
            return None;
        }

        let candidate = if moved.kind != PieceKind::Pawn {
            Move::new(from, to, moved, self.piece_at(to), previous, MoveKind::Normal)
        } else if promotes {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            Move::new(from, to, moved, self.piece_at(to), previous, MoveKind::Promotion(kind))
        } else if Some(to) == previous
            && from.get_file() != to.get_file()
            && self.piece_at(to).is_none()
        {
            let capture_square = self.en_passant_capture_square(to, moved.color)?;
            Move::new(
                from,
                to,
                moved,
                self.piece_at(capture_square),
                previous,
                MoveKind::EnPassant { capture_square },
            )
        } else if from.get_rank().abs_diff(to.get_rank()) == 2 {
            Move::new(from, to, moved, None, previous, MoveKind::DoubleStep)
        } else {
            Move::new(from, to, moved, self.piece_at(to), previous, MoveKind::Normal)
        };

        Some(candidate)
    }

    /// The square holding the pawn an en passant capture onto `target` removes:
    /// one rank behind the target from `color`'s side.
    pub(crate) fn en_passant_capture_square(&self, target: Square, color: Color) -> Option<Square> {
        target.offset(-color.forward(), 0)
    }

    pub(crate) fn apply(&mut self, mut board_move: Move) {
        debug_assert_eq!(self.piece_at(board_move.from), Some(board_move.moved));

        if let MoveKind::EnPassant { capture_square } = board_move.kind {
            self.cells[capture_square as usize] = None;
        }

        self.cells[board_move.to as usize] = Some(board_move.resulting_piece());
        self.cells[board_move.from as usize] = None;

        board_move.previous_en_passant = self.en_passant_target;

        self.en_passant_target = match board_move.kind {
            MoveKind::DoubleStep => board_move.from.offset(board_move.moved.color.forward(), 0),
            _ => None,
        };

        self.turn = !self.turn;
        self.move_log.push(board_move);

        log::trace!("Applied {}", board_move);
    }

    pub(crate) fn undo(&mut self, board_move: &Move) {
        self.cells[board_move.from as usize] = Some(board_move.moved);

        match board_move.kind {
            MoveKind::EnPassant { capture_square } => {
                self.cells[board_move.to as usize] = None;
                self.cells[capture_square as usize] = board_move.captured;
            }
            _ => self.cells[board_move.to as usize] = board_move.captured,
        }

        self.en_passant_target = board_move.previous_en_passant;
        self.turn = board_move.moved.color;
    }

    /// Plays a move already known to be legal, skipping the lookup.
    pub(crate) fn make_move(&mut self, board_move: Move) {
        self.apply(board_move);
        self.legal_moves_cache = None;
    }

    pub(crate) fn unmake_move(&mut self) -> Option<Move> {
        let board_move = self.retract()?;
        self.legal_moves_cache = None;

        Some(board_move)
    }

    /// Pops the log and reverses the popped move, leaving the cache alone.
    pub(crate) fn retract(&mut self) -> Option<Move> {
        let board_move = self.move_log.pop()?;
        self.undo(&board_move);

        Some(board_move)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.piece_at(Square::from_position(file, rank)) {
                    Some(piece) => write!(f, "|{}", piece)?,
                    None => write!(f, "| ")?,
                }
            }
            writeln!(f, "|")?;
        }

        Ok(())
    }
}
