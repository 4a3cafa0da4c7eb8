use super::board::Board;
use super::moves::Move;
use super::pieces::{Color, Piece, PieceKind};

impl Board {
    /// Keeps the candidates after which no reply of the opponent captures the mover's King.
    ///
    /// Each candidate is played on this board and taken back before the next
    /// one is looked at, so the board is unchanged once this returns.
    pub(crate) fn filter_legal(&mut self, candidates: Vec<Move>) -> Vec<Move> {
        let mover = self.turn();
        let mut legal = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            self.apply(candidate);
            let exposed = self.king_capturable(mover);
            self.retract();

            if !exposed {
                legal.push(candidate);
            }
        }

        legal
    }

    /// Whether some pseudo-legal move of the side to move captures `color`'s King.
    fn king_capturable(&self, color: Color) -> bool {
        let king = Piece::new(PieceKind::King, color);

        self.pseudo_legal_moves()
            .iter()
            .any(|reply| reply.captured == Some(king))
    }
}
