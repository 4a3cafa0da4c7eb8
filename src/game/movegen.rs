use super::board::Board;
use super::moves::{Move, MoveKind};
use super::pieces::{PROMOTION_KINDS, Piece};
use super::square::{Square, SquareExt};
use super::templates::{MovementTemplate, TemplateRole, templates_for};

impl Board {
    /// Every move the side to move could make if King safety were ignored.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for cell in self.iter_cells() {
            match cell.occupant {
                Some(piece) if piece.color == self.turn() => {
                    for template in templates_for(piece.kind) {
                        self.walk_template(cell.square, piece, template, &mut moves);
                    }
                }
                _ => {}
            }
        }

        moves
    }

    fn walk_template(
        &self,
        from: Square,
        piece: Piece,
        template: &MovementTemplate,
        moves: &mut Vec<Move>,
    ) {
        let (rank_delta, file_delta) = template.delta(piece.color);
        let previous = self.en_passant_target();

        for step in template.steps() {
            let Some(to) = from.offset(rank_delta * step, file_delta * step) else {
                break;
            };

            let occupant = self.piece_at(to);

            match template.role {
                TemplateRole::Normal => {
                    if occupant.is_some_and(|o| o.color == piece.color) {
                        break;
                    }

                    moves.push(Move::new(from, to, piece, occupant, previous, MoveKind::Normal));

                    // Sliders stop on the first piece they hit
                    if occupant.is_some() {
                        break;
                    }
                }
                TemplateRole::PawnAdvance => {
                    if occupant.is_some() {
                        break;
                    }

                    if step == 1 {
                        self.push_pawn_move(from, to, piece, None, moves);
                    } else if from.get_rank() == piece.color.pawn_home_rank() {
                        moves.push(Move::new(from, to, piece, None, previous, MoveKind::DoubleStep));
                    }
                }
                TemplateRole::PawnCapture => match occupant {
                    Some(target) if target.color != piece.color => {
                        self.push_pawn_move(from, to, piece, Some(target), moves);
                    }
                    None if Some(to) == previous => {
                        if let Some(en_passant) = self.en_passant_move(from, to, piece) {
                            moves.push(en_passant);
                        }
                    }
                    _ => {}
                },
            }
        }
    }

    /// A pawn move onto `to`, expanded into one move per promotion kind on the last rank.
    fn push_pawn_move(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        moves: &mut Vec<Move>,
    ) {
        let previous = self.en_passant_target();

        if to.get_rank() == piece.color.promotion_rank() {
            for kind in PROMOTION_KINDS {
                moves.push(Move::new(from, to, piece, captured, previous, MoveKind::Promotion(kind)));
            }
        } else {
            moves.push(Move::new(from, to, piece, captured, previous, MoveKind::Normal));
        }
    }

    /// En passant onto `to`, if an enemy piece stands behind the target square.
    fn en_passant_move(&self, from: Square, to: Square, piece: Piece) -> Option<Move> {
        let capture_square = self.en_passant_capture_square(to, piece.color)?;
        let captured = self.piece_at(capture_square).filter(|c| c.color != piece.color)?;

        Some(Move::new(
            from,
            to,
            piece,
            Some(captured),
            self.en_passant_target(),
            MoveKind::EnPassant { capture_square },
        ))
    }
}
