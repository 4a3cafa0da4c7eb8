//! Movement templates: for every piece kind, the fixed directions it moves
//! in and how far along each one it may travel.
//!
//! Templates are written from White's point of view; Black uses the same
//! catalog with the rank component mirrored (see [`MovementTemplate::delta`]).

use super::pieces::{Color, PieceKind};
use std::iter::Take;
use std::ops::RangeFrom;
use strum::EnumCount;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepPolicy {
    Single,
    Bounded(u8),
    Unbounded,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemplateRole {
    Normal,
    PawnAdvance,
    PawnCapture,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MovementTemplate {
    pub rank_delta: i8,
    pub file_delta: i8,
    pub policy: StepPolicy,
    pub role: TemplateRole,
}

impl MovementTemplate {
    const fn new(rank_delta: i8, file_delta: i8, policy: StepPolicy, role: TemplateRole) -> Self {
        Self {
            rank_delta,
            file_delta,
            policy,
            role,
        }
    }

    /// The `(rank, file)` delta of one step for a piece of `color`.
    pub const fn delta(&self, color: Color) -> (i8, i8) {
        (self.rank_delta * color.forward(), self.file_delta)
    }

    /// Step multipliers in ascending order, starting at 1.
    pub fn steps(&self) -> Take<RangeFrom<i8>> {
        let limit = match self.policy {
            StepPolicy::Single => 1,
            StepPolicy::Bounded(n) => n as usize,
            StepPolicy::Unbounded => usize::MAX,
        };

        (1..).take(limit)
    }

    pub fn is_sliding(&self) -> bool {
        self.policy == StepPolicy::Unbounded
    }
}

// All non-zero combinations of {-1, 0, 1}², straight lines first.
const UNIT_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const fn templates_from<const N: usize>(
    directions: &[(i8, i8)],
    skip: usize,
    policy: StepPolicy,
) -> [MovementTemplate; N] {
    let mut templates = [MovementTemplate::new(0, 0, policy, TemplateRole::Normal); N];

    let mut i = 0;
    while i < N {
        let (rank_delta, file_delta) = directions[skip + i];
        templates[i] = MovementTemplate::new(rank_delta, file_delta, policy, TemplateRole::Normal);

        i += 1;
    }

    templates
}

const KING_TEMPLATES: [MovementTemplate; 8] =
    templates_from(&UNIT_DIRECTIONS, 0, StepPolicy::Single);
const QUEEN_TEMPLATES: [MovementTemplate; 8] =
    templates_from(&UNIT_DIRECTIONS, 0, StepPolicy::Unbounded);
const ROOK_TEMPLATES: [MovementTemplate; 4] =
    templates_from(&UNIT_DIRECTIONS, 0, StepPolicy::Unbounded);
const BISHOP_TEMPLATES: [MovementTemplate; 4] =
    templates_from(&UNIT_DIRECTIONS, 4, StepPolicy::Unbounded);
const KNIGHT_TEMPLATES: [MovementTemplate; 8] =
    templates_from(&KNIGHT_OFFSETS, 0, StepPolicy::Single);

const PAWN_TEMPLATES: [MovementTemplate; 3] = [
    MovementTemplate::new(1, 0, StepPolicy::Bounded(2), TemplateRole::PawnAdvance),
    MovementTemplate::new(1, 1, StepPolicy::Single, TemplateRole::PawnCapture),
    MovementTemplate::new(1, -1, StepPolicy::Single, TemplateRole::PawnCapture),
];

/// Indexed by `PieceKind as usize`.
pub const MOVEMENT_TEMPLATES: [&[MovementTemplate]; PieceKind::COUNT] = [
    &KING_TEMPLATES,
    &QUEEN_TEMPLATES,
    &ROOK_TEMPLATES,
    &BISHOP_TEMPLATES,
    &KNIGHT_TEMPLATES,
    &PAWN_TEMPLATES,
];

pub fn templates_for(kind: PieceKind) -> &'static [MovementTemplate] {
    MOVEMENT_TEMPLATES[kind as usize]
}
