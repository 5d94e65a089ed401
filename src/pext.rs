//! Unified combined-mask lookup tables.
//!
//! One flat table per piece type over the combined bishop or rook mask,
//! so a single gather and a single load yield the full attack set — the
//! fewest per-call operations of any variant, at 5248 + 102400 entries
//! the largest footprint. This is the crate's default evaluator.

use once_cell::sync::Lazy;

use crate::bits::{gather, scatter};
use crate::{classic, masks, Bitboard};

struct AttackTable {
    attacks: Vec<Bitboard>,
    bishop_offset: [usize; 64],
    rook_offset: [usize; 64],
}

static TABLE: Lazy<AttackTable> = Lazy::new(AttackTable::build);

pub(crate) fn init() {
    Lazy::force(&TABLE);
}

impl AttackTable {
    fn build() -> Self {
        let mut table = AttackTable {
            attacks: Vec::with_capacity(5248 + 102_400),
            bishop_offset: [0; 64],
            rook_offset: [0; 64],
        };

        for square in 0..64 {
            table.bishop_offset[square] =
                table.fill(masks::bishop(square), square, classic::bishop_attacks);
        }
        for square in 0..64 {
            table.rook_offset[square] =
                table.fill(masks::rook(square), square, classic::rook_attacks);
        }

        #[cfg(feature = "logging")]
        log::debug!("unified attack table built: {} entries", table.attacks.len());

        table
    }

    fn fill(
        &mut self,
        mask: Bitboard,
        square: usize,
        attacks: fn(Bitboard, usize) -> Bitboard,
    ) -> usize {
        let offset = self.attacks.len();
        let patterns = 1u64 << mask.count_ones();
        for index in 0..patterns {
            let occupation = scatter(index, mask);
            debug_assert_eq!(offset + gather(occupation, mask) as usize, self.attacks.len());
            self.attacks.push(attacks(occupation, square));
        }
        offset
    }
}

/// Squares a bishop on `square` attacks under `occupation`.
#[inline]
#[must_use]
pub fn bishop_attacks(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*TABLE;
    table.attacks[table.bishop_offset[square] + gather(occupation, masks::bishop(square)) as usize]
}

/// Squares a rook on `square` attacks under `occupation`.
#[inline]
#[must_use]
pub fn rook_attacks(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*TABLE;
    table.attacks[table.rook_offset[square] + gather(occupation, masks::rook(square)) as usize]
}
