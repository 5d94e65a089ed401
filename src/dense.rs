//! Dense-packed per-ray subset tables.
//!
//! Every (square, ray) pair gets a region sized to exactly
//! `2^popcount(ray mask)`, packed back-to-back into one flat table of
//! 6784 entries — the smallest footprint of the lookup variants, paid for
//! with one offset-table indirection per ray. A query gathers the
//! occupancy bits under the two relevant ray masks and ORs two loads.

use once_cell::sync::Lazy;

use crate::bits::{gather, scatter};
use crate::{classic, masks, Bitboard};

struct DenseTable {
    subsets: Vec<Bitboard>,
    diagonal_offset: [usize; 64],
    anti_diagonal_offset: [usize; 64],
    horizontal_offset: [usize; 64],
    vertical_offset: [usize; 64],
}

static DENSE: Lazy<DenseTable> = Lazy::new(DenseTable::build);

pub(crate) fn init() {
    Lazy::force(&DENSE);
}

impl DenseTable {
    fn build() -> Self {
        let mut table = DenseTable {
            subsets: Vec::with_capacity(6784),
            diagonal_offset: [0; 64],
            anti_diagonal_offset: [0; 64],
            horizontal_offset: [0; 64],
            vertical_offset: [0; 64],
        };

        for square in 0..64 {
            table.diagonal_offset[square] =
                table.fill(masks::diagonal(square), square, classic::diagonal_subset);
            table.anti_diagonal_offset[square] =
                table.fill(masks::anti_diagonal(square), square, classic::anti_diagonal_subset);
        }
        for square in 0..64 {
            table.horizontal_offset[square] =
                table.fill(masks::horizontal(square), square, classic::horizontal_subset);
            table.vertical_offset[square] =
                table.fill(masks::vertical(square), square, classic::vertical_subset);
        }

        #[cfg(feature = "logging")]
        log::debug!("dense subset tables built: {} entries", table.subsets.len());

        table
    }

    /// Append one region: every reduced pattern over `mask`, scattered to
    /// a real occupancy and resolved through the closed-form subset.
    fn fill(
        &mut self,
        mask: Bitboard,
        square: usize,
        subset: fn(Bitboard, usize) -> Bitboard,
    ) -> usize {
        let offset = self.subsets.len();
        let patterns = 1u64 << mask.count_ones();
        for index in 0..patterns {
            let occupation = scatter(index, mask);
            // Build-time slot and query-time index come from the same
            // gather, keeping the perfect hash collision-free.
            debug_assert_eq!(offset + gather(occupation, mask) as usize, self.subsets.len());
            self.subsets.push(subset(occupation, square));
        }
        offset
    }
}

/// Squares a bishop on `square` attacks under `occupation`.
#[inline]
#[must_use]
pub fn bishop_attacks(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*DENSE;
    let diagonal = table.subsets
        [table.diagonal_offset[square] + gather(occupation, masks::diagonal(square)) as usize];
    let anti_diagonal = table.subsets[table.anti_diagonal_offset[square]
        + gather(occupation, masks::anti_diagonal(square)) as usize];
    diagonal | anti_diagonal
}

/// Squares a rook on `square` attacks under `occupation`.
#[inline]
#[must_use]
pub fn rook_attacks(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*DENSE;
    let horizontal = table.subsets
        [table.horizontal_offset[square] + gather(occupation, masks::horizontal(square)) as usize];
    let vertical = table.subsets
        [table.vertical_offset[square] + gather(occupation, masks::vertical(square)) as usize];
    horizontal | vertical
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raycast;

    #[test]
    fn table_has_expected_size() {
        assert_eq!(DENSE.subsets.len(), 6784);
    }

    #[test]
    fn matches_raycast_on_structured_boards() {
        let boards = [0u64, !0u64, 0x00ff00ff00ff00ff, 0xfedcba9876543210];
        for occ in boards {
            for sq in 0..64 {
                assert_eq!(
                    bishop_attacks(occ, sq),
                    raycast::bishop_attacks(occ, sq),
                    "bishop occ={occ:#x} sq={sq}"
                );
                assert_eq!(
                    rook_attacks(occ, sq),
                    raycast::rook_attacks(occ, sq),
                    "rook occ={occ:#x} sq={sq}"
                );
            }
        }
    }

    #[test]
    fn build_is_deterministic() {
        let first = DenseTable::build();
        let second = DenseTable::build();
        assert_eq!(first.subsets, second.subsets);
        assert_eq!(first.diagonal_offset, second.diagonal_offset);
        assert_eq!(first.anti_diagonal_offset, second.anti_diagonal_offset);
        assert_eq!(first.horizontal_offset, second.horizontal_offset);
        assert_eq!(first.vertical_offset, second.vertical_offset);
    }
}
