//! Kindergarten multiplicative-hash subset tables.
//!
//! Instead of a hardware bit gather, each ray's relevant occupancy is
//! collapsed to a 6-bit row index with a multiply-and-shift perfect hash:
//! masked diagonal bits are north-filled onto the top rank by a file-a
//! multiplier, a rank's six inner bits are a plain shift, and a file's
//! six inner bits are transposed onto a rank by a diagonal multiplier.
//! Four 64-row tables per square, 16384 entries total.
//!
//! This variant is deliberately self-contained: it builds its own ray
//! geometry, and its rows are filled by walking the board one square at a
//! time rather than by the closed-form evaluator. That makes it a fully
//! independent implementation of the sliding rule and the prime
//! cross-check target for the differential tests.

use once_cell::sync::Lazy;

use crate::Bitboard;

/// File a, ranks 2..7. Multiplying north-fills a masked diagonal so its
/// bits line up on the top rank.
const FILE_A2_A7: Bitboard = 0x0001010101010100;
/// The c2..h7 diagonal. Multiplying transposes the six inner bits of a
/// file onto a rank.
const DIAGONAL_C2_H7: Bitboard = 0x0080402010080400;

const ROOK_BASE: usize = 8192;

struct KindergartenTable {
    diagonal_mask: [Bitboard; 64],
    anti_diagonal_mask: [Bitboard; 64],
    subsets: Vec<Bitboard>,
}

static TABLE: Lazy<KindergartenTable> = Lazy::new(KindergartenTable::build);

pub(crate) fn init() {
    Lazy::force(&TABLE);
}

impl KindergartenTable {
    fn build() -> Self {
        let mut diagonal_mask = [0u64; 64];
        let mut anti_diagonal_mask = [0u64; 64];
        for square in 0..64 {
            let rank = (square / 8) as i32;
            let file = (square % 8) as i32;

            let (mut r, mut f) = (rank + 1, file + 1);
            while r < 7 && f < 7 {
                diagonal_mask[square] |= 1u64 << (r * 8 + f);
                r += 1;
                f += 1;
            }
            let (mut r, mut f) = (rank - 1, file - 1);
            while r > 0 && f > 0 {
                diagonal_mask[square] |= 1u64 << (r * 8 + f);
                r -= 1;
                f -= 1;
            }

            let (mut r, mut f) = (rank + 1, file - 1);
            while r < 7 && f > 0 {
                anti_diagonal_mask[square] |= 1u64 << (r * 8 + f);
                r += 1;
                f -= 1;
            }
            let (mut r, mut f) = (rank - 1, file + 1);
            while r > 0 && f < 7 {
                anti_diagonal_mask[square] |= 1u64 << (r * 8 + f);
                r -= 1;
                f += 1;
            }
        }

        let mut subsets = vec![0u64; 4 * 64 * 64];
        for square in 0..64 {
            for index in 0..64 {
                let offset = square * 128 + index;
                subsets[offset] = diagonal_subset(square, index);
                subsets[offset + 64] = anti_diagonal_subset(square, index);
                subsets[offset + ROOK_BASE] = horizontal_subset(square, index);
                subsets[offset + ROOK_BASE + 64] = vertical_subset(square, index);
            }
        }

        #[cfg(feature = "logging")]
        log::debug!("kindergarten subset tables built: {} entries", subsets.len());

        KindergartenTable {
            diagonal_mask,
            anti_diagonal_mask,
            subsets,
        }
    }
}

/// Squares a bishop on `square` attacks under `occupation`.
#[inline]
#[must_use]
pub fn bishop_attacks(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*TABLE;
    let offset = square << 7;
    let diagonal =
        (occupation & table.diagonal_mask[square]).wrapping_mul(FILE_A2_A7) >> 57;
    let anti_diagonal =
        (occupation & table.anti_diagonal_mask[square]).wrapping_mul(FILE_A2_A7) >> 57;
    table.subsets[offset + diagonal as usize] | table.subsets[offset + 64 + anti_diagonal as usize]
}

/// Squares a rook on `square` attacks under `occupation`.
#[inline]
#[must_use]
pub fn rook_attacks(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*TABLE;
    let offset = ROOK_BASE + (square << 7);
    let horizontal = (occupation >> ((square & 56) | 1)) & 63;
    let vertical =
        ((occupation >> (square & 7)) & FILE_A2_A7).wrapping_mul(DIAGONAL_C2_H7) >> 58;
    table.subsets[offset + horizontal as usize] | table.subsets[offset + 64 + vertical as usize]
}

// Row construction by direct simulation. The six index bits stand for the
// inner files b..g (or inner ranks 2..7 for the vertical rows); the walk
// steps outward from the square until a blocked square or the board edge,
// keeping the first blocked square.

/// Index bits as file blockers, with the origin's own file cleared.
fn file_blockers(square: usize, index: usize) -> Bitboard {
    ((index as u64) << 1) & !(1u64 << (square % 8))
}

fn is_file_free(blockers: Bitboard, square: usize) -> bool {
    blockers & (1u64 << (square % 8)) == 0
}

/// Index bits down file a, rank 6 to rank 1, skipping the origin's rank.
fn rank_blockers(square: usize, index: usize) -> Bitboard {
    let own = square - square % 8;
    let mut blockers = 0u64;
    for i in 0..6 {
        let shift = 48 - 8 * i;
        if index & (1 << i) != 0 && shift != own {
            blockers |= 1u64 << shift;
        }
    }
    blockers
}

fn is_rank_free(blockers: Bitboard, square: usize) -> bool {
    blockers & (1u64 << (square - square % 8)) == 0
}

fn diagonal_subset(square: usize, index: usize) -> Bitboard {
    let blockers = file_blockers(square, index);
    let mut result = 0u64;
    let mut sq = square;
    while is_file_free(blockers, sq) && sq % 8 < 7 && sq / 8 < 7 {
        result |= 1u64 << (sq + 9);
        sq += 9;
    }
    sq = square;
    while is_file_free(blockers, sq) && sq % 8 > 0 && sq / 8 > 0 {
        result |= 1u64 << (sq - 9);
        sq -= 9;
    }
    result
}

fn anti_diagonal_subset(square: usize, index: usize) -> Bitboard {
    let blockers = file_blockers(square, index);
    let mut result = 0u64;
    let mut sq = square;
    while is_file_free(blockers, sq) && sq % 8 > 0 && sq / 8 < 7 {
        result |= 1u64 << (sq + 7);
        sq += 7;
    }
    sq = square;
    while is_file_free(blockers, sq) && sq % 8 < 7 && sq / 8 > 0 {
        result |= 1u64 << (sq - 7);
        sq -= 7;
    }
    result
}

fn horizontal_subset(square: usize, index: usize) -> Bitboard {
    let blockers = file_blockers(square, index);
    let mut result = 0u64;
    let mut sq = square;
    while is_file_free(blockers, sq) && sq % 8 < 7 {
        result |= 1u64 << (sq + 1);
        sq += 1;
    }
    sq = square;
    while is_file_free(blockers, sq) && sq % 8 > 0 {
        result |= 1u64 << (sq - 1);
        sq -= 1;
    }
    result
}

fn vertical_subset(square: usize, index: usize) -> Bitboard {
    let blockers = rank_blockers(square, index);
    let mut result = 0u64;
    let mut sq = square;
    while is_rank_free(blockers, sq) && sq / 8 < 7 {
        result |= 1u64 << (sq + 8);
        sq += 8;
    }
    sq = square;
    while is_rank_free(blockers, sq) && sq / 8 > 0 {
        result |= 1u64 << (sq - 8);
        sq -= 8;
    }
    result
}

/// Bishop attacks straight from the row simulations, bypassing the table.
/// Differential-test helper.
#[cfg(test)]
pub(crate) fn bishop_attacks_uncached(occupation: Bitboard, square: usize) -> Bitboard {
    let table = &*TABLE;
    let diagonal =
        (occupation & table.diagonal_mask[square]).wrapping_mul(FILE_A2_A7) >> 57;
    let anti_diagonal =
        (occupation & table.anti_diagonal_mask[square]).wrapping_mul(FILE_A2_A7) >> 57;
    diagonal_subset(square, diagonal as usize) | anti_diagonal_subset(square, anti_diagonal as usize)
}

/// Rook attacks straight from the row simulations, bypassing the table.
#[cfg(test)]
pub(crate) fn rook_attacks_uncached(occupation: Bitboard, square: usize) -> Bitboard {
    let horizontal = (occupation >> ((square & 56) | 1)) & 63;
    let vertical =
        ((occupation >> (square & 7)) & FILE_A2_A7).wrapping_mul(DIAGONAL_C2_H7) >> 58;
    horizontal_subset(square, horizontal as usize) | vertical_subset(square, vertical as usize)
}
