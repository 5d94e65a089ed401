//! Pre-computed ray masks shared by the table-driven evaluators.
//!
//! For every square this stores the interior squares collinear with it
//! along each of the four ray directions, excluding the square itself and
//! the final edge square of each ray. Bounding the masks to interior
//! squares keeps the reduced occupancy patterns as small as possible: a
//! blocker on the edge square changes nothing, since the ray ends there
//! either way.

use once_cell::sync::Lazy;

use crate::Bitboard;

struct RayMasks {
    diagonal: [Bitboard; 64],
    anti_diagonal: [Bitboard; 64],
    horizontal: [Bitboard; 64],
    vertical: [Bitboard; 64],
    bishop: [Bitboard; 64],
    rook: [Bitboard; 64],
}

static MASKS: Lazy<RayMasks> = Lazy::new(RayMasks::build);

impl RayMasks {
    fn build() -> Self {
        let mut masks = RayMasks {
            diagonal: [0; 64],
            anti_diagonal: [0; 64],
            horizontal: [0; 64],
            vertical: [0; 64],
            bishop: [0; 64],
            rook: [0; 64],
        };

        for square in 0..64 {
            let rank = (square / 8) as i32;
            let file = (square % 8) as i32;

            let mut diagonal = 0u64;
            let (mut r, mut f) = (rank + 1, file + 1);
            while r < 7 && f < 7 {
                diagonal |= 1u64 << (r * 8 + f);
                r += 1;
                f += 1;
            }
            let (mut r, mut f) = (rank - 1, file - 1);
            while r > 0 && f > 0 {
                diagonal |= 1u64 << (r * 8 + f);
                r -= 1;
                f -= 1;
            }

            let mut anti_diagonal = 0u64;
            let (mut r, mut f) = (rank + 1, file - 1);
            while r < 7 && f > 0 {
                anti_diagonal |= 1u64 << (r * 8 + f);
                r += 1;
                f -= 1;
            }
            let (mut r, mut f) = (rank - 1, file + 1);
            while r > 0 && f < 7 {
                anti_diagonal |= 1u64 << (r * 8 + f);
                r -= 1;
                f += 1;
            }

            let mut horizontal = 0u64;
            for f in 1..7 {
                if f != file {
                    horizontal |= 1u64 << (rank * 8 + f);
                }
            }

            let mut vertical = 0u64;
            for r in 1..7 {
                if r != rank {
                    vertical |= 1u64 << (r * 8 + file);
                }
            }

            masks.diagonal[square] = diagonal;
            masks.anti_diagonal[square] = anti_diagonal;
            masks.horizontal[square] = horizontal;
            masks.vertical[square] = vertical;
            masks.bishop[square] = diagonal | anti_diagonal;
            masks.rook[square] = horizontal | vertical;
        }

        masks
    }
}

pub(crate) fn init() {
    Lazy::force(&MASKS);
}

/// Interior squares on the diagonal through `square`, excluding the square.
#[inline]
#[must_use]
pub fn diagonal(square: usize) -> Bitboard {
    MASKS.diagonal[square]
}

/// Interior squares on the anti-diagonal through `square`.
#[inline]
#[must_use]
pub fn anti_diagonal(square: usize) -> Bitboard {
    MASKS.anti_diagonal[square]
}

/// Interior squares on the rank through `square`.
#[inline]
#[must_use]
pub fn horizontal(square: usize) -> Bitboard {
    MASKS.horizontal[square]
}

/// Interior squares on the file through `square`.
#[inline]
#[must_use]
pub fn vertical(square: usize) -> Bitboard {
    MASKS.vertical[square]
}

/// Both bishop rays combined.
#[inline]
#[must_use]
pub fn bishop(square: usize) -> Bitboard {
    MASKS.bishop[square]
}

/// Both rook rays combined.
#[inline]
#[must_use]
pub fn rook(square: usize) -> Bitboard {
    MASKS.rook[square]
}
