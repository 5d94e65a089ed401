//! Cross-variant differential tests.
//!
//! Every strategy must agree bit-for-bit with the slow ray-walking oracle
//! on every square, for structured boards, a seeded random sweep, and
//! proptest-generated occupancies.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use slider_attacks::{init, raycast, verify, Bitboard, SliderAttacks, VARIANTS};

const STRUCTURED: &[Bitboard] = &[
    0,
    !0,
    0x00ff00ff00ff00ff,
    0xff00ff00ff00ff00,
    0x5555555555555555,
    0xaaaaaaaaaaaaaaaa,
    0x0f0f0f0f0f0f0f0f,
    0xf0f0f0f0f0f0f0f0,
    0x8100000000000081,
    0x0000001818000000,
];

fn assert_matches_oracle(variant: &dyn SliderAttacks, occupation: Bitboard) {
    for square in 0..64 {
        assert_eq!(
            variant.bishop(occupation, square),
            raycast::bishop_attacks(occupation, square),
            "{} bishop occ={occupation:#018x} sq={square}",
            variant.name()
        );
        assert_eq!(
            variant.rook(occupation, square),
            raycast::rook_attacks(occupation, square),
            "{} rook occ={occupation:#018x} sq={square}",
            variant.name()
        );
    }
}

#[test]
fn all_variants_match_oracle_on_structured_boards() {
    init();
    for variant in VARIANTS {
        for &occupation in STRUCTURED {
            assert_matches_oracle(variant, occupation);
        }
    }
}

#[test]
fn all_variants_match_oracle_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x1234_5678_9abc_def0);
    for _ in 0..500 {
        // AND two draws for realistic densities, plus raw draws for
        // crowded boards.
        let occupation = rng.gen::<u64>() & rng.gen::<u64>();
        for variant in VARIANTS {
            assert_matches_oracle(variant, occupation);
        }
    }
    for _ in 0..100 {
        let occupation = rng.gen::<u64>();
        for variant in VARIANTS {
            assert_matches_oracle(variant, occupation);
        }
    }
}

#[test]
fn verify_module_accepts_every_variant() {
    verify::check_all(42, 300).unwrap_or_else(|mismatch| panic!("{mismatch}"));
}

#[test]
fn no_variant_includes_the_origin_square() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let occupation = rng.gen::<u64>();
        for variant in VARIANTS {
            for square in 0..64 {
                assert_eq!(variant.bishop(occupation, square) & (1u64 << square), 0);
                assert_eq!(variant.rook(occupation, square) & (1u64 << square), 0);
            }
        }
    }
}

/// Full line through `square` in one direction pair, origin included.
fn line_through(square: usize, dr: i32, df: i32) -> Bitboard {
    let mut line = 1u64 << square;
    for sign in [1, -1] {
        let mut r = (square / 8) as i32 + sign * dr;
        let mut f = (square % 8) as i32 + sign * df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            line |= 1u64 << (r * 8 + f);
            r += sign * dr;
            f += sign * df;
        }
    }
    line
}

#[test]
fn attacks_never_leave_their_lines() {
    // A file-edge wraparound would put a bit on a foreign rank, file, or
    // diagonal; requiring every result to stay on the origin's own lines
    // rules that out for arbitrary occupancies.
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let occupation = rng.gen::<u64>() & rng.gen::<u64>();
        for square in 0..64 {
            let rook_lines = line_through(square, 0, 1) | line_through(square, 1, 0);
            let bishop_lines = line_through(square, 1, 1) | line_through(square, 1, -1);
            for variant in VARIANTS {
                assert_eq!(
                    variant.rook(occupation, square) & !rook_lines,
                    0,
                    "{} rook left its lines from {square}",
                    variant.name()
                );
                assert_eq!(
                    variant.bishop(occupation, square) & !bishop_lines,
                    0,
                    "{} bishop left its lines from {square}",
                    variant.name()
                );
            }
        }
    }
}

#[test]
fn single_blocker_cuts_the_ray() {
    // One blocker at every distance along every ray from e4: the blocker
    // square is attacked, every square between is attacked, and nothing
    // beyond it is.
    let square = 28;
    let directions = [
        (0, 1),
        (0, -1),
        (1, 0),
        (-1, 0),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (dr, df) in directions {
        let diagonal = dr != 0 && df != 0;
        let mut ray = Vec::new();
        let mut r = (square / 8) as i32 + dr;
        let mut f = (square % 8) as i32 + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            ray.push((r * 8 + f) as usize);
            r += dr;
            f += df;
        }
        for (dist, &blocker) in ray.iter().enumerate() {
            let occupation = 1u64 << blocker;
            for variant in VARIANTS {
                let attacks = if diagonal {
                    variant.bishop(occupation, square)
                } else {
                    variant.rook(occupation, square)
                };
                assert_ne!(attacks & (1u64 << blocker), 0, "{} misses blocker", variant.name());
                for (i, &sq) in ray.iter().enumerate() {
                    if i < dist {
                        assert_ne!(attacks & (1u64 << sq), 0, "{} misses open square", variant.name());
                    } else if i > dist {
                        assert_eq!(attacks & (1u64 << sq), 0, "{} sees past blocker", variant.name());
                    }
                }
            }
        }
    }
}

#[test]
fn empty_board_saturation_from_the_corner() {
    for variant in VARIANTS {
        let rook = variant.rook(0, 0);
        assert_eq!(rook.count_ones(), 14, "{}", variant.name());
        assert_eq!(rook, 0xfe | 0x0101010101010100, "{}", variant.name());

        let bishop = variant.bishop(0, 0);
        assert_eq!(bishop.count_ones(), 7, "{}", variant.name());
        assert_eq!(bishop, 0x8040201008040200, "{}", variant.name());
    }
}

#[test]
fn rook_on_a1_with_blockers_on_a2_and_a6() {
    let occupation = (1u64 << 8) | (1u64 << 48);
    let expected = 0xfe | (1u64 << 8);
    for variant in VARIANTS {
        assert_eq!(variant.rook(occupation, 0), expected, "{}", variant.name());
    }
}

#[test]
fn own_square_bit_never_changes_the_result() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let occupation = rng.gen::<u64>();
        for variant in VARIANTS {
            for square in 0..64 {
                let with = occupation | (1u64 << square);
                let without = occupation & !(1u64 << square);
                assert_eq!(variant.bishop(with, square), variant.bishop(without, square));
                assert_eq!(variant.rook(with, square), variant.rook(without, square));
            }
        }
    }
}

proptest! {
    /// Property: every variant equals the oracle on arbitrary inputs.
    #[test]
    fn prop_variants_match_oracle(occupation in any::<u64>(), square in 0..64usize) {
        for variant in VARIANTS {
            prop_assert_eq!(
                variant.bishop(occupation, square),
                raycast::bishop_attacks(occupation, square),
                "bishop variant {}", variant.name()
            );
            prop_assert_eq!(
                variant.rook(occupation, square),
                raycast::rook_attacks(occupation, square),
                "rook variant {}", variant.name()
            );
        }
    }

    /// Property: adding a blocker never widens an attack set.
    #[test]
    fn prop_extra_blockers_only_shrink(occupation in any::<u64>(), extra in any::<u64>(), square in 0..64usize) {
        // A new blocker keeps its own square attacked and only cuts off
        // squares beyond it, so the result is always a subset.
        let base = slider_attacks::rook_attacks(occupation, square);
        let more = slider_attacks::rook_attacks(occupation | extra, square);
        prop_assert_eq!(more & !base, 0);

        let base = slider_attacks::bishop_attacks(occupation, square);
        let more = slider_attacks::bishop_attacks(occupation | extra, square);
        prop_assert_eq!(more & !base, 0);
    }
}
