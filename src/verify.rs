//! Cross-checking of the fast evaluators against the ray-walking oracle.
//!
//! A development and testing gate, not a production path: sweeps every
//! square over structured boards plus a seeded random sample, and reports
//! the first disagreement as a structured [`Mismatch`] instead of
//! asserting. Release code never calls into this module.

use std::fmt;

use rand::prelude::*;

use crate::{raycast, Bitboard, SliderAttacks};

/// Which piece type a mismatch was observed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slider {
    Bishop,
    Rook,
}

/// A single disagreement between a variant and the oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub variant: &'static str,
    pub slider: Slider,
    pub square: usize,
    pub occupation: Bitboard,
    pub expected: Bitboard,
    pub actual: Bitboard,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} attacks from square {} under occupation {:#018x}: expected {:#018x}, got {:#018x}",
            self.variant, self.slider, self.square, self.occupation, self.expected, self.actual
        )
    }
}

/// Boards that exercise the classic failure modes: empty, saturated,
/// rank/file/color stripes, and lone corner pieces.
const STRUCTURED: &[Bitboard] = &[
    0,
    !0,
    0x00ff00ff00ff00ff,
    0xff00ff00ff00ff00,
    0x5555555555555555,
    0xaaaaaaaaaaaaaaaa,
    0x0f0f0f0f0f0f0f0f,
    0x8100000000000081,
];

fn check_occupation(variant: &dyn SliderAttacks, occupation: Bitboard) -> Result<(), Mismatch> {
    for square in 0..64 {
        let expected = raycast::bishop_attacks(occupation, square);
        let actual = variant.bishop(occupation, square);
        if actual != expected {
            return Err(Mismatch {
                variant: variant.name(),
                slider: Slider::Bishop,
                square,
                occupation,
                expected,
                actual,
            });
        }

        let expected = raycast::rook_attacks(occupation, square);
        let actual = variant.rook(occupation, square);
        if actual != expected {
            return Err(Mismatch {
                variant: variant.name(),
                slider: Slider::Rook,
                square,
                occupation,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Check one variant on every square over the structured boards and
/// `samples` seeded random occupancies.
pub fn check_variant(
    variant: &dyn SliderAttacks,
    seed: u64,
    samples: usize,
) -> Result<(), Mismatch> {
    for &occupation in STRUCTURED {
        check_occupation(variant, occupation)?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..samples {
        // AND two draws to land near realistic board densities.
        let occupation = rng.gen::<u64>() & rng.gen::<u64>();
        check_occupation(variant, occupation)?;
    }

    #[cfg(feature = "logging")]
    log::debug!("{}: verified against ray walking", variant.name());

    Ok(())
}

/// Check every variant; stops at the first mismatch.
pub fn check_all(seed: u64, samples: usize) -> Result<(), Mismatch> {
    for variant in crate::VARIANTS {
        check_variant(variant, seed, samples)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_pass() {
        if let Err(mismatch) = check_all(0x5eed, 200) {
            panic!("{mismatch}");
        }
    }

    #[test]
    fn mismatch_report_is_readable() {
        let mismatch = Mismatch {
            variant: "classic",
            slider: Slider::Rook,
            square: 0,
            occupation: 0x100,
            expected: 0x1fe,
            actual: 0,
        };
        let text = mismatch.to_string();
        assert!(text.contains("classic"));
        assert!(text.contains("square 0"));
    }
}
