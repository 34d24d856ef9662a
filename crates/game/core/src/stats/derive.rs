//! Stable per-hero stat derivation.
//!
//! Stats are drawn from a [`PcgRng`] seeded with the first eight bytes of
//! `SHA-256(id)`, so a hero id always maps to the same numbers on every
//! client and every render.

use sha2::{Digest, Sha256};

use crate::rng::PcgRng;

/// Combat stats generated for a hero that has none on record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub attack: u32,
    pub defense: u32,
    pub damage: u32,
    pub chakra: u32,
}

impl DerivedStats {
    pub const ATTACK_RANGE: (u32, u32) = (20, 69);
    pub const DEFENSE_RANGE: (u32, u32) = (5, 54);
    pub const DAMAGE_RANGE: (u32, u32) = (10, 39);
    pub const CHAKRA_RANGE: (u32, u32) = (50, 149);

    pub fn for_hero(id: &str) -> Self {
        let mut rng = PcgRng::seeded(stat_seed(id));
        Self {
            attack: rng.range_u32(Self::ATTACK_RANGE.0, Self::ATTACK_RANGE.1),
            defense: rng.range_u32(Self::DEFENSE_RANGE.0, Self::DEFENSE_RANGE.1),
            damage: rng.range_u32(Self::DAMAGE_RANGE.0, Self::DAMAGE_RANGE.1),
            chakra: rng.range_u32(Self::CHAKRA_RANGE.0, Self::CHAKRA_RANGE.1),
        }
    }
}

/// Seed for a hero id: big-endian head of its SHA-256 digest.
pub fn stat_seed(id: &str) -> u64 {
    let digest = Sha256::digest(id.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_digest_prefix() {
        // SHA-256("abc") = ba7816bf8f01cfea...
        let expected = u64::from_be_bytes(
            hex::decode("ba7816bf8f01cfea")
                .unwrap()
                .try_into()
                .unwrap(),
        );
        assert_eq!(stat_seed("abc"), expected);
    }

    #[test]
    fn same_id_same_stats() {
        let id = "0x5f3c9a1e7b2d4c6f8a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f";
        assert_eq!(DerivedStats::for_hero(id), DerivedStats::for_hero(id));
    }

    #[test]
    fn stats_fall_in_ranges() {
        for i in 0..200 {
            let stats = DerivedStats::for_hero(&format!("0x{i:064x}"));
            let in_range = |v: u32, (lo, hi): (u32, u32)| (lo..=hi).contains(&v);
            assert!(in_range(stats.attack, DerivedStats::ATTACK_RANGE));
            assert!(in_range(stats.defense, DerivedStats::DEFENSE_RANGE));
            assert!(in_range(stats.damage, DerivedStats::DAMAGE_RANGE));
            assert!(in_range(stats.chakra, DerivedStats::CHAKRA_RANGE));
        }
    }

    #[test]
    fn ids_sharing_characters_still_differ() {
        // Ids that agree on a couple of characters must not collapse together.
        let distinct: std::collections::HashSet<_> = ["0xaa01", "0xaa02", "0xaa03", "0xaa04"]
            .iter()
            .map(|id| DerivedStats::for_hero(id))
            .collect();
        assert!(distinct.len() > 1);
    }
}
