use crate::error::ConfigFault;

/// Uniform range a damage roll is scaled by.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VarianceBand {
    pub min: f64,
    pub max: f64,
}

impl VarianceBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A band that always yields exactly `1.0`.
    pub const fn fixed() -> Self {
        Self { min: 1.0, max: 1.0 }
    }
}

impl Default for VarianceBand {
    fn default() -> Self {
        Self::new(
            BattleConfig::DEFAULT_VARIANCE_MIN,
            BattleConfig::DEFAULT_VARIANCE_MAX,
        )
    }
}

/// Battle tuning parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Maximum number of rounds before the battle is declared a draw.
    pub round_cap: u32,
    /// Probability in `[0, 1]` that a single attack is critical.
    pub crit_chance: f64,
    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: f64,
    /// Random scaling band applied to every attack.
    pub variance: VarianceBand,
    /// Minimum fraction of damage that always passes through defense.
    pub mitigation_floor: f64,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUND_CAP: u32 = 20;
    pub const DEFAULT_CRIT_CHANCE: f64 = 0.20;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_VARIANCE_MIN: f64 = 0.85;
    pub const DEFAULT_VARIANCE_MAX: f64 = 1.15;
    pub const DEFAULT_MITIGATION_FLOOR: f64 = 0.10;

    pub fn new() -> Self {
        Self {
            round_cap: Self::DEFAULT_ROUND_CAP,
            crit_chance: Self::DEFAULT_CRIT_CHANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            variance: VarianceBand::default(),
            mitigation_floor: Self::DEFAULT_MITIGATION_FLOOR,
        }
    }

    #[must_use]
    pub fn with_round_cap(mut self, round_cap: u32) -> Self {
        self.round_cap = round_cap;
        self
    }

    #[must_use]
    pub fn with_crit_chance(mut self, crit_chance: f64) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    #[must_use]
    pub fn with_crit_multiplier(mut self, crit_multiplier: f64) -> Self {
        self.crit_multiplier = crit_multiplier;
        self
    }

    #[must_use]
    pub fn with_variance(mut self, variance: VarianceBand) -> Self {
        self.variance = variance;
        self
    }

    #[must_use]
    pub fn with_mitigation_floor(mut self, mitigation_floor: f64) -> Self {
        self.mitigation_floor = mitigation_floor;
        self
    }

    /// Checks that every parameter lies in the domain the engine relies on.
    ///
    /// NaN and infinite values fail every range check below.
    pub fn validate(&self) -> Result<(), ConfigFault> {
        if self.round_cap == 0 {
            return Err(ConfigFault::ZeroRoundCap);
        }
        if !(0.0..=1.0).contains(&self.crit_chance) {
            return Err(ConfigFault::CritChance(self.crit_chance));
        }
        if !(self.crit_multiplier >= 1.0 && self.crit_multiplier.is_finite()) {
            return Err(ConfigFault::CritMultiplier(self.crit_multiplier));
        }
        let VarianceBand { min, max } = self.variance;
        if !(min >= 0.0 && min <= max && max.is_finite()) {
            return Err(ConfigFault::VarianceBand { min, max });
        }
        if !(0.0..=1.0).contains(&self.mitigation_floor) {
            return Err(ConfigFault::MitigationFloor(self.mitigation_floor));
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_tuning() {
        let config = BattleConfig::default();
        assert_eq!(config.round_cap, 20);
        assert_eq!(config.crit_chance, 0.20);
        assert_eq!(config.crit_multiplier, 1.5);
        assert_eq!(config.variance, VarianceBand::new(0.85, 1.15));
        assert_eq!(config.mitigation_floor, 0.10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_domain_values() {
        let base = BattleConfig::default();

        assert_eq!(
            base.clone().with_round_cap(0).validate(),
            Err(ConfigFault::ZeroRoundCap)
        );
        assert!(matches!(
            base.clone().with_crit_chance(1.5).validate(),
            Err(ConfigFault::CritChance(_))
        ));
        assert!(matches!(
            base.clone().with_crit_chance(f64::NAN).validate(),
            Err(ConfigFault::CritChance(_))
        ));
        assert!(matches!(
            base.clone().with_crit_multiplier(0.5).validate(),
            Err(ConfigFault::CritMultiplier(_))
        ));
        assert!(matches!(
            base.clone()
                .with_variance(VarianceBand::new(1.2, 0.8))
                .validate(),
            Err(ConfigFault::VarianceBand { .. })
        ));
        assert!(matches!(
            base.with_mitigation_floor(-0.1).validate(),
            Err(ConfigFault::MitigationFloor(_))
        ));
    }

    #[test]
    fn fixed_band_is_valid() {
        let config = BattleConfig::default().with_variance(VarianceBand::fixed());
        assert!(config.validate().is_ok());
    }
}
