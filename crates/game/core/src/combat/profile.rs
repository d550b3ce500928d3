//! Attacker stat bundle.

/// Damage range and hit probabilities of one side of a fight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackProfile {
    pub min_damage: i32,
    pub max_damage: i32,
    /// Added to both ends of the damage range.
    pub bonus: i32,
    /// Probability in `[0, 1]` that the attack misses outright.
    pub miss_rate: f64,
    /// Probability in `[0, 1]` that a landed attack deals double damage.
    pub crit_rate: f64,
}

impl AttackProfile {
    /// Profile with the given base range, no bonus, and no miss or crit chance.
    pub const fn new(min_damage: i32, max_damage: i32) -> Self {
        Self {
            min_damage,
            max_damage,
            bonus: 0,
            miss_rate: 0.0,
            crit_rate: 0.0,
        }
    }

    pub const fn with_rates(mut self, miss_rate: f64, crit_rate: f64) -> Self {
        self.miss_rate = miss_rate;
        self.crit_rate = crit_rate;
        self
    }

    pub const fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Inclusive damage range after the bonus.
    pub const fn damage_range(&self) -> (i32, i32) {
        (self.min_damage + self.bonus, self.max_damage + self.bonus)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_damage < 0 {
            return Err("min_damage must not be negative");
        }
        if self.min_damage > self.max_damage {
            return Err("min_damage exceeds max_damage");
        }
        if self.bonus < 0 {
            return Err("bonus must not be negative");
        }
        if !(0.0..=1.0).contains(&self.miss_rate) {
            return Err("miss_rate must lie in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.crit_rate) {
            return Err("crit_rate must lie in [0, 1]");
        }
        Ok(())
    }
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self::new(1, 6)
    }
}
