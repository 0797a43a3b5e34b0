//! Simulation settings, shared by the bootstrap and every user.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use crate::{action::ActionOdds, error::ConfigError, room::UserId};

pub const DEFAULT_USERS: usize = 4;
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of simulated users, at least 2.
    pub users: usize,
    /// Interval between two autonomous decisions of a user.
    pub tick: Duration,
    /// Base seed. `None` seeds every user from OS entropy.
    pub seed: Option<u64>,
    pub odds: ActionOdds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            tick: DEFAULT_TICK,
            seed: None,
            odds: ActionOdds::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.users < 2 {
            return Err(ConfigError::TooFewUsers(self.users));
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        self.odds.validate()
    }

    /// Id of the user at `index`, counting from 1: `user_1`, `user_2`...
    pub fn user_id(index: usize) -> UserId {
        UserId::from(format!("user_{index}"))
    }

    /// Random source of the user at `index`. Reproducible when a seed is set.
    pub fn rng_for(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => {
                StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_a_single_user() {
        let config = SimConfig {
            users: 1,
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewUsers(1)));
    }

    #[test]
    fn rejects_zero_ticks() {
        let config = SimConfig {
            tick: Duration::ZERO,
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));
    }

    #[test]
    fn rejects_odds_above_the_range() {
        let config = SimConfig {
            odds: ActionOdds {
                new_chat: 5,
                send_message: 5,
                close_chat: 5,
                out_of: 10,
            },
            ..SimConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidOdds {
                total: 15,
                out_of: 10
            })
        );
    }

    #[test]
    fn user_ids_count_from_one() {
        assert_eq!(SimConfig::user_id(1).as_str(), "user_1");
        assert_eq!(SimConfig::user_id(12).as_str(), "user_12");
    }

    #[test]
    fn seeded_rngs_are_reproducible_and_distinct_per_user() {
        let config = SimConfig {
            seed: Some(7),
            ..SimConfig::default()
        };
        let first: Vec<u64> = (0..4).map(|_| config.rng_for(1).random()).collect();
        assert!(first.windows(2).all(|pair| pair[0] == pair[1]));

        let user_1: u64 = config.rng_for(1).random();
        let user_2: u64 = config.rng_for(2).random();
        assert_ne!(user_1, user_2);
    }
}
