//! The autonomous decision a user makes on every tick.

use rand::Rng;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewChat,
    SendMessage,
    CloseChat,
    Idle,
}

/// Weights of each action over a roll in `0..out_of`. Whatever is left of
/// the range after the three actions is idle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOdds {
    pub new_chat: u32,
    pub send_message: u32,
    pub close_chat: u32,
    pub out_of: u32,
}

impl Default for ActionOdds {
    fn default() -> Self {
        Self {
            new_chat: 1,
            send_message: 1,
            close_chat: 1,
            out_of: 10,
        }
    }
}

impl ActionOdds {
    /// Odds that never pick an action. Handy to keep users quiet.
    pub fn idle() -> Self {
        Self {
            new_chat: 0,
            send_message: 0,
            close_chat: 0,
            out_of: 1,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.acting_range();
        if self.out_of == 0 || total > self.out_of {
            return Err(ConfigError::InvalidOdds {
                total,
                out_of: self.out_of,
            });
        }
        Ok(())
    }

    /// Part of `0..out_of` that picks an action. Saturates instead of
    /// wrapping, so oversized weights fail validation.
    fn acting_range(&self) -> u32 {
        self.new_chat
            .saturating_add(self.send_message)
            .saturating_add(self.close_chat)
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        if self.out_of == 0 {
            return Action::Idle;
        }
        let roll = rng.random_range(0..self.out_of);
        if roll < self.new_chat {
            Action::NewChat
        } else if roll < self.new_chat.saturating_add(self.send_message) {
            Action::SendMessage
        } else if roll < self.acting_range() {
            Action::CloseChat
        } else {
            Action::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn idle_odds_never_act() {
        let mut rng = StdRng::seed_from_u64(1);
        let odds = ActionOdds::idle();
        assert!((0..1000).all(|_| odds.pick(&mut rng) == Action::Idle));
    }

    #[test]
    fn full_odds_never_idle() {
        let mut rng = StdRng::seed_from_u64(2);
        let odds = ActionOdds {
            new_chat: 1,
            send_message: 1,
            close_chat: 1,
            out_of: 3,
        };
        let picks: Vec<Action> = (0..300).map(|_| odds.pick(&mut rng)).collect();
        assert!(!picks.contains(&Action::Idle));
        assert!(picks.contains(&Action::NewChat));
        assert!(picks.contains(&Action::SendMessage));
        assert!(picks.contains(&Action::CloseChat));
    }

    #[test]
    fn single_action_odds_always_pick_it() {
        let mut rng = StdRng::seed_from_u64(3);
        let odds = ActionOdds {
            new_chat: 0,
            send_message: 0,
            close_chat: 4,
            out_of: 4,
        };
        assert!((0..100).all(|_| odds.pick(&mut rng) == Action::CloseChat));
    }

    #[test]
    fn oversized_weights_are_rejected_instead_of_wrapping() {
        let odds = ActionOdds {
            new_chat: u32::MAX,
            send_message: 2,
            close_chat: 0,
            out_of: 10,
        };
        assert_eq!(
            odds.validate(),
            Err(ConfigError::InvalidOdds {
                total: u32::MAX,
                out_of: 10
            })
        );

        let mut rng = StdRng::seed_from_u64(4);
        assert!((0..100).all(|_| odds.pick(&mut rng) == Action::NewChat));
    }
}
