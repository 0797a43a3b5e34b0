//! Bootstrap helper: starts every user and introduces them to each other.

use chatter_concurrency::tasks::{ActorRef, ActorStart as _};

use crate::{
    config::SimConfig,
    error::ChatError,
    messages::Chat,
    user::{User, UserApi},
};

/// Starts `config.users` users named `user_1`, `user_2`... and delivers
/// every user's presence to every other user.
///
/// Must be called from within the runtime. Every introduction is queued in
/// the recipient's mailbox by the time this returns, ahead of anything the
/// users send each other later.
pub fn populate(config: &SimConfig) -> Result<Vec<ActorRef<User>>, ChatError> {
    config.validate()?;

    let users: Vec<ActorRef<User>> = (1..=config.users)
        .map(|index| User::new(SimConfig::user_id(index), config, config.rng_for(index)).start())
        .collect();

    for (index, user) in users.iter().enumerate() {
        for (other_index, other) in users.iter().enumerate() {
            if index != other_index {
                user.introduce(SimConfig::user_id(other_index + 1), other.recipient::<Chat>())?;
            }
        }
        tracing::debug!("{} is online", SimConfig::user_id(index + 1));
    }
    Ok(users)
}
