//! The simulated chat user.
//!
//! A [`User`] is an actor. It owns everything it knows: the peers it has been
//! told about and the rooms it believes it is in. Nobody else touches that
//! state. Other users reach it through the messages in [`crate::messages`]:
//!
//! - [`Presence`]: a peer came online,
//! - [`Chat`]: a room was created, got a message, or was closed,
//! - [`Snapshot`]: introspection, see [`UserApi::snapshot`].
//!
//! On top of reacting to its mailbox, a user gets a [`Tick`] every
//! `SimConfig::tick`, rolls an [`Action`] and may create a room, post a
//! message or close a room on its own. Its view of the world is only
//! eventually consistent with its peers'.

use std::{collections::HashMap, iter, time::Duration};

use chatter_concurrency::{
    error::ActorError,
    tasks::{send_interval, Actor, ActorRef, Context, Handler, Recipient, TimerHandle},
};
use chrono::{Local, Utc};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng};

use crate::{
    action::{Action, ActionOdds},
    config::SimConfig,
    error::ChatError,
    event::{ChatEvent, ChatEventKind},
    fanout,
    messages::{Chat, Presence, Snapshot, Tick},
    room::{ChatRoom, RoomId, UserId},
};

/// How a user reacted to an incoming chat event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// The user is a member of the new room and joined it.
    Joined(RoomId),
    /// The user saw a new room it is not part of.
    ObservedNew(RoomId),
    ReceivedMessage { room: RoomId, text: String },
    /// The room is gone from the user's joined rooms, whether it was there
    /// or not.
    AcknowledgedClose(RoomId),
}

/// What a user believes at the time it answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub id: UserId,
    /// Known peers, sorted.
    pub peers: Vec<UserId>,
    /// Joined rooms, sorted by room id.
    pub rooms: Vec<ChatRoom>,
}

pub struct User {
    id: UserId,
    peers: HashMap<UserId, Recipient<Chat>>,
    joined: HashMap<RoomId, ChatRoom>,
    rng: StdRng,
    tick: Duration,
    odds: ActionOdds,
    timer: Option<TimerHandle>,
}

pub trait UserApi {
    fn introduce(&self, id: UserId, inbox: Recipient<Chat>) -> Result<(), ActorError>;
    fn deliver(&self, event: ChatEvent) -> Result<(), ActorError>;
    async fn snapshot(&self) -> Result<UserSnapshot, ActorError>;
}

impl UserApi for ActorRef<User> {
    fn introduce(&self, id: UserId, inbox: Recipient<Chat>) -> Result<(), ActorError> {
        self.send(Presence { id, inbox })
    }

    fn deliver(&self, event: ChatEvent) -> Result<(), ActorError> {
        self.send(Chat { event })
    }

    async fn snapshot(&self) -> Result<UserSnapshot, ActorError> {
        self.request(Snapshot).await
    }
}

impl Actor for User {
    async fn started(&mut self, ctx: &Context<Self>) {
        tracing::debug!("[{}] Online, acting every {:?}", self.id, self.tick);
        self.timer = Some(send_interval(self.tick, ctx.clone(), Tick));
    }

    async fn stopped(&mut self, _ctx: &Context<Self>) {
        if let Some(timer) = self.timer.take() {
            timer.cancellation_token.cancel();
        }
        tracing::debug!("[{}] Offline", self.id);
    }
}

impl Handler<Presence> for User {
    async fn handle(&mut self, msg: Presence, _ctx: &Context<Self>) {
        self.handle_presence(msg.id, msg.inbox);
    }
}

impl Handler<Chat> for User {
    async fn handle(&mut self, msg: Chat, _ctx: &Context<Self>) {
        self.handle_event(&msg.event);
    }
}

impl Handler<Tick> for User {
    async fn handle(&mut self, _msg: Tick, _ctx: &Context<Self>) {
        self.on_tick();
    }
}

impl Handler<Snapshot> for User {
    async fn handle(&mut self, _msg: Snapshot, _ctx: &Context<Self>) -> UserSnapshot {
        self.snapshot()
    }
}

impl User {
    /// Creates a user with no peers and no rooms. Tick and odds come from
    /// `config`. Nothing runs until the user is started.
    pub fn new(id: impl Into<UserId>, config: &SimConfig, rng: StdRng) -> Self {
        Self {
            id: id.into(),
            peers: HashMap::new(),
            joined: HashMap::new(),
            rng,
            tick: config.tick,
            odds: config.odds,
            timer: None,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Known peer ids, sorted.
    pub fn peer_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.peers.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Joined rooms, sorted by id.
    pub fn joined_rooms(&self) -> Vec<ChatRoom> {
        let mut rooms: Vec<ChatRoom> = self.joined.values().cloned().collect();
        rooms.sort_unstable_by(|a, b| a.id().cmp(b.id()));
        rooms
    }

    pub fn is_in(&self, room: &RoomId) -> bool {
        self.joined.contains_key(room)
    }

    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id.clone(),
            peers: self.peer_ids(),
            rooms: self.joined_rooms(),
        }
    }

    /// Records the peer `id`, replacing any previous inbox with the same id,
    /// and returns every peer id known so far.
    pub fn handle_presence(&mut self, id: UserId, inbox: Recipient<Chat>) -> Vec<UserId> {
        if id == self.id {
            tracing::debug!("[{}] Ignoring my own presence", self.id);
            return self.peer_ids();
        }
        self.peers.insert(id, inbox);
        let ids = self.peer_ids();
        let names: Vec<&str> = ids.iter().map(UserId::as_str).collect();
        tracing::info!("[{}] I see {} users: {}", self.id, ids.len(), names.join(", "));
        ids
    }

    pub fn handle_event(&mut self, event: &ChatEvent) -> Reaction {
        let room_id = event.room_id().clone();
        match &event.kind {
            ChatEventKind::New => {
                // Membership is checked here, the sender is not trusted.
                if event.room.has_member(&self.id) {
                    self.joined.insert(room_id.clone(), event.room.clone());
                    tracing::info!("[{}] I joined chat {}", self.id, room_id);
                    Reaction::Joined(room_id)
                } else {
                    tracing::info!("[{}] I see a new chat {}", self.id, room_id);
                    Reaction::ObservedNew(room_id)
                }
            }
            ChatEventKind::Message { text } => {
                tracing::info!(
                    "[{}] I received message \"{}\" from chat {}",
                    self.id,
                    text,
                    room_id
                );
                Reaction::ReceivedMessage {
                    room: room_id,
                    text: text.clone(),
                }
            }
            ChatEventKind::Close => {
                self.joined.remove(&room_id);
                tracing::info!("[{}] I acknowledged closing of chat {}", self.id, room_id);
                Reaction::AcknowledgedClose(room_id)
            }
        }
    }

    /// Rolls the odds and performs the picked action, if any.
    pub fn on_tick(&mut self) -> Action {
        let action = self.odds.pick(&mut self.rng);
        self.act(action);
        action
    }

    pub fn act(&mut self, action: Action) {
        match action {
            Action::NewChat => match self.create_chat() {
                Ok(event) => {
                    tracing::info!("[{}] I created a new chatroom: {}", self.id, event.room_id())
                }
                Err(error) => tracing::warn!("[{}] Could not create a chat: {}", self.id, error),
            },
            Action::SendMessage => match self.send_message() {
                Ok(event) => tracing::info!(
                    "[{}] I sent a message \"{}\" to chat {}",
                    self.id,
                    event.text().unwrap_or_default(),
                    event.room_id()
                ),
                Err(error) => tracing::warn!("[{}] Could not send a message: {}", self.id, error),
            },
            Action::CloseChat => match self.close_chat() {
                Ok(event) => tracing::info!("[{}] I closed chat {}", self.id, event.room_id()),
                Err(error) => tracing::warn!("[{}] Could not close a chat: {}", self.id, error),
            },
            Action::Idle => {}
        }
    }

    /// Starts a room with a random subset of the known peers.
    ///
    /// The room holds between 2 and `peers + 1` users, creator included.
    pub fn create_chat(&mut self) -> Result<ChatEvent, ChatError> {
        let peer_ids = self.peer_ids();
        if peer_ids.is_empty() {
            return Err(ChatError::NoPeers);
        }
        let size = self.rng.random_range(2..=peer_ids.len() + 1);
        let chosen: Vec<UserId> =
            rand::seq::index::sample(&mut self.rng, peer_ids.len(), size - 1)
                .into_iter()
                .map(|index| peer_ids[index].clone())
                .collect();
        self.create_chat_with(chosen)
    }

    /// Starts a room with the given peers and the creator.
    ///
    /// The `New` event goes to every known peer, not only the members: each
    /// recipient decides for itself whether it belongs to the room.
    pub fn create_chat_with(
        &mut self,
        members: impl IntoIterator<Item = UserId>,
    ) -> Result<ChatEvent, ChatError> {
        let members: Vec<UserId> = members
            .into_iter()
            .filter(|member| *member != self.id)
            .collect();
        if members.is_empty() {
            return Err(ChatError::NoPeers);
        }
        if let Some(stranger) = members.iter().find(|member| !self.peers.contains_key(*member)) {
            return Err(ChatError::UnknownPeer(stranger.clone()));
        }

        let room = ChatRoom::new(members.into_iter().chain(iter::once(self.id.clone())));
        if self.joined.contains_key(room.id()) {
            return Err(ChatError::DuplicateChatId(room.id().clone()));
        }

        let event = ChatEvent::new_chat(self.id.clone(), room.clone());
        fanout::broadcast(self.peers.values(), &event);
        self.joined.insert(room.id().clone(), room);
        Ok(event)
    }

    /// Posts a greeting to one of the joined rooms, picked at random.
    ///
    /// Only the other members of the room get the message. Members missing
    /// from the peer registry are skipped.
    pub fn send_message(&mut self) -> Result<ChatEvent, ChatError> {
        let room = self.random_room()?;
        let now = Utc::now();
        let text = format!(
            "Hello from {} at {}",
            self.id,
            now.with_timezone(&Local).format("%H:%M:%S")
        );
        let event = ChatEvent::at(
            now,
            self.id.clone(),
            room,
            ChatEventKind::Message { text },
        );

        for member in event.room.members().iter().filter(|member| **member != self.id) {
            match self.peers.get(member) {
                Some(peer) => {
                    fanout::deliver(peer, event.clone());
                }
                None => tracing::warn!(
                    "[{}] Skipping unknown member {} of chat {}",
                    self.id,
                    member,
                    event.room_id()
                ),
            }
        }
        Ok(event)
    }

    /// Closes one of the joined rooms, picked at random, and tells every
    /// known peer about it.
    pub fn close_chat(&mut self) -> Result<ChatEvent, ChatError> {
        let room = self.random_room()?;
        let event = ChatEvent::close(self.id.clone(), room);
        fanout::broadcast(self.peers.values(), &event);
        self.joined.remove(event.room_id());
        Ok(event)
    }

    /// Picks a joined room uniformly. Room ids are sorted first so a seeded
    /// rng always makes the same choice.
    fn random_room(&mut self) -> Result<ChatRoom, ChatError> {
        let mut ids: Vec<&RoomId> = self.joined.keys().collect();
        ids.sort_unstable();
        let id = ids
            .choose(&mut self.rng)
            .ok_or(ChatError::NoChatsAvailable)?;
        Ok(self.joined[*id].clone())
    }
}
