//! Identity types shared by every user: who is talking and where.

use std::fmt;

/// Identifier of a simulated user, e.g. `user_3`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a chat room, derived from its members.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the id of the room holding `members`.
///
/// The ids are sorted and deduplicated before being joined with `_`, so any
/// permutation of the same member set yields the same room id. Two rooms
/// with the same members are the same room.
pub fn derive_room_id<'a>(members: impl IntoIterator<Item = &'a UserId>) -> RoomId {
    let mut ids: Vec<&str> = members.into_iter().map(UserId::as_str).collect();
    ids.sort_unstable();
    ids.dedup();
    RoomId(ids.join("_"))
}

/// A chat room snapshot. Rooms are never mutated once created; users pass
/// copies around inside events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRoom {
    id: RoomId,
    members: Vec<UserId>,
}

impl ChatRoom {
    pub fn new(members: impl IntoIterator<Item = UserId>) -> Self {
        let mut members: Vec<UserId> = members.into_iter().collect();
        members.sort();
        members.dedup();
        let id = derive_room_id(&members);
        Self { id, members }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Members in id order.
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn has_member(&self, user: &UserId) -> bool {
        self.members.binary_search(user).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<UserId> {
        names.iter().map(|name| UserId::from(*name)).collect()
    }

    #[test]
    fn room_id_ignores_member_order() {
        let forward = ids(&["user_1", "user_3"]);
        let backward = ids(&["user_3", "user_1"]);

        assert_eq!(derive_room_id(&forward).as_str(), "user_1_user_3");
        assert_eq!(derive_room_id(&forward), derive_room_id(&backward));
    }

    #[test]
    fn room_id_is_the_same_for_every_permutation() {
        let members = ids(&["c", "a", "d", "b"]);
        let expected = derive_room_id(&members);
        let permutations = [
            ids(&["a", "b", "c", "d"]),
            ids(&["d", "c", "b", "a"]),
            ids(&["b", "d", "a", "c"]),
            ids(&["c", "a", "b", "d"]),
        ];
        for permutation in permutations {
            assert_eq!(derive_room_id(&permutation), expected);
        }
        assert_eq!(expected.as_str(), "a_b_c_d");
    }

    #[test]
    fn room_id_deduplicates_members() {
        let members = ids(&["B", "A", "B"]);
        assert_eq!(derive_room_id(&members).as_str(), "A_B");
    }

    #[test]
    fn new_room_sorts_members_and_answers_membership() {
        let room = ChatRoom::new(ids(&["user_2", "user_1", "user_2"]));

        assert_eq!(room.id().as_str(), "user_1_user_2");
        assert_eq!(room.members(), ids(&["user_1", "user_2"]).as_slice());
        assert!(room.has_member(&UserId::from("user_1")));
        assert!(!room.has_member(&UserId::from("user_3")));
    }
}
