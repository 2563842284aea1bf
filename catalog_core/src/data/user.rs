use serde::{Deserialize, Serialize};

/// A unique ID that can be used to refer to a user.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// The display name of the user, e.g. "Roma". This is also the value that
    /// the user filter matches against.
    pub name: String,
    pub sex: Sex,
}

/// The users known to the catalog, in the order they were supplied.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsersTable {
    users: Vec<User>,
}

impl UsersTable {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Returns every user whose ID is `id`. For a well-formed table this is
    /// at most one user.
    pub fn matching(&self, id: UserId) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |user| user.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
