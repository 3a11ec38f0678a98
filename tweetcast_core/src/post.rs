// The data shared by every stage of the relay pipeline.

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Number of posts remembered per account.
pub const SNAPSHOT_LIMIT: usize = 5;

/// A monitored source-platform identity, like a Twitter user id or handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Account {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single post observed on the source platform.
/// Identity is the platform id alone; text and url are payload.
/// The serialized field names match the cache files written by earlier versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "tweet_id")]
    pub id: String,
    #[serde(rename = "tweet_text")]
    pub text: String,
    #[serde(rename = "tweet_url")]
    pub url: String,
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Post {
    /// Whether the text marks a reshare. Only the first two characters are checked,
    /// case-sensitively, so `"RTX update"` counts while `"rt @x"` does not.
    pub fn is_reshare(&self) -> bool {
        is_reshare(&self.text)
    }
}

pub fn is_reshare(text: &str) -> bool {
    text.starts_with("RT")
}

/// The last observed posts of every account, keyed by account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<Account, Vec<Post>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached posts of an account, empty if it was never observed.
    pub fn get(&self, account: &Account) -> &[Post] {
        self.entries.get(account).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, account: &Account) -> bool {
        self.entries.contains_key(account)
    }

    /// Replace the entry of an account wholesale. Entries are never merged.
    pub fn replace(&mut self, account: Account, posts: Vec<Post>) -> Option<Vec<Post>> {
        self.entries.insert(account, posts)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Opaque confirmation returned by the destination network for a relayed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastHash(pub String);

impl Display for CastHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
