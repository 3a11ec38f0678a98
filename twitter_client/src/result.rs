use serde::{Deserialize, Serialize};

use crate::consts::TWITTER_URL;
use crate::response::{
    self, RawTweetResult, TimelineEntry, TimelineEntryContent, TimelineInstruction, TweetVariation, UserTweetsResponse,
};

/// A tweet as extracted from a timeline. Fields the upstream left out stay `None`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: String,
    pub full_text: Option<String>,
    pub screen_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TimelineResult {
    /// Tweets in timeline order, pinned entries included where they appear.
    pub tweets: Vec<Tweet>,
    /// Tweet results that were unavailable, unreadable or carried no usable id.
    pub skipped: usize,
}

// MARK: Helpers

impl Tweet {
    pub fn text(&self) -> &str {
        self.full_text.as_deref().unwrap_or_default()
    }

    /// `https://twitter.com/<screen_name>/status/<id>`; the handle is left empty if unknown.
    pub fn url(&self) -> String {
        format!(
            "{}/{}/status/{}",
            TWITTER_URL,
            self.screen_name.as_deref().unwrap_or_default(),
            self.id
        )
    }
}

impl TimelineResult {
    fn push_entry(&mut self, entry: TimelineEntry) {
        let contents = match entry.content {
            TimelineEntryContent::Item { item_content } => vec![item_content],
            TimelineEntryContent::Module { items } => items
                .into_iter()
                .map(|item| item.item.and_then(|i| i.item_content))
                .collect(),
            TimelineEntryContent::Other => vec![],
        };
        // Items without `tweet_results` hold no tweet; a present but unreadable result counts as skipped
        let results = contents.into_iter().flatten().filter_map(|content| content.tweet_results);
        for result in results {
            match result.result.and_then(RawTweetResult::into_tweet) {
                Some(tweet) => self.tweets.push(tweet),
                None => self.skipped += 1,
            }
        }
    }
}

// MARK: Conversions

impl response::Tweet {
    fn into_tweet(self) -> Option<Tweet> {
        let legacy = self.legacy.unwrap_or_default();
        // Prefer the legacy string id, fall back to the result id
        let id = non_empty(legacy.id_str).or_else(|| non_empty(self.rest_id))?;
        let user = self.core.and_then(|c| c.user).and_then(|u| u.result).unwrap_or_default();
        let screen_name = user
            .legacy
            .and_then(|l| l.screen_name)
            .or_else(|| user.core.and_then(|c| c.screen_name));
        Some(Tweet {
            id,
            full_text: legacy.full_text,
            screen_name,
        })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

impl TweetVariation {
    fn into_tweet(self) -> Option<Tweet> {
        match self {
            TweetVariation::Tweet(tweet) => tweet.into_tweet(),
            TweetVariation::TweetWithVisibilityResults { tweet } => tweet.into_tweet(),
            TweetVariation::Unavailable => None,
        }
    }
}

impl RawTweetResult {
    fn into_tweet(self) -> Option<Tweet> {
        match self {
            RawTweetResult::Typed(variation) => variation.into_tweet(),
            RawTweetResult::Untyped(tweet) => tweet.into_tweet(),
        }
    }
}

impl From<UserTweetsResponse> for TimelineResult {
    fn from(value: UserTweetsResponse) -> Self {
        let mut result = TimelineResult::default();
        for instruction in value.result.timeline.instructions {
            match instruction {
                TimelineInstruction::TimelineAddEntries { entries } => {
                    for entry in entries {
                        result.push_entry(entry);
                    }
                }
                TimelineInstruction::TimelinePinEntry { entry: Some(entry) } => result.push_entry(entry),
                _ => {}
            }
        }
        result
    }
}
