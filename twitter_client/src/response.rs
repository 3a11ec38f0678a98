use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, VecSkipError};

// User

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LegacyUser {
    pub screen_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UserCore {
    pub screen_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct User {
    #[serde(default)]
    pub legacy: Option<LegacyUser>,
    /// Newer responses moved the handle here.
    #[serde(default)]
    pub core: Option<UserCore>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UserResult {
    #[serde(default)]
    pub result: Option<User>,
}

// Tweet

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TweetUser {
    #[serde(rename = "user_results", default)]
    pub user: Option<UserResult>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LegacyTweet {
    pub id_str: Option<String>,
    pub full_text: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Tweet {
    #[serde(default)]
    pub rest_id: Option<String>,
    #[serde(default)]
    pub legacy: Option<LegacyTweet>,
    #[serde(default)]
    pub core: Option<TweetUser>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(tag = "__typename")]
pub enum TweetVariation {
    Tweet(Tweet),
    TweetWithVisibilityResults {
        tweet: Tweet,
    },
    /// Tombstones, unavailable or withheld tweets.
    #[serde(other)]
    Unavailable,
}

/// Some responses omit `__typename`; those results are read as a plain tweet.
#[allow(clippy::large_enum_variant)]
#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum RawTweetResult {
    Typed(TweetVariation),
    Untyped(Tweet),
}

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TweetResult {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub result: Option<RawTweetResult>,
}

// Timeline

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TimelineItemContent {
    #[serde(default)]
    pub tweet_results: Option<TweetResult>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TimelineModuleItemInner {
    #[serde(rename = "itemContent", default)]
    pub item_content: Option<TimelineItemContent>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TimelineModuleItem {
    #[serde(default)]
    pub item: Option<TimelineModuleItemInner>,
}

#[allow(clippy::large_enum_variant)]
#[serde_as]
#[derive(Deserialize, Serialize, Debug)]
#[serde(tag = "entryType")]
pub enum TimelineEntryContent {
    /// A single tweet.
    #[serde(rename = "TimelineTimelineItem")]
    Item {
        #[serde(rename = "itemContent", default)]
        item_content: Option<TimelineItemContent>,
    },
    /// Several tweets, like a self-thread or a conversation.
    #[serde(rename = "TimelineTimelineModule")]
    Module {
        #[serde_as(as = "VecSkipError<_>")]
        #[serde(default)]
        items: Vec<TimelineModuleItem>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TimelineEntry {
    #[serde(rename = "entryId", default)]
    pub entry_id: Option<String>,
    pub content: TimelineEntryContent,
}

#[allow(clippy::large_enum_variant)]
#[serde_as]
#[derive(Deserialize, Serialize, Debug)]
#[serde(tag = "type")]
pub enum TimelineInstruction {
    TimelineAddEntries {
        #[serde_as(as = "VecSkipError<_>")]
        #[serde(default)]
        entries: Vec<TimelineEntry>,
    },
    TimelinePinEntry {
        #[serde_as(as = "DefaultOnError")]
        #[serde(default)]
        entry: Option<TimelineEntry>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Timeline {
    pub instructions: Vec<TimelineInstruction>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TimelineWrapper {
    #[serde(alias = "timeline_v2")]
    pub timeline: Timeline,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UserTweetsResponse {
    pub result: TimelineWrapper,
}
