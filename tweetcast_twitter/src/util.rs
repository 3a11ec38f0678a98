use tweetcast_core::Post;
use twitter_client as client;

pub(crate) fn post(tweet: &client::Tweet) -> Post {
    Post {
        id: tweet.id.clone(),
        text: tweet.text().to_string(),
        url: tweet.url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timeline() -> client::TimelineResult {
        let content = json!({
            "result": { "timeline": { "instructions": [{
                "type": "TimelineAddEntries",
                "entries": [
                    { "content": { "entryType": "TimelineTimelineItem", "itemContent": { "tweet_results": { "result": {
                        "__typename": "Tweet",
                        "rest_id": "1700",
                        "core": { "user_results": { "result": { "legacy": { "screen_name": "alice" } } } },
                        "legacy": { "id_str": "1700", "full_text": "gm" }
                    } } } } },
                    { "content": { "entryType": "TimelineTimelineItem", "itemContent": { "tweet_results": { "result": {
                        "__typename": "Tweet",
                        "rest_id": "1701"
                    } } } } }
                ]
            }] } }
        });
        client::parse_user_tweets(&content.to_string()).unwrap()
    }

    #[test]
    fn test_post_from_tweet() {
        let timeline = timeline();
        let post = post(&timeline.tweets[0]);
        assert_eq!(post.id, "1700");
        assert_eq!(post.text, "gm");
        assert_eq!(post.url, "https://twitter.com/alice/status/1700");
    }

    #[test]
    fn test_post_from_bare_tweet() {
        let timeline = timeline();
        let post = post(&timeline.tweets[1]);
        assert_eq!(post.id, "1701");
        assert_eq!(post.text, "");
        assert_eq!(post.url, "https://twitter.com//status/1701");
    }
}
