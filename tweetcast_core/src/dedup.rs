use std::collections::HashSet;

use crate::post::Post;

/// Posts of `fetched` whose id is not among `previous`, in `fetched` order.
/// With no previous posts every fetched post is new.
pub fn diff(fetched: &[Post], previous: &[Post]) -> Vec<Post> {
    let seen: HashSet<&str> = previous.iter().map(|p| p.id.as_str()).collect();
    fetched
        .iter()
        .filter(|p| !seen.contains(p.id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(ids: &[&str]) -> Vec<Post> {
        ids.iter()
            .map(|id| Post {
                id: id.to_string(),
                text: format!("post {}", id),
                url: format!("https://twitter.com/alice/status/{}", id),
            })
            .collect()
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_diff_first_observation() {
        let fetched = posts(&["1", "2", "3"]);
        assert_eq!(ids(&diff(&fetched, &[])), ["1", "2", "3"]);
    }

    #[test]
    fn test_diff_keeps_fetched_order() {
        let fetched = posts(&["5", "2", "4", "3"]);
        let previous = posts(&["1", "2", "3"]);
        assert_eq!(ids(&diff(&fetched, &previous)), ["5", "4"]);
    }

    #[test]
    fn test_diff_unchanged_is_empty() {
        let fetched = posts(&["3", "2", "1"]);
        assert!(diff(&fetched, &posts(&["1", "2", "3"])).is_empty());
        assert!(diff(&[], &fetched).is_empty());
    }

    #[test]
    fn test_diff_ignores_text_changes() {
        let mut fetched = posts(&["1"]);
        fetched[0].text = "edited".to_string();
        assert!(diff(&fetched, &posts(&["1"])).is_empty());
    }
}
