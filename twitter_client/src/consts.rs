pub const API_HOST: &str = "twitter241.p.rapidapi.com";
pub const API_BASE: &str = "https://twitter241.p.rapidapi.com";
pub const TWITTER_URL: &str = "https://twitter.com";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";
