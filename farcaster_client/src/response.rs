use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CastAuthor {
    pub fid: u64,
    pub username: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Cast {
    pub hash: String,
    pub text: Option<String>,
    pub author: Option<CastAuthor>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CastResult {
    pub cast: Cast,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CastResponse {
    pub result: CastResult,
}

#[derive(Serialize, Debug)]
pub struct CastRequest<'a> {
    pub text: &'a str,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ApiErrorMessage {
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorMessage>,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(self.errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))
    }
}
