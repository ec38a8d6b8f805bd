use serde::{Deserialize, Serialize};

/// Condensed author block copied off a raw post. Every field is nullable;
/// the provider frequently omits parts of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub profile_pic_url: Option<String>,
    pub is_verified: Option<bool>,
}

/// Output shape for a single post. All keys are always serialized; a field
/// the provider did not send comes out as `null` (caption as `""`), never
/// as a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPost {
    pub media_id: Option<String>,
    pub pk: Option<String>,
    pub code: Option<String>,
    /// 1 = photo, 2 = video/reel
    pub media_type: Option<i64>,
    pub taken_at: Option<i64>,
    pub caption: String,
    pub like_count: Option<i64>,
    pub comment_count: Option<i64>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub user: Option<AuthorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub username: String,
    pub user_id: String,
    pub post_count: usize,
    pub posts: Vec<NormalizedPost>,
}

impl FeedResponse {
    /// `post_count` always mirrors `posts.len()`; constructing through here
    /// keeps the two from drifting.
    pub fn new(username: String, user_id: String, posts: Vec<NormalizedPost>) -> Self {
        Self {
            username,
            user_id,
            post_count: posts.len(),
            posts,
        }
    }
}
