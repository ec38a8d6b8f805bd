//! Pure reshaping of raw provider posts. Every upstream field is optional
//! and untrusted; extraction is a get-or-default lookup per field, so a
//! payload missing any level of nesting degrades to `null` instead of
//! failing the whole request.

use crate::core::model::{AuthorSummary, NormalizedPost};
use serde_json::Value;

/// Walks a dotted path through objects and arrays, e.g.
/// `image_versions2.candidates.0.url`. Numeric segments index into arrays.
pub fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Provider ids arrive as either strings or numbers depending on the
/// endpoint variant; both are accepted. Anything else resolves to `None`.
pub fn string_at(root: &Value, path: &str) -> Option<String> {
    match value_at(root, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn int_at(root: &Value, path: &str) -> Option<i64> {
    value_at(root, path)?.as_i64()
}

pub fn bool_at(root: &Value, path: &str) -> Option<bool> {
    value_at(root, path)?.as_bool()
}

/// Pure function of the raw post: normalizing the same value twice yields
/// the same output. `include_author` drops the nested author summary, a
/// per-deployment configuration choice rather than a separate code path.
pub fn normalize_post(item: &Value, include_author: bool) -> NormalizedPost {
    let user = if include_author {
        value_at(item, "user")
            .filter(|raw| raw.is_object())
            .map(|raw| AuthorSummary {
                // The author block keys its id as `pk`
                id: string_at(raw, "pk"),
                username: string_at(raw, "username"),
                full_name: string_at(raw, "full_name"),
                profile_pic_url: string_at(raw, "profile_pic_url"),
                is_verified: bool_at(raw, "is_verified"),
            })
    } else {
        None
    };

    NormalizedPost {
        media_id: string_at(item, "id"),
        pk: string_at(item, "pk"),
        code: string_at(item, "code"),
        media_type: int_at(item, "media_type"),
        taken_at: int_at(item, "taken_at"),
        caption: string_at(item, "caption.text").unwrap_or_default(),
        like_count: int_at(item, "like_count"),
        comment_count: int_at(item, "comment_count"),
        image_url: string_at(item, "image_versions2.candidates.0.url")
            .or_else(|| string_at(item, "additional_candidates.first_frame.url")),
        video_url: string_at(item, "video_versions.0.url"),
        user,
    }
}
