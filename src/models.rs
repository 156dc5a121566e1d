use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Substring separating an anime slug from its episode index, e.g.
/// `one-piece-episode-5`. This is a naming convention of the catalog,
/// not a guaranteed relationship.
pub const EPISODE_MARKER: &str = "-episode-";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnimeListResponse {
    #[serde(default)]
    pub anime_list: Vec<AnimeSummary>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AnimeSummary {
    pub title: Option<String>,
    pub poster: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "episode_label")]
    pub episode: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub oploverz_url: Option<String>,
}

impl AnimeSummary {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown Title")
    }

    /// Status with the media type as fallback, like the card captions on the site.
    pub fn badge(&self) -> &str {
        self.status
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("-")
    }
}

// The catalog sometimes sends episode counts as numbers, sometimes as strings.
fn episode_label<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub schedule: HashMap<String, Vec<ScheduleEntry>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub episode_info: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DetailResponse {
    #[serde(default)]
    pub status: String,
    pub detail: Option<AnimeDetail>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimeDetail {
    pub title: String,
    #[serde(default)]
    pub poster: String,
    pub info: AnimeInfo,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub episode_list: Vec<EpisodeRef>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnimeInfo {
    #[serde(default)]
    pub status: String,
    pub studio: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EpisodeRef {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EpisodeResponse {
    #[serde(default)]
    pub status: String,
    pub episode_title: Option<String>,
    #[serde(default)]
    pub streams: Vec<StreamSource>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StreamSource {
    pub url: String,
}

/// Derives the parent anime slug from an episode slug by truncating at the
/// first [`EPISODE_MARKER`]. Returns `None` for slugs that do not follow the
/// convention; callers must treat that as a lookup failure.
pub fn parent_slug(episode_slug: &str) -> Option<&str> {
    let idx = episode_slug.find(EPISODE_MARKER)?;
    let parent = &episode_slug[..idx];
    if parent.is_empty() { None } else { Some(parent) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_slug_truncates_at_first_marker() {
        assert_eq!(parent_slug("one-piece-episode-5"), Some("one-piece"));
        assert_eq!(parent_slug("re-zero-episode-2-episode-3"), Some("re-zero"));
    }

    #[test]
    fn parent_slug_without_marker_is_none() {
        assert_eq!(parent_slug("one-piece"), None);
        assert_eq!(parent_slug("-episode-5"), None);
    }

    #[test]
    fn episode_field_accepts_numbers_and_strings() {
        let a: AnimeSummary = serde_json::from_str(r#"{"episode": 12}"#).unwrap();
        assert_eq!(a.episode.as_deref(), Some("12"));

        let b: AnimeSummary = serde_json::from_str(r#"{"episode": "12.5"}"#).unwrap();
        assert_eq!(b.episode.as_deref(), Some("12.5"));

        let c: AnimeSummary = serde_json::from_str(r#"{"title": "A"}"#).unwrap();
        assert_eq!(c.episode, None);
    }

    #[test]
    fn badge_prefers_status_over_type() {
        let a: AnimeSummary =
            serde_json::from_str(r#"{"status": "Ongoing", "type": "TV"}"#).unwrap();
        assert_eq!(a.badge(), "Ongoing");

        let b: AnimeSummary = serde_json::from_str(r#"{"type": "TV"}"#).unwrap();
        assert_eq!(b.badge(), "TV");

        let c: AnimeSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(c.badge(), "-");
    }

    #[test]
    fn detail_response_parses_catalog_shape() {
        let json = r#"{
            "status": "success",
            "detail": {
                "title": "One Piece",
                "poster": "https://img.example/op.jpg",
                "info": { "status": "Ongoing", "duration": "24 min", "type": "TV" },
                "genres": [{ "name": "Action" }, { "name": "Adventure" }],
                "synopsis": "Pirates.",
                "episode_list": [
                    { "slug": "one-piece-episode-2", "title": "Episode 2" },
                    { "slug": "one-piece-episode-1", "title": "Episode 1" }
                ]
            }
        }"#;
        let resp: DetailResponse = serde_json::from_str(json).unwrap();
        let detail = resp.detail.unwrap();
        assert_eq!(resp.status, "success");
        assert_eq!(detail.info.studio, None);
        assert_eq!(detail.episode_list.len(), 2);
        assert_eq!(detail.episode_list[0].slug, "one-piece-episode-2");
    }
}
