use crate::models::AnimeSummary;
use crate::route::Route;

/// Poster used when a summary or banner has none.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/1200x400";
/// Marker shown for a summary without an episode number.
pub const UNKNOWN_EPISODE: &str = "?";

/// Canonical rendering order for the schedule, independent of payload order.
pub const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate within the client.
    Goto(Route),
    /// Open an external URL in the system browser.
    OpenUrl(String),
    /// Inert row (section label, or a card with nothing to link to).
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub poster: Option<String>,
    pub action: Action,
}

impl Row {
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            poster: None,
            action: Action::None,
        }
    }

    pub fn link(text: impl Into<String>, route: Route) -> Self {
        Self {
            text: text.into(),
            poster: None,
            action: Action::Goto(route),
        }
    }
}

/// What a page loader writes into its container: free text above an
/// interactive list. Every write replaces the previous content wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContent {
    pub lines: Vec<String>,
    pub rows: Vec<Row>,
}

impl ViewContent {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Rows navigate to the detail page via the item's slug.
    Detail,
    /// Rows open the item's external URL; used by search results.
    External,
}

/// Turns summaries into one row per item. Missing fields render fixed
/// fallbacks instead of being dropped, so output length equals input length.
pub fn anime_cards(list: &[AnimeSummary], mode: CardMode) -> Vec<Row> {
    list.iter()
        .map(|anime| {
            let text = format!(
                "{} · Ep {} • {}",
                anime.display_title(),
                anime.episode.as_deref().unwrap_or(UNKNOWN_EPISODE),
                anime.badge()
            );
            let action = match mode {
                CardMode::Detail if !anime.slug.is_empty() => Action::Goto(Route::Detail {
                    slug: anime.slug.clone(),
                }),
                CardMode::External => match &anime.oploverz_url {
                    Some(url) => Action::OpenUrl(url.clone()),
                    None => Action::None,
                },
                _ => Action::None,
            };
            Row {
                text,
                poster: Some(
                    anime
                        .poster
                        .clone()
                        .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string()),
                ),
                action,
            }
        })
        .collect()
}

pub fn day_label(day: &str) -> String {
    let key = match day {
        "sunday" => "days.sunday",
        "monday" => "days.monday",
        "tuesday" => "days.tuesday",
        "wednesday" => "days.wednesday",
        "thursday" => "days.thursday",
        "friday" => "days.friday",
        "saturday" => "days.saturday",
        other => return other.to_string(),
    };
    t!(key).to_string()
}
