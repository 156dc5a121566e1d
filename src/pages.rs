use crate::api::{CatalogClient, CatalogError};
use crate::models::{
    AnimeDetail, AnimeSummary, EpisodeResponse, ScheduleEntry, parent_slug,
};
use crate::route::Route;
use crate::view::{self, Action, CardMode, Row, ViewContent};
use std::collections::HashMap;

/// Stream URL used when an episode payload carries an empty stream list.
pub const STREAM_PLACEHOLDER: &str = "#";

/// Runs the loader for a route. Every failure is absorbed here: logged and
/// folded into a fallback message for the route's own container, so nothing
/// ever propagates to the router or to sibling loaders.
pub async fn load(client: &CatalogClient, route: &Route) -> ViewContent {
    let result = match route {
        Route::Home => load_home(client).await,
        Route::Ongoing => load_ongoing(client).await,
        Route::Completed => load_completed(client).await,
        Route::Schedule => load_schedule(client).await,
        Route::Detail { slug } => load_detail(client, slug).await,
        Route::Watch { slug } => load_watch(client, slug).await,
        Route::Search { query } => load_search(client, query).await,
    };

    result.unwrap_or_else(|err| {
        log::error!("failed to load {:?}: {}", route, err);
        fallback(&err)
    })
}

fn fallback(err: &CatalogError) -> ViewContent {
    let text = match err {
        CatalogError::NotFound("episode") => t!("errors.episode_not_found"),
        CatalogError::NotFound(_) => t!("errors.anime_not_found"),
        _ => t!("errors.load_failed"),
    };
    ViewContent::message(text.to_string())
}

async fn load_home(client: &CatalogClient) -> Result<ViewContent, CatalogError> {
    let list = client.home().await?;
    Ok(home_content(&list))
}

async fn load_ongoing(client: &CatalogClient) -> Result<ViewContent, CatalogError> {
    let list = client.ongoing().await?;
    Ok(grid_content(t!("ongoing.heading").to_string(), &list))
}

async fn load_completed(client: &CatalogClient) -> Result<ViewContent, CatalogError> {
    let list = client.completed().await?;
    Ok(grid_content(t!("completed.heading").to_string(), &list))
}

async fn load_schedule(client: &CatalogClient) -> Result<ViewContent, CatalogError> {
    let schedule = client.schedule().await?;
    Ok(schedule_content(&schedule))
}

async fn load_detail(client: &CatalogClient, slug: &str) -> Result<ViewContent, CatalogError> {
    let anime = client.anime(slug).await?;
    Ok(detail_content(&anime))
}

/// Two dependent fetches: the episode first, then the parent anime for the
/// poster and the sibling list. A failed episode fetch short-circuits; the
/// anime fetch is never attempted as a fallback.
async fn load_watch(client: &CatalogClient, slug: &str) -> Result<ViewContent, CatalogError> {
    let episode = client.episode(slug).await?;
    let parent = parent_slug(slug).ok_or(CatalogError::NotFound("anime"))?;
    let anime = client.anime(parent).await?;
    Ok(watch_content(&episode, &anime))
}

async fn load_search(client: &CatalogClient, query: &str) -> Result<ViewContent, CatalogError> {
    let list = client.search(query).await?;
    Ok(ViewContent {
        lines: vec![t!("search.results_for", query = query).to_string()],
        rows: view::anime_cards(&list, CardMode::External),
    })
}

/// Hero block built from the first entry (when present), then the full grid.
fn home_content(list: &[AnimeSummary]) -> ViewContent {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    if let Some(banner) = list.first() {
        lines.push(
            banner
                .title
                .clone()
                .unwrap_or_else(|| t!("home.banner_fallback").to_string()),
        );
        lines.push(
            banner
                .poster
                .clone()
                .unwrap_or_else(|| view::PLACEHOLDER_POSTER.to_string()),
        );
        if !banner.slug.is_empty() {
            rows.push(Row::link(
                t!("home.watch_now").to_string(),
                Route::Detail {
                    slug: banner.slug.clone(),
                },
            ));
        }
    }

    lines.push(t!("home.latest").to_string());
    rows.extend(view::anime_cards(list, CardMode::Detail));
    ViewContent { lines, rows }
}

fn grid_content(heading: String, list: &[AnimeSummary]) -> ViewContent {
    ViewContent {
        lines: vec![heading],
        rows: view::anime_cards(list, CardMode::Detail),
    }
}

/// Days render in canonical Sunday..Saturday order no matter how the payload
/// keys arrive; a day with no entries contributes neither label nor rows.
fn schedule_content(schedule: &HashMap<String, Vec<ScheduleEntry>>) -> ViewContent {
    let mut rows = Vec::new();
    for day in view::WEEKDAYS {
        let Some(entries) = schedule.get(day) else {
            continue;
        };
        if entries.is_empty() {
            continue;
        }
        rows.push(Row::label(view::day_label(day)));
        for entry in entries {
            let text = match &entry.episode_info {
                Some(info) => format!("{} ({})", entry.title, info),
                None => entry.title.clone(),
            };
            rows.push(Row::link(
                text,
                Route::Detail {
                    slug: entry.slug.clone(),
                },
            ));
        }
    }
    ViewContent {
        lines: vec![t!("schedule.heading").to_string()],
        rows,
    }
}

fn detail_content(anime: &AnimeDetail) -> ViewContent {
    let genres = anime
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        anime.title.clone(),
        anime.poster.clone(),
        format!("{}: {}", t!("detail.status"), anime.info.status),
        format!(
            "{}: {}",
            t!("detail.studio"),
            anime.info.studio.as_deref().unwrap_or("-")
        ),
        format!("{}: {}", t!("detail.duration"), anime.info.duration),
        format!("{}: {}", t!("detail.kind"), anime.info.kind),
        format!("{}: {}", t!("detail.genres"), genres),
        format!("{}: {}", t!("detail.synopsis"), anime.synopsis),
        t!("detail.episodes").to_string(),
    ];

    let rows = anime
        .episode_list
        .iter()
        .map(|ep| {
            Row::link(
                ep.title.clone(),
                Route::Watch {
                    slug: ep.slug.clone(),
                },
            )
        })
        .collect();

    ViewContent { lines, rows }
}

fn watch_content(episode: &EpisodeResponse, anime: &AnimeDetail) -> ViewContent {
    let stream_url = episode
        .streams
        .first()
        .map(|s| s.url.as_str())
        .unwrap_or(STREAM_PLACEHOLDER);

    let lines = vec![
        episode.episode_title.clone().unwrap_or_default(),
        anime.poster.clone(),
        format!("{}: {}", t!("watch.stream"), stream_url),
        t!("watch.episodes").to_string(),
    ];

    let mut rows = Vec::new();
    if stream_url != STREAM_PLACEHOLDER {
        rows.push(Row {
            text: t!("watch.open_stream").to_string(),
            poster: None,
            action: Action::OpenUrl(stream_url.to_string()),
        });
    }
    rows.extend(anime.episode_list.iter().map(|ep| {
        Row::link(
            ep.title.clone(),
            Route::Watch {
                slug: ep.slug.clone(),
            },
        )
    }));

    ViewContent { lines, rows }
}
