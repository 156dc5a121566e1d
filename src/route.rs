use thiserror::Error;
use urlencoding::{decode, encode};

/// Identity of a view container. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Ongoing,
    Completed,
    Schedule,
    Detail,
    Watch,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Ongoing,
        Page::Completed,
        Page::Schedule,
        Page::Detail,
        Page::Watch,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "tabs.home",
            Page::Ongoing => "tabs.ongoing",
            Page::Completed => "tabs.completed",
            Page::Schedule => "tabs.schedule",
            Page::Detail => "tabs.detail",
            Page::Watch => "tabs.watch",
        }
    }
}

/// A fully resolved navigation intent. Search is a first-class route that
/// renders into the Home container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Ongoing,
    Completed,
    Schedule,
    Detail { slug: String },
    Watch { slug: String },
    Search { query: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route `{0}` requires a parameter")]
    MissingParam(&'static str),
}

impl RouteError {
    /// Container in which the failure should be reported.
    pub fn page(&self) -> Page {
        let RouteError::MissingParam(token) = self;
        match *token {
            "detail" => Page::Detail,
            "watch" => Page::Watch,
            _ => Page::Home,
        }
    }
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home | Route::Search { .. } => Page::Home,
            Route::Ongoing => Page::Ongoing,
            Route::Completed => Page::Completed,
            Route::Schedule => Page::Schedule,
            Route::Detail { .. } => Page::Detail,
            Route::Watch { .. } => Page::Watch,
        }
    }

    /// Address-state encoding. Parameters are carried in the fragment so
    /// back/forward reconstructs the full intent, search included.
    pub fn fragment(&self) -> String {
        match self {
            Route::Home => "home".to_string(),
            Route::Ongoing => "ongoing".to_string(),
            Route::Completed => "completed".to_string(),
            Route::Schedule => "schedule".to_string(),
            Route::Detail { slug } => format!("detail/{}", slug),
            Route::Watch { slug } => format!("watch/{}", slug),
            Route::Search { query } => format!("search/{}", encode(query)),
        }
    }

    /// Parses a fragment back into a route. An empty or unrecognized token
    /// falls back to Home; a slug-bearing token without its parameter is an
    /// explicit error, never an undefined render.
    pub fn parse(fragment: &str) -> Result<Route, RouteError> {
        let fragment = fragment.trim_start_matches('#');
        let (token, rest) = fragment.split_once('/').unwrap_or((fragment, ""));

        match token {
            "ongoing" => Ok(Route::Ongoing),
            "completed" => Ok(Route::Completed),
            "schedule" => Ok(Route::Schedule),
            "detail" => Ok(Route::Detail {
                slug: require_param(rest, "detail")?,
            }),
            "watch" => Ok(Route::Watch {
                slug: require_param(rest, "watch")?,
            }),
            "search" => {
                let raw = require_param(rest, "search")?;
                let query = decode(&raw)
                    .map(|q| q.into_owned())
                    .unwrap_or(raw);
                Ok(Route::Search { query })
            }
            _ => Ok(Route::Home),
        }
    }
}

fn require_param(rest: &str, token: &'static str) -> Result<String, RouteError> {
    if rest.is_empty() {
        Err(RouteError::MissingParam(token))
    } else {
        Ok(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_unknown_tokens_fall_back_to_home() {
        assert_eq!(Route::parse(""), Ok(Route::Home));
        assert_eq!(Route::parse("home"), Ok(Route::Home));
        assert_eq!(Route::parse("#home"), Ok(Route::Home));
        assert_eq!(Route::parse("no-such-page"), Ok(Route::Home));
    }

    #[test]
    fn bare_tokens_resolve() {
        assert_eq!(Route::parse("ongoing"), Ok(Route::Ongoing));
        assert_eq!(Route::parse("completed"), Ok(Route::Completed));
        assert_eq!(Route::parse("schedule"), Ok(Route::Schedule));
    }

    #[test]
    fn slug_routes_require_their_parameter() {
        assert_eq!(
            Route::parse("detail"),
            Err(RouteError::MissingParam("detail"))
        );
        assert_eq!(Route::parse("watch"), Err(RouteError::MissingParam("watch")));
        assert_eq!(
            Route::parse("search"),
            Err(RouteError::MissingParam("search"))
        );
        assert_eq!(
            Route::parse("detail/one-piece"),
            Ok(Route::Detail {
                slug: "one-piece".to_string()
            })
        );
    }

    #[test]
    fn fragments_round_trip_with_parameters() {
        let routes = [
            Route::Home,
            Route::Ongoing,
            Route::Completed,
            Route::Schedule,
            Route::Detail {
                slug: "one-piece".to_string(),
            },
            Route::Watch {
                slug: "one-piece-episode-5".to_string(),
            },
            Route::Search {
                query: "one piece film red".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.fragment()), Ok(route));
        }
    }

    #[test]
    fn missing_param_reports_into_the_matching_container() {
        assert_eq!(RouteError::MissingParam("detail").page(), Page::Detail);
        assert_eq!(RouteError::MissingParam("watch").page(), Page::Watch);
        assert_eq!(RouteError::MissingParam("search").page(), Page::Home);
    }

    #[test]
    fn search_renders_into_the_home_container() {
        let route = Route::Search {
            query: "naruto".to_string(),
        };
        assert_eq!(route.page(), Page::Home);
    }
}
