use crate::route::{Route, RouteError};

/// A single render request: the resolved route plus the navigation sequence
/// number current at dispatch time. Loader results are applied only while
/// their sequence number is still the router's latest, so a slow fetch from
/// a superseded navigation can never overwrite a newer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub seq: u64,
    pub route: Route,
}

/// Owns the address state: a history of route fragments with a cursor, plus
/// the monotonically increasing navigation sequence number.
pub struct Router {
    history: Vec<String>,
    cursor: usize,
    seq: u64,
}

impl Router {
    pub fn new() -> Self {
        Self {
            history: vec![Route::Home.fragment()],
            cursor: 0,
            seq: 0,
        }
    }

    pub fn current_seq(&self) -> u64 {
        self.seq
    }

    pub fn current_fragment(&self) -> &str {
        &self.history[self.cursor]
    }

    /// Pushes the route onto the history (dropping any forward entries) and
    /// yields exactly one dispatch. Navigation itself emits no secondary
    /// change notification, so no duplicate render can occur.
    pub fn navigate(&mut self, route: Route) -> Dispatch {
        self.history.truncate(self.cursor + 1);
        self.history.push(route.fragment());
        self.cursor = self.history.len() - 1;
        self.seq += 1;
        log::info!("navigate -> {}", self.current_fragment());
        Dispatch {
            seq: self.seq,
            route,
        }
    }

    /// Re-dispatches the entry under the cursor; used at startup and after
    /// back/forward. Fragments carry parameters, so reconstruction is
    /// lossless, but a hand-entered fragment can still be incomplete.
    pub fn refresh(&mut self) -> Result<Dispatch, RouteError> {
        let route = Route::parse(self.current_fragment())?;
        self.seq += 1;
        Ok(Dispatch {
            seq: self.seq,
            route,
        })
    }

    pub fn back(&mut self) -> Option<Result<Dispatch, RouteError>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.refresh())
    }

    pub fn forward(&mut self) -> Option<Result<Dispatch, RouteError>> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.refresh())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_bumps_the_sequence_number() {
        let mut router = Router::new();
        let a = router.navigate(Route::Ongoing);
        let b = router.navigate(Route::Schedule);
        assert!(b.seq > a.seq);
        assert_eq!(router.current_seq(), b.seq);
    }

    #[test]
    fn back_and_forward_reconstruct_parameters() {
        let mut router = Router::new();
        router.navigate(Route::Detail {
            slug: "one-piece".to_string(),
        });
        router.navigate(Route::Watch {
            slug: "one-piece-episode-5".to_string(),
        });

        let back = router.back().unwrap().unwrap();
        assert_eq!(
            back.route,
            Route::Detail {
                slug: "one-piece".to_string()
            }
        );

        let forward = router.forward().unwrap().unwrap();
        assert_eq!(
            forward.route,
            Route::Watch {
                slug: "one-piece-episode-5".to_string()
            }
        );
    }

    #[test]
    fn back_and_forward_restore_search() {
        let mut router = Router::new();
        router.navigate(Route::Search {
            query: "one piece".to_string(),
        });
        router.navigate(Route::Schedule);

        let back = router.back().unwrap().unwrap();
        assert_eq!(
            back.route,
            Route::Search {
                query: "one piece".to_string()
            }
        );
    }

    #[test]
    fn navigating_truncates_forward_history() {
        let mut router = Router::new();
        router.navigate(Route::Ongoing);
        router.navigate(Route::Completed);
        router.back().unwrap().unwrap();
        router.navigate(Route::Schedule);

        assert!(router.forward().is_none());
        let back = router.back().unwrap().unwrap();
        assert_eq!(back.route, Route::Ongoing);
    }

    #[test]
    fn back_at_the_start_is_a_no_op() {
        let mut router = Router::new();
        assert!(router.back().is_none());
        assert_eq!(router.current_fragment(), "home");
    }

    #[test]
    fn every_redispatch_is_a_new_sequence_number() {
        let mut router = Router::new();
        let a = router.navigate(Route::Ongoing);
        let b = router.back().unwrap().unwrap();
        assert!(b.seq > a.seq);
    }
}
