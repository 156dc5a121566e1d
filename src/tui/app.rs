use crate::api::CatalogClient;
use crate::pages;
use crate::route::{Page, Route, RouteError};
use crate::router::{Dispatch, Router};
use crate::screen::Screen;
use crate::view::{Action, ViewContent};
use ratatui::widgets::ListState;
use std::sync::mpsc::{Receiver, Sender};

#[derive(Debug, Clone, PartialEq)]
pub enum Focus {
    SearchBar,
    List,
}

/// Result of one loader run, tagged with the navigation sequence number it
/// was dispatched under.
pub struct LoadOutcome {
    pub seq: u64,
    pub page: Page,
    pub content: ViewContent,
}

pub struct App {
    pub running: bool,
    pub focus: Focus,
    pub search_query: String,

    pub list_state: ListState,

    pub router: Router,
    pub screen: Screen,
    pub client: CatalogClient,

    pub is_loading: bool,
    pub status_message: Option<String>,

    outcome_tx: Sender<LoadOutcome>,
    outcome_rx: Receiver<LoadOutcome>,
}

impl App {
    pub fn new(client: CatalogClient) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let (tx, rx) = std::sync::mpsc::channel();

        Self {
            running: true,
            focus: Focus::List,
            search_query: String::new(),
            list_state,
            router: Router::new(),
            screen: Screen::new(),
            client,
            is_loading: false,
            status_message: None,
            outcome_tx: tx,
            outcome_rx: rx,
        }
    }

    /// Renders the initial address state.
    pub fn start(&mut self) {
        match self.router.refresh() {
            Ok(dispatch) => self.dispatch(dispatch),
            Err(err) => self.route_error(err),
        }
    }

    pub fn navigate(&mut self, route: Route) {
        let dispatch = self.router.navigate(route);
        self.dispatch(dispatch);
    }

    pub fn go_back(&mut self) {
        if let Some(result) = self.router.back() {
            self.apply_redispatch(result);
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(result) = self.router.forward() {
            self.apply_redispatch(result);
        }
    }

    fn apply_redispatch(&mut self, result: Result<Dispatch, RouteError>) {
        match result {
            Ok(dispatch) => self.dispatch(dispatch),
            Err(err) => self.route_error(err),
        }
    }

    /// A fragment naming a slug route without its slug: report in the
    /// matching container instead of issuing a fetch.
    fn route_error(&mut self, err: RouteError) {
        log::warn!("unresolvable address state: {}", err);
        let page = err.page();
        self.screen.activate(page);
        self.screen
            .write(page, ViewContent::message(t!("errors.missing_slug").to_string()));
        self.is_loading = false;
    }

    /// Activates the container and spawns the loader; the outcome comes back
    /// through the channel and is applied only while still current.
    pub fn dispatch(&mut self, dispatch: Dispatch) {
        self.screen.activate(dispatch.route.page());
        self.list_state.select(Some(0));
        self.is_loading = true;

        let page = dispatch.route.page();
        let seq = dispatch.seq;
        let route = dispatch.route;
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let content = pages::load(&client, &route).await;
            let _ = tx.send(LoadOutcome { seq, page, content });
        });
    }

    pub fn on_tick(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        if outcome.seq != self.router.current_seq() {
            log::debug!(
                "discarding stale load for {:?} (seq {} != {})",
                outcome.page,
                outcome.seq,
                self.router.current_seq()
            );
            return;
        }
        self.screen.write(outcome.page, outcome.content);
        self.is_loading = false;
    }

    pub fn commit_search(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.set_status(t!("status.searching", query = query).to_string());
        self.navigate(Route::Search { query });
        self.focus = Focus::List;
    }

    pub fn activate_selected(&mut self) {
        let idx = self.get_selected_index();
        let Some(row) = self.screen.active_content().rows.get(idx) else {
            return;
        };
        match row.action.clone() {
            Action::Goto(route) => {
                self.clear_status();
                self.navigate(route);
            }
            Action::OpenUrl(url) => {
                self.set_status(t!("status.opening", url = url).to_string());
                if let Err(err) = open::that(&url) {
                    log::warn!("failed to open {}: {}", url, err);
                    self.set_status(t!("status.open_failed").to_string());
                }
            }
            Action::None => {}
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn list_len(&self) -> usize {
        self.screen.active_content().rows.len()
    }

    pub fn next(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, amount: usize) {
        let max = self.list_len().saturating_sub(1);
        let next = std::cmp::min(self.get_selected_index() + amount, max);
        self.list_state.select(Some(next));
    }

    pub fn jump_backward(&mut self, amount: usize) {
        let next = self.get_selected_index().saturating_sub(amount);
        self.list_state.select(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        // Unroutable address; tests never await the spawned loaders.
        App::new(CatalogClient::new("http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn dispatch_activates_exactly_the_matching_container() {
        let mut app = app();
        let cases = [
            (Route::Home, Page::Home),
            (Route::Ongoing, Page::Ongoing),
            (Route::Completed, Page::Completed),
            (Route::Schedule, Page::Schedule),
            (
                Route::Detail {
                    slug: "a".to_string(),
                },
                Page::Detail,
            ),
            (
                Route::Watch {
                    slug: "a-episode-1".to_string(),
                },
                Page::Watch,
            ),
            (
                Route::Search {
                    query: "a".to_string(),
                },
                Page::Home,
            ),
        ];
        for (route, page) in cases {
            app.navigate(route);
            assert_eq!(app.screen.active(), page);
        }
    }

    #[tokio::test]
    async fn stale_outcomes_never_overwrite_the_container() {
        let mut app = app();
        app.navigate(Route::Ongoing);
        let stale_seq = app.router.current_seq();
        app.navigate(Route::Ongoing);

        app.apply_outcome(LoadOutcome {
            seq: stale_seq,
            page: Page::Ongoing,
            content: ViewContent::message("stale"),
        });
        assert!(app.screen.content(Page::Ongoing).lines.is_empty());

        app.apply_outcome(LoadOutcome {
            seq: app.router.current_seq(),
            page: Page::Ongoing,
            content: ViewContent::message("current"),
        });
        assert_eq!(
            app.screen.content(Page::Ongoing).lines,
            vec!["current".to_string()]
        );
        assert!(!app.is_loading);
    }

    #[tokio::test]
    async fn committing_a_blank_query_does_nothing() {
        let mut app = app();
        app.search_query = "   ".to_string();
        app.commit_search();
        assert_eq!(app.router.current_fragment(), "home");
    }

    #[tokio::test]
    async fn committing_a_query_navigates_to_the_search_route() {
        let mut app = app();
        app.focus = Focus::SearchBar;
        app.search_query = " one piece ".to_string();
        app.commit_search();
        assert_eq!(app.router.current_fragment(), "search/one%20piece");
        assert_eq!(app.screen.active(), Page::Home);
        assert_eq!(app.focus, Focus::List);
    }

    #[tokio::test]
    async fn selection_wraps_around_the_active_rows() {
        let mut app = app();
        app.screen.write(
            Page::Home,
            ViewContent {
                lines: vec![],
                rows: vec![
                    crate::view::Row::label("a"),
                    crate::view::Row::label("b"),
                ],
            },
        );
        assert_eq!(app.get_selected_index(), 0);
        app.next();
        assert_eq!(app.get_selected_index(), 1);
        app.next();
        assert_eq!(app.get_selected_index(), 0);
        app.previous();
        assert_eq!(app.get_selected_index(), 1);
    }
}
