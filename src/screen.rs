use crate::route::Page;
use crate::view::ViewContent;

/// Render dispatcher state: one container per page and the single "active"
/// marker. Nothing else in the client may toggle activation; loaders hand
/// their output to [`Screen::write`] and the UI reads whatever is active.
pub struct Screen {
    containers: [ViewContent; Page::ALL.len()],
    active: Page,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            containers: Default::default(),
            active: Page::Home,
        }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    /// Activates exactly one container; the previous one is implicitly
    /// deactivated since activation is a single value.
    pub fn activate(&mut self, page: Page) {
        if self.active != page {
            log::debug!("activating {:?} container", page);
        }
        self.active = page;
    }

    /// Full replacement of a container's content, never a merge.
    pub fn write(&mut self, page: Page, content: ViewContent) {
        self.containers[page.index()] = content;
    }

    pub fn content(&self, page: Page) -> &ViewContent {
        &self.containers[page.index()]
    }

    pub fn active_content(&self) -> &ViewContent {
        self.content(self.active)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
