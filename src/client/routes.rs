use super::pages::{self, Component};
use std::fmt;
use tracing::debug;

/// Function producing the component for a matched route
pub type RenderFn = fn() -> Component;

/// A single client path bound to its render function
#[derive(Clone, Copy)]
pub struct RouteEntry {
    pub path: &'static str,
    render: RenderFn,
}

impl RouteEntry {
    pub fn render(&self) -> Component {
        (self.render)()
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("component", &self.render())
            .finish()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No client route matches '{0}'")]
    NotFound(String),
}

/// Ordered client route table, populated once at startup
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path`. Entries are matched in registration order.
    pub fn route(mut self, path: &'static str, render: RenderFn) -> Self {
        self.entries.push(RouteEntry { path, render });
        self
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolves a client URL to the component it renders.
    ///
    /// The query string and fragment are ignored, as is a single trailing
    /// slash on anything but the root path.
    ///
    /// # Errors
    /// Returns [`NavigationError::NotFound`] when no entry matches.
    pub fn navigate(&self, url: &str) -> Result<Component, NavigationError> {
        let path = normalize(url);
        let entry = self
            .entries
            .iter()
            .find(|entry| normalize(entry.path) == path)
            .ok_or_else(|| NavigationError::NotFound(url.to_string()))?;

        debug!(path, component = %entry.render(), "Resolved client route");
        Ok(entry.render())
    }
}

fn normalize(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// The shop front end's route table
pub fn client_routes() -> RouteTable {
    RouteTable::new().route("/orders", pages::orders)
}
