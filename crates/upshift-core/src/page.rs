//! Ambient browsing context: current address, scheme, and navigation.

/// Read/navigate access to the page hosting the switcher.
///
/// The switcher never touches a real browsing context directly; everything
/// it needs from the environment comes through this trait, so the redirect
/// decision can be exercised deterministically.
pub trait Page {
    /// Full address of the current document, e.g. `https://example.org/path`.
    fn href(&self) -> String;

    /// Scheme name of the current document without the trailing separator,
    /// e.g. `https`. Empty when the address carries no scheme.
    fn scheme(&self) -> String;

    /// Replace the current document by navigating to `url`.
    ///
    /// Fire-and-forget; there is no result to report back.
    fn navigate(&mut self, url: &str);
}

/// In-memory [`Page`] holding a plain href string.
///
/// `navigate` rewrites the held address and records the target, so callers
/// (tests, the CLI) can observe whether and where a redirect happened.
#[derive(Debug, Clone)]
pub struct ScriptedPage {
    href: String,
    last_navigation: Option<String>,
}

impl ScriptedPage {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            last_navigation: None,
        }
    }

    /// Target of the most recent `navigate` call, if any.
    pub fn last_navigation(&self) -> Option<&str> {
        self.last_navigation.as_deref()
    }
}

impl Page for ScriptedPage {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn scheme(&self) -> String {
        self.href
            .split_once("://")
            .map(|(scheme, _)| scheme.to_string())
            .unwrap_or_default()
    }

    fn navigate(&mut self, url: &str) {
        self.href = url.to_string();
        self.last_navigation = Some(url.to_string());
    }
}
