//! The redirect decision: compare the page scheme to the target and either
//! navigate or hand control back to the caller.

use std::fmt;

use crate::address::{self, AddressError};
use crate::page::Page;

/// Scheme the switcher wants the page to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetScheme {
    Http,
    Https,
}

impl TargetScheme {
    /// `true` upgrades to HTTPS, `false` downgrades to HTTP.
    pub fn from_upgrade(http_to_https: bool) -> Self {
        if http_to_https {
            TargetScheme::Https
        } else {
            TargetScheme::Http
        }
    }

    /// Scheme name without the trailing separator.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetScheme::Http => "http",
            TargetScheme::Https => "https",
        }
    }
}

impl fmt::Display for TargetScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion callback, run when the page already uses the target scheme.
pub type Callback = Box<dyn FnOnce()>;

/// Construction options for [`ProtocolSwitcher`].
pub struct SwitcherOptions {
    /// Site address to switch; derived from the page address when `None`.
    pub site_address: Option<String>,
    /// Switch toward HTTPS (default) or back to HTTP.
    pub http_to_https: bool,
    /// Invoked once when no redirect is needed. `None` is a no-op.
    pub callback: Option<Callback>,
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self {
            site_address: None,
            http_to_https: true,
            callback: None,
        }
    }
}

/// What a protocol check did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The page scheme differed from the target; navigation to `url` was
    /// issued.
    Redirected { url: String },
    /// The page already uses the target scheme; the callback ran instead.
    AlreadyTarget,
    /// The redirect was abandoned: missing or malformed site address. The
    /// error has already been logged.
    Rejected(AddressError),
}

/// One-shot scheme check for a site address.
///
/// Resolve the options with [`ProtocolSwitcher::new`] and run
/// [`check`](Self::check), or do both in one step with
/// [`engage`](Self::engage). An instance performs its check once and is
/// then spent.
pub struct ProtocolSwitcher {
    site_address: String,
    target: TargetScheme,
    callback: Option<Callback>,
}

impl ProtocolSwitcher {
    /// Resolves options against the current page.
    ///
    /// A blank site address falls back to the page address with everything
    /// up to and including `//` removed; when that yields nothing either,
    /// the address stays empty and the check will reject it.
    pub fn new(options: SwitcherOptions, page: &impl Page) -> Self {
        let site_address = options
            .site_address
            .filter(|addr| !addr.is_empty())
            .or_else(|| address::derive_from_href(&page.href()))
            .unwrap_or_default();

        Self {
            site_address,
            target: TargetScheme::from_upgrade(options.http_to_https),
            callback: options.callback,
        }
    }

    /// Resolved site address (empty when nothing could be derived).
    pub fn site_address(&self) -> &str {
        &self.site_address
    }

    /// Target scheme derived from the options.
    pub fn target(&self) -> TargetScheme {
        self.target
    }

    /// Construct and immediately check: the usual one-shot entry point.
    pub fn engage(options: SwitcherOptions, page: &mut impl Page) -> Outcome {
        let switcher = Self::new(options, &*page);
        switcher.check(page)
    }

    /// Compares the current page scheme with the target (exact,
    /// case-sensitive) and redirects when they differ; otherwise the
    /// callback runs exactly once.
    ///
    /// A failed redirect is logged and reported as [`Outcome::Rejected`],
    /// never propagated.
    pub fn check(self, page: &mut impl Page) -> Outcome {
        let current = page.scheme();
        let target = self.target;

        if current != target.as_str() {
            match self.change_scheme(page) {
                Ok(url) => {
                    tracing::debug!("scheme {:?} -> {}: redirecting to {}", current, target, url);
                    Outcome::Redirected { url }
                }
                Err(err) => {
                    tracing::error!("cannot switch scheme: {}", err);
                    Outcome::Rejected(err)
                }
            }
        } else {
            tracing::debug!("already on {}; no redirect", target);
            if let Some(callback) = self.callback {
                callback();
            }
            Outcome::AlreadyTarget
        }
    }

    /// Validates the resolved address and navigates to
    /// `<target>://<address>`, stripping any scheme prefix the configured
    /// address carried.
    fn change_scheme(self, page: &mut impl Page) -> Result<String, AddressError> {
        address::validate(&self.site_address)?;
        let url = format!(
            "{}://{}",
            self.target,
            address::strip_scheme_prefix(&self.site_address)
        );
        page.navigate(&url);
        Ok(url)
    }
}
