//! `upshift check <url>` – run the switcher against a page address.

use anyhow::{bail, Result};
use upshift_core::config::UpshiftConfig;
use upshift_core::page::{Page, ScriptedPage};
use upshift_core::switcher::{Outcome, ProtocolSwitcher, SwitcherOptions};

/// Run the protocol check for `url` and print what happened.
///
/// Flags override the configured defaults; a rejected address becomes the
/// command's error.
pub fn run_check(
    cfg: &UpshiftConfig,
    url: &str,
    site: Option<String>,
    downgrade: bool,
) -> Result<()> {
    let options = SwitcherOptions {
        site_address: site.or_else(|| cfg.site_address.clone()),
        http_to_https: if downgrade { false } else { cfg.http_to_https },
        callback: None,
    };

    let mut page = ScriptedPage::new(url);
    match ProtocolSwitcher::engage(options, &mut page) {
        Outcome::Redirected { url } => println!("redirect -> {url}"),
        Outcome::AlreadyTarget => println!("already on {}; no redirect", page.scheme()),
        Outcome::Rejected(err) => bail!(err),
    }

    Ok(())
}
