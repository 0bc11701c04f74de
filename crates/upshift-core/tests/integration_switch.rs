//! Integration test: full protocol checks against a scripted page.
//!
//! Drives options through `engage` and asserts on the navigation the page
//! observed, covering the redirect, callback, and rejection paths.

use std::cell::Cell;
use std::rc::Rc;

use upshift_core::address::AddressError;
use upshift_core::config::UpshiftConfig;
use upshift_core::page::{Page, ScriptedPage};
use upshift_core::switcher::{Outcome, ProtocolSwitcher, SwitcherOptions};

#[test]
fn http_page_with_configured_site_redirects_to_https() {
    let mut page = ScriptedPage::new("http://example.com");
    let outcome = ProtocolSwitcher::engage(
        SwitcherOptions {
            site_address: Some("example.com".to_string()),
            ..Default::default()
        },
        &mut page,
    );
    assert_eq!(
        outcome,
        Outcome::Redirected {
            url: "https://example.com".to_string()
        },
        "scheme mismatch must navigate to the target variant"
    );
    assert_eq!(
        page.href(),
        "https://example.com",
        "page must follow the redirect"
    );
}

#[test]
fn matching_page_runs_callback_and_keeps_address() {
    let ran = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&ran);
    let mut page = ScriptedPage::new("https://example.org/path");

    let outcome = ProtocolSwitcher::engage(
        SwitcherOptions {
            callback: Some(Box::new(move || seen.set(seen.get() + 1))),
            ..Default::default()
        },
        &mut page,
    );

    assert_eq!(outcome, Outcome::AlreadyTarget);
    assert_eq!(ran.get(), 1, "callback must run exactly once");
    assert_eq!(
        page.href(),
        "https://example.org/path",
        "no navigation may happen"
    );
    assert!(page.last_navigation().is_none());
}

#[test]
fn derived_address_round_trips_through_downgrade() {
    // No configured address: the switcher picks up example.org/path from
    // the page and rewrites it onto the http variant.
    let mut page = ScriptedPage::new("https://example.org/path");
    let outcome = ProtocolSwitcher::engage(
        SwitcherOptions {
            http_to_https: false,
            ..Default::default()
        },
        &mut page,
    );
    assert_eq!(
        outcome,
        Outcome::Redirected {
            url: "http://example.org/path".to_string()
        }
    );
}

#[test]
fn malformed_addresses_reject_and_leave_page_alone() {
    for bad in ["not a url", "http://", "foo..bar"] {
        let mut page = ScriptedPage::new("http://example.com");
        let outcome = ProtocolSwitcher::engage(
            SwitcherOptions {
                site_address: Some(bad.to_string()),
                ..Default::default()
            },
            &mut page,
        );
        assert_eq!(
            outcome,
            Outcome::Rejected(AddressError::InvalidFormat {
                address: bad.to_string()
            }),
            "{bad:?} must be rejected"
        );
        assert!(page.last_navigation().is_none(), "{bad:?} must not navigate");
    }
}

#[test]
fn unresolvable_address_rejects_as_missing() {
    let mut page = ScriptedPage::new("about:blank");
    let outcome = ProtocolSwitcher::engage(SwitcherOptions::default(), &mut page);
    assert_eq!(outcome, Outcome::Rejected(AddressError::Missing));
    assert!(page.last_navigation().is_none());
}

#[test]
fn config_values_feed_switcher_options() {
    let cfg = UpshiftConfig {
        site_address: Some("reader.example.org/shelf".to_string()),
        http_to_https: true,
    };
    let mut page = ScriptedPage::new("http://reader.example.org/shelf");
    let outcome = ProtocolSwitcher::engage(
        SwitcherOptions {
            site_address: cfg.site_address.clone(),
            http_to_https: cfg.http_to_https,
            callback: None,
        },
        &mut page,
    );
    assert_eq!(
        outcome,
        Outcome::Redirected {
            url: "https://reader.example.org/shelf".to_string()
        }
    );
}
