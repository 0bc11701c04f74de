//! `upshift validate <address>` – URL-shape check for a site address.

use anyhow::Result;
use upshift_core::address;

/// Validate `address` and print the verdict.
pub fn run_validate(address: &str) -> Result<()> {
    address::validate(address)?;
    println!("ok: {address}");
    Ok(())
}
