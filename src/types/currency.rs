//! Currency codes and the currency-name catalog.

use crate::{Error, ErrorContext, Result};
use std::collections::BTreeMap;

/// Base currency used when the caller does not pick one.
pub const DEFAULT_BASE: &str = "USD";

/// Currency code (e.g. `"AED"`) to display name (e.g. `"United Arab Emirates Dirham"`).
pub type CurrencyCatalog = BTreeMap<String, String>;

/// Trim and uppercase a currency code, rejecting anything that is not three ASCII letters.
pub fn normalize_code(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::validation_with_context(
            "currency code must be three ASCII letters",
            ErrorContext::new()
                .with_field_path("base")
                .with_details(format!("got {:?}", code)),
        ));
    }
    Ok(trimmed.to_ascii_uppercase())
}
