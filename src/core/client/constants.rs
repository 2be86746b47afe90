//! Centralized constants for default endpoints and UA.

/// Desktop browser UA; the sustainability page serves a stripped shell to unknown agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/114.0.0.0 Safari/537.36"
);

/// Yahoo quote HTML base (`{SYMBOL}/sustainability/` is appended).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finance.yahoo.com/quote/";

/// Path segment appended after the symbol.
pub(crate) const SUSTAINABILITY_PATH: &str = "sustainability/";
