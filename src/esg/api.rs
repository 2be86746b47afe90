use crate::core::{EsgClient, EsgError};

use super::{EsgScores, scrape};

pub(super) async fn fetch_esg_scores(
    client: &EsgClient,
    symbol: &str,
) -> Result<Option<EsgScores>, EsgError> {
    let url = client.sustainability_url(symbol)?;

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        tracing::debug!(
            symbol,
            status = resp.status().as_u16(),
            url = %url,
            "sustainability page unavailable"
        );
        return Ok(None);
    }

    let body = crate::core::net::get_text(resp, "sustainability_html", symbol, "html").await?;

    #[cfg(any(debug_assertions, feature = "debug-dumps"))]
    {
        if scrape::debug::enabled()
            && let Err(e) = scrape::debug::debug_dump_html(symbol, &body)
        {
            tracing::warn!(symbol, error = %e, "debug dump failed");
        }
    }

    Ok(Some(scrape::parse_sustainability_html(&body)))
}
