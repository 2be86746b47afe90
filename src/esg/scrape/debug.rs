//! Debug dump helpers for troubleshooting layout changes.

use std::io::Write;

/// Whether `YF_ESG_DEBUG=1` is set.
pub(crate) fn enabled() -> bool {
    std::env::var("YF_ESG_DEBUG").ok().as_deref() == Some("1")
}

/// Write the raw page plus a short outline of the sections found to the temp dir.
pub(crate) fn debug_dump_html(symbol: &str, html: &str) -> std::io::Result<()> {
    let dir = std::env::temp_dir();
    let page = dir.join(format!("yf_esg-{symbol}-sustainability.html"));
    std::fs::File::create(&page)?.write_all(html.as_bytes())?;

    let outline = dir.join(format!("yf_esg-{symbol}-outline.txt"));
    let mut f = std::fs::File::create(&outline)?;
    writeln!(f, "symbol: {symbol}")?;
    writeln!(f, "html.len: {}", html.len())?;
    for testid in section_testids(html) {
        writeln!(f, "section: {testid}")?;
    }

    tracing::debug!(page = %page.display(), outline = %outline.display(), "wrote debug dump");
    Ok(())
}

fn section_testids(html: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let Ok(sel) = scraper::Selector::parse("section[data-testid]") else {
        return Vec::new();
    };
    doc.select(&sel)
        .filter_map(|el| el.value().attr("data-testid"))
        .map(str::to_string)
        .collect()
}
