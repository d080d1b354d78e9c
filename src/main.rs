use std::sync::Arc;

use anyhow::Context;

use bookbud_app::screens::books::BooksStore;
use bookbud_catalog::GoogleBooksClient;
use bookbud_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load BookBud settings")?;
    bookbud_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        catalog = %settings.catalog.base_url,
        "bookbud bootstrap starting"
    );

    let catalog = Arc::new(GoogleBooksClient::new(&settings.catalog)?);
    let books = BooksStore::new(
        catalog,
        settings.catalog.browse_query.clone(),
        settings.catalog.browse_page_size,
    );

    books.refresh().await;

    let snapshot = books.snapshot();
    if let Some(message) = snapshot.error() {
        tracing::warn!(message, "browse query failed");
    } else {
        tracing::info!(
            count = snapshot.data().map_or(0, Vec::len),
            "browse query loaded"
        );
    }

    tracing::info!("bookbud bootstrap complete");
    Ok(())
}
