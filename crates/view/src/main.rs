//! `invite-view` -- renders an invitation page in the terminal.
//!
//! Takes the page location as its only argument, e.g.
//! `invite-view "/?bride=Kavya&groom=Vaibhav"`, shows the loader while the
//! lookup runs, then prints the invitation or the error page.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default                 | Description                     |
//! |------------------|----------|-------------------------|---------------------------------|
//! | `INVITE_API_URL` | no       | `http://localhost:3000` | Base URL of the invitation API  |
//! | `MIN_LOADING_MS` | no       | `5000`                  | Minimum loader time on success  |

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invite_view::client::InviteClient;
use invite_view::config::ViewConfig;
use invite_view::driver::spawn_page;
use invite_view::query::PageQuery;
use invite_view::render::render;
use invite_view::state::ViewState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invite_view=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ViewConfig::from_env();
    let location = std::env::args().nth(1).unwrap_or_default();

    let query = PageQuery::parse(&location).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Cannot read page location");
        std::process::exit(2);
    });

    tracing::info!(
        api_url = %config.api_url,
        min_loading = ?config.min_loading,
        "Opening invitation page",
    );

    let client = Arc::new(InviteClient::new(config.api_url.clone()));
    let mut page = spawn_page(Arc::clone(&client), client, config.min_loading);

    if let Err(err) = page.navigate(query) {
        tracing::error!(error = %err, "Page driver unavailable");
        std::process::exit(1);
    }

    // Show the loader once it has had a moment to receive its artwork.
    let mut snapshots = page.subscribe();
    if page.snapshot().view.is_loading() {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(500),
            snapshots.wait_for(|s| s.segments.is_some() || !s.view.is_loading()),
        )
        .await;
        let snapshot = page.snapshot();
        if snapshot.view.is_loading() {
            println!("{}", render(&snapshot));
        }
    }

    let state = match page.settled().await {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "Page did not settle");
            std::process::exit(1);
        }
    };

    println!("{}", render(&page.snapshot()));

    if let ViewState::Error(_) = state {
        std::process::exit(1);
    }
}
