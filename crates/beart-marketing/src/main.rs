//! Beart India marketing site server

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), beart_marketing::config::SiteError> {
    use axum::{routing::get, Router};
    use beart_marketing::app::App;
    use beart_marketing::config::{SiteConfig, SiteError};
    use beart_marketing::server::health_check;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = SiteConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None)
        .await
        .map_err(|err| SiteError::Config(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/health", get(health_check))
        .leptos_routes(&leptos_options, routes, App)
        .fallback(leptos_axum::file_and_error_handler(App))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser bundle starts from `hydrate` in lib.rs
}
