#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use rxchat::app::{App, shell};

    tracing_subscriber::fmt::init();

    // Site address and asset paths come from `[package.metadata.leptos]`,
    // overridable via LEPTOS_* environment variables.
    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "rxchat listening");
    axum::serve(listener, app).await.expect("server failed");
}

// The cdylib build hydrates through `rxchat::hydrate`; there is no native
// binary without the ssr feature.
#[cfg(not(feature = "ssr"))]
fn main() {}
