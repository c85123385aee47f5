use crate::{
    backend::{config::ConduitConfig, error::MyResult},
    frontend::{
        api::ApiClient,
        app::{shell, App},
    },
};
use axum::Router;
use leptos::{config::get_config_from_str, prelude::*};
use leptos_axum::{generate_route_list, LeptosRoutes};
use log::info;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

pub mod config;
pub mod error;

pub async fn start(config: ConduitConfig) -> MyResult<()> {
    let mut leptos_options = get_config_from_str(include_str!("../../Cargo.toml"))?;
    let addr: SocketAddr = config.bind.parse()?;
    leptos_options.site_addr = addr;
    let routes = generate_route_list(App);

    // Server side rendering talks to the api configured here, the browser uses the url
    // compiled into the wasm bundle.
    let api_client = ApiClient::new(config.api_url.clone());
    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api_client.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(CompressionLayer::new());

    info!("Listening on {addr}, using api {}", config.api_url);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
