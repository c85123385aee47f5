use crate::frontend::{
    pages::{article::read::ArticlePage, home::Home},
    session::restore_session,
    store::Store,
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment,
    StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = Store::provide();
    // Load user profile in case we are already logged in
    restore_session(store);

    view! {
        <Stylesheet id="conduit" href="/pkg/conduit.css" />
        <Title formatter=|text| format!("{text} | Conduit") />
        <Router>
            <nav class="navbar navbar-light">
                <div class="container">
                    <a class="navbar-brand" href="/">
                        "conduit"
                    </a>
                </div>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=Home />
                    <Route path=(StaticSegment("article"), ParamSegment("slug")) view=ArticlePage />
                </Routes>
            </main>
        </Router>
    }
}
