use crate::{
    common::AUTH_COOKIE,
    frontend::{api::api_client, store::Store},
};
use codee::string::FromToStringCodec;
use leptos::{prelude::*, task::spawn};
use leptos_use::use_cookie;
use log::warn;

/// Fills `store.user` from the jwt cookie, if there is one.
pub fn restore_session(store: Store) {
    let (token, _) = use_cookie::<String, FromToStringCodec>(AUTH_COOKIE);
    let client = api_client();
    Effect::new(move |_| {
        let Some(token) = token.get() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match client.current_user(&token).await {
                Ok(user) => store.user.set(Some(user)),
                Err(e) => warn!("Failed to restore session: {e}"),
            }
        });
    });
}
