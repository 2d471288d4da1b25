use contracts::system::session::SessionState;
use leptos::prelude::*;

use super::api;

/// Holds the session for the lifetime of the page. Nothing is stored in
/// the browser, so a reload starts anonymous again.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = signal(SessionState::new());

    provide_context(session);
    provide_context(set_session);

    children()
}

pub fn use_auth() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    (
        expect_context::<ReadSignal<SessionState>>(),
        expect_context::<WriteSignal<SessionState>>(),
    )
}

/// Run one login attempt through the session gate. A second submit while
/// one is in flight is ignored.
pub async fn do_login(email: String, password: String, set_session: WriteSignal<SessionState>) {
    let mut started = false;
    set_session.update(|s| started = s.submit(&email));
    if !started {
        return;
    }

    let outcome = api::login(email, password).await;
    match &outcome {
        Ok(profile) => log::info!("signed in as {} ({})", profile.email, profile.role.as_str()),
        Err(err) => log::warn!("login refused: {}", err),
    }
    set_session.update(move |s| {
        s.resolve(outcome);
    });
}

pub fn do_logout(set_session: WriteSignal<SessionState>) {
    set_session.update(|s| {
        if s.logout() {
            log::info!("signed out");
        }
    });
}
