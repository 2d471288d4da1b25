use contracts::system::routes::post_login_target;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let (session, set_session) = use_auth();
    let is_loading = move || session.with(|s| s.is_authenticating());
    let error_message = move || session.with(|s| s.error().map(str::to_string));

    // Signed in, either just now or before opening this page: go on to the
    // page that sent the visitor here.
    Effect::new(move |_| {
        if let Some(role) = session.with(|s| s.role()) {
            let target = post_login_target(ctx.query_param("from").as_deref(), role);
            ctx.replace(&target);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        spawn_local(async move {
            do_login(email_val, password_val, set_session).await;
        });
    };

    let dismiss = move |_| set_session.update(|s| s.dismiss_error());

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Wildlife Park"</h1>
                <h2>"Sign in to the admin dashboard"</h2>

                <Show when=move || error_message().is_some()>
                    <div class="error-message">
                        <span>{move || error_message().unwrap_or_default()}</span>
                        <button type="button" class="error-message__close" on:click=dismiss title="Dismiss">
                            "×"
                        </button>
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="name@kws.go.ke"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=is_loading
                    >
                        {move || if is_loading() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo accounts:"</p>
                    <p>"Admin: " <strong>"admin@kws.go.ke"</strong> " / " <strong>"admin123"</strong></p>
                    <p>"User: " <strong>"user@kws.go.ke"</strong> " / " <strong>"user123"</strong></p>
                    <p>
                        "No account? "
                        <a href="/signup" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate("/signup");
                        }>"Request access"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
