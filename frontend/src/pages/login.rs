use crate::api::GlooApiClient;
use crate::hooks::use_app_context;
use crate::session::BrowserTokenStore;
use crate::Route;
use gloo::dialogs;
use shared::{ApiError, LoginRequest, LoginResponse, MarketApi, Session, TokenStore};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// How a login attempt ended
#[derive(Debug, PartialEq)]
enum LoginOutcome {
    /// Token stored; navigate to the listing
    SignedIn(Session),
    /// Credentials refused: alert, stay on the form
    Rejected,
    /// Request never completed: logged only
    Unreachable,
}

/// Store the token on success; leave storage untouched otherwise.
fn complete_login(
    result: Result<LoginResponse, ApiError>,
    store: &impl TokenStore,
    key: &str,
) -> LoginOutcome {
    match result {
        Ok(body) => LoginOutcome::SignedIn(Session::sign_in(store, key, &body.token)),
        Err(e) if e.is_transport() => {
            log::error!("Falha no login: {}", e);
            LoginOutcome::Unreachable
        }
        Err(e) => {
            log::warn!("Falha no login: {}", e);
            LoginOutcome::Rejected
        }
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator().unwrap();
    let app = use_app_context();
    let form = use_state(LoginRequest::default);
    let submitting = use_state(|| false);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginRequest {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginRequest {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let config = app.config.clone();
        let set_session = app.set_session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let creds = (*form).clone();
            let config = config.clone();
            let set_session = set_session.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let client = GlooApiClient::new(&config.api_base, None);
                let result = client.login(&creds).await;
                match complete_login(result, &BrowserTokenStore, &config.token_key) {
                    LoginOutcome::SignedIn(session) => {
                        dialogs::alert("Login realizado com sucesso");
                        set_session.emit(session);
                        navigator.push(&Route::Home);
                    }
                    LoginOutcome::Rejected => dialogs::alert("Falha no login"),
                    LoginOutcome::Unreachable => {}
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <form class="login-form" onsubmit={on_submit}>
                <h1>{ "Mercado Fácil" }</h1>
                <input
                    type="email"
                    name="email"
                    placeholder="E-mail"
                    value={form.email.clone()}
                    oninput={on_email}
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Senha"
                    value={form.password.clone()}
                    oninput={on_password}
                />
                <button type="submit" class="login-button" disabled={*submitting}>
                    { "Entrar" }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MemoryTokenStore;

    #[test]
    fn success_stores_token() {
        let store = MemoryTokenStore::new();
        let outcome = complete_login(
            Ok(LoginResponse {
                token: "abc".to_string(),
            }),
            &store,
            "token",
        );
        assert_eq!(
            outcome,
            LoginOutcome::SignedIn(Session::with_token(Some("abc".to_string())))
        );
        assert_eq!(store.get("token").as_deref(), Some("abc"));
    }

    #[test]
    fn rejection_stores_nothing() {
        let store = MemoryTokenStore::new();
        let outcome = complete_login(
            Err(ApiError::Auth("login rejected with status 401".to_string())),
            &store,
            "token",
        );
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn transport_error_is_not_an_alert() {
        let store = MemoryTokenStore::new();
        let outcome = complete_login(
            Err(ApiError::Network("connection refused".to_string())),
            &store,
            "token",
        );
        assert_eq!(outcome, LoginOutcome::Unreachable);
        assert_eq!(store.get("token"), None);
    }
}
