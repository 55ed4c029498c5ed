use dioxus::prelude::*;
use tracing::debug;

use crate::api;
use crate::Route;

/// Pre-flight checks run before any request leaves the page. The error
/// strings are rendered verbatim.
pub fn validate(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("Both fields are required.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long.");
    }
    Ok(())
}

/// How a finished login attempt lands in the view: the token and error to
/// show, and where to go next. A destination implies the form clears.
#[derive(Debug, PartialEq)]
pub struct LoginOutcome {
    pub token: Option<String>,
    pub error: Option<String>,
    pub destination: Option<Route>,
}

pub fn settle_login(result: Result<String, api::ApiError>) -> LoginOutcome {
    match result {
        Ok(token) => LoginOutcome {
            token: Some(token),
            error: None,
            destination: Some(Route::Products {}),
        },
        Err(err) => LoginOutcome {
            token: None,
            error: Some(err.to_string()),
            destination: None,
        },
    }
}

/// Login form. On success the token is kept in view-local state only and
/// the user is sent to the product listing; it is never attached to any
/// later request.
#[component]
pub fn Login() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut auth_token = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let on_submit = move |_: FormEvent| {
        error.set(None);

        let entered_username = username();
        let entered_password = password();
        if let Err(message) = validate(&entered_username, &entered_password) {
            error.set(Some(message.to_string()));
            return;
        }

        // The submit button is disabled while this is in flight, so at
        // most one request per view instance is outstanding.
        loading.set(true);
        spawn(async move {
            let outcome = settle_login(api::login(&entered_username, &entered_password).await);
            auth_token.set(outcome.token);
            error.set(outcome.error);
            if let Some(route) = outcome.destination {
                debug!("login accepted");
                username.set(String::new());
                password.set(String::new());
                navigator().push(route);
            }
            loading.set(false);
        });
    };

    let token_notice = auth_token().map(|token| {
        rsx! {
            p { class: "text-green-500", "Logged in Successfully! Token: {token}" }
        }
    });
    let error_notice = error().map(|message| {
        rsx! {
            p { class: "text-red-500",
                "{message} Please use UserName: 'emilys' and Password: 'emilyspass' for testing"
            }
        }
    });

    rsx! {
        div { class: "min-h-screen bg-slate-500 flex items-center justify-center p-4",
            div { class: "bg-white w-full max-w-md p-5 border-2 border-gray-900 rounded-lg shadow-md",
                h1 { class: "text-3xl mb-5 text-center", "Login" }

                form { class: "space-y-4", onsubmit: on_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700", r#for: "username",
                            "Username:"
                        }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your Username",
                            class: "mt-1 p-2 block w-full border border-gray-300 rounded-md shadow-sm",
                            value: "{username}",
                            oninput: move |event| username.set(event.value()),
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700", r#for: "password",
                            "Password:"
                        }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Enter your Password",
                            class: "mt-1 p-2 block w-full border border-gray-300 rounded-md shadow-sm",
                            value: "{password}",
                            oninput: move |event| password.set(event.value()),
                        }
                    }

                    div { class: "flex flex-col sm:flex-row justify-center items-center gap-5",
                        button {
                            r#type: "submit",
                            class: "w-full sm:w-auto bg-green-600 text-white py-2 px-2 rounded-md shadow-md",
                            disabled: loading(),
                            if loading() { "Logging in..." } else { "Login" }
                        }
                        Link {
                            to: Route::Signup {},
                            class: "w-full sm:w-auto bg-green-600 text-white py-2 px-2 rounded-md shadow-md text-center",
                            "Sign Up"
                        }
                    }
                }

                div { class: "mt-4",
                    {token_notice}
                    {error_notice}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{settle_login, validate, LoginOutcome};
    use crate::api::ApiError;
    use crate::Route;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_fields_are_rejected_before_any_request() {
        assert_eq!(validate("", "x"), Err("Both fields are required."));
        assert_eq!(validate("a", ""), Err("Both fields are required."));
        assert_eq!(validate("", ""), Err("Both fields are required."));
    }

    #[test]
    fn short_passwords_are_rejected_before_any_request() {
        assert_eq!(
            validate("a", "12345"),
            Err("Password must be at least 6 characters long.")
        );
    }

    #[test]
    fn six_character_passwords_pass_validation() {
        assert_eq!(validate("emilys", "123456"), Ok(()));
        assert_eq!(validate("emilys", "emilyspass"), Ok(()));
    }

    #[test]
    fn an_accepted_login_stores_the_token_and_heads_to_the_listing() {
        assert_eq!(
            settle_login(Ok("T1".to_string())),
            LoginOutcome {
                token: Some("T1".to_string()),
                error: None,
                destination: Some(Route::Products {}),
            }
        );
    }

    #[test]
    fn a_rejected_login_drops_the_token_and_surfaces_the_message() {
        let outcome = settle_login(Err(ApiError::Auth("Invalid credentials".to_string())));
        assert_eq!(outcome.token, None);
        assert_eq!(outcome.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(outcome.destination, None);
    }
}
