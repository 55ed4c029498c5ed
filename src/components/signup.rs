use dioxus::prelude::*;

use crate::time;
use crate::Route;

/// Identities that already "exist". Signup is a local simulation: nothing
/// is persisted or registered anywhere, these are the only collisions.
const EXISTING_USERS: [(&str, &str); 2] = [
    ("user1", "user1@example.com"),
    ("user2", "user2@example.com"),
];

/// How long the success message stays up before returning to `/`.
const REDIRECT_DELAY_MS: u64 = 2_000;

pub fn identity_taken(username: &str, email: &str) -> bool {
    EXISTING_USERS
        .iter()
        .any(|(taken_username, taken_email)| *taken_username == username || *taken_email == email)
}

/// A successful signup lingers on its message, then returns to `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupRedirect {
    pub delay_ms: u64,
    pub destination: Route,
}

/// Outcome of a signup attempt. Errors are rendered verbatim; `Ok` means
/// the form clears and the redirect fires once its delay elapses.
pub fn settle_signup(
    username: &str,
    email: &str,
    password: &str,
) -> Result<SignupRedirect, &'static str> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields.");
    }
    if identity_taken(username, email) {
        return Err("User with this username or email already exists.");
    }
    Ok(SignupRedirect {
        delay_ms: REDIRECT_DELAY_MS,
        destination: Route::Home {},
    })
}

#[component]
pub fn Signup() -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let on_submit = move |_: FormEvent| {
        error.set(None);
        success.set(None);

        match settle_signup(&username(), &email(), &password()) {
            Err(message) => error.set(Some(message.to_string())),
            Ok(redirect) => {
                success.set(Some("Signup successful!".to_string()));
                username.set(String::new());
                email.set(String::new());
                password.set(String::new());

                spawn(async move {
                    time::sleep(redirect.delay_ms).await;
                    navigator().push(redirect.destination);
                });
            }
        }
    };

    let error_notice = error().map(|message| {
        rsx! {
            p { class: "mt-4 text-red-500 text-sm", "{message}" }
        }
    });
    let success_notice = success().map(|message| {
        rsx! {
            p { class: "mt-4 text-green-500 text-sm", "{message}" }
        }
    });

    rsx! {
        div { class: "min-h-screen bg-slate-500 flex justify-center items-center p-4",
            div { class: "bg-white p-8 rounded-lg shadow-md w-full max-w-md border-2 border-gray-900",
                h2 { class: "text-3xl mb-6 text-center", "Sign Up" }

                form { class: "space-y-4", onsubmit: on_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700", "Username:" }
                        input {
                            r#type: "text",
                            placeholder: "Enter your username",
                            class: "mt-1 p-2 block w-full border border-gray-300 rounded-md shadow-sm",
                            value: "{username}",
                            oninput: move |event| username.set(event.value()),
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700", "Email:" }
                        input {
                            r#type: "email",
                            placeholder: "Enter your email",
                            class: "mt-1 p-2 block w-full border border-gray-300 rounded-md shadow-sm",
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700", "Password:" }
                        input {
                            r#type: "password",
                            placeholder: "Enter your password",
                            class: "mt-1 p-2 block w-full border border-gray-300 rounded-md shadow-sm",
                            value: "{password}",
                            oninput: move |event| password.set(event.value()),
                        }
                    }

                    div { class: "flex flex-col sm:flex-row justify-center items-center gap-5",
                        Link {
                            to: Route::Home {},
                            class: "w-full sm:w-auto bg-green-600 text-white p-2 rounded-md shadow-md text-center",
                            "Login"
                        }
                        button {
                            r#type: "submit",
                            class: "w-full sm:w-auto bg-green-600 text-white p-2 rounded-md shadow-md",
                            "Sign Up"
                        }
                    }
                }

                {error_notice}
                {success_notice}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{identity_taken, settle_signup, SignupRedirect, REDIRECT_DELAY_MS};
    use crate::Route;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_usernames_and_emails_collide() {
        assert!(identity_taken("user1", "fresh@example.com"));
        assert!(identity_taken("fresh", "user2@example.com"));
    }

    #[test]
    fn unknown_identities_do_not_collide() {
        assert!(!identity_taken("fresh", "fresh@example.com"));
    }

    #[test]
    fn missing_fields_block_the_attempt() {
        let expected = Err("Please fill in all fields.");
        assert_eq!(settle_signup("", "a@example.com", "hunter2"), expected);
        assert_eq!(settle_signup("fresh", "", "hunter2"), expected);
        assert_eq!(settle_signup("fresh", "a@example.com", ""), expected);
    }

    #[test]
    fn taken_identities_are_reported() {
        assert_eq!(
            settle_signup("user1", "fresh@example.com", "hunter2"),
            Err("User with this username or email already exists.")
        );
    }

    #[test]
    fn a_fresh_identity_redirects_home_after_the_fixed_delay() {
        assert_eq!(
            settle_signup("fresh", "fresh@example.com", "hunter2"),
            Ok(SignupRedirect {
                delay_ms: REDIRECT_DELAY_MS,
                destination: Route::Home {},
            })
        );
    }
}
