use super::repository::ForgotPasswordRepository;
use crate::api::{ApiClient, ApiError};
use leptos::*;
use std::rc::Rc;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    /// Address the last successful request went to; drives the confirmation modal.
    pub sent_to: RwSignal<Option<String>>,
    pub submit_action: Action<String, Result<String, ApiError>>,
    /// True while a request is in flight.
    pub pending: Signal<bool>,
}

impl ForgotPasswordViewModel {
    /// Dispatches the current email unless a request is already in flight.
    pub fn submit(&self) -> bool {
        if self.pending.get_untracked() {
            return false;
        }
        self.submit_action.dispatch(self.email.get_untracked());
        true
    }

    pub fn apply_result(&self, result: Result<String, ApiError>) {
        match result {
            Ok(email) => {
                self.sent_to.set(Some(email));
                self.error.set(None);
            }
            Err(err) => {
                self.sent_to.set(None);
                self.error.set(Some(feedback_message(&err)));
            }
        }
    }

    pub fn close_confirmation(&self) {
        self.sent_to.set(None);
    }
}

/// Validates the address and sends a single reset request.
///
/// Resolves to the submitted (trimmed) address on success.
pub async fn submit_reset_request(
    repo: &ForgotPasswordRepository,
    raw_email: &str,
) -> Result<String, ApiError> {
    let email = raw_email.trim().to_string();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    repo.request_reset(email.clone()).await?;
    Ok(email)
}

/// Text shown under the form for a failed submission.
pub fn feedback_message(err: &ApiError) -> String {
    if err.is_server_reported() {
        err.error.clone()
    } else {
        log::error!("Password reset request failed: {} ({})", err, err.code);
        GENERIC_FAILURE_MESSAGE.to_string()
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let sent_to = create_rw_signal(None);

    let submit_action = create_action(move |value: &String| {
        let repo = repository.clone();
        let value = value.clone();
        async move { submit_reset_request(&repo, &value).await }
    });

    let vm = ForgotPasswordViewModel {
        email,
        error,
        sent_to,
        submit_action,
        pending: submit_action.pending().into(),
    };

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            vm.apply_result(result);
        }
    });

    vm
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/api/password/forgot-password";

    fn repository(base_url: String) -> ForgotPasswordRepository {
        ForgotPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(base_url)))
    }

    fn view_model() -> ForgotPasswordViewModel {
        provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9"));
        use_forgot_password_view_model()
    }

    #[tokio::test]
    async fn submit_sends_exactly_one_request_with_trimmed_email() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("content-type", "application/json")
                    .json_body(json!({ "email": "carol@example.com" }));
                then.status(200).json_body(json!({ "message": "ok" }));
            })
            .await;

        let repo = repository(server.base_url());
        let sent = submit_reset_request(&repo, "  carol@example.com ")
            .await
            .unwrap();
        assert_eq!(sent, "carol@example.com");
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn empty_email_is_rejected_without_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200);
            })
            .await;

        let repo = repository(server.base_url());
        let err = submit_reset_request(&repo, "   ").await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn server_error_is_displayed_and_modal_stays_closed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(422).json_body(json!({ "error": "X" }));
            })
            .await;

        let result = submit_reset_request(&repository(server.base_url()), "dan@example.com").await;
        with_runtime(|| {
            let vm = view_model();
            vm.apply_result(result);
            assert_eq!(vm.error.get_untracked().as_deref(), Some("X"));
            assert!(vm.sent_to.get_untracked().is_none());
        });
    }

    #[tokio::test]
    async fn network_error_shows_generic_message_and_modal_stays_closed() {
        let result =
            submit_reset_request(&repository("http://127.0.0.1:9".into()), "dan@example.com").await;
        with_runtime(|| {
            let vm = view_model();
            vm.apply_result(result);
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some(GENERIC_FAILURE_MESSAGE)
            );
            assert!(vm.sent_to.get_untracked().is_none());
        });
    }

    #[test]
    fn submit_is_ignored_while_request_in_flight() {
        with_runtime(|| {
            let mut vm = view_model();
            vm.pending = Signal::derive(|| true);
            vm.email.set("gina@example.com".into());

            assert!(!vm.submit());
            assert_eq!(vm.submit_action.version().get_untracked(), 0);
            assert!(vm.submit_action.input().get_untracked().is_none());
        });
    }

    #[test]
    fn success_opens_confirmation_and_clears_previous_error() {
        with_runtime(|| {
            let vm = view_model();
            vm.error.set(Some("old".into()));
            vm.apply_result(Ok("erin@example.com".into()));
            assert_eq!(vm.sent_to.get_untracked().as_deref(), Some("erin@example.com"));
            assert!(vm.error.get_untracked().is_none());

            vm.close_confirmation();
            assert!(vm.sent_to.get_untracked().is_none());
        });
    }
}
