use super::view_model::{use_forgot_password_view_model, ForgotPasswordViewModel};
use crate::components::{common::Button, dialog::NoticeDialog, layout::ErrorMessage};
use leptos::*;

pub fn confirmation_message(email: &str) -> String {
    format!(
        "We sent a password reset link to {}. Check your inbox and follow the link to choose a new password.",
        email
    )
}

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    view! { <ForgotPasswordForm vm=vm /> }
}

#[component]
pub fn ForgotPasswordForm(vm: ForgotPasswordViewModel) -> impl IntoView {
    let email = vm.email;
    let error = vm.error;
    let sent_to = vm.sent_to;
    let pending = vm.pending;

    let modal_open = Signal::derive(move || sent_to.get().is_some());
    let modal_message = Signal::derive(move || {
        sent_to
            .get()
            .map(|address| confirmation_message(&address))
            .unwrap_or_default()
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Forgot your password?"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Enter the email address of your account and we'll send you a reset link."
                    </p>
                </div>

                <form
                    class="mt-8 space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <div>
                        <label for="email-address" class="sr-only">
                            "Email address"
                        </label>
                        <input
                            id="email-address"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm"
                            placeholder="Email address"
                            prop:value=email
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}

                    <Button
                        class="w-full"
                        loading=pending
                        attr:type="submit"
                    >
                        {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                    </Button>

                    <div class="text-sm text-center">
                        <a href="/" class="font-medium text-link hover:text-link-hover">
                            "Back to directory"
                        </a>
                    </div>
                </form>
            </div>

            <NoticeDialog
                is_open=modal_open
                title="Check your email"
                message=modal_message
                on_close=Callback::new(move |_| vm.close_confirmation())
                close_label="Close"
            />
        </div>
    }
}
