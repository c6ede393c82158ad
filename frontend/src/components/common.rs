use leptos::*;

const PRIMARY_BUTTON_CLASSES: &str = "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus";

/// Button that shows a spinner and refuses clicks while `loading` is set.
#[component]
pub fn Button(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    PRIMARY_BUTTON_CLASSES,
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            aria-disabled=move || if disabled.get() || loading.get() { "true" } else { "false" }
            aria-busy=move || if loading.get() { "true" } else { "false" }
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}
