use crate::{
    api::UserRecord,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    state::users::use_users,
    utils::format::short_id,
};
use leptos::*;
use leptos_meta::Title;

pub const LOAD_FAILURE_MESSAGE: &str = "Could not load the user directory.";

pub fn profile_href(user: &UserRecord) -> String {
    format!("/users/{}", user.id)
}

#[component]
pub fn DirectoryPage() -> impl IntoView {
    view! {
        <Title text="Directory" />
        <Layout>
            <DirectoryPanel />
        </Layout>
    }
}

#[component]
pub fn DirectoryPanel() -> impl IntoView {
    let users = use_users();

    view! {
        <div class="px-4 py-6 sm:px-0 space-y-4">
            <h2 class="text-2xl font-bold text-fg">"People"</h2>
            <Show when=move || users.error.with(Option::is_some)>
                <ErrorMessage message=LOAD_FAILURE_MESSAGE />
            </Show>
            {move || {
                if users.loading.get() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let records = users.userlgs.get();
                if records.is_empty() {
                    return view! {
                        <EmptyState title="No users yet" description="The directory is empty." />
                    }
                    .into_view();
                }
                view! {
                    <ul class="divide-y divide-border bg-surface-elevated rounded-lg border border-border">
                        {records
                            .iter()
                            .map(|user| {
                                view! {
                                    <li class="px-4 py-3 flex items-center justify-between">
                                        <a href={profile_href(user)} class="font-medium text-link hover:text-link-hover">
                                            {user.name.clone()}
                                        </a>
                                        <span class="text-sm text-fg-muted">{user.team.clone()}</span>
                                        <span class="text-xs text-fg-muted font-mono">{short_id(&user.id)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}
