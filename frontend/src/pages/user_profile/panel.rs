use super::view_model::{use_user_profile, ProfileView};
use crate::{components::layout::LoadingSpinner, state::users::use_users};
use leptos::*;

pub const NOT_FOUND_TEXT: &str = "User not found";

#[component]
pub fn UserProfilePanel(#[prop(into)] user_id: MaybeSignal<String>) -> impl IntoView {
    let loading = use_users().loading;
    let profile = use_user_profile(Signal::derive(move || user_id.get()));

    view! {
        <div class="max-w-2xl mx-auto px-4 py-6">
            {move || match profile.get() {
                Some(found) => view! { <ProfileCard profile=found /> }.into_view(),
                None if loading.get() => view! { <LoadingSpinner /> }.into_view(),
                None => view! {
                    <p class="text-center text-fg-muted py-12">{NOT_FOUND_TEXT}</p>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn ProfileCard(profile: ProfileView) -> impl IntoView {
    let avatar = match profile.image_url.clone() {
        Some(url) => view! {
            <img
                class="h-24 w-24 rounded-full object-cover"
                src=url
                alt={format!("{} profile picture", profile.name)}
            />
        }
        .into_view(),
        None => view! {
            <div class="h-24 w-24 rounded-full bg-surface-muted flex items-center justify-center text-2xl font-semibold text-fg-muted">
                {profile.initials.clone()}
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border">
            <div class="flex items-center gap-6 p-6 border-b border-border">
                {avatar}
                <div>
                    <h2 class="text-2xl font-bold text-fg">{profile.name.clone()}</h2>
                    <p class="text-sm text-fg-muted font-mono" title={profile.id.clone()}>
                        {format!("#{}", profile.short_id)}
                    </p>
                </div>
            </div>
            <dl class="divide-y divide-border">
                {profile
                    .details()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="px-6 py-3 grid grid-cols-3 gap-4">
                                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                                <dd class="text-sm text-fg col-span-2">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
