use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use crate::components::layout::Layout;

mod panel;
mod view_model;

pub use panel::UserProfilePanel;

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user_id = Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));

    view! {
        <Title text="User profile" />
        <Layout>
            <UserProfilePanel user_id=user_id />
        </Layout>
    }
}
