use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{directory::DirectoryPage, forgot_password::ForgotPasswordPage, user_profile::UserProfilePage},
    state::users::UsersProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/forgot-password", "/users/:id"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <UsersProvider>
            <Router>
                <Routes>
                    <Route path="/" view=DirectoryPage/>
                    <Route path="/forgot-password" view=ForgotPasswordPage/>
                    <Route path="/users/:id" view=UserProfilePage/>
                </Routes>
            </Router>
        </UsersProvider>
    }
}
