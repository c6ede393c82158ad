use crate::api::{ApiClient, ApiError, UserRecord};
use leptos::*;

/// Application-wide user collection.
#[derive(Debug, Clone, Copy)]
pub struct UsersContext {
    pub userlgs: RwSignal<Vec<UserRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl UsersContext {
    fn new(records: Vec<UserRecord>, loading: bool) -> Self {
        Self {
            userlgs: create_rw_signal(records),
            loading: create_rw_signal(loading),
            error: create_rw_signal(None),
        }
    }
}

pub async fn load_users(api_client: &ApiClient, ctx: UsersContext) {
    ctx.loading.set(true);
    match api_client.list_users().await {
        Ok(records) => {
            log::info!("Loaded {} users", records.len());
            ctx.userlgs.set(records);
            ctx.error.set(None);
        }
        Err(error) => {
            log::warn!("Failed to load users: {}", error);
            ctx.userlgs.set(Vec::new());
            ctx.error.set(Some(error));
        }
    }
    ctx.loading.set(false);
}

#[component]
pub fn UsersProvider(children: Children) -> impl IntoView {
    let ctx = UsersContext::new(Vec::new(), true);
    provide_context(ctx);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        load_users(&api_client, ctx).await;
    });

    view! { <>{children()}</> }
}

/// Provides a collection that is already loaded.
pub fn provide_users(records: Vec<UserRecord>) -> UsersContext {
    let ctx = UsersContext::new(records, false);
    provide_context(ctx);
    ctx
}

pub fn use_users() -> UsersContext {
    use_context::<UsersContext>().unwrap_or_else(|| UsersContext::new(Vec::new(), false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::user;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_users_returns_empty_collection_without_context() {
        with_runtime(|| {
            let ctx = use_users();
            assert!(ctx.userlgs.get_untracked().is_empty());
            assert!(!ctx.loading.get_untracked());
        });
    }

    #[test]
    fn provide_users_is_visible_through_use_users() {
        with_runtime(|| {
            provide_users(vec![user(&"a".repeat(24), "Ada")]);
            let ctx = use_users();
            let records = ctx.userlgs.get_untracked();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].name, "Ada");
        });
    }
}
