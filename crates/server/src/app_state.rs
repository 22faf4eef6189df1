use pages::{AssetStore, PageRouter};
use shared::domain::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) router: PageRouter,
    pub(crate) assets: AssetStore,
}
