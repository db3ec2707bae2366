use campusdesk_business::{
    Article, BackendStatus, BusinessConfig, CollectionCache, DiningCommonsMenuItem, HelpRequest,
    MenuItemReview, Notices, Organization, RecommendationRequest, RecordCache, Route, SessionCache,
};
use campusdesk_states::StateCtx;

/// The main application state.
pub struct AppState {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

fn register_entity_caches(ctx: &mut StateCtx) {
    ctx.register_compute::<CollectionCache<Article>>();
    ctx.register_compute::<CollectionCache<HelpRequest>>();
    ctx.register_compute::<CollectionCache<MenuItemReview>>();
    ctx.register_compute::<CollectionCache<RecommendationRequest>>();
    ctx.register_compute::<CollectionCache<DiningCommonsMenuItem>>();
    ctx.register_compute::<CollectionCache<Organization>>();

    ctx.register_compute::<RecordCache<Article>>();
    ctx.register_compute::<RecordCache<HelpRequest>>();
    ctx.register_compute::<RecordCache<MenuItemReview>>();
    ctx.register_compute::<RecordCache<RecommendationRequest>>();
    ctx.register_compute::<RecordCache<DiningCommonsMenuItem>>();
    ctx.register_compute::<RecordCache<Organization>>();
}

fn build_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.register_state::<Route>();
    ctx.register_state::<Notices>();
    ctx.register_compute::<SessionCache>();
    ctx.register_compute::<BackendStatus>();
    register_entity_caches(&mut ctx);

    ctx
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ctx: build_ctx(BusinessConfig::default()),
        }
    }
}

impl AppState {
    pub fn test(base_url: String) -> Self {
        Self {
            ctx: build_ctx(BusinessConfig::new(base_url)),
        }
    }
}
