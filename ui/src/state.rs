use log::warn;
use profiles_business::{DirectUserSource, FetchState, ProfilesConfig, QueryUserSource, register};
use profiles_states::StateCtx;

/// The main application state.
///
/// Each table section owns its source; both share the one `StateCtx`.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Source of the "Direct fetch" table.
    pub direct: DirectUserSource,
    /// Source of the "Cached query" table.
    pub query: QueryUserSource,
}

impl Default for State {
    fn default() -> Self {
        let config = ProfilesConfig::from_env().unwrap_or_else(|err| {
            warn!("Invalid profiles configuration, using defaults: {err:#}");
            ProfilesConfig::default()
        });
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: ProfilesConfig) -> Self {
        let mut ctx = StateCtx::new();
        register(&mut ctx, config, FetchState::default());

        Self {
            ctx,
            direct: DirectUserSource::new(),
            query: QueryUserSource::new(),
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(ProfilesConfig::new(base_url))
    }
}
