use std::sync::Arc;

use vocast_core::Config;
use vocast_db::VoiceoverStore;
use vocast_storage::BlobStorage;

/// Shared application state, cloned cheaply into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub blob_storage: Arc<dyn BlobStorage>,
    pub voiceovers: Arc<dyn VoiceoverStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        blob_storage: Arc<dyn BlobStorage>,
        voiceovers: Arc<dyn VoiceoverStore>,
    ) -> Self {
        Self {
            config,
            blob_storage,
            voiceovers,
        }
    }
}

// Handlers run on the multi-threaded runtime, so state must cross threads.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>();
};
