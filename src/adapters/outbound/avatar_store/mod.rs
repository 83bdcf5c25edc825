mod http;

use crate::adapters::outbound::avatar_store::http::Http;
use crate::ports::outbound::avatar_store::AvatarStore;

#[must_use]
pub fn init_avatar_store() -> impl AvatarStore {
    Http::create()
}
