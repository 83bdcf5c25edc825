pub mod discord;

use crate::adapters::inbound::discord::client::Discord;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::avatar_store::AvatarStore;

pub async fn create_client<AS>(app: App<AS>) -> impl Client
where
    AS: AvatarStore + Send + Sync + 'static,
{
    Discord::new(app).await
}
