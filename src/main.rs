use colourbot::adapters::inbound::create_client;
use colourbot::adapters::outbound::avatar_store::init_avatar_store;
use colourbot::config;
use colourbot::domain::app::App;
use colourbot::ports::inbound::client::Client;
use dotenv::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let guilds = match config::watched_guilds() {
        Ok(guilds) => guilds,
        Err(why) => {
            log::error!("Failed to load config - {why}");
            std::process::exit(1);
        }
    };

    let app = App::new(init_avatar_store(), guilds);
    let mut client = create_client(app).await;
    client.run().await;
}
