use std::env;
use twitch_stream_tracker::StreamTracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let client_id = env::var("TWITCH_CLIENT_ID")?;
    let client_secret = env::var("TWITCH_CLIENT_SECRET")?;
    let logins = env::args().skip(1).collect::<Vec<_>>();
    let mut tracker = StreamTracker::new(client_id, client_secret);

    for (login, classification) in tracker.classify(logins).await? {
        println!("{login}: {classification}");
    }

    Ok(())
}
