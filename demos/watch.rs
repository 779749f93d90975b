use std::env;
use std::path::Path;
use chrono::Duration;
use twitch_stream_tracker::StreamTracker;

const SNAPSHOT_PATH: &str = "tracker.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let client_id = env::var("TWITCH_CLIENT_ID")?;
    let client_secret = env::var("TWITCH_CLIENT_SECRET")?;
    let mut tracker = StreamTracker::builder(client_id, client_secret)
        .cooldown(Duration::seconds(120))
        .build();
    let snapshot_path = Path::new(SNAPSHOT_PATH);

    // Pick up where the last run left off so cooldown timers survive restarts.
    if snapshot_path.exists() {
        tracker.restore_from_file(snapshot_path)?;
    }

    tracker.set_logins(["lirik", "shroud", "sodapoppin"]);

    loop {
        for status in tracker.poll().await? {
            if status.change.is_some() {
                println!("{status}");
            }
        }

        tracker.save_snapshot(snapshot_path).await?;
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    }
}
