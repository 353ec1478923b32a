use timeanddate::{Location, TimeAndDate, TimeAndDateError};

#[tokio::main]
async fn main() -> Result<(), TimeAndDateError> {
    // Set RUST_LOG=info (or debug) to see download and extraction messages
    env_logger::init();

    let client = TimeAndDate::new()?;
    let london = Location::new("uk", "london");
    println!("Fetching current weather from {}", client.location_url(&london));

    let record = client.weather_at(&london).await?;
    println!("{record}");

    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Could not serialize record: {e}"),
    }

    Ok(())
}
