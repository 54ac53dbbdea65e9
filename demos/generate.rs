//! Demo: generate a PerimeterX sensor cookie and, when needed, solve the
//! hold-captcha follow-up.
//!
//! Run with: FRIS_API_KEY=... cargo run --example generate

use px_sdk::{GenerateRequest, Session};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("px_sdk=debug")),
        )
        .init();

    let session = Session::from_env()?;

    let request = GenerateRequest::new(USER_AGENT, "https://auth.ticketmaster.com/");

    let sensor = session.generate_cookie(&request).await?;
    println!("cookie:  {}", sensor.cookie);
    println!("cts:     {}", sensor.cts);
    println!("vid:     {}", sensor.vid);
    println!("success: {}, flagged: {}", sensor.success, sensor.flagged);

    // A flagged sensor usually needs the hold-captcha flow; chain the `data`
    // header from the generate response into the follow-up request.
    if let Some(data) = sensor.data_header() {
        let hold = session
            .solve_hold_captcha(&request.clone().with_data(data))
            .await?;
        println!("refined cookie: {}", hold.cookie);
        if let Some(solved) = hold.data {
            println!("solved payload: {solved}");
        }
    }

    Ok(())
}
