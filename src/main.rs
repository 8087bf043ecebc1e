use yoga_monitor::Mode;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mode = Mode::from_args(std::env::args());
    yoga_monitor::run(mode).await
}
