#[tokio::main]
async fn main() {
    if let Err(e) = sp500_dashboard::cli::run().await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
