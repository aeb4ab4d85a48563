#[tokio::main]
async fn main() {
    if let Err(e) = mining_profit_calculator::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
