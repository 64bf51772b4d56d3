#[tokio::main]
async fn main() -> std::io::Result<()> {
    hotel_server::run_with_config().await
}
