#[tokio::main]
async fn main() -> anyhow::Result<()> {
    globus_client_lib::run().await
}
