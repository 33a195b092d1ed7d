use storyquiz::{server, ServiceKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(ServiceKind::ApiGateway).await?;
    Ok(())
}
