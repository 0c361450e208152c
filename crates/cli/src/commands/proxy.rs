use anyhow::Result;
use workdeck_domain::ProxyConfig;

pub async fn run(config: &ProxyConfig) -> Result<()> {
    workdeck_infra::serve_proxy(config).await?;
    Ok(())
}
