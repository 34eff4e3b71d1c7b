//! Provision storage for a new host and tear it down again.
//!
//! Creates a volume group holding two volumes, a host with an IQN, maps the
//! whole group to the host, then deletes the host (which removes its
//! mappings and IQN first) and the storage.

use silk_sdp::{
    CreateVolumeGroupParams, CreateVolumeParams, HostType, SdpClient, SdpResult,
};

#[tokio::main]
async fn main() -> SdpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("silk_sdp=info")),
        )
        .init();

    let client = SdpClient::from_env()?;

    client
        .create_volume_group(
            CreateVolumeGroupParams::new("demo-vg", 50).description("host lifecycle demo"),
        )
        .await?;
    for name in ["demo-data", "demo-logs"] {
        client
            .create_volume(CreateVolumeParams::new(name, 10, "demo-vg"))
            .await?;
    }

    client.create_host("demo-host", HostType::Linux).await?;
    client
        .create_host_iqn("demo-host", "iqn.2026-10.com.example:demo-host")
        .await?;

    let mappings = client
        .create_host_volume_group_mapping("demo-host", "demo-vg")
        .await?;
    println!("Created {} mappings", mappings.len());
    println!(
        "demo-data is mapped to: {:?}",
        client.volume_host_mappings("demo-data").await?
    );

    client.delete_host("demo-host").await?;
    for name in ["demo-data", "demo-logs"] {
        client.delete_volume(name).await?;
    }
    client.delete_volume_group("demo-vg").await?;
    println!("Cleaned up");

    Ok(())
}
