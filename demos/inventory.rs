//! Print an overview of a Silk SDP array.
//!
//! Reads the connection from `SILK_SDP_SERVER`, `SILK_SDP_USERNAME` and
//! `SILK_SDP_PASSWORD` (a `.env` file works too), then lists volume groups
//! with their volumes, hosts with their group membership, and the policies.
//! Set `RUST_LOG=silk_sdp=debug` to see every request.

use silk_sdp::{SdpClient, SdpResult};

#[tokio::main]
async fn main() -> SdpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = SdpClient::from_env()?;
    println!("Connected to {}", client.connection().base_url());

    let volumes = client.volumes().await?;
    println!("\nVolume groups:");
    for group in client.volume_groups().await? {
        let quota_gib = group.quota.unwrap_or_default() / (1024 * 1024);
        println!("  • {} (ID: {}, quota: {} GiB)", group.name, group.id, quota_gib);
        for volume in volumes.iter().filter(|v| v.is_in_volume_group(group.id)) {
            println!(
                "      - {} ({} GiB)",
                volume.name,
                volume.size / (1024 * 1024)
            );
        }
    }

    let host_groups = client.host_groups().await?;
    println!("\nHosts:");
    for host in client.hosts().await? {
        let group = host
            .host_group_id()
            .and_then(|id| host_groups.iter().find(|g| g.id == id))
            .map(|g| g.name.as_str())
            .unwrap_or("-");
        println!("  • {} [{}] group: {}", host.name, host.host_type, group);
    }

    println!("\nCapacity policies:");
    for policy in client.capacity_policies().await? {
        println!(
            "  • {} (warn {}%, full {}%)",
            policy.name, policy.warning_threshold, policy.full_threshold
        );
    }

    println!("\nRetention policies:");
    for policy in client.retention_policies().await? {
        println!(
            "  • {} (keeps {} snapshots)",
            policy.name,
            policy.num_snapshots.unwrap_or_default()
        );
    }

    Ok(())
}
