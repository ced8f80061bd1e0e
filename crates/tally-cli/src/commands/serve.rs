//! Server command implementation

use std::path::PathBuf;

use anyhow::Result;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    sample_data: PathBuf,
    allowed_origins: &str,
) -> Result<()> {
    let allowed_origins = tally_server::parse_origins(allowed_origins);

    println!("🚀 Starting Tally web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Sample data: {}", sample_data.display());
    if allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin (set TALLY_ALLOWED_ORIGINS to restrict)");
    } else {
        println!("   🌐 CORS: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = tally_server::ServerConfig {
        allowed_origins,
        sample_data_path: sample_data,
    };

    tally_server::serve(host, port, config).await?;

    Ok(())
}
