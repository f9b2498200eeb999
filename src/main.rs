use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use minilab::config::{LabConfig, DEFAULT_NETBOX_HOST, DEFAULT_PROJECT_NAME};
use minilab::config_loader::load_settings_or_default;
use minilab::inventory::NetboxClient;
use minilab::orchestrator::{generate_lab, write_lab};

/// Containerlab topology generator for NetBox-modelled networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// NetBox server IP/hostname
    #[arg(long, default_value = DEFAULT_NETBOX_HOST)]
    netbox: String,

    /// NetBox API token
    #[arg(short, long)]
    key: Option<String>,

    /// Lab name; output file names and node namespaces are based on it
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    name: String,

    /// License file for cRPD, if available
    #[arg(short, long)]
    license: Option<String>,

    /// Comma separated list of hosts to add to the topology
    #[arg(long, required = true, value_delimiter = ',')]
    hosts: Vec<String>,

    /// Output directory for the topology and startup script
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Emulator settings file (kind images, management bridge)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting Minilab topology generator");
    info!("Lab name: {}", args.name);
    info!("Hosts: {}", args.hosts.join(", "));

    let emulator = load_settings_or_default(args.config.as_deref())?;
    let config = LabConfig {
        name: args.name,
        devices: args.hosts,
        license: args.license,
        emulator,
    };

    let client = NetboxClient::new(&args.netbox, args.key)
        .wrap_err("Failed to create NetBox client")?;

    let output = generate_lab(&config, &client)?;
    let files = write_lab(&output, &args.output)?;

    info!("Deploy with: containerlab deploy -t {:?}", files.topology);
    info!("Then run: {:?}", files.start_script);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["minilab", "--hosts", "cr1-eqiad,cr2-eqiad"]);

        assert_eq!(args.hosts, vec!["cr1-eqiad".to_string(), "cr2-eqiad".to_string()]);
        assert_eq!(args.netbox, "netbox.wikimedia.org");
        assert_eq!(args.name, "wmf-minilab");
        assert_eq!(args.output, PathBuf::from("output"));
        assert!(args.key.is_none());
        assert!(args.license.is_none());
    }

    #[test]
    fn test_all_options() {
        let args = Args::parse_from([
            "minilab",
            "--netbox", "netbox.example.org",
            "-k", "secret",
            "--name", "lab1",
            "-l", "crpd.lic",
            "--hosts", "asw1",
            "-o", "out",
            "-c", "settings.yaml",
        ]);

        assert_eq!(args.netbox, "netbox.example.org");
        assert_eq!(args.key.as_deref(), Some("secret"));
        assert_eq!(args.name, "lab1");
        assert_eq!(args.license.as_deref(), Some("crpd.lic"));
        assert_eq!(args.hosts, vec!["asw1".to_string()]);
        assert_eq!(args.config, Some(PathBuf::from("settings.yaml")));
    }

    #[test]
    fn test_hosts_required() {
        assert!(Args::try_parse_from(["minilab"]).is_err());
    }
}
