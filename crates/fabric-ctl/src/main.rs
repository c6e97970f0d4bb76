//! fabric-ctl — offline inspection of connection profiles and wallets.
//!
//! Works entirely from local files; never opens a gateway session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fabric_core::config::ClientConfig;
use fabric_core::{ConnectionProfile, FileSystemWallet, Wallet};

// ── Subcommand handlers ───────────────────────────────────────────────────────

fn cmd_profile(path: &Path, json: bool) -> Result<()> {
    let profile = ConnectionProfile::from_file(path)
        .with_context(|| format!("failed to load connection profile {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let name = if profile.name.is_empty() {
        path.display().to_string()
    } else {
        profile.name.clone()
    };

    println!("═══════════════════════════════════════");
    println!("  Connection Profile: {name}");
    println!("═══════════════════════════════════════");
    println!("  Orderers                : {}", profile.orderers.len());
    println!("  Peers                   : {}", profile.peers.len());
    println!("  Certificate authorities : {}", profile.certificate_authorities.len());
    println!("  Declared channels       : {}", profile.channels.len());
    println!(
        "  Local dev network       : {}",
        if profile.uses_localhost() { "yes (localhost URLs found)" } else { "no" }
    );

    let mut peer_names: Vec<&String> = profile.peers.keys().collect();
    peer_names.sort();
    if !peer_names.is_empty() {
        println!("\n  Peers:");
        for name in peer_names {
            println!("  ┌─ {name}");
            println!("  └─ url : {}", profile.peers[name].url);
        }
    }

    Ok(())
}

fn cmd_channels(path: &Path, json: bool) -> Result<()> {
    let profile = ConnectionProfile::from_file(path)
        .with_context(|| format!("failed to load connection profile {}", path.display()))?;

    let known = profile.known_channels();
    if json {
        println!("{}", serde_json::to_string_pretty(&known)?);
        return Ok(());
    }
    if known.is_empty() {
        println!("No channels declared in this profile.");
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  Declared Channels ({})", known.len());
    println!("═══════════════════════════════════════");

    let mut names: Vec<&String> = known.keys().collect();
    names.sort();
    for name in names {
        println!("  ┌─ {name}");
        let peers = &known[name];
        if peers.is_empty() {
            println!("  └─ no declared peers");
        } else {
            for (i, peer) in peers.iter().enumerate() {
                let branch = if i + 1 == peers.len() { "└─" } else { "│ " };
                println!("  {branch} {peer}");
            }
        }
    }

    Ok(())
}

fn cmd_wallet(path: &Path) -> Result<()> {
    let wallet = FileSystemWallet::new(path);
    let labels = wallet
        .labels()
        .with_context(|| format!("failed to read wallet {}", path.display()))?;

    if labels.is_empty() {
        println!("No identities in wallet {}.", path.display());
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  Wallet Identities ({})", labels.len());
    println!("═══════════════════════════════════════");

    for label in labels {
        match wallet.identity(&label) {
            Ok(Some(identity)) => {
                println!("  ┌─ {label}");
                println!("  │  msp         : {}", identity.msp_id);
                println!("  └─ fingerprint : {}", identity.fingerprint());
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(label = %label, error = %e, "skipping unreadable identity");
            }
        }
    }

    Ok(())
}

fn print_usage(config: &ClientConfig) {
    println!("Usage: fabric-ctl <command> [path]");
    println!();
    println!("Commands:");
    println!("  profile <file>    Summarize a connection profile");
    println!("  channels <file>   Show channel membership declared in a profile");
    println!("  wallet [dir]      List identities in a filesystem wallet");
    println!();
    println!("Options:");
    println!("  --json            Print JSON instead of a summary (profile, channels)");
    println!();
    println!("Defaults (from {}):", ClientConfig::file_path().display());
    println!("  wallet dir  : {}", config.wallet.path.display());
    if config.profile.path.as_os_str().is_empty() {
        println!("  profile     : (none configured)");
    } else {
        println!("  profile     : {}", config.profile.path.display());
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        ClientConfig::default()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();

    // Parse --json option
    let mut json = false;
    let mut remaining: Vec<&str> = Vec::new();
    for arg in &args {
        if arg == "--json" {
            json = true;
        } else {
            remaining.push(arg.as_str());
        }
    }
    let args = remaining;

    // Fall back to configured paths when the command omits one.
    let default_profile = || -> Result<PathBuf> {
        if config.profile.path.as_os_str().is_empty() {
            anyhow::bail!("no profile path given and none configured");
        }
        Ok(config.profile.path.clone())
    };

    match args.as_slice() {
        ["profile", path] => cmd_profile(Path::new(path), json),
        ["profile"] => cmd_profile(&default_profile()?, json),
        ["channels", path] => cmd_channels(Path::new(path), json),
        ["channels"] => cmd_channels(&default_profile()?, json),
        ["wallet", path] => cmd_wallet(Path::new(path)),
        ["wallet"] => cmd_wallet(&config.wallet.path),
        ["help"] | ["--help"] | ["-h"] | [] => {
            print_usage(&config);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!();
            print_usage(&config);
            std::process::exit(1);
        }
    }
}
