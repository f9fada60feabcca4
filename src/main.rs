//! WiFi Provisioner - Main Entry Point

use std::{io, process::ExitCode, sync::Arc};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wifi_provisioner::{
    Provisioner,
    backend::ProcessRunner,
    config::{CliArgs, Settings},
    core::error::ProvisionResult,
    ui::{finish_step, prompt_password, prompt_selection, render_network_table, start_step},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let settings = Arc::new(Settings::from(CliArgs::parse()));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(?settings, "Starting WiFi provisioner");

    let provisioner = Provisioner::new(Arc::new(ProcessRunner::new()), settings);

    match run(&provisioner).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "provisioning failed");
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(provisioner: &Provisioner<ProcessRunner>) -> ProvisionResult<()> {
    provisioner.check_identity()?;

    start_step(&mut io::stdout(), "Scanning for the device... ");
    let address = finish_step(&mut io::stdout(), provisioner.discover().await)?;
    info!(%address, "Device found");

    start_step(&mut io::stdout(), "Scanning for WiFi networks... ");
    let networks = finish_step(&mut io::stdout(), provisioner.scan().await)?;
    println!("Found {} WiFi networks", networks.len());
    print!("{}", render_network_table(&networks));

    let index = prompt_selection(&mut io::stdin().lock(), &mut io::stdout(), networks.len())?;
    let network = &networks[index];
    let psk = prompt_password(network)?;

    start_step(
        &mut io::stdout(),
        &format!("Connecting the device to {}... ", network.name),
    );
    finish_step(&mut io::stdout(), provisioner.connect(network, psk).await)
}
