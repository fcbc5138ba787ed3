mod client;
mod display;
mod journey;
mod monitor;
mod scheduler;
mod snapshot;
mod time;

use anyhow::Context;
use clap::{App, Arg};
use log::info;

use client::JourneyClient;
use monitor::Monitor;
use scheduler::WaitPolicy;

const HOST: &str = "https://v5.rejseplanen.transport.rest";
const ORIGIN: &str = "Islands Brygge 79, 2300 København";

const DESTINATIONS: &[(&str, &str)] = &[
    ("dtu", "Anker Engelunds Vej 101, 2800 Kgs. Lyngby"),
    ("ballerup", "Lautrupvang 15, 2750 Ballerup"),
];

fn get_args() -> (String, String) {
    let ids: Vec<&str> = DESTINATIONS.iter().map(|(id, _)| *id).collect();
    let matches = App::new("rejseplan")
        .version("0.1.0")
        .author("Mads Kirkegaard")
        .about("Watches upcoming journeys to a destination with a live countdown")
        .arg(
            Arg::with_name("destination")
                .required(true)
                .possible_values(&ids)
                .help("Destination to monitor"),
        )
        .get_matches();

    let id = matches.value_of("destination").unwrap();
    let address = DESTINATIONS
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, address)| *address)
        .unwrap();

    (String::from(id), String::from(address))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (destination_id, address) = get_args();

    let client = JourneyClient::new(HOST).context("building http client")?;
    let origin = client
        .resolve_location(ORIGIN)
        .with_context(|| format!("resolving origin \"{}\"", ORIGIN))?;
    let destination = client
        .resolve_location(&address)
        .with_context(|| format!("resolving destination \"{}\"", address))?;
    info!(
        "monitoring {} -> {} ({})",
        origin.name, destination.name, destination_id
    );

    Monitor::new(client, origin, destination, WaitPolicy::default()).run()
}
