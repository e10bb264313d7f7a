use std::process::exit;
use clap::Parser;
use log::{error, info};
use mogilefs_client::client::structs::mogile_client::MogileClient;
use mogilefs_client::common::common::{parse_key_value_args, setup_logging};
use mogilefs_client::config::structs::configuration::Configuration;
use mogilefs_client::health::health::configure_shared_health;
use mogilefs_client::protocol::structs::query_values::QueryValues;
use mogilefs_client::structs::{Cli, CliCommand};

fn main()
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let Some(command) = args.command else {
        info!("No command given, nothing to do.");
        return;
    };

    configure_shared_health(config.tracker_config.dead_timeout_duration());
    let mut client = MogileClient::from_config(&config.tracker_config);

    let result = run(&mut client, command);
    client.teardown();

    if let Err(error) = result {
        error!("{}", error);
        exit(1);
    }
}

fn run(client: &mut MogileClient, command: CliCommand) -> Result<(), Box<dyn std::error::Error>>
{
    match command {
        CliCommand::GetPaths { key, noverify } => {
            for path in client.get_paths(&key, noverify)? {
                println!("{}", path);
            }
        }
        CliCommand::Rename { from, to } => {
            client.rename(&from, &to)?;
            info!("Renamed {} to {}", from, to);
        }
        CliCommand::Delete { key } => {
            client.delete(&key)?;
            info!("Deleted {}", key);
        }
        CliCommand::Debug { key } => {
            print_values(&client.file_debug(&key)?);
        }
        CliCommand::Raw { command, args } => {
            let values = parse_key_value_args(&args)?;
            print_values(&client.execute(&command, &values)?);
        }
    }
    Ok(())
}

fn print_values(values: &QueryValues)
{
    for (key, key_values) in values {
        for value in key_values {
            println!("{}={}", key, value);
        }
    }
}
