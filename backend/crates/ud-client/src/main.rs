//! ud - User directory CLI
//!
//! # Examples
//!
//! ```bash
//! # Second page of users matching "lopez"
//! ud list --search lopez --page 2 --pretty
//!
//! # Create a user
//! ud create --given-names Ana --surnames Lopez --phone 3001234567 --email ana@x.com
//!
//! # Export everyone to a CSV file
//! ud export --output users.csv
//! ```

mod cli;
mod command_error;
mod commands;

use crate::{
    cli::Cli,
    command_error::CommandError,
    commands::{Commands, UserArgs},
};

use ud_client::UserService;
use ud_client::service::filter_users;
use ud_client::views::{Pagination, export_file_name, users_to_csv};
use ud_config::{ClientConfig, Config};
use ud_core::{UserCandidate, UserValidator};

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use serde_json::{Value, json};

enum Output {
    Json(Value),
    Text(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = client_config();
    if let Some(server) = cli.server {
        config.api_base_url = server;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let service = match UserService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &service, &config).await;

    match result {
        Ok(Output::Json(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Output::Text(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Client section of the config file, or defaults when it cannot be read
fn client_config() -> ClientConfig {
    match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config.client,
        Err(e) => {
            eprintln!("Warning: using default client settings ({e})");
            ClientConfig::default()
        }
    }
}

async fn run(
    command: Commands,
    service: &UserService,
    config: &ClientConfig,
) -> Result<Output, CommandError> {
    match command {
        Commands::List {
            search,
            page,
            page_size,
        } => {
            let users = service.refresh().await?;
            let filtered = filter_users(&users, search.as_deref().unwrap_or_default());

            let mut pagination = Pagination::new(page_size.unwrap_or(config.page_size));
            pagination.set_total_items(filtered.len());
            pagination.go_to(page);

            Ok(Output::Json(json!({
                "page": pagination.current_page(),
                "total_pages": pagination.total_pages(),
                "total_users": filtered.len(),
                "pages": pagination.page_numbers(),
                "users": &filtered[pagination.item_range()],
            })))
        }

        Commands::Get { id } => {
            let user = service.get(id).await?;
            Ok(Output::Json(serde_json::to_value(user)?))
        }

        Commands::Create { fields } => {
            let fields = UserValidator::validate_create(&candidate(&fields))?;
            let id = service.create(&fields).await?;
            Ok(Output::Json(json!({ "success": "User created", "id": id })))
        }

        Commands::Update { id, fields } => {
            let (id, fields) = UserValidator::validate_update(&candidate(&fields).with_id(id))?;
            let message = service.update(id, &fields).await?;
            Ok(Output::Json(json!({ "success": message })))
        }

        Commands::Delete { id } => {
            let message = service.delete(id).await?;
            Ok(Output::Json(json!({ "success": message })))
        }

        Commands::Export { search, output } => {
            let users = service.refresh().await?;
            let filtered = filter_users(&users, search.as_deref().unwrap_or_default());
            let csv = users_to_csv(&filtered);

            let Some(mut path) = output else {
                return Ok(Output::Text(csv));
            };
            if path.is_dir() {
                path = path.join(export_file_name(Utc::now()));
            }

            tokio::fs::write(&path, csv)
                .await
                .map_err(|e| CommandError::io(path.clone(), e))?;

            Ok(Output::Json(json!({
                "success": format!("Exported {} users", filtered.len()),
                "path": path.display().to_string(),
            })))
        }
    }
}

fn candidate(args: &UserArgs) -> UserCandidate {
    UserCandidate::new(&args.given_names, &args.surnames, &args.phone, &args.email)
}
