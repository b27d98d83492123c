use anyhow::{Context, Result};
use console::style;
use nac_api::client::NacClient;

use crate::UserCommands;

pub async fn run(client: &NacClient, command: UserCommands, json: bool) -> Result<()> {
    match command {
        UserCommands::List => {
            if json {
                let users = client.users_raw().await.context("Failed to list users")?;
                println!("{}", serde_json::to_string_pretty(&users)?);
                return Ok(());
            }

            let users = client.users().await.context("Failed to list users")?;
            println!(
                "{} Found {} users",
                style("✓").green().bold(),
                style(users.len()).yellow().bold()
            );
            for user in &users {
                let guest = if user.is_guest { " (guest)" } else { "" };
                println!(
                    "  {}  {}  {}{}",
                    style(&user.id).dim(),
                    user.full_name(),
                    user.email,
                    guest
                );
            }
            Ok(())
        }
    }
}
