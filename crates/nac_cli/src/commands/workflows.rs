use anyhow::{Context, Result};
use console::style;
use nac_api::client::NacClient;

use crate::WorkflowCommands;

pub async fn run(client: &NacClient, command: WorkflowCommands, json: bool) -> Result<()> {
    match command {
        WorkflowCommands::List { limit } => {
            if json {
                let workflows =
                    client.workflows_raw(limit).await.context("Failed to list workflows")?;
                println!("{}", serde_json::to_string_pretty(&workflows)?);
                return Ok(());
            }

            let workflows = client.workflows(limit).await.context("Failed to list workflows")?;
            println!(
                "{} Found {} published workflows",
                style("✓").green().bold(),
                style(workflows.len()).yellow().bold()
            );
            for workflow in &workflows {
                println!(
                    "  {}  {}  (modified {})",
                    style(&workflow.id.0).dim(),
                    workflow.name,
                    workflow.last_modified.format("%Y-%m-%d")
                );
            }
            Ok(())
        }
    }
}
