use anyhow::{Context, Result};
use console::style;
use nac_api::client::NacClient;
use nac_domain::{InstanceId, InstanceQuery, WorkflowId};

use crate::InstanceCommands;

pub async fn run(client: &NacClient, command: InstanceCommands, json: bool) -> Result<()> {
    match command {
        InstanceCommands::List { workflow, status, order, from, to, page_size } => {
            let query = InstanceQuery {
                workflow_name: workflow,
                status,
                order: order.map(Into::into),
                from,
                to,
                page_size: Some(page_size),
            };

            if json {
                let instances =
                    client.instances_raw(&query).await.context("Failed to list instances")?;
                println!("{}", serde_json::to_string_pretty(&instances)?);
                return Ok(());
            }

            let instances = client.instances(&query).await.context("Failed to list instances")?;
            println!(
                "{} Found {} instances",
                style("✓").green().bold(),
                style(instances.len()).yellow().bold()
            );
            for instance in &instances {
                println!(
                    "  {}  {:10}  {}  {}",
                    style(&instance.instance_id.0).dim(),
                    instance.status,
                    instance.start_date_time.format("%Y-%m-%d %H:%M"),
                    instance.instance_name.as_deref().unwrap_or("-"),
                );
            }
            Ok(())
        }

        InstanceCommands::Get { id } => {
            let id = InstanceId(id);

            if json {
                let detail = client.instance_raw(&id).await.context("Failed to fetch instance")?;
                println!("{}", serde_json::to_string_pretty(&detail)?);
                return Ok(());
            }

            let detail = client.instance(&id).await.context("Failed to fetch instance")?;
            println!("{} {}", style("Instance").bold().cyan(), detail.instance_id);
            println!("Workflow: {} (v{})", detail.workflow.name, detail.workflow.version);
            println!("Started: {}", detail.start_date_time.format("%Y-%m-%d %H:%M:%S"));
            println!("Status: {}", detail.status);
            if let Some(error) = &detail.error_message {
                println!("Error: {}", style(error).red());
            }
            println!();
            for action in &detail.actions {
                let marker = if action.error_message.is_some() {
                    style("✗").red().bold()
                } else {
                    style("•").dim()
                };
                println!("  {} {} ({})", marker, action.label, action.action_type);
            }
            Ok(())
        }

        InstanceCommands::Create { workflow_id, start_data } => {
            let start_data = start_data
                .map(|raw| serde_json::from_str::<serde_json::Value>(&raw))
                .transpose()
                .context("--start-data must be a valid JSON object")?;

            let created = client
                .create_instance(&WorkflowId(workflow_id), start_data)
                .await
                .context("Failed to create instance")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!(
                    "{} Instance created: {}",
                    style("✓").green().bold(),
                    created["id"].as_str().unwrap_or("?")
                );
            }
            Ok(())
        }

        InstanceCommands::Resolve { id, action, message } => {
            client
                .resolve_instance(&InstanceId(id), action.into(), &message)
                .await
                .context("Failed to resolve instance")?;
            println!("{} Instance resolved", style("✓").green().bold());
            Ok(())
        }

        InstanceCommands::StartData { id } => {
            let data = client
                .instance_start_data(&InstanceId(id))
                .await
                .context("Failed to fetch start data")?;
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
    }
}
