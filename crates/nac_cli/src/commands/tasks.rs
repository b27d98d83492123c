use anyhow::{Context, Result};
use console::style;
use nac_api::client::NacClient;
use nac_domain::{AssignmentId, InstanceId, TaskId, TaskQuery};

use crate::TaskCommands;

pub async fn run(client: &NacClient, command: TaskCommands, json: bool) -> Result<()> {
    match command {
        TaskCommands::Search { workflow, instance, status, assignee, from, to } => {
            let query = TaskQuery {
                workflow_name: workflow,
                instance_id: instance.map(InstanceId),
                status,
                assignee,
                from,
                to,
            };

            if json {
                let tasks = client.tasks_raw(&query).await.context("Failed to search tasks")?;
                println!("{}", serde_json::to_string_pretty(&tasks)?);
                return Ok(());
            }

            let tasks = client.tasks(&query).await.context("Failed to search tasks")?;
            println!(
                "{} Found {} tasks",
                style("✓").green().bold(),
                style(tasks.len()).yellow().bold()
            );
            for task in &tasks {
                println!("  {}  {:16}  {}", style(&task.id.0).dim(), task.status, task.name);
                for assignment in &task.task_assignments {
                    println!(
                        "      {}  {}  {}",
                        style(&assignment.id.0).dim(),
                        assignment.assignee,
                        assignment.status,
                    );
                }
            }
            Ok(())
        }

        TaskCommands::Get { id } => {
            let task = client.task(&TaskId(id)).await.context("Failed to fetch task")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&task)?);
                return Ok(());
            }

            println!("{} {}", style("Task").bold().cyan(), task.id);
            println!("Workflow: {}", task.workflow_name);
            println!("Status: {}", task.status);
            println!("Created: {}", task.created_date.format("%Y-%m-%d %H:%M:%S"));
            if let Some(outcomes) = &task.outcomes {
                println!("Outcomes: {}", outcomes.join(", "));
            }
            println!();
            for assignment in &task.task_assignments {
                println!(
                    "  {} {} ({})",
                    style(&assignment.id.0).dim(),
                    assignment.assignee,
                    assignment.status
                );
            }
            Ok(())
        }

        TaskCommands::Complete { task_id, assignment_id, outcome } => {
            let response = client
                .complete_task(&TaskId(task_id), &AssignmentId(assignment_id), &outcome)
                .await
                .context("Failed to complete task")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{} Task completed: {}", style("✓").green().bold(), outcome);
            }
            Ok(())
        }

        TaskCommands::Delegate { task_id, assignment_id, assignees, message } => {
            client
                .delegate_task(&TaskId(task_id), &AssignmentId(assignment_id), &assignees, &message)
                .await
                .context("Failed to delegate task")?;
            println!(
                "{} Task delegated to {}",
                style("✓").green().bold(),
                assignees.join(", ")
            );
            Ok(())
        }
    }
}
