use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use nac_api::client::NacClient;
use nac_domain::{ResolveType, TaskStatus, WorkflowStatus};

mod commands;

#[derive(Parser)]
#[command(name = "nac")]
#[command(version, about = "Nintex Automation Cloud from the command line", long_about = None)]
struct Cli {
    /// Emit raw JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (RUST_LOG still wins)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Workflow instances
    #[command(subcommand)]
    Instances(InstanceCommands),

    /// Workflow tasks
    #[command(subcommand)]
    Tasks(TaskCommands),

    /// Published workflow designs
    #[command(subcommand)]
    Workflows(WorkflowCommands),

    /// Tenant users
    #[command(subcommand)]
    Users(UserCommands),
}

#[derive(Subcommand)]
enum InstanceCommands {
    /// List instances (last 30 days unless a range is given)
    List {
        /// Filter by workflow name
        #[arg(long)]
        workflow: Option<String>,

        /// Filter by instance status
        #[arg(long)]
        status: Option<WorkflowStatus>,

        /// Sort order for results
        #[arg(long)]
        order: Option<OrderArg>,

        /// Start of the date range (RFC 3339)
        #[arg(long)]
        from: Option<DateTime<Utc>>,

        /// End of the date range (RFC 3339)
        #[arg(long)]
        to: Option<DateTime<Utc>>,

        /// Results per page
        #[arg(long, default_value = "100")]
        page_size: u32,
    },

    /// Show one instance with its action history
    Get {
        /// Instance id
        id: String,
    },

    /// Launch an instance of a published workflow
    Create {
        /// Workflow design id
        workflow_id: String,

        /// Start data as a JSON object
        #[arg(long)]
        start_data: Option<String>,
    },

    /// Resolve a paused instance
    Resolve {
        /// Instance id
        id: String,

        /// Retry the failed action, or fail the instance
        #[arg(long)]
        action: ResolveAction,

        /// Message shown on the instance page
        #[arg(long)]
        message: String,
    },

    /// Show the start data an instance was launched with
    StartData {
        /// Instance id
        id: String,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Search tasks (last 30 days unless a range is given)
    Search {
        /// Filter by workflow name
        #[arg(long)]
        workflow: Option<String>,

        /// Filter by workflow instance id
        #[arg(long)]
        instance: Option<String>,

        /// Filter by task status
        #[arg(long)]
        status: Option<TaskStatus>,

        /// Filter by assignee email
        #[arg(long)]
        assignee: Option<String>,

        /// Start of the date range (RFC 3339)
        #[arg(long)]
        from: Option<DateTime<Utc>>,

        /// End of the date range (RFC 3339)
        #[arg(long)]
        to: Option<DateTime<Utc>>,
    },

    /// Show one task with its assignments
    Get {
        /// Task id
        id: String,
    },

    /// Complete a task assignment with an outcome
    Complete {
        /// Task id
        task_id: String,

        /// Assignment id
        assignment_id: String,

        /// Outcome; must match one the task defines
        #[arg(long)]
        outcome: String,
    },

    /// Delegate a task assignment to other users
    Delegate {
        /// Task id
        task_id: String,

        /// Assignment id
        assignment_id: String,

        /// Delegate to this email (repeatable)
        #[arg(long = "assignee", required = true)]
        assignees: Vec<String>,

        /// Message to include with the delegation
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum WorkflowCommands {
    /// List published workflow designs
    List {
        /// Maximum number of designs to return
        #[arg(long, default_value = "1000")]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List tenant users
    List,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for nac_domain::SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ResolveAction {
    Retry,
    Fail,
}

impl From<ResolveAction> for ResolveType {
    fn from(action: ResolveAction) -> Self {
        match action {
            ResolveAction::Retry => Self::Retry,
            ResolveAction::Fail => Self::Fail,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    nac_telemetry::init_telemetry(&nac_telemetry::TelemetryConfig { level, json_output: false })?;

    let client = NacClient::from_env()
        .context("NINTEX_BASE_URL, NINTEX_CLIENT_ID, NINTEX_CLIENT_SECRET and NINTEX_GRANT_TYPE must be set")?;

    match cli.command {
        Commands::Instances(command) => commands::instances::run(&client, command, cli.json).await,
        Commands::Tasks(command) => commands::tasks::run(&client, command, cli.json).await,
        Commands::Workflows(command) => commands::workflows::run(&client, command, cli.json).await,
        Commands::Users(command) => commands::users::run(&client, command, cli.json).await,
    }
}
