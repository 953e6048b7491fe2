//! Taskgate CLI - Command-line interface for the task gateway

mod sink;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskgate_core::application::{
    Dispatcher, ErrorNormalizer, GatewayClient, SearchQuery, TaskSubmission, UiSession, PAGE_LIMIT,
};
use taskgate_core::domain::envelope::EnvelopeConvention;
use taskgate_core::domain::task::{Task, TaskBrief};
use taskgate_infra_http::ReqwestTransport;

use sink::TerminalSink;

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:7000";

#[derive(Parser)]
#[command(name = "taskgate")]
#[command(about = "Task gateway CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gateway base URL
    #[arg(long, env = "TASKGATE_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL)]
    gateway_url: String,

    /// Use the code/res envelope convention instead of result-keyed
    #[arg(long)]
    code_keyed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new task
    Submit {
        /// Submitting user id
        #[arg(short, long, default_value = "0")]
        user: i64,

        /// Compile command
        #[arg(long)]
        compile_command: Option<String>,

        /// Compile source file content
        #[arg(long)]
        compile_source: Option<String>,

        /// Compile timeout in seconds
        #[arg(long, default_value = "60")]
        compile_timeout: i64,

        /// Execute command
        #[arg(long)]
        execute_command: Option<String>,

        /// Execute timeout in seconds
        #[arg(long, default_value = "60")]
        execute_timeout: i64,

        /// Expected standard output
        #[arg(long)]
        execute_standard: Option<String>,

        /// Input piped to the executed program
        #[arg(long)]
        execute_input: Option<String>,
    },

    /// Get full detail for one task
    Get {
        /// Task id
        id: String,
    },

    /// Search tasks page by page
    Search {
        /// Filter by user id
        #[arg(short, long)]
        user: Option<i64>,

        /// Earliest report time (ISO 8601)
        #[arg(long)]
        start_time: Option<String>,

        /// Latest report time (ISO 8601)
        #[arg(long)]
        end_time: Option<String>,

        /// Oldest first instead of newest first
        #[arg(long)]
        old_to_new: bool,

        /// Page number, starting at 0
        #[arg(short, long, default_value = "0")]
        page: i64,

        /// Tasks per page
        #[arg(short, long, default_value_t = PAGE_LIMIT)]
        limit: i64,
    },

    /// Cancel a task
    Cancel {
        /// Task id
        id: String,
    },

    /// List registered executors
    Executors,

    /// List registered judicators
    Judicators,

    /// Show gateway reachability
    Status,
}

#[derive(Tabled)]
struct TaskRow {
    id: String,
    user: i64,
    status: String,
    done: bool,
    executor: String,
    report_time: String,
}

impl From<&TaskBrief> for TaskRow {
    fn from(brief: &TaskBrief) -> Self {
        Self {
            id: brief.id.clone(),
            user: brief.user,
            status: brief.status.label().to_string(),
            done: brief.done,
            executor: brief.executor.clone().unwrap_or_default(),
            report_time: brief.report_time.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ExecutorRow {
    id: String,
    hostname: String,
    report_time: String,
}

#[derive(Tabled)]
struct JudicatorRow {
    name: String,
    address: String,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("taskgate=warn"))
        .expect("Failed to create env filter");

    let log_format = std::env::var("TASKGATE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

fn print_task(task: &Task) {
    println!("{} {}", "Task".cyan().bold(), task.id);
    println!("  {} {}", "User:".bold(), task.user);
    println!("  {} {}", "Status:".bold(), task.status);
    println!("  {} {}", "Done:".bold(), task.done);
    println!(
        "  {} {}",
        "Executor:".bold(),
        task.executor.as_deref().unwrap_or("-")
    );
    println!(
        "  {} {}",
        "Reported:".bold(),
        task.report_time.as_deref().unwrap_or("-")
    );
    if let Some(result) = &task.result {
        if let Some(compile) = &result.compile {
            println!();
            println!("{}", "Compile output".cyan().bold());
            println!("{}", compile);
        }
        if let Some(execute) = &result.execute {
            println!();
            println!("{}", "Execute output".cyan().bold());
            println!("{}", execute);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let convention = if cli.code_keyed {
        EnvelopeConvention::CodeKeyed
    } else {
        EnvelopeConvention::ResultKeyed
    };

    let transport =
        Arc::new(ReqwestTransport::new(&cli.gateway_url).context("Invalid gateway URL")?);
    let client = GatewayClient::new(Dispatcher::new(transport, convention));
    let normalizer = ErrorNormalizer::with_default_table(Arc::new(TerminalSink));
    let session = UiSession::new(client, normalizer);

    let completed = match cli.command {
        Commands::Submit {
            user,
            compile_command,
            compile_source,
            compile_timeout,
            execute_command,
            execute_timeout,
            execute_standard,
            execute_input,
        } => {
            let submission = TaskSubmission {
                user,
                compile_source_str: compile_source,
                compile_source_name: Some("source".to_string()),
                compile_command,
                compile_timeout,
                execute_input,
                execute_data_str: None,
                execute_data_name: None,
                execute_command,
                execute_timeout,
                execute_standard,
            };

            match session.run(session.client().submit_task(&submission)).await {
                Some(outcome) => {
                    let id = outcome.id.unwrap_or_else(|| "<unknown>".to_string());
                    println!("{} {}", "✓ Task submitted:".green().bold(), id);
                    true
                }
                None => false,
            }
        }

        Commands::Get { id } => match session.run(session.client().get_task(&id)).await {
            Some(task) => {
                print_task(&task);
                true
            }
            None => false,
        },

        Commands::Search {
            user,
            start_time,
            end_time,
            old_to_new,
            page,
            limit,
        } => {
            let query = SearchQuery {
                id: None,
                user,
                start_time,
                end_time,
                old_to_new,
                limit,
                page,
            };

            match session.run(session.client().search_tasks(&query)).await {
                Some(outcome) => {
                    let rows: Vec<TaskRow> = outcome.tasks.iter().map(TaskRow::from).collect();
                    if rows.is_empty() {
                        println!("{}", "No tasks found".yellow());
                    } else {
                        println!("{}", Table::new(rows));
                    }
                    println!();
                    println!(
                        "  {} {} / {}",
                        "Page:".bold(),
                        page,
                        outcome.pages.max(1) - 1
                    );
                    true
                }
                None => false,
            }
        }

        Commands::Cancel { id } => {
            // Clears the message area first, like the web UI confirm flow
            match session.cancel_task(&id, true).await {
                Some(()) => {
                    println!("{}", format!("✓ Task {} cancelled", id).green().bold());
                    true
                }
                None => false,
            }
        }

        Commands::Executors => match session.run(session.client().list_executors()).await {
            Some(executors) => {
                if executors.is_empty() {
                    println!("{}", "No executors registered".yellow());
                } else {
                    let rows: Vec<ExecutorRow> = executors
                        .iter()
                        .map(|e| ExecutorRow {
                            id: e.id.clone(),
                            hostname: e.hostname.clone(),
                            report_time: e.report_time.clone(),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
                true
            }
            None => false,
        },

        Commands::Judicators => match session.run(session.client().list_judicators()).await {
            Some(judicators) => {
                if judicators.is_empty() {
                    println!("{}", "No judicators registered".yellow());
                } else {
                    let rows: Vec<JudicatorRow> = judicators
                        .iter()
                        .map(|j| JudicatorRow {
                            name: j.name.clone(),
                            address: j.address.clone(),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
                true
            }
            None => false,
        },

        Commands::Status => {
            println!("{}", "Gateway Status".cyan().bold());
            println!();
            println!("  {} {}", "URL:".bold(), cli.gateway_url);

            match session.run(session.client().list_judicators()).await {
                Some(judicators) => {
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Judicators:".bold(), judicators.len());
                    if let Some(executors) =
                        session.run(session.client().list_executors()).await
                    {
                        println!("  {} {}", "Executors:".bold(), executors.len());
                    }
                    true
                }
                None => {
                    println!("  {} {}", "Status:".bold(), "UNREACHABLE".red());
                    false
                }
            }
        }
    };

    if !completed {
        std::process::exit(1);
    }
    Ok(())
}
