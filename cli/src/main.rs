use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use meetings::{MeetingInsert, MeetingPatch, MeetingStatus, Participant};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("nothing to update; pass at least one of --title, --at, --status")]
    EmptyUpdate,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "meetflow-cli", about = "MeetFlow meetings API CLI")]
struct Cli {
    #[arg(long, env = "MEETFLOW_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check server liveness.
    Ping,
    /// List meetings, newest first.
    List {
        #[arg(long)]
        status: Option<MeetingStatus>,
    },
    /// Show one meeting.
    Show { id: String },
    /// Create a meeting.
    Create(CreateArgs),
    /// Update selected fields of a meeting.
    Update(UpdateArgs),
    /// Delete a meeting.
    Delete { id: String },
    /// Add or remove participants on an existing meeting.
    Participant(ParticipantCommand),
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    title: String,

    #[arg(long, value_parser = parse_time, help = "RFC 3339 instant, e.g. 2025-03-01T10:00:00Z")]
    at: OffsetDateTime,

    #[arg(long, default_value = "scheduled")]
    status: MeetingStatus,

    #[arg(long = "participant", value_parser = parse_participant, help = "NAME:POSITION, repeatable")]
    participants: Vec<Participant>,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long, value_parser = parse_time)]
    at: Option<OffsetDateTime>,

    #[arg(long)]
    status: Option<MeetingStatus>,
}

#[derive(Args, Debug)]
struct ParticipantCommand {
    #[command(subcommand)]
    command: ParticipantSubcommand,
}

#[derive(Subcommand, Debug)]
enum ParticipantSubcommand {
    Add {
        meeting_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: String,
    },
    Remove {
        meeting_id: String,
        index: usize,
    },
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    http: reqwest::Client,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        http: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?,
    };

    let json = run(&ctx, cli.command).await?;
    print_json(&json)
}

async fn run(ctx: &CliContext, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Ping => {
            api_request(ctx, reqwest::Method::GET, "/healthz", None).await?;
            Ok(Value::String("ok".to_owned()))
        }
        Command::List { status } => {
            let path = list_path(status);
            api_request(ctx, reqwest::Method::GET, &path, None).await
        }
        Command::Show { id } => api_request(ctx, reqwest::Method::GET, &meeting_path(&id), None).await,
        Command::Create(args) => {
            let body = serde_json::to_value(create_payload(args))?;
            api_request(ctx, reqwest::Method::POST, "/api/meetings", Some(body)).await
        }
        Command::Update(args) => {
            let path = meeting_path(&args.id);
            let patch = update_payload(args)?;
            let body = serde_json::to_value(patch)?;
            api_request(ctx, reqwest::Method::PATCH, &path, Some(body)).await
        }
        Command::Delete { id } => api_request(ctx, reqwest::Method::DELETE, &meeting_path(&id), None).await,
        Command::Participant(participant) => match participant.command {
            ParticipantSubcommand::Add { meeting_id, name, position } => {
                let path = format!("{}/participants", meeting_path(&meeting_id));
                let body = serde_json::json!({ "name": name, "position": position });
                api_request(ctx, reqwest::Method::POST, &path, Some(body)).await
            }
            ParticipantSubcommand::Remove { meeting_id, index } => {
                let path = format!("{}/participants/{index}", meeting_path(&meeting_id));
                api_request(ctx, reqwest::Method::DELETE, &path, None).await
            }
        },
    }
}

async fn api_request(
    ctx: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let url = format!("{}{}", ctx.base_url.trim_end_matches('/'), path);

    let request = ctx.http.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_message(&value) });
    }

    Ok(value)
}

fn list_path(status: Option<MeetingStatus>) -> String {
    match status {
        Some(status) => format!("/api/meetings?status={}", status.as_str()),
        None => "/api/meetings".to_owned(),
    }
}

fn meeting_path(id: &str) -> String {
    format!("/api/meetings/{id}")
}

fn create_payload(args: CreateArgs) -> MeetingInsert {
    MeetingInsert { title: args.title, arranged_time: args.at, status: args.status, participants: args.participants }
}

fn update_payload(args: UpdateArgs) -> Result<MeetingPatch, CliError> {
    let patch = MeetingPatch { title: args.title, arranged_time: args.at, status: args.status, participants: None };
    if patch.is_empty() {
        return Err(CliError::EmptyUpdate);
    }
    Ok(patch)
}

/// Pull `error` out of a `{"error": ...}` body, falling back to the raw JSON.
fn error_message(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map_or_else(|| body.to_string(), str::to_owned)
}

fn parse_time(raw: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|e| format!("expected RFC 3339 instant: {e}"))
}

fn parse_participant(raw: &str) -> Result<Participant, String> {
    let (name, position) = raw
        .split_once(':')
        .ok_or_else(|| "expected NAME:POSITION".to_owned())?;
    Participant::new(name, position).ok_or_else(|| "name and position must both be non-empty".to_owned())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
