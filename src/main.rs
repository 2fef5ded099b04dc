use std::process::ExitCode;

use clap::Parser;

use apiprobe::config::{self, HarnessConfig};
use apiprobe::http::ApiClient;
use apiprobe::runner::{OutputFormat, RunReport};
use apiprobe::suite;

#[derive(Debug, Parser)]
#[command(name = "apiprobe", about = "Run API conformance scenarios against a resource service")]
struct Args {
    /// Base URL of the service under test; defaults to the reference
    /// service, overridable via APIPROBE_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Scenario group to run (repeatable); defaults to every group.
    #[arg(long = "group")]
    groups: Vec<String>,

    /// Report format.
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// `key=value` variable interpolated into `{{key}}` placeholders in the
    /// base URL (repeatable).
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// List scenario groups and exit.
    #[arg(long)]
    list: bool,
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid variable `{raw}`, expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("variable key cannot be empty: `{raw}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.list {
        for group in suite::GROUPS {
            println!("{group}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = HarnessConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    config.resolve(&config::variable_map(&args.vars));

    let client = ApiClient::new(&config)?;
    tracing::info!(base_url = client.base_url(), "starting run");

    let mut report = RunReport::new();
    if args.groups.is_empty() {
        suite::run_all(&client, &mut report).await;
    } else {
        for group in &args.groups {
            suite::run_group(group, &client, &mut report).await?;
        }
    }

    print!("{}", report.render(args.format));

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
