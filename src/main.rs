use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use forgedfate_export::ExportMethod;
use forgedfate_export::export::tools::{interpreter_path, script_path, tools_available};
use forgedfate_export::models::{FieldDefault, FieldKind, QUICK_START_GUIDE, field::field};
use forgedfate_export::state::{ConfigManager, ExportSettings, ExportWorkflow, FormValues};

const LONG_VERSION: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("FORGEDFATE_GIT_SHA"), ")");

#[derive(Parser)]
#[command(
    name = "forgedfate-export",
    version,
    long_version = LONG_VERSION,
    about = "Configure Kismet → Elasticsearch exports and generate the commands to run them"
)]
struct Cli {
    /// Directory holding settings.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "FORGEDFATE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Don't prefill fields from ES_* / KISMET_* environment variables
    #[arg(long, global = true)]
    no_env: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List export methods and their fields
    Methods {
        /// Print the field catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the quick start guide
    Guide,
    /// Generate the command for an export method
    Generate {
        /// realtime, filebeat or bulk
        method: ExportMethod,
        #[command(flatten)]
        fields: FieldArgs,
        /// Also print the clipboard payload
        #[arg(long)]
        payload: bool,
        /// Print the result as JSON instead of the rendered panel
        #[arg(long)]
        json: bool,
    },
    /// Test the Elasticsearch endpoint of an export method
    Test {
        /// realtime, filebeat or bulk
        method: ExportMethod,
        #[command(flatten)]
        fields: FieldArgs,
        /// Print the result as JSON instead of the rendered panel
        #[arg(long)]
        json: bool,
    },
    /// Show the effective settings
    Settings {
        /// Write them to settings.json
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// Field value, e.g. --set es-url=https://es.local:9200
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Check a boolean field, e.g. --check offline
    #[arg(long = "check", value_name = "KEY")]
    check: Vec<String>,
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) =
        raw.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn build_form(method: ExportMethod, args: &FieldArgs, use_env: bool) -> Result<FormValues> {
    let mut form = if use_env { FormValues::from_env() } else { FormValues::new() };

    for (key, value) in &args.set {
        match field(method, key) {
            Some(spec) if spec.kind != FieldKind::Boolean => form.set_text(method, key, value),
            Some(_) => bail!("`{key}` is a checkbox for {method}; use --check {key}"),
            None => bail!("unknown field `{key}` for {method}; see `forgedfate-export methods`"),
        }
    }
    for key in &args.check {
        match field(method, key) {
            Some(spec) if spec.kind == FieldKind::Boolean => form.set_checked(method, key, true),
            Some(_) => bail!("`{key}` is not a checkbox for {method}; use --set {key}=VALUE"),
            None => bail!("unknown field `{key}` for {method}; see `forgedfate-export methods`"),
        }
    }

    Ok(form)
}

fn print_methods() {
    for method in ExportMethod::all() {
        let descriptor = method.descriptor();
        println!("{method}: {}", descriptor.heading);
        println!("  Best for: {}", descriptor.best_for);
        for spec in method.fields() {
            let default = match spec.default {
                FieldDefault::Text("") => "(blank)".to_string(),
                FieldDefault::Text(text) => text.to_string(),
                FieldDefault::Flag(flag) => flag.to_string(),
            };
            println!(
                "  {:<10} {:<28} {:<9} default: {default}",
                spec.key,
                spec.label,
                spec.kind.label()
            );
            if let Some(help) = spec.help {
                println!("  {:<10} {help}", "");
            }
        }
        println!();
    }
}

fn warn_missing_tools(settings: &ExportSettings, method: ExportMethod) {
    if tools_available(&settings.tools, method) {
        return;
    }
    if let Err(err) = interpreter_path(&settings.tools) {
        log::warn!("{err}; the command will still reference it");
    }
    if let Err(err) = script_path(&settings.tools, method) {
        log::warn!("{err}; set tools.{method}_script in settings.json if it lives elsewhere");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config_dir {
        Some(dir) => ConfigManager::with_config_dir(dir)?,
        None => ConfigManager::new()?,
    };
    let settings = config.load_settings()?;
    let use_env = !cli.no_env;

    match cli.command {
        Command::Methods { json: false } => print_methods(),
        Command::Methods { json: true } => {
            let catalog: BTreeMap<_, _> =
                ExportMethod::all().into_iter().map(|m| (m.slug(), m.fields())).collect();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::Guide => {
            println!("Quick Start Guide");
            for (step, text) in QUICK_START_GUIDE.iter().enumerate() {
                println!("{}. {text}", step + 1);
            }
        }
        Command::Generate { method, fields, payload, json } => {
            let form = build_form(method, &fields, use_env)?;
            warn_missing_tools(&settings, method);

            let workflow = ExportWorkflow::open(settings);
            let result = workflow.generate(method, &form);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", workflow.render_panel(method));
            }
            if payload {
                println!("\nClipboard payload:\n{}", result.clipboard_payload());
            }
        }
        Command::Test { method, fields, json } => {
            let form = build_form(method, &fields, use_env)?;
            let workflow = ExportWorkflow::open(settings);
            let result = workflow.probe(method, &form).await.context("probe did not complete")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", workflow.render_panel(method));
            }
            if result.is_error() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Settings { save } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if save {
                config.save_settings(&settings)?;
                eprintln!("Saved to {}", config.config_dir().join("settings.json").display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
