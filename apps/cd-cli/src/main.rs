use clap::{Parser, Subcommand, ValueEnum};
use cd_app::{
    compile_request, run_solve, AppError, AppResult, SolveClient, SolveOutcome, SolveRequest,
    TROUBLESHOOTING_TIPS,
};
use cd_params::{
    load_yaml, save_yaml, FieldKind, ParameterStore, ParamsError, ProblemDefinition,
    ProblemSelection,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cd-cli")]
#[command(about = "CalcDynamics CLI - remote PDE solve requests", long_about = None)]
struct Cli {
    /// Solver service base URL (default: CALCDYN_API_URL, then the hosted service)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the solver service health endpoint
    Health,
    /// Print the default parameters of a problem family
    Defaults {
        /// Problem family
        family: Family,
    },
    /// Write a family's defaults as a problem definition file
    Init {
        /// Problem family
        family: Family,
        /// Output YAML path
        path: PathBuf,
    },
    /// Compile a request and print it without sending
    Compile {
        /// Problem family (optional when --params is given)
        family: Option<Family>,
        /// Load a saved problem definition first
        #[arg(long)]
        params: Option<PathBuf>,
        /// Parameter edits, e.g. --set num_x=80
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// Submit a solve and summarize the result
    Solve {
        /// Problem family (optional when --params is given)
        family: Option<Family>,
        /// Load a saved problem definition first
        #[arg(long)]
        params: Option<PathBuf>,
        /// Parameter edits, e.g. --set num_x=80
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
        /// Directory for returned plot images (base64 PNG, written verbatim)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Solve bound in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Family {
    /// 1D heat equation
    Heat,
    /// 1D wave equation
    Wave,
    /// 1D Burgers equation
    Burgers,
    /// 2D heat equation on a meshed domain
    Heat2d,
}

impl Family {
    fn selection(self) -> ProblemSelection {
        match self {
            Family::Heat => ProblemSelection::heat_1d(),
            Family::Wave => ProblemSelection::wave_1d(),
            Family::Burgers => ProblemSelection::burgers_1d(),
            Family::Heat2d => ProblemSelection::heat_2d(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            if err.is_expected() {
                eprintln!("Troubleshooting tips:");
                for tip in TROUBLESHOOTING_TIPS {
                    eprintln!("  - {tip}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn run(cli: Cli) -> AppResult<()> {
    let client = match &cli.base_url {
        Some(url) => SolveClient::new(url.clone()),
        None => SolveClient::from_env(),
    };

    match cli.command {
        Commands::Health => cmd_health(&client).await,
        Commands::Defaults { family } => cmd_defaults(family),
        Commands::Init { family, path } => cmd_init(family, &path),
        Commands::Compile {
            family,
            params,
            set,
        } => cmd_compile(family, params.as_deref(), &set),
        Commands::Solve {
            family,
            params,
            set,
            out,
            timeout,
        } => {
            let client = client.with_timeout(Duration::from_secs(timeout));
            cmd_solve(&client, family, params.as_deref(), &set, out.as_deref()).await
        }
    }
}

fn definition_for(family: Family) -> ProblemDefinition {
    let store = ParameterStore::new().with_selection(family.selection());
    ProblemDefinition {
        selection: store.selection(),
        parameters: store.params().clone(),
    }
}

/// Store from an optional saved definition plus an optional family override.
fn build_store(family: Option<Family>, params_path: Option<&Path>) -> AppResult<ParameterStore> {
    let mut store = match params_path {
        Some(path) => {
            let def = load_yaml(path)?;
            ParameterStore::from_parts(def.selection, def.parameters)
        }
        None => ParameterStore::new(),
    };
    match family {
        // switching families applies that family's defaults; re-selecting the
        // current one would clobber saved edits, so skip the no-op
        Some(family) if store.selection() != family.selection() => {
            store = store.with_selection(family.selection());
        }
        Some(_) => {}
        None => {
            if params_path.is_none() {
                return Err(AppError::InvalidInput(
                    "specify a problem family or --params <file>".to_string(),
                ));
            }
        }
    }
    Ok(store)
}

fn apply_edits(mut store: ParameterStore, edits: &[String]) -> AppResult<ParameterStore> {
    for edit in edits {
        let (name, raw) = edit.split_once('=').ok_or_else(|| {
            AppError::InvalidInput(format!("expected NAME=VALUE, got {edit:?}"))
        })?;
        let kind = ParameterStore::field_kind(name).unwrap_or(FieldKind::Text);
        store = store.with_field(name, raw, kind)?;
    }
    Ok(store)
}

fn request_from(store: &ParameterStore) -> SolveRequest {
    SolveRequest {
        selection: store.selection(),
        params: store.params().clone(),
    }
}

async fn cmd_health(client: &SolveClient) -> AppResult<()> {
    println!("Probing {}", client.base_url());
    let health = client.health().await?;
    if health.is_healthy() {
        println!("✓ {}", health.message);
    } else {
        println!("✗ {} (status: {})", health.message, health.status);
    }
    if let Some(modules) = &health.modules {
        for (name, version) in modules {
            println!("  {name} {version}");
        }
    }
    Ok(())
}

fn cmd_defaults(family: Family) -> AppResult<()> {
    let def = definition_for(family);
    let text = serde_yaml::to_string(&def).map_err(ParamsError::from)?;
    print!("{text}");
    Ok(())
}

fn cmd_init(family: Family, path: &Path) -> AppResult<()> {
    let def = definition_for(family);
    save_yaml(path, &def)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}

fn cmd_compile(
    family: Option<Family>,
    params_path: Option<&Path>,
    edits: &[String],
) -> AppResult<()> {
    let store = apply_edits(build_store(family, params_path)?, edits)?;
    let payload = compile_request(&request_from(&store))?;
    println!("POST {}", payload.endpoint());
    let body = serde_json::to_string_pretty(&payload).map_err(ParamsError::from)?;
    println!("{body}");
    Ok(())
}

async fn cmd_solve(
    client: &SolveClient,
    family: Option<Family>,
    params_path: Option<&Path>,
    edits: &[String],
    out: Option<&Path>,
) -> AppResult<()> {
    let store = apply_edits(build_store(family, params_path)?, edits)?;
    let outcome = run_solve(client, &request_from(&store)).await?;
    print_outcome(&outcome, out)
}

fn print_outcome(outcome: &SolveOutcome, out: Option<&Path>) -> AppResult<()> {
    println!(
        "✓ Solve completed via {} in {:.2}s",
        outcome.endpoint, outcome.elapsed_s
    );

    if !outcome.snapshots.is_empty() {
        println!("Solution at representative times:");
        for snap in &outcome.snapshots {
            let (min, max) = snap
                .y
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(*v), hi.max(*v))
                });
            println!(
                "  t = {:.4}  ({} points, min {min:.4}, max {max:.4})",
                snap.time,
                snap.y.len()
            );
        }
    }

    if let Some(plots) = &outcome.result.plots {
        let named = plots.named();
        match out {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                for (name, data) in &named {
                    let path = dir.join(format!("{name}.png.b64"));
                    std::fs::write(&path, data)?;
                    println!("  wrote {}", path.display());
                }
            }
            None => {
                for (name, data) in &named {
                    println!("  plot {name}: {} base64 chars (use --out to save)", data.len());
                }
            }
        }
    }
    Ok(())
}
