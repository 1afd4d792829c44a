//! Drives the fund launch skill tree from the command line.
//!
//! Usage:
//!
//! ```text
//! skill_tree <state-dir> <command> [argument]
//! ```
//!
//! Commands:
//!
//! - `init [sfr|commercial|specialty]` regenerates all tasks for a fund track
//! - `complete <task-id>` marks a task completed
//! - `reset [category]` regenerates one category, or everything
//! - `restart` clears every completion flag
//! - `status` prints overall and per-category progress
//! - `tree [category]` prints the display tree of one or all categories
//! - `onboarded [done|clear]` reads or updates the onboarding flag
//!
//! Progress is stored as JSON inside `state-dir`. An optional
//! `state-dir/config.json` overrides the store configuration, for example:
//!
//! ```json
//! { "persist": true, "seed_gate_first_task": false }
//! ```
//!
//! Log verbosity follows `RUST_LOG` and defaults to warnings on stderr.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use fundlaunch::progression::{
    adapters::{bonus::RngPointBonus, fs::FileSlot},
    catalog::{
        CatalogError,
        fund::{FundTrack, fund_launch_catalog},
    },
    config::ProgressionConfig,
    domain::{CategoryKey, ProgressionDomainError, TaskId, TrackKey, TreeNode},
    ports::{PointBonus, ProgressSlot, SlotError},
    services::{OnboardingFlag, ProgressionStore, TaskGenerator},
};
use mockable::{Clock, DefaultClock};
use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "config.json";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to open state directory: {0}")]
    StateDir(#[source] io::Error),
    #[error("failed to read config: {0}")]
    ConfigRead(#[source] io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Domain(#[from] ProgressionDomainError),
    #[error("storage failure: {0}")]
    Slot(#[from] SlotError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnboardingAction {
    Show,
    Done,
    Clear,
}

/// Commands that operate on the progression store.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StoreCommand {
    Init(Option<FundTrack>),
    Complete(TaskId),
    Reset(Option<CategoryKey>),
    Restart,
    Status,
    Tree(Option<CategoryKey>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Store(StoreCommand),
    Onboarded(OnboardingAction),
}

impl Command {
    fn parse(name: &str, argument: Option<&str>) -> Result<Self, CliError> {
        match (name, argument) {
            ("init", track) => track
                .map(|value| {
                    FundTrack::try_from(value)
                        .map_err(|err| CliError::InvalidArgs(err.to_string()))
                })
                .transpose()
                .map(|fund| Self::Store(StoreCommand::Init(fund))),
            ("complete", Some(id)) => id
                .trim()
                .parse::<u32>()
                .map(|value| Self::Store(StoreCommand::Complete(TaskId::new(value))))
                .map_err(|_| CliError::InvalidArgs(format!("task id '{id}' is not a number"))),
            ("complete", None) => Err(CliError::InvalidArgs("missing task id argument".into())),
            ("reset", category) => Ok(Self::Store(StoreCommand::Reset(
                category.map(CategoryKey::new).transpose()?,
            ))),
            ("restart", None) => Ok(Self::Store(StoreCommand::Restart)),
            ("status", None) => Ok(Self::Store(StoreCommand::Status)),
            ("tree", category) => Ok(Self::Store(StoreCommand::Tree(
                category.map(CategoryKey::new).transpose()?,
            ))),
            ("onboarded", None) => Ok(Self::Onboarded(OnboardingAction::Show)),
            ("onboarded", Some("done")) => Ok(Self::Onboarded(OnboardingAction::Done)),
            ("onboarded", Some("clear")) => Ok(Self::Onboarded(OnboardingAction::Clear)),
            ("restart" | "status" | "onboarded", Some(extra)) => Err(CliError::InvalidArgs(
                format!("unexpected argument '{extra}' for '{name}'"),
            )),
            (other, _) => Err(CliError::InvalidArgs(format!(
                "unknown command '{other}'; expected init, complete, reset, restart, status, tree, or onboarded"
            ))),
        }
    }
}

fn main() -> Result<(), BoxError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = collect_args()?;
    let mut stdout = io::stdout().lock();
    run(args.into_iter(), &mut stdout).map_err(Into::into)
}

fn collect_args() -> Result<Vec<String>, CliError> {
    env::args_os()
        .map(|arg_os| {
            arg_os
                .into_string()
                .map_err(|_| CliError::InvalidArgs("argument is not valid UTF-8".into()))
        })
        .collect()
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(Utf8PathBuf, Command), CliError> {
    let _program = args.next();
    let state_dir = args
        .next()
        .map(Utf8PathBuf::from)
        .ok_or_else(|| CliError::InvalidArgs("missing state directory argument".into()))?;
    let name = args
        .next()
        .ok_or_else(|| CliError::InvalidArgs("missing command argument".into()))?;
    let argument = args.next();
    if let Some(extra) = args.next() {
        return Err(CliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    let command = Command::parse(&name, argument.as_deref())?;
    Ok((state_dir, command))
}

fn run(args: impl Iterator<Item = String>, out: &mut impl Write) -> Result<(), CliError> {
    let (state_dir, command) = parse_args(args)?;
    let slot = Arc::new(FileSlot::open(&state_dir).map_err(CliError::StateDir)?);
    let config = load_config(&state_dir)?;

    let store_command = match command {
        Command::Onboarded(action) => {
            return onboarding(&OnboardingFlag::new(slot), action, out);
        }
        Command::Store(inner) => inner,
    };

    let generator = TaskGenerator::new(fund_launch_catalog()?, RngPointBonus::thread());
    let mut store = ProgressionStore::open(slot, generator, Arc::new(DefaultClock), config);
    execute(&mut store, store_command, out)?;
    store.flush()?;
    Ok(())
}

fn load_config(state_dir: &Utf8Path) -> Result<ProgressionConfig, CliError> {
    let dir = Dir::open_ambient_dir(state_dir, ambient_authority()).map_err(CliError::StateDir)?;
    match dir.read_to_string(CONFIG_FILE) {
        Ok(json) => ProgressionConfig::from_json(&json).map_err(CliError::ConfigParse),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ProgressionConfig::default()),
        Err(err) => Err(CliError::ConfigRead(err)),
    }
}

fn onboarding<S: ProgressSlot>(
    flag: &OnboardingFlag<S>,
    action: OnboardingAction,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match action {
        OnboardingAction::Show => {}
        OnboardingAction::Done => flag.mark_complete()?,
        OnboardingAction::Clear => flag.clear()?,
    }
    writeln!(out, "onboarded: {}", flag.is_complete())?;
    Ok(())
}

fn execute<S, B, C>(
    store: &mut ProgressionStore<S, B, C>,
    command: StoreCommand,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    match command {
        StoreCommand::Init(track) => {
            let key = track.map(FundTrack::key).transpose()?;
            store.initialize(key.as_ref());
            print_status(store, out)
        }
        StoreCommand::Complete(id) => {
            let changed = store.complete_task(id);
            let outcome = if changed { "completed" } else { "unchanged" };
            writeln!(out, "task {id}: {outcome}")?;
            Ok(())
        }
        StoreCommand::Reset(category) => {
            let replaced = store.reset_category(category.as_ref());
            let scope = category.as_ref().map_or("all categories", CategoryKey::as_str);
            let outcome = if replaced { "reset" } else { "unchanged" };
            writeln!(out, "{scope}: {outcome}")?;
            Ok(())
        }
        StoreCommand::Restart => {
            store.reset_progress();
            print_status(store, out)
        }
        StoreCommand::Status => print_status(store, out),
        StoreCommand::Tree(category) => {
            let keys: Vec<CategoryKey> = match category {
                Some(key) => vec![key],
                None => store
                    .progression()
                    .map(|progression| progression.category_keys().cloned().collect())
                    .unwrap_or_default(),
            };
            for key in &keys {
                print_tree(store, key, out)?;
            }
            Ok(())
        }
    }
}

fn print_status<S, B, C>(
    store: &ProgressionStore<S, B, C>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    let Some(progression) = store.progression() else {
        writeln!(out, "uninitialized")?;
        return Ok(());
    };
    let track = progression.track().map_or("none", TrackKey::as_str);
    let overall = store.overall_progress();
    writeln!(out, "track: {track}")?;
    writeln!(out, "gate complete: {}", store.is_gate_complete())?;
    writeln!(
        out,
        "overall: {}/{} ({}%)",
        overall.completed,
        overall.total,
        overall.percent()
    )?;
    for key in progression.category_keys() {
        let progress = store.category_progress(key);
        writeln!(
            out,
            "  {key}: {}/{} ({}%)",
            progress.completed,
            progress.total,
            progress.percent()
        )?;
    }
    Ok(())
}

fn print_tree<S, B, C>(
    store: &ProgressionStore<S, B, C>,
    key: &CategoryKey,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    writeln!(out, "{key}")?;
    for (id, depth) in flatten(&store.tree_for(key)) {
        let Some(task) = store.task(id) else {
            continue;
        };
        let marker = if task.is_completed() {
            'x'
        } else if store.is_unlocked(id) {
            '>'
        } else {
            ' '
        };
        let indent = "  ".repeat(depth);
        writeln!(
            out,
            "{indent}[{marker}] {id} {} ({} pts)",
            task.name(),
            task.points()
        )?;
    }
    Ok(())
}

/// Flattens a display forest into depth-first order with 1-based depths.
fn flatten(nodes: &[TreeNode]) -> Vec<(TaskId, usize)> {
    let mut order = Vec::new();
    for node in nodes {
        node.walk(1, &mut |id, depth| order.push((id, depth)));
    }
    order
}
