use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use engine::{CritPolicy, Ruleset, SessionConfig, SessionTemplate, Strategy};
use tracing_subscriber::EnvFilter;

mod batch;
mod interactive;
mod render;

lazy_static::lazy_static! {
    pub static ref OPTIMAL_THREAD_COUNT: usize = num_cpus::get().max(1);
}

#[derive(Copy, Clone, ValueEnum)]
enum RulesetArg {
    Threshold,
    DualType,
}

#[derive(Copy, Clone, ValueEnum)]
enum PolicyArg {
    Strict,
    Permissive,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    Random,
    Greedy,
}

#[derive(clap::Args)]
struct SessionArgs {
    /// Session TOML; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    ruleset: Option<RulesetArg>,
    /// Critical detection policy
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    #[arg(long)]
    action_points: Option<u32>,
    /// Roll a fresh target point for every statement on phase entry
    #[arg(long)]
    randomize_target_points: bool,
    #[arg(long)]
    hide_weakness: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Play the bundled story in the terminal
    Play {
        #[command(flatten)]
        session: SessionArgs,
        /// How long break feedback stays up before the story moves on
        #[arg(long, default_value_t = 800)]
        pause_ms: u64,
    },
    /// Let a strategy play many sessions and summarize the outcomes
    Autoplay {
        #[command(flatten)]
        session: SessionArgs,
        #[arg(long, default_value_t = 1000)]
        runs: usize,
        #[arg(long, value_enum, default_value_t = StrategyArg::Greedy)]
        strategy: StrategyArg,
        /// Print every run, not just the summary
        #[arg(long)]
        show_runs: bool,
    },
}

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Argue a boss down one statement at a time")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

impl SessionArgs {
    fn into_config(self) -> anyhow::Result<SessionConfig> {
        let mut template = match self.config {
            Some(ref path) => SessionTemplate::read(path)?,
            None => SessionTemplate::default(),
        };
        if let Some(ruleset) = self.ruleset {
            template.ruleset = match ruleset {
                RulesetArg::Threshold => Ruleset::Threshold,
                RulesetArg::DualType => Ruleset::DualType,
            };
        }
        if let Some(policy) = self.policy {
            template.crit_policy = match policy {
                PolicyArg::Strict => CritPolicy::Strict,
                PolicyArg::Permissive => CritPolicy::Permissive,
            };
        }
        if self.action_points.is_some() {
            template.action_points = self.action_points;
        }
        if self.seed.is_some() {
            template.seed = self.seed;
        }
        template.randomize_target_points |= self.randomize_target_points;
        template.hide_weakness |= self.hide_weakness;
        SessionConfig::try_from(template)
    }
}

fn to_strategy(s: StrategyArg) -> Strategy {
    match s {
        StrategyArg::Random => Strategy::Random,
        StrategyArg::Greedy => Strategy::Greedy,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("launch");

    let cli = Cli::parse();
    let content = gamedata::story();
    match cli.cmd {
        Cmd::Play { session, pause_ms } => {
            let config = session.into_config()?;
            interactive::play(content, config, std::time::Duration::from_millis(pause_ms))
        }
        Cmd::Autoplay {
            session,
            runs,
            strategy,
            show_runs,
        } => {
            let config = session.into_config()?;
            let results = batch::run(content, config, to_strategy(strategy), runs)?;
            if show_runs {
                for result in &results {
                    println!("{result}");
                }
            }
            println!("{}", engine::SessionSummary::from(&results));
            Ok(())
        }
    }
}
