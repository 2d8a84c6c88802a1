use anyhow::Result;
use clap::Parser;
use packorder::commands::{self, GlobalOptions};
use packorder::order::PackKind;
use std::path::PathBuf;

/// packorder - custom pack load order
///
/// Computes the enabled pack list for a game's data or resource packs,
/// splicing the order from a user-editable load-order file in front of the
/// default lexicographic ordering.
///
/// Examples:
///   packorder resolve packs.json          # Print the enabled order
///   packorder --kind resource init        # Create resourcepack_load_order.json
#[derive(Parser, Debug)]
#[command(author, version = env!("PACKORDER_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Game directory (defaults to the current directory; also via PACKORDER_GAME_DIR)
    #[arg(
        long = "game-dir",
        short = 'g',
        env = "PACKORDER_GAME_DIR",
        value_name = "PATH",
        global = true
    )]
    pub game_dir: Option<PathBuf>,

    /// Which pack list the load order applies to
    #[arg(long, value_enum, default_value_t = PackKind::Data, global = true)]
    pub kind: PackKind,

    /// Load-order file (defaults to <game-dir>/config/packorder/<kind>pack_load_order.json)
    #[arg(
        long = "order-file",
        env = "PACKORDER_ORDER_FILE",
        value_name = "PATH",
        global = true
    )]
    pub order_file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the final enabled pack order
    Resolve(ResolveArgs),

    /// Report unknown or skipped packs in the load order
    Check(CheckArgs),

    /// Create an empty load-order file
    Init(InitArgs),
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Pack catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Print a JSON array instead of one id per line
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Pack catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing load-order file
    #[arg(long, short = 'f')]
    pub force: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = packorder::runtime::RealRuntime;
    let options = GlobalOptions {
        game_dir: cli.game_dir,
        kind: cli.kind,
        order_file: cli.order_file,
    };

    match cli.command {
        Commands::Resolve(args) => commands::resolve(runtime, &args.catalog, args.json, options)?,
        Commands::Check(args) => commands::check(runtime, &args.catalog, options)?,
        Commands::Init(args) => commands::init(runtime, args.force, options)?,
    }
    Ok(())
}
