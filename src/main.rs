use clap::{Parser, Subcommand};
use navtree::{Collection, Current, NavRecord, Node, NodeFilter, NodeRef, config, output};
use std::path::PathBuf;

/// Flags that designate the current node.
#[derive(clap::Args, Clone)]
struct CurrentArgs {
    /// Request URL; the node whose URL matches it becomes current
    #[arg(long)]
    url: Option<String>,

    /// Path of the current node (takes precedence over --url)
    #[arg(long)]
    current: Option<String>,
}

impl CurrentArgs {
    fn to_current<'a>(&'a self, settings: &config::NavSettings) -> Current<'a> {
        match (&self.current, &self.url) {
            (Some(path), _) => Current::Node(NodeRef::Path(path.as_str())),
            (None, Some(url)) => settings.current_for_url(url),
            (None, None) => Current::None,
        }
    }
}

#[derive(Parser)]
#[command(name = "navtree")]
#[command(about = "Path-keyed navigation menus and breadcrumbs")]
#[command(long_about = "\
Path-keyed navigation menus and breadcrumbs

Menu items are declared in navigation.toml. Each item's slash-delimited path
places it in the tree; display_order positions it among its siblings.

  [[nodes]]
  path = \"about\"               # top-level item, url /about/
  [[nodes]]
  path = \"about/our-team\"      # child of about, named \"Our Team\"
  display_order = 1

Run 'navtree gen-config' to generate a documented navigation.toml.")]
#[command(version)]
struct Cli {
    /// Navigation definition file
    #[arg(long, default_value = "navigation.toml", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the prepared navigation tree as JSON
    Nav {
        #[command(flatten)]
        current: CurrentArgs,

        /// Drop nodes deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print the breadcrumb trail to the current node as JSON
    Breadcrumb {
        #[command(flatten)]
        current: CurrentArgs,
    },
    /// Print the navigation as an indented tree
    Tree {
        /// Request URL used to mark the current node
        #[arg(long)]
        url: Option<String>,
    },
    /// Validate the navigation definition
    Check,
    /// Print a stock navigation.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Nav { current, max_depth } => {
            let (settings, collection) = load(&cli)?;
            let within_depth = |node: &Node,
                                _: &NavRecord,
                                _: &Collection,
                                _: &[&Node],
                                _: Option<&Node>,
                                _: &[String]| {
                max_depth.is_none_or(|max| node.depth() <= max)
            };
            let keep: &NodeFilter<'_> = &within_depth;
            let nav = collection.prepare_for_nav_template(current.to_current(&settings), Some(keep))?;
            println!("{}", serde_json::to_string_pretty(&nav)?);
        }
        Command::Breadcrumb { current } => {
            let (settings, collection) = load(&cli)?;
            let trail = collection.prepare_for_breadcrumb_template(current.to_current(&settings))?;
            println!("{}", serde_json::to_string_pretty(&trail)?);
        }
        Command::Tree { url } => {
            let (settings, collection) = load(&cli)?;
            let current = url
                .as_deref()
                .map_or(Current::None, |u| settings.current_for_url(u));
            let nav = collection.prepare_for_nav_template(current, None)?;
            output::print_nav_tree(&nav);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (_, collection) = load(&cli)?;
            output::print_check_summary(&collection);
            collection.validate_nodes()?;
            println!("==> Navigation is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the navigation definition and build its collection.
fn load(cli: &Cli) -> Result<(config::NavSettings, Collection), config::ConfigError> {
    let nav_config = config::load_config(&cli.source)?;
    let collection = nav_config.build_collection()?;
    log::info!(
        "loaded {} node(s) from {}",
        collection.len(),
        cli.source.display()
    );
    Ok((nav_config.settings, collection))
}
