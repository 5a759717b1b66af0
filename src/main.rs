use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use logscope_logs::{DEFAULT_PER_PAGE, LogEntry, LogViewer, MenuItem};

mod translate;

use translate::LocaleTable;

/// Logscope - browse dated application log files from the command line
#[derive(Parser, Debug)]
#[command(name = "logscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Storage directory containing the log files
    #[arg(long, default_value = ".", env = "LOGSCOPE_PATH")]
    path: PathBuf,

    /// Filename prefix component of the discovery pattern
    #[arg(long)]
    prefix: Option<String>,

    /// Date-regex component of the discovery pattern
    #[arg(long)]
    date_regex: Option<String>,

    /// Extension component of the discovery pattern
    #[arg(long)]
    extension: Option<String>,

    /// Locale used for menu display names
    #[arg(long, default_value = "en")]
    locale: String,

    /// TOML file of locale tables, replacing the built-in ones
    #[arg(long)]
    locales: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List discovered dates, most recent first
    Dates,

    /// Show parsed entries for one date
    Entries {
        /// Date key, e.g. 2015-01-01
        date: String,

        /// Level filter token ("all" for every entry)
        #[arg(long, default_value = "all")]
        level: String,
    },

    /// Per-date, per-level entry counts
    Stats,

    /// Per-date level tree with raw token names
    Tree,

    /// Per-date level menu with localized names
    Menu,

    /// Show the active filename pattern
    Pattern,

    /// Page through the date listing
    Paginate {
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: usize,

        #[arg(long)]
        page: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut viewer = LogViewer::new(&args.path)?;
    if args.prefix.is_some() || args.date_regex.is_some() || args.extension.is_some() {
        viewer.set_pattern(
            args.prefix.as_deref(),
            args.date_regex.as_deref(),
            args.extension.as_deref(),
        );
    }

    let translator = match &args.locales {
        Some(path) => LocaleTable::from_file(path, &args.locale)?,
        None => LocaleTable::builtin(&args.locale),
    };

    match args.command {
        Command::Dates => {
            let dates = viewer.dates()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&dates)?);
            } else {
                for date in dates {
                    println!("{date}");
                }
            }
        }

        Command::Entries { date, level } => {
            let entries = viewer.entries(&date, &level)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_entries(&entries);
            }
        }

        Command::Stats => {
            let stats = viewer.stats()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                for (date, stats) in stats {
                    println!("{date}");
                    for count in stats.iter() {
                        println!("  {:<10} {}", count.level, count.count);
                    }
                }
            }
        }

        Command::Tree => {
            let tree = viewer.tree()?;
            print_menus(&tree, args.json)?;
        }

        Command::Menu => {
            let menu = viewer.menu(&translator)?;
            print_menus(&menu, args.json)?;
        }

        Command::Pattern => {
            println!("{}", viewer.pattern());
        }

        Command::Paginate { per_page, page } => {
            let page = viewer.paginate(per_page, page)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!(
                    "page {}/{} ({} dates, {} per page)",
                    page.current_page, page.last_page, page.total, page.per_page
                );
                for date in &page.items {
                    println!("{date}");
                }
            }
        }
    }

    Ok(())
}

fn print_entries(entries: &[LogEntry]) {
    for entry in entries {
        println!("{:<10} {}", entry.level.token(), entry.header);
        for line in &entry.body {
            println!("    {line}");
        }
    }
}

fn print_menus(menus: &[(String, Vec<MenuItem>)], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&menus)?);
        return Ok(());
    }
    for (date, items) in menus {
        println!("{date}");
        for item in items {
            println!("  {:<10} {:<14} {}", item.level, item.name, item.count);
        }
    }
    Ok(())
}
