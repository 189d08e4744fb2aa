//! Command-line front end for a Folio workspace.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use folio_core::{
    init_logging, selectable_page_types, Config, MenuAction, MenuOutcome, PageType, Workspace,
};

/// folio - manage the page tabs of a form
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the workspace database
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Key the tab record is stored under
    #[arg(long, value_name = "KEY")]
    storage_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List pages in order
    List,
    /// Add a page of the given type
    Add {
        page_type: PageType,
        name: String,
        /// Insert before this position instead of appending
        #[arg(long)]
        at: Option<usize>,
    },
    /// Select a page
    Select { id: String },
    /// Rename a page
    Rename { id: String, name: String },
    /// Duplicate a page
    Duplicate { id: String },
    /// Delete a page
    Delete {
        id: String,
        /// Allow deleting the only remaining page
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Move a page onto another page's position
    Move { from: String, to: String },
    /// Make a page the first page
    First { id: String },
    /// Print a page as JSON
    Copy { id: String },
    /// List the page types offered when adding a page
    Types,
    /// Restore the default pages
    Reset,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(Config::data_dir);
    let mut config = Config::from_env_in(data_dir)?;
    if let Some(key) = cli.storage_key {
        config.storage_key = key;
    }

    let mut workspace = Workspace::open(config).context("failed to open workspace")?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {}
        Commands::Add {
            page_type,
            name,
            at,
        } => {
            let id = match at {
                Some(index) => workspace
                    .tabs_mut()
                    .add_tab_at_index_with_type(index, page_type, &name),
                None => workspace.tabs_mut().add_tab_with_type(page_type, &name),
            };
            let id = id.context("page name cannot be empty")?;
            println!("added {}", id);
        }
        Commands::Select { id } => {
            if !workspace.select_tab(&id) {
                anyhow::bail!("cannot select {}", id);
            }
        }
        Commands::Rename { id, name } => {
            report(workspace.apply_menu_action(&id, MenuAction::Rename(name))?);
        }
        Commands::Duplicate { id } => {
            report(workspace.apply_menu_action(&id, MenuAction::Duplicate)?);
        }
        Commands::Delete { id, yes } => {
            report(workspace.apply_menu_action(&id, MenuAction::Delete { confirmed: yes })?);
        }
        Commands::Move { from, to } => {
            if !workspace.drop_tab(&from, &to) {
                println!("nothing moved");
            }
        }
        Commands::First { id } => {
            report(workspace.apply_menu_action(&id, MenuAction::SetAsFirstPage)?);
        }
        Commands::Copy { id } => {
            report(workspace.apply_menu_action(&id, MenuAction::Copy)?);
            return Ok(());
        }
        Commands::Types => {
            for info in selectable_page_types() {
                let premium = if info.premium { " (premium)" } else { "" };
                println!("{:<12}{}{}", info.page_type, info.description, premium);
            }
            return Ok(());
        }
        Commands::Reset => workspace.reset(),
    }

    print_tabs(&workspace);
    Ok(())
}

fn report(outcome: MenuOutcome) {
    match outcome {
        MenuOutcome::Applied => {}
        MenuOutcome::Duplicated(id) => println!("duplicated as {}", id),
        MenuOutcome::Copied(json) => println!("{}", json),
        MenuOutcome::ConfirmationRequired => {
            println!("this is the last page; pass --yes to delete it")
        }
        MenuOutcome::Ignored => println!("nothing changed"),
    }
}

fn print_tabs(workspace: &Workspace) {
    let tabs = workspace.tabs();
    for (index, tab) in tabs.tabs().iter().enumerate() {
        let marker = if tabs.active_tab_id() == Some(tab.id.as_str()) {
            "*"
        } else {
            " "
        };
        let disabled = if tab.disabled { " [disabled]" } else { "" };
        println!(
            "{} {:>2}. {:<24} {:<11} {}{}",
            marker,
            index + 1,
            tab.label,
            tab.effective_type(),
            tab.id,
            disabled
        );
    }
}
