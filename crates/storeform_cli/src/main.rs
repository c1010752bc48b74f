mod config;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use storeform_fields::{Outcome, Rejection, SlotPosition};
use storeform_project::{
    FormCatalog, FormId, FormSession, StatusAction, default_layout, init_catalog, load_catalog,
    save_catalog,
};

use crate::config::resolve_catalog_path;

#[derive(Parser)]
#[command(name = "storeform")]
#[command(about = "Build and manage store data-collection forms", long_about = None)]
struct Cli {
    /// Path to the form catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Activate forms for a store
    Init { store_name: String },
    /// Create a form with the default field set
    Create { name: String },
    /// List forms
    List {
        #[arg(long)]
        archived: bool,
    },
    /// Make a form the live one
    Select { id: FormId },
    /// Archive a form
    Archive {
        id: FormId,
        #[arg(long)]
        yes: bool,
    },
    /// Bring an archived form back
    Recover {
        id: FormId,
        #[arg(long)]
        yes: bool,
    },
    /// Show a form's grid and unplaced fields
    Show { id: FormId },
    /// Drop a field into a grid slot
    Place {
        id: FormId,
        key: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
        position: u8,
    },
    /// Drop a field back into the unplaced pool
    Unplace { id: FormId, key: String },
    /// Set the label of an unplaced field
    RenameField {
        id: FormId,
        key: String,
        label: String,
    },
    /// Rename a form
    Rename { id: FormId, name: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let path = resolve_catalog_path(cli.catalog);

    if let Command::Init { store_name } = &cli.command {
        init_catalog(store_name, &path)?;
        println!("Store created successfully.");
        return Ok(());
    }

    let mut catalog = load_catalog(&path)
        .with_context(|| format!("could not open catalog {}", path.display()))?;

    let stdout = io::stdout();
    if run(&mut catalog, cli.command, &mut stdout.lock())? {
        save_catalog(&catalog, &path)?;
    }
    Ok(())
}

/// Runs one command; true when the catalog changed and needs saving.
fn run(catalog: &mut FormCatalog, command: Command, out: &mut impl Write) -> anyhow::Result<bool> {
    match command {
        Command::Init { .. } => Ok(false),
        Command::Create { name } => {
            let id = catalog.create_form(&name, default_layout()?)?;
            writeln!(out, "Created form {}", id)?;
            Ok(true)
        }
        Command::List { archived } => {
            let forms = if archived {
                catalog.archived_forms()
            } else {
                catalog.active_forms()
            };
            for form in forms {
                let selected = catalog.selected_form_id == Some(form.id);
                writeln!(out, "{}", render::form_line(form, selected))?;
            }
            Ok(false)
        }
        Command::Select { id } => {
            catalog.select_form(id)?;
            writeln!(out, "Form {} is now live", id)?;
            Ok(true)
        }
        Command::Archive { id, yes } => change_status(catalog, id, StatusAction::Archive, yes, out),
        Command::Recover { id, yes } => change_status(catalog, id, StatusAction::Recover, yes, out),
        Command::Show { id } => {
            let session = FormSession::open(catalog, id)?;
            writeln!(out, "{}", session.form_name)?;
            write!(out, "{}", render::layout(session.fields.layout())?)?;
            Ok(false)
        }
        Command::Place { id, key, position } => {
            let Some(target) = SlotPosition::new(position) else {
                bail!("slot {} is outside 1..=8", position);
            };
            edit(catalog, id, out, |session, _| {
                Ok(match session.fields.begin_drag(&key) {
                    Some(token) => session.fields.drop_to_placed(&token, target),
                    None => Outcome::Rejected(Rejection::UnknownField),
                })
            })
        }
        Command::Unplace { id, key } => edit(catalog, id, out, |session, _| {
            Ok(match session.fields.begin_drag(&key) {
                Some(token) => session.fields.drop_to_unplaced(&token),
                None => Outcome::Rejected(Rejection::UnknownField),
            })
        }),
        Command::RenameField { id, key, label } => edit(catalog, id, out, |session, out| {
            let outcome = session.fields.rename_custom_field(&key, &label);
            if let Some(notice) = render::limit_notice(&session.fields, &key) {
                writeln!(out, "{}", notice)?;
            }
            Ok(outcome)
        }),
        Command::Rename { id, name } => {
            let mut session = FormSession::open(catalog, id)?;
            session.form_name = name;
            session.save(catalog)?;
            writeln!(out, "Renamed form {}", id)?;
            Ok(true)
        }
    }
}

fn change_status(
    catalog: &mut FormCatalog,
    id: FormId,
    action: StatusAction,
    confirmed: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let pending = catalog.request_status_change(id, action)?;
    if !confirmed {
        writeln!(out, "{} Re-run with --yes to confirm.", pending.question())?;
        return Ok(false);
    }
    writeln!(out, "{}", catalog.confirm(pending)?)?;
    Ok(true)
}

/// Opens the form, applies one edit and saves it back when it took effect.
fn edit<W: Write>(
    catalog: &mut FormCatalog,
    id: FormId,
    out: &mut W,
    apply: impl FnOnce(&mut FormSession, &mut W) -> anyhow::Result<Outcome>,
) -> anyhow::Result<bool> {
    let mut session = FormSession::open(catalog, id)?;
    match apply(&mut session, out)? {
        Outcome::Applied => {
            session.save(catalog)?;
            write!(out, "{}", render::layout(session.fields.layout())?)?;
            Ok(true)
        }
        Outcome::Rejected(reason) => {
            writeln!(out, "Ignored: {}", reason.as_str())?;
            Ok(false)
        }
    }
}
