//! Admin binary entry point
//!
//! Loads the live directory (or a JSON file), applies one edit and prints
//! the resulting `{"staff": [...]}` document.

use std::path::PathBuf;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use admin::{StaffEdit, StaffEditor};
use directory::config::{DEFAULT_DIRECTORY_URL, ENV_SOURCE};
use directory::{DirectorySource, RealFileDirectorySource, RealHttpDirectorySource, SourceLocation};
use shared::{component_info, logging, ComponentId};

/// Staff directory data-entry companion
#[derive(Parser)]
#[command(name = "admin")]
#[command(about = "Edit staff directory records and export the JSON payload")]
struct Cli {
    /// Directory source: an http(s) URL or a path to a JSON file
    #[arg(long, global = true, env = ENV_SOURCE, default_value = DEFAULT_DIRECTORY_URL)]
    source: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List records as "<name> (<slug>)"
    List,
    /// Add a record, or update the one at --index
    Upsert {
        /// Record to update; omit to add a new one
        #[arg(long)]
        index: Option<usize>,

        #[command(flatten)]
        fields: EditArgs,

        /// Write the result here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the payload as {"staff": [...]}
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Form fields; unset fields keep the selected record's value
#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    slug: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    avatar: Option<String>,
    #[arg(long)]
    about_intro: Option<String>,
    #[arg(long)]
    about_detail: Option<String>,
}

impl EditArgs {
    fn apply(self, mut form: StaffEdit) -> StaffEdit {
        let fields = [
            (self.slug, &mut form.slug),
            (self.name, &mut form.name),
            (self.role, &mut form.role),
            (self.email, &mut form.email),
            (self.location, &mut form.location),
            (self.avatar, &mut form.avatar),
            (self.about_intro, &mut form.about_intro),
            (self.about_detail, &mut form.about_detail),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        form
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    ComponentId::init_admin();
    logging::init_tracing_with_level(Some(&cli.log_level));

    let mut editor = load_editor(&cli.source).await?;

    match cli.command {
        Command::List => {
            for (index, label) in editor.entries().iter().enumerate() {
                println!("{index:>3}  {label}");
            }
        }
        Command::Upsert { index, fields, output } => {
            let base = index.and_then(|i| editor.form(i)).unwrap_or_default();
            let landed = editor
                .upsert(index, fields.apply(base))
                .context("Edit rejected")?;
            component_info!(
                ComponentId::current(),
                "Updated in memory at index {}. Save changes in the portal to persist them.",
                landed
            );
            write_output(&editor, output.as_ref()).await?;
        }
        Command::Export { output } => {
            write_output(&editor, output.as_ref()).await?;
        }
    }

    Ok(())
}

async fn load_editor(source: &str) -> anyhow::Result<StaffEditor> {
    let location: SourceLocation = source.parse().context("Invalid --source")?;
    let source: Box<dyn DirectorySource> = match location {
        SourceLocation::Http(url) => Box::new(RealHttpDirectorySource::new(url)),
        SourceLocation::File(path) => Box::new(RealFileDirectorySource::new(path)),
    };

    let body = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load the directory from {}", source.describe()))?;
    Ok(StaffEditor::from_payload(&body)?)
}

async fn write_output(editor: &StaffEditor, output: Option<&PathBuf>) -> anyhow::Result<()> {
    let json = editor.to_json()?;
    match output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            component_info!(
                ComponentId::current(),
                "Wrote {} staff records to {}",
                editor.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
