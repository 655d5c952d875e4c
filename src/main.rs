use clap::{Parser, Subcommand};
use quire::output::{dictionary_to_json, operations_to_json};
use quire::{Document, QuireError, compose_to_pdf};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Compose laid-out paragraphs into PDF page content", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a JSON paragraph document onto one page.
    Compose {
        /// Path to the document.
        document: PathBuf,
        /// Where to write the result; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the operation list and annotations as JSON instead of the raw content stream.
        #[arg(long, default_value_t = false)]
        ops_json: bool,
    },
}

fn main() -> Result<(), QuireError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "quire=info");
        }
    }
    env_logger::init();

    match Args::parse().command {
        Command::Compose {
            document,
            output,
            ops_json,
        } => compose(document, output, ops_json),
    }
}

fn compose(path: PathBuf, output: Option<PathBuf>, ops_json: bool) -> Result<(), QuireError> {
    log::info!("Loading document from {}", path.display());
    let document = Document::load(&path)?;
    let page = compose_to_pdf(&document);
    log::info!(
        "Composed {} operation(s), {} annotation(s), {} image reference(s)",
        page.content.operations.len(),
        page.annotations.len(),
        page.images.len()
    );

    let bytes = if ops_json {
        let value = serde_json::json!({
            "operations": operations_to_json(&page.content.operations),
            "resources": dictionary_to_json(&page.resources),
            "annotations": page.annotations.iter().map(dictionary_to_json).collect::<Vec<_>>(),
        });
        serde_json::to_vec_pretty(&value)?
    } else {
        page.content.encode()?
    };

    match output {
        Some(out) => {
            fs::write(&out, bytes)?;
            log::info!("Wrote {}", out.display());
        }
        None => std::io::stdout().write_all(&bytes)?,
    }
    Ok(())
}
