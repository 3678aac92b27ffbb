use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spex::{cli, config, error, formatter::ExportFormat, logging};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export a playlist in Lime Blue format
    Export(ExportOptions),

    /// Serve playlists over HTTP as JSON, CSV or XLSX
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Link to the Spotify playlist (or its bare id)
    pub playlist_link: String,

    /// Output document format
    #[clap(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// Directory to write the export to (defaults to SPEX_EXPORT_DIR or ".")
    #[clap(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the formatted rows before exporting
    #[clap(long)]
    pub preview: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind (defaults to SERVER_ADDRESS or 127.0.0.1:8000)
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    logging::init_tracing();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Export(opt) => {
            cli::export(opt.playlist_link, opt.format, opt.output_dir, opt.preview).await
        }
        Command::Serve(opt) => cli::serve(opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
