use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use isosurf::{server, Renderer, Surface};

#[derive(Parser, Debug)]
#[command(name = "isosurf")]
#[command(about = "Isometric SVG renders of analytic surfaces")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve SVG renders over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: SocketAddr,
    },
    /// Render one surface to a file or stdout
    Render {
        /// Surface name: ripple, eggbox or saddle (anything else is flat)
        #[arg(default_value = "ripple")]
        surface: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let renderer = Renderer::default();

    match args.command {
        Command::Serve { addr } => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime.block_on(server::run(addr, renderer))
        }
        Command::Render { surface, output } => {
            write_document(&renderer, Surface::from_name(&surface), output.as_deref())
        }
    }
}

fn write_document(renderer: &Renderer, surface: Surface, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            renderer.render(surface, &mut out)?;
            out.flush()?;
            log::info!("wrote {} to {}", surface.name(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            renderer.render(surface, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
