mod cat;
mod info;
mod list;

use std::io;

use clap::Parser;
use fat12::error::{Error, ErrorKind};
use fat12::io::std::FileIO;
use fat12::name::NameError;
use fat12::FAT12;

#[derive(Debug, clap::Args)]
struct Cat {
    /// Specify file name in root directory, in 8.3 form
    name: String,
    /// Print hex dump
    #[clap(long, conflicts_with = "raw")]
    hex: bool,
    /// Write file content unchanged
    #[clap(long)]
    raw: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// List files in root directory
    #[clap(name = "ls")]
    List,
    /// Print file content, non-printable bytes as <xx>
    Cat(Cat),
    /// Print boot sector parameters
    Info,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// disk image formatted with FAT12
    #[clap(short, long)]
    device: String,
    #[clap(subcommand)]
    action: Action,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("Could not open disk image {0}: {1}")]
    Open(String, io::Error),
    #[error(transparent)]
    FAT12(#[from] Error<io::Error>),
    #[error("Invalid file name: {0}")]
    Name(#[from] NameError),
    #[error("Could not write output: {0}")]
    Output(io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Open(..) => 3,
            Self::FAT12(e) => match e.kind() {
                ErrorKind::Parse => 4,
                ErrorKind::Io => 5,
                ErrorKind::NotFound => 6,
            },
            Self::Name(_) => 7,
            Self::Output(_) => 5,
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let io = FileIO::open(&args.device).map_err(|e| CliError::Open(args.device.clone(), e))?;
    let mut fat12 = FAT12::new(io)?;
    match args.action {
        Action::List => list::list(&mut fat12),
        Action::Cat(cat) => {
            let format = match (cat.hex, cat.raw) {
                (true, _) => cat::Format::Hex,
                (_, true) => cat::Format::Raw,
                _ => cat::Format::Printable,
            };
            cat::cat(&mut fat12, &cat.name, format)
        }
        Action::Info => info::info(&fat12),
    }
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stderr).init();

    if let Err(error) = run(args) {
        eprintln!("{}", error);
        std::process::exit(error.exit_code());
    }
}
