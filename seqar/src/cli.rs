use std::path::PathBuf;

use structopt::clap::AppSettings::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub enum Commands {
    #[structopt(
        name = "c",
        visible_alias = "create",
        about = "Write an archive of the given files to standard output"
    )]
    Create(CreateArgs),

    #[structopt(
        name = "x",
        visible_alias = "extract",
        about = "Extract an archive read from standard input"
    )]
    Extract(ExtractArgs),

    #[structopt(
        name = "l",
        visible_alias = "list",
        about = "List the files of an archive read from standard input"
    )]
    List,
}

#[derive(Debug, StructOpt)]
pub struct CreateArgs {
    #[structopt(
        name = "file",
        parse(from_os_str),
        required = true,
        min_values = 1,
        help = "Files to archive, stored in the given order under the given names"
    )]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct ExtractArgs {
    #[structopt(
        short,
        long,
        parse(from_os_str),
        help = "Directory to extract into [default: current directory]"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "seqar",
    about = "Create and extract sequential archives.",
    settings = &[SubcommandRequiredElseHelp, DisableHelpSubcommand, VersionlessSubcommands],
    usage = "seqar c <file>... > archive\n    seqar x [-o <dir>] < archive\n    seqar l < archive"
)]
pub struct Cli {
    #[structopt(
        short,
        long,
        help = "Print each file name to standard error",
        global = true
    )]
    pub verbose: bool,

    #[structopt(subcommand)]
    pub cmd: Commands,
}
