use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::menu::{Course, CourseFilter};

#[derive(Debug, Parser)]
#[command(name = "chefmenu", version, about = "Build and browse a restaurant menu")]
pub struct Cli {
    /// Config file (default: <config_dir>/chefmenu/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with an empty menu, ignoring seed items from the config
    #[arg(long)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print menu statistics and items as plain text
    Print {
        /// Only list one course
        #[arg(long, value_enum, default_value_t = CourseArg::All)]
        course: CourseArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CourseArg {
    All,
    Starters,
    Mains,
    Dessert,
    Drinks,
}

impl From<CourseArg> for CourseFilter {
    fn from(arg: CourseArg) -> Self {
        match arg {
            CourseArg::All => CourseFilter::All,
            CourseArg::Starters => CourseFilter::Only(Course::Starters),
            CourseArg::Mains => CourseFilter::Only(Course::Mains),
            CourseArg::Dessert => CourseFilter::Only(Course::Dessert),
            CourseArg::Drinks => CourseFilter::Only(Course::Drinks),
        }
    }
}
