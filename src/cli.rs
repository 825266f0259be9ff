use crate::input::Package;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitness-tracker",
    about = "Report distance, mean speed and calories for workout sensor packages"
)]
pub struct Cli {
    /// Workout package as CODE:v1,v2,... (repeatable).
    ///
    /// Codes: RUN (action,duration,weight), WLK (+height),
    /// SWM (+pool length,pool laps).
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub packages: Vec<Package>,

    /// JSON file with an array of {"workout_type", "data"} packages.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print one JSON object per workout instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Log and skip packages that fail instead of stopping at the first one.
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
