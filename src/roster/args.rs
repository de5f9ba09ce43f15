use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", version)]
#[command(about = "Student record manager backed by a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global roster instead of ./.roster
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Data file to use (overrides the configured data-file)
    #[arg(short, long, global = true, env = "ROSTER_FILE")]
    pub file: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    #[command(alias = "a")]
    Add {
        name: String,
        roll: String,
        department: String,
        #[arg(allow_negative_numbers = true)]
        gpa: f64,
        /// Contact details (phone, email, ...)
        #[arg(default_value = "")]
        contact: String,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// View a student by roll number
    #[command(alias = "v")]
    View { roll: String },

    /// Update a student's fields (unset flags keep their value)
    #[command(alias = "u")]
    Update {
        roll: String,

        #[arg(long)]
        name: Option<String>,

        /// New roll number (must not belong to another student)
        #[arg(long = "roll", value_name = "ROLL")]
        new_roll: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        gpa: Option<f64>,

        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete one or more students
    #[command(alias = "rm")]
    Delete {
        /// Roll numbers (e.g. R1 R7)
        #[arg(required = true, num_args = 1..)]
        rolls: Vec<String>,
    },

    /// Search by name or department (case-sensitive substring)
    #[command(alias = "s")]
    Search {
        #[arg(long, conflicts_with = "department", required_unless_present = "department")]
        name: Option<String>,

        #[arg(long)]
        department: Option<String>,
    },

    /// Sort the stored records
    Sort {
        #[arg(value_enum)]
        by: SortBy,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, max-gpa)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the data file
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortBy {
    Gpa,
    Roll,
}
