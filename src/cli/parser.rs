use crate::core::interval::EntryRef;
use crate::export::ExportFormat;
use crate::models::hole_status::HoleStatus;
use crate::models::section::Section;
use crate::models::section_key::SectionKey;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for drilllog
#[derive(Parser)]
#[command(
    name = "drilllog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Drill-hole logging CLI: record depth intervals per hole and section, track drilling progress",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which logging table a command works on.
#[derive(Args, Debug, Clone)]
pub struct SectionArgs {
    #[arg(long = "project", help = "Project id")]
    pub project: String,

    #[arg(long = "hole", help = "Hole id (e.g. IDD4074)")]
    pub hole: String,

    #[arg(long = "section", value_enum, default_value = "lithology")]
    pub section: Section,
}

impl SectionArgs {
    pub fn key(&self) -> SectionKey {
        SectionKey::new(self.project.trim(), self.hole.trim(), self.section)
    }
}

/// `--id` or `--row`, exactly one.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    #[arg(long = "id", help = "Interval id")]
    pub id: Option<String>,

    #[arg(long = "row", help = "1-based row number as shown by `list`")]
    pub row: Option<usize>,
}

impl TargetArgs {
    pub fn entry_ref(&self) -> EntryRef {
        match (&self.id, self.row) {
            (Some(id), _) => EntryRef::Id(id.clone()),
            (None, Some(row)) => EntryRef::Row(row),
            // clap's group guarantees one of the two
            (None, None) => EntryRef::Row(0),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Append a new interval continuing from the last one
    Add {
        #[command(flatten)]
        section: SectionArgs,
    },

    /// Edit one field of an interval
    Set {
        #[command(flatten)]
        section: SectionArgs,

        #[command(flatten)]
        target: TargetArgs,

        #[arg(long = "field", help = "Field name (see `options`)")]
        field: String,

        #[arg(long = "value", allow_hyphen_values = true, help = "New value")]
        value: String,
    },

    /// Delete an interval
    Del {
        #[command(flatten)]
        section: SectionArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show the logging table of a section
    List {
        #[command(flatten)]
        section: SectionArgs,

        #[arg(long = "json", help = "Print rows as JSON")]
        json: bool,
    },

    /// Save the section (an empty section gets its starter interval)
    Save {
        #[command(flatten)]
        section: SectionArgs,
    },

    /// List fields, or the allowed values of one field
    Options {
        field: Option<String>,

        #[arg(long = "section", value_enum, help = "Only the columns of this section")]
        section: Option<Section>,
    },

    /// Drill hole register
    Hole {
        #[command(subcommand)]
        action: HoleCommands,
    },

    /// Drilling progress overview
    Dashboard {
        #[arg(long = "search", help = "Match hole id or site id")]
        search: Option<String>,

        #[arg(long = "status", value_enum)]
        status: Option<HoleStatus>,

        #[arg(long = "location", help = "Location, e.g. \"BLOCK 4\"")]
        location: Option<String>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Export a section's intervals
    Export {
        #[command(flatten)]
        section: SectionArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum HoleCommands {
    /// Register a new hole
    Add {
        #[arg(long = "hole-no")]
        hole_no: Option<String>,

        #[arg(long = "project")]
        project: Option<String>,

        #[arg(long = "site-id", default_value = "")]
        site_id: String,

        #[arg(long = "location", default_value = "")]
        location: String,

        #[arg(long = "status", value_enum, default_value = "planned")]
        status: HoleStatus,

        #[arg(long = "country", default_value = "Ghana")]
        country: String,

        #[arg(long = "hole-type")]
        hole_type: Option<String>,

        #[arg(long = "hole-size")]
        hole_size: Option<String>,

        #[arg(long = "contractor")]
        contractor: Option<String>,

        #[arg(long = "logged-by")]
        logged_by: Option<String>,

        #[arg(long = "geologist")]
        geologist: Option<String>,

        #[arg(long = "start-date", help = "YYYY-MM-DD")]
        start_date: Option<String>,

        #[arg(long = "max-depth")]
        maximum_depth: Option<f64>,

        #[arg(long = "azimuth", allow_hyphen_values = true)]
        azimuth: Option<f64>,

        #[arg(long = "dip", allow_hyphen_values = true)]
        dip: Option<f64>,

        #[arg(long = "purpose")]
        drill_purpose: Option<String>,
    },

    /// Load holes from a register CSV
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List registered holes
    List {
        #[arg(long = "search")]
        search: Option<String>,

        #[arg(long = "status", value_enum)]
        status: Option<HoleStatus>,

        #[arg(long = "location")]
        location: Option<String>,
    },
}
