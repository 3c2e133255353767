use clap::{Parser, Subcommand};

/// Cadence: a reminder scheduler with compact recurrence rules
///
/// Rules: `d <n>` every n days (1-400), `y` yearly, `w <1-7,..>` on weekdays
/// (1 = Monday), `m <days> [<months>]` on days of the month (-1 = last day,
/// -2 = second-to-last), optionally only in the listed months.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Treat this YYYYMMDD date as today
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the next date of a recurrence rule
    NextDate(NextDateCommand),
    /// Add a new task
    Add(AddCommand),
    /// List upcoming tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct NextDateCommand {
    /// The date to advance from (YYYYMMDD)
    #[clap(short, long)]
    pub date: String,
    /// The recurrence rule, e.g. "d 7" or "m 1,-1"
    #[clap(short, long)]
    pub repeat: String,
    /// Reference date the result must not precede (YYYYMMDD, defaults to today)
    #[clap(short, long)]
    pub now: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The date of the task (YYYYMMDD, "today", "tomorrow", ...)
    #[clap(short, long)]
    pub date: Option<String>,
    /// A free-text comment
    #[clap(short, long)]
    pub comment: Option<String>,
    /// The recurrence rule
    #[clap(short, long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Search text, or a DD.MM.YYYY date
    #[clap(short, long)]
    pub search: Option<String>,
    /// Maximum number of tasks to show
    #[clap(short, long)]
    pub limit: Option<u32>,
    /// Print JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task
    pub id: i64,
    /// Print JSON instead of text
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, help = "New date; an overdue date given here is moved forward")]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    #[arg(long, help = "Update the recurrence rule")]
    pub repeat: Option<String>,
    #[arg(long, conflicts_with = "repeat", help = "Remove recurrence (convert to one-off task)")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Skip the confirmation prompt
    #[clap(short, long)]
    pub force: bool,
}
