use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(about = "Personal task inbox stored as a markdown file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the inbox
    #[command(alias = "a")]
    Add {
        /// What needs doing (single line)
        description: String,

        /// Priority: high, medium, or low
        #[arg(short, long)]
        priority: Option<String>,

        /// Tag the task (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Due date: YYYY-MM-DD, YYYY-MM-DDTHH:MM, today, or tomorrow
        #[arg(short, long)]
        due: Option<String>,
    },

    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Narrow to one collection: open or completed
        #[arg(short, long)]
        status: Option<String>,

        /// Only tasks carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only tasks with this priority
        #[arg(short, long)]
        priority: Option<String>,

        /// Stop after this many tasks
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },

    /// Search task descriptions (case-insensitive substring)
    Search {
        query: String,

        /// Emit JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },

    /// Complete a task (moves it to the Completed section)
    #[command(alias = "d")]
    Done {
        /// Task id (8 chars, shown by list)
        id: String,
    },

    /// Delete a task permanently
    #[command(alias = "rm")]
    Delete {
        /// Task id
        id: String,
    },

    /// Edit fields of a task; only the flags you pass are changed
    #[command(alias = "e")]
    Edit {
        /// Task id
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority: high, medium, or low
        #[arg(short, long)]
        priority: Option<String>,

        /// Replace the tag set (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Remove every tag
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        /// New due date
        #[arg(short, long)]
        due: Option<String>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,
    },

    /// Replace a task with subtasks that reference it as parent
    Split {
        /// Id of the task to decompose (inbox only)
        id: String,

        /// One description per subtask
        #[arg(required = true, num_args = 1..)]
        descriptions: Vec<String>,
    },

    /// Print the path of the document file
    Path,
}
