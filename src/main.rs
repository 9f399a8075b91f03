use chrono::{Days, Local};
use clap::Parser;
use colored::Colorize;
use taskpad::api::TaskApi;
use taskpad::commands::{ListFilter, StatusFilter, TaskDraft, TaskPatch};
use taskpad::config;
use taskpad::error::{Result, TaskpadError};
use taskpad::model::Priority;
use taskpad::store::fs::FileStore;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_task_line, print_tasks, print_tasks_json};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = config::base_dir();
    let api = TaskApi::new(FileStore::new(&base_dir));

    match cli.command {
        Some(Commands::Add {
            description,
            priority,
            tags,
            due,
        }) => handle_add(&api, description, priority, tags, due),
        Some(Commands::List {
            status,
            tag,
            priority,
            limit,
            json,
        }) => handle_list(&api, status, tag, priority, limit, json),
        Some(Commands::Search { query, json }) => handle_search(&api, &query, json),
        Some(Commands::Done { id }) => handle_done(&api, &id),
        Some(Commands::Delete { id }) => handle_delete(&api, &id),
        Some(Commands::Edit {
            id,
            description,
            priority,
            tags,
            clear_tags,
            due,
            clear_due,
        }) => handle_edit(&api, &id, description, priority, tags, clear_tags, due, clear_due),
        Some(Commands::Split { id, descriptions }) => handle_split(&api, &id, descriptions),
        Some(Commands::Path) => {
            println!("{}", FileStore::new(&base_dir).document_path().display());
            Ok(())
        }
        None => handle_list(&api, None, None, None, None, false),
    }
}

/// `today` and `tomorrow` are CLI sugar; anything else is passed through
/// and validated by the core.
fn normalize_due(raw: &str) -> String {
    let today = Local::now().date_naive();
    match raw {
        "today" => today.format("%Y-%m-%d").to_string(),
        "tomorrow" => (today + Days::new(1)).format("%Y-%m-%d").to_string(),
        other => other.to_string(),
    }
}

fn parse_status(raw: &str) -> Result<StatusFilter> {
    raw.parse().map_err(TaskpadError::Store)
}

fn handle_add(
    api: &TaskApi<FileStore>,
    description: String,
    priority: Option<String>,
    tags: Vec<String>,
    due: Option<String>,
) -> Result<()> {
    let mut draft = TaskDraft::new(description).with_tags(tags);
    if let Some(p) = priority {
        draft = draft.with_priority(p.parse::<Priority>()?);
    }
    if let Some(d) = due {
        draft = draft.with_due(normalize_due(&d));
    }

    let task = api.add(draft)?;
    println!("{} {}", "Added:".green(), task.id.dimmed());
    print_task_line(&task);
    Ok(())
}

fn handle_list(
    api: &TaskApi<FileStore>,
    status: Option<String>,
    tag: Option<String>,
    priority: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let filter = ListFilter {
        status: status.as_deref().map(parse_status).transpose()?,
        tag,
        priority: priority.as_deref().map(str::parse).transpose()?,
        limit,
    };

    let tasks = api.list(&filter)?;
    if json {
        print_tasks_json(&tasks)
    } else {
        print_tasks(&tasks);
        Ok(())
    }
}

fn handle_search(api: &TaskApi<FileStore>, query: &str, json: bool) -> Result<()> {
    let tasks = api.search(query)?;
    if json {
        print_tasks_json(&tasks)
    } else {
        print_tasks(&tasks);
        Ok(())
    }
}

fn handle_done(api: &TaskApi<FileStore>, id: &str) -> Result<()> {
    let task = api.complete(id)?;
    println!("{} {}", "Completed:".green(), task.description);
    Ok(())
}

fn handle_delete(api: &TaskApi<FileStore>, id: &str) -> Result<()> {
    api.delete(id)?;
    println!("{} {}", "Deleted:".green(), id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    api: &TaskApi<FileStore>,
    id: &str,
    description: Option<String>,
    priority: Option<String>,
    tags: Vec<String>,
    clear_tags: bool,
    due: Option<String>,
    clear_due: bool,
) -> Result<()> {
    let patch = TaskPatch {
        description,
        priority: priority.as_deref().map(str::parse).transpose()?,
        tags: if clear_tags {
            Some(Vec::new())
        } else if tags.is_empty() {
            None
        } else {
            Some(tags)
        },
        due: if clear_due {
            Some(None)
        } else {
            due.map(|d| Some(normalize_due(&d)))
        },
    };

    if patch.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    let task = api.update(id, &patch)?;
    println!("{}", "Updated:".green());
    print_task_line(&task);
    Ok(())
}

fn handle_split(api: &TaskApi<FileStore>, id: &str, descriptions: Vec<String>) -> Result<()> {
    let subtasks = api.split(id, &descriptions)?;
    println!(
        "{} {} replaced by {} subtask(s):",
        "Split:".green(),
        id.dimmed(),
        subtasks.len()
    );
    for task in &subtasks {
        print_task_line(task);
    }
    Ok(())
}
