use colored::Colorize;
use taskpad::error::Result;
use taskpad::model::{Priority, Task};

pub fn print_task_line(task: &Task) {
    let checkbox = if task.completed {
        "[x]".green().to_string()
    } else {
        "[ ]".normal().to_string()
    };
    let mut line = format!("{} {} {}", task.id.dimmed(), checkbox, task.description);

    if let Some(due) = &task.due {
        line.push_str(&format!(" {}", format!("@{due}").cyan()));
    }
    for tag in &task.tags {
        line.push_str(&format!(" {}", format!("#{tag}").yellow()));
    }
    match task.priority {
        Priority::High => line.push_str(&format!(" {}", "!high".red())),
        Priority::Low => line.push_str(&format!(" {}", "!low".dimmed())),
        Priority::Medium => {}
    }
    println!("{line}");
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for task in tasks {
        print_task_line(task);
    }
}

pub fn print_tasks_json(tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)
        .map_err(|e| taskpad::error::TaskpadError::Store(e.to_string()))?;
    println!("{json}");
    Ok(())
}
