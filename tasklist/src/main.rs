//! Terminal demo for the task list.
//!
//! Plays a short scripted session against the store, redrawing the list
//! whenever the store reports a change, then prints the final view-model as
//! JSON the way a non-Rust renderer would receive it.

use std::fmt::{self, Write};
use tasklist::{Filter, TaskListStore, TaskView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Draws the list and footer as plain text
fn render(view: &TaskView) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if view.is_empty() {
        writeln!(out, "  {}", view.empty_message())?;
    }
    for task in &view.visible_tasks {
        let mark = if task.completed { 'x' } else { ' ' };
        writeln!(out, "  [{mark}] {} (#{})", task.title, task.id)?;
    }

    write!(out, "  {} |", view.remaining_label())?;
    for filter in Filter::ALL {
        if filter == view.filter {
            write!(out, " [{}]", filter.label())?;
        } else {
            write!(out, " {}", filter.label())?;
        }
    }
    writeln!(out, " | Clear completed")?;

    Ok(out)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Task List ===\n");

    let mut store = TaskListStore::new();
    let mut changes = store.subscribe();

    let mut redraw = |store: &TaskListStore, caption: &str| -> anyhow::Result<()> {
        if changes.has_changed().unwrap_or(false) {
            changes.borrow_and_update();
            println!(">>> {caption}");
            println!("{}", render(&store.view())?);
        }
        Ok(())
    };

    println!("{}", render(&store.view())?);

    store.edit_draft("Buy milk");
    store.submit_draft();
    redraw(&store, "Submit 'Buy milk'")?;

    store.add_task("Walk dog");
    redraw(&store, "Add 'Walk dog'")?;

    store.add_task("   ");
    redraw(&store, "Add blank title (ignored)")?;

    store.add_task("Write report");
    redraw(&store, "Add 'Write report'")?;

    let Some(milk) = store.view().visible_tasks.first().map(|t| t.id) else {
        anyhow::bail!("expected 'Buy milk' to be listed first");
    };
    store.toggle_task(milk);
    redraw(&store, "Toggle 'Buy milk'")?;

    store.set_filter("active".parse()?);
    redraw(&store, "Filter: active")?;

    store.set_filter("completed".parse()?);
    redraw(&store, "Filter: completed")?;

    store.clear_completed();
    redraw(&store, "Clear completed")?;

    store.set_filter(Filter::All);
    redraw(&store, "Filter: all")?;

    println!("View-model:");
    println!("{}", serde_json::to_string_pretty(&store.view())?);

    Ok(())
}
