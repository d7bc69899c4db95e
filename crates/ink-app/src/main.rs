// ABOUTME: Command-line editor for inkgrid panel layouts.
// ABOUTME: Dispatches project and page-editing commands over the store and engine.

mod sketch;

use std::env;

use anyhow::{bail, Context, Result};
use ink_core::EditorConfig;
use ink_grid::{GridLayout, PanelId, SplitDirection};
use ink_render::frame_numbers;
use ink_store::{Project, ProjectId, ProjectStore};
use uuid::Uuid;

fn print_help() {
    println!(
        r#"inkgrid - panel layout editor

Commands:
  new <title>                          create a project with one empty page
  list                                 list stored projects
  show <project> [page]                print a page's layout sketch
  delete <project>                     delete a project
  add-page <project>                   append an empty page
  split <project> <page> <frame> h|v   split a panel horizontally or vertically
  merge <project> <page> <a> <b>       merge two adjacent panels (keeps a's content)
  rows <project> <page> <h1,h2,...>    set row heights (any units, normalized)
  widths <project> <page> <row> <w1,w2,...>
                                       set panel widths within a row
  delete-row <project> <page> <row>    delete a row, sharing its height

Projects are addressed by title or id; panels by frame number as shown
in the sketch; pages and rows are 1-indexed."#
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let store = ProjectStore::open_default()?;
    let config = EditorConfig::load_or_default();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["new", title] => cmd_new(&store, title),
        ["list"] => cmd_list(&store),
        ["show", project] => cmd_show(&store, project, 1),
        ["show", project, page] => cmd_show(&store, project, parse_index(page, "page")?),
        ["delete", project] => cmd_delete(&store, project),
        ["add-page", project] => cmd_add_page(&store, project),
        ["split", project, page, frame, direction] => cmd_split(
            &store,
            &config,
            project,
            parse_index(page, "page")?,
            parse_index(frame, "frame")?,
            parse_direction(direction)?,
        ),
        ["merge", project, page, a, b] => cmd_merge(
            &store,
            project,
            parse_index(page, "page")?,
            parse_index(a, "frame")?,
            parse_index(b, "frame")?,
        ),
        ["rows", project, page, heights] => cmd_rows(
            &store,
            project,
            parse_index(page, "page")?,
            &parse_floats(heights)?,
        ),
        ["widths", project, page, row, widths] => cmd_widths(
            &store,
            project,
            parse_index(page, "page")?,
            parse_index(row, "row")?,
            &parse_floats(widths)?,
        ),
        ["delete-row", project, page, row] => cmd_delete_row(
            &store,
            project,
            parse_index(page, "page")?,
            parse_index(row, "row")?,
        ),
        _ => {
            print_help();
            Ok(())
        }
    }
}

fn cmd_new(store: &ProjectStore, title: &str) -> Result<()> {
    let project = Project::new(title);
    store.save(&project)?;
    tracing::info!("Created project '{}' ({})", project.title, project.id);
    println!("{}", project.id);
    Ok(())
}

fn cmd_list(store: &ProjectStore) -> Result<()> {
    let summaries = store.list()?;
    if summaries.is_empty() {
        println!("No projects");
        return Ok(());
    }
    for summary in summaries {
        println!(
            "{}  {:<24} {} page(s)",
            summary.id, summary.title, summary.page_count
        );
    }
    Ok(())
}

fn cmd_show(store: &ProjectStore, project_ref: &str, page: usize) -> Result<()> {
    let project = resolve_project(store, project_ref)?;
    let grid = page_grid(&project, page)?;
    println!(
        "{} / {} ({} frames)",
        project.title,
        project.pages[page - 1].name,
        grid.leaf_panel_ids().len()
    );
    print!("{}", sketch::render(grid));
    Ok(())
}

fn cmd_delete(store: &ProjectStore, project_ref: &str) -> Result<()> {
    let project = resolve_project(store, project_ref)?;
    store.delete(project.id)?;
    println!("Deleted '{}'", project.title);
    Ok(())
}

fn cmd_add_page(store: &ProjectStore, project_ref: &str) -> Result<()> {
    let mut project = resolve_project(store, project_ref)?;
    project.add_page();
    project.touch();
    store.save(&project)?;
    println!("{} now has {} page(s)", project.title, project.pages.len());
    Ok(())
}

fn cmd_split(
    store: &ProjectStore,
    config: &EditorConfig,
    project_ref: &str,
    page: usize,
    frame: usize,
    direction: SplitDirection,
) -> Result<()> {
    edit_grid(store, project_ref, page, |grid| {
        let id = frame_panel_id(grid, frame)?;
        Ok(match direction {
            SplitDirection::Horizontal => grid.split_horizontal(id, &config.limits),
            SplitDirection::Vertical => grid.split_vertical(id, &config.limits),
        })
    })
}

fn cmd_merge(
    store: &ProjectStore,
    project_ref: &str,
    page: usize,
    a: usize,
    b: usize,
) -> Result<()> {
    edit_grid(store, project_ref, page, |grid| {
        let first = frame_panel_id(grid, a)?;
        let second = frame_panel_id(grid, b)?;
        Ok(grid.merge_panels(first, second))
    })
}

fn cmd_rows(store: &ProjectStore, project_ref: &str, page: usize, heights: &[f32]) -> Result<()> {
    edit_grid(store, project_ref, page, |grid| Ok(grid.resize_rows(heights)))
}

fn cmd_widths(
    store: &ProjectStore,
    project_ref: &str,
    page: usize,
    row: usize,
    widths: &[f32],
) -> Result<()> {
    edit_grid(store, project_ref, page, |grid| {
        let target = grid
            .rows
            .get(row - 1)
            .with_context(|| format!("page has only {} row(s)", grid.rows.len()))?;
        Ok(grid.resize_row_panels(target.id, widths))
    })
}

fn cmd_delete_row(store: &ProjectStore, project_ref: &str, page: usize, row: usize) -> Result<()> {
    edit_grid(store, project_ref, page, |grid| {
        let target = grid
            .rows
            .get(row - 1)
            .with_context(|| format!("page has only {} row(s)", grid.rows.len()))?;
        Ok(grid.delete_row(target.id))
    })
}

/// Load, edit one page's grid, report whether anything changed, and save.
fn edit_grid(
    store: &ProjectStore,
    project_ref: &str,
    page: usize,
    edit: impl FnOnce(&GridLayout) -> Result<GridLayout>,
) -> Result<()> {
    let mut project = resolve_project(store, project_ref)?;
    let grid = page_grid(&project, page)?;
    let next = edit(grid)?;
    if next == *grid {
        // Engine operations fail quiet; surface that to the user
        println!("No change");
        return Ok(());
    }
    print!("{}", sketch::render(&next));
    project.pages[page - 1].grid = next;
    project.touch();
    store.save(&project)?;
    Ok(())
}

fn resolve_project(store: &ProjectStore, project_ref: &str) -> Result<Project> {
    let id: ProjectId = match project_ref.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => store
            .find_by_title(project_ref)?
            .with_context(|| format!("no project titled '{project_ref}'"))?,
    };
    Ok(store.load(id)?)
}

fn page_grid(project: &Project, page: usize) -> Result<&GridLayout> {
    let page = project
        .pages
        .get(page.wrapping_sub(1))
        .with_context(|| format!("project has only {} page(s)", project.pages.len()))?;
    Ok(&page.grid)
}

fn frame_panel_id(grid: &GridLayout, frame: usize) -> Result<PanelId> {
    frame_numbers(grid)
        .into_iter()
        .find(|(_, n)| *n as usize == frame)
        .map(|(id, _)| id)
        .with_context(|| format!("no frame {frame} on this page"))
}

fn parse_index(value: &str, what: &str) -> Result<usize> {
    let parsed: usize = value
        .parse()
        .with_context(|| format!("invalid {what} number '{value}'"))?;
    if parsed == 0 {
        bail!("{what} numbers start at 1");
    }
    Ok(parsed)
}

fn parse_floats(value: &str) -> Result<Vec<f32>> {
    value
        .split(',')
        .map(|part| {
            let parsed: f32 = part
                .trim()
                .parse()
                .with_context(|| format!("invalid value '{part}'"))?;
            if !parsed.is_finite() {
                bail!("value '{part}' is not a finite number");
            }
            Ok(parsed)
        })
        .collect()
}

fn parse_direction(value: &str) -> Result<SplitDirection> {
    match value {
        "h" | "horizontal" => Ok(SplitDirection::Horizontal),
        "v" | "vertical" => Ok(SplitDirection::Vertical),
        other => bail!("direction must be h or v, got '{other}'"),
    }
}
