//! Command handlers.
//!
//! Every handler follows the same shape: open the session from the task
//! file, apply one edit event through the core, save only if the edit went
//! through, render the outcome. An error anywhere before the save leaves the
//! file exactly as it was.

use std::io::Write;

use anyhow::{bail, Context, Result};
use jiff::{civil, Zoned};
use log::{debug, warn};
use taskdb_core::{
    display::{CreateResult, DeleteResult, NumberedTask, OperationStatus, Tasks, UpdateResult},
    timestamp, Field, Session, TaskDbError,
};

use crate::{
    args::{
        row_index, AddTaskArgs, Commands, EditTaskArgs, ExportArgs, ImportArgs, NewFileArgs,
        RemoveTasksArgs, ScheduleArgs, ShowTaskArgs,
    },
    renderer::TerminalRenderer,
    store::{self, TaskFile},
};

/// Dispatches commands against one task file.
pub struct Cli {
    file: TaskFile,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(file: TaskFile, renderer: TerminalRenderer) -> Self {
        Self { file, renderer }
    }

    pub fn run(&self, command: Option<Commands>) -> Result<()> {
        match command {
            None | Some(Commands::List) => self.list(),
            Some(Commands::New(args)) => self.new_file(&args),
            Some(Commands::Add(args)) => self.add(&args),
            Some(Commands::Edit(args)) => self.edit(&args),
            Some(Commands::Schedule(args)) => self.schedule(&args),
            Some(Commands::Show(args)) => self.show(&args),
            Some(Commands::Remove(args)) => self.remove(&args),
            Some(Commands::Export(args)) => self.export(&args),
            Some(Commands::Import(args)) => self.import(&args),
        }
    }

    fn open(&self) -> Result<Session> {
        self.file.open_session().with_context(|| {
            format!(
                "Could not load {} as a TaskDB file",
                self.file.path().display()
            )
        })
    }

    fn save(&self, session: &Session) -> Result<()> {
        self.file
            .save(session)
            .with_context(|| format!("Failed to save {}", self.file.path().display()))
    }

    fn list(&self) -> Result<()> {
        let session = self.open()?;
        let output = format!("# {}\n\n{}", session.file_name(), Tasks(session.table()));
        self.renderer.render(&output)
    }

    fn new_file(&self, args: &NewFileArgs) -> Result<()> {
        if self.file.exists() && !args.force {
            bail!(
                "{} already exists; pass --force to replace it with a blank file",
                self.file.path().display()
            );
        }
        self.save(&Session::new())?;
        self.renderer.render(
            &OperationStatus::Created {
                path: self.file.path(),
            }
            .to_string(),
        )
    }

    fn add(&self, args: &AddTaskArgs) -> Result<()> {
        let mut session = self.open()?;
        let mut table = session.table_mut();
        let row = table.add_row_now();

        let edits = [
            (Field::Title, args.title.as_deref()),
            (Field::Detail, args.detail.as_deref()),
            (Field::Status, args.status.as_deref()),
        ];
        for (field, value) in edits {
            if let Some(value) = value {
                table
                    .update_field(row, field, value)
                    .map_err(reject_edit)
                    .context("Task not added")?;
            }
        }

        self.save(&session)?;
        let task = &session.table()[row];
        self.renderer
            .render(&CreateResult::new(row, task).to_string())
    }

    fn edit(&self, args: &EditTaskArgs) -> Result<()> {
        if args.is_empty() {
            bail!("Nothing to update: pass --title, --detail or --status");
        }
        let mut session = self.open()?;
        let row = row_index(args.row);

        let edits = [
            (Field::Title, args.title.as_deref()),
            (Field::Detail, args.detail.as_deref()),
            (Field::Status, args.status.as_deref()),
        ];
        let mut changes = Vec::new();
        for (field, value) in edits {
            if let Some(value) = value {
                session
                    .table_mut()
                    .update_field(row, field, value)
                    .map_err(reject_edit)?;
                changes.push(describe_change(field, value));
            }
        }

        self.save(&session)?;
        self.renderer
            .render(&UpdateResult::with_changes(row, &session.table()[row], changes).to_string())
    }

    fn schedule(&self, args: &ScheduleArgs) -> Result<()> {
        let mut session = self.open()?;
        let row = row_index(args.row);

        let value = if args.clear {
            String::new()
        } else {
            let now = Zoned::now();
            let date = args.date.unwrap_or_else(|| now.date());
            let time = args
                .time
                .unwrap_or_else(|| civil::time(now.hour(), now.minute(), 0, 0));
            timestamp::combine(date, time)
        };
        debug!("Scheduling row {} at {:?}", args.row, value);

        session
            .table_mut()
            .set_schedule(row, &value)
            .map_err(reject_edit)?;

        self.save(&session)?;
        let change = if value.is_empty() {
            "Cleared schedule".to_string()
        } else {
            format!("Schedule set to {value}")
        };
        self.renderer.render(
            &UpdateResult::with_changes(row, &session.table()[row], vec![change]).to_string(),
        )
    }

    fn show(&self, args: &ShowTaskArgs) -> Result<()> {
        let session = self.open()?;
        let index = row_index(args.row);
        let Some(task) = session.table().get(index) else {
            return Err(reject_edit(TaskDbError::OutOfRange {
                index,
                len: session.table().len(),
            }));
        };
        self.renderer
            .render(&NumberedTask::new(index, task).to_string())
    }

    fn remove(&self, args: &RemoveTasksArgs) -> Result<()> {
        let mut session = self.open()?;
        for row in &args.rows {
            session.mark(row_index(*row)).map_err(reject_edit)?;
        }

        let outcome = session.remove_marked();
        self.save(&session)?;
        self.renderer.render(&DeleteResult(outcome).to_string())
    }

    fn export(&self, args: &ExportArgs) -> Result<()> {
        let mut session = self.open()?;

        match &args.output {
            Some(path) => {
                if let Some(name) = path.file_name() {
                    session.rename(&name.to_string_lossy());
                }
                store::write_bytes(path, &session.save()?)
                    .with_context(|| format!("Failed to export to {}", path.display()))?;
                self.renderer.render(
                    &OperationStatus::Saved {
                        tasks: session.table().len(),
                        file_name: session.file_name(),
                    }
                    .to_string(),
                )
            }
            None => {
                let bytes = session.save()?;
                std::io::stdout()
                    .write_all(&bytes)
                    .context("Failed to write to stdout")
            }
        }
    }

    fn import(&self, args: &ImportArgs) -> Result<()> {
        let mut session = self.open()?;
        let bytes = store::read_bytes(&args.source)?;
        let name = args
            .source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        session.load(&name, &bytes).with_context(|| {
            format!(
                "Could not parse {} as a TaskDB file; nothing was changed",
                args.source.display()
            )
        })?;

        self.save(&session)?;
        self.renderer.render(
            &OperationStatus::Loaded {
                file_name: &name,
                tasks: session.table().len(),
                target: self.file.path(),
            }
            .to_string(),
        )
    }
}

/// Logs a rejected edit and turns it into the command's error.
fn reject_edit(err: TaskDbError) -> anyhow::Error {
    if err.is_edit_error() {
        warn!("Edit rejected: {err}");
    }
    anyhow::Error::new(err)
}

fn describe_change(field: Field, value: &str) -> String {
    if field == Field::Status {
        format!("Status set to {value}")
    } else {
        format!("Updated {}", field.name())
    }
}
