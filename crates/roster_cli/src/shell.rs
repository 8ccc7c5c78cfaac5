//! Line-oriented interactive session.
//!
//! Row numbers refer to the current view, so `select 1` picks the first row
//! as displayed after search and sort. Changes stay in memory until `save`.

use crate::render::write_table;
use anyhow::Result;
use roster_core::{EditorController, RecordColumn};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  list                      show the current view
  search [TEXT]             filter rows (no text clears the filter)
  sort COLUMN [asc|desc]    sort by name, department, year or course
  unsort                    restore file order
  select ROW | none         select a row of the current view
  set COLUMN VALUE          edit one form field
  form                      show the form fields
  add | update | delete     apply the form to the records
  save                      write all records to the data file
  help | quit";

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(editor: &mut EditorController, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "type `help` for commands")?;
    for line in input.lines() {
        let line = line?;
        let (command, rest) = split_command(&line);
        match command {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }
        if let Err(err) = dispatch(editor, command, rest, out) {
            writeln!(out, "error: {err}")?;
        }
    }
    Ok(())
}

fn dispatch<W: Write>(
    editor: &mut EditorController,
    command: &str,
    rest: &str,
    out: &mut W,
) -> Result<()> {
    match command {
        "help" => writeln!(out, "{HELP}")?,
        "list" => print_view(editor, out)?,
        "search" => {
            editor.set_search_text(rest);
            print_view(editor, out)?;
        }
        "sort" => {
            let (column, direction) = split_command(rest);
            let column = column.parse::<RecordColumn>()?;
            let ascending = match direction.trim() {
                "" | "asc" => true,
                "desc" => false,
                other => anyhow::bail!("unknown direction `{other}`; expected asc|desc"),
            };
            editor.set_sort(column, ascending);
            print_view(editor, out)?;
        }
        "unsort" => {
            editor.clear_sort();
            print_view(editor, out)?;
        }
        "select" => select(editor, rest.trim(), out)?,
        "set" => {
            let (column, value) = split_command(rest);
            editor.set_input(column.parse::<RecordColumn>()?, value);
        }
        "form" => {
            for column in RecordColumn::ALL {
                writeln!(out, "{:<10} {}", column.title(), editor.inputs().get(column))?;
            }
        }
        "add" => {
            editor.add()?;
            writeln!(out, "added")?;
        }
        "update" => {
            editor.update()?;
            writeln!(out, "updated")?;
        }
        "delete" => {
            editor.delete()?;
            writeln!(out, "deleted")?;
        }
        "save" => {
            let count = editor.save()?;
            writeln!(
                out,
                "Data saved to {} ({count} records)",
                editor.record_file().path().display()
            )?;
        }
        other => anyhow::bail!("unknown command `{other}`; type `help`"),
    }
    Ok(())
}

fn select<W: Write>(editor: &mut EditorController, arg: &str, out: &mut W) -> Result<()> {
    if arg == "none" {
        editor.select(None)?;
        return Ok(());
    }
    let row = arg
        .parse::<usize>()
        .map_err(|_| anyhow::anyhow!("expected a row number or `none`, got `{arg}`"))?;
    let id = row
        .checked_sub(1)
        .and_then(|index| editor.view().get(index).map(|record| record.id))
        .ok_or_else(|| anyhow::anyhow!("no row {row} in the current view"))?;
    editor.select(Some(id))?;
    let inputs = editor.inputs();
    writeln!(
        out,
        "selected {}, {}, {}, {}",
        inputs.name, inputs.department, inputs.year, inputs.course
    )?;
    Ok(())
}

fn print_view<W: Write>(editor: &EditorController, out: &mut W) -> Result<()> {
    let rows = editor
        .view()
        .into_iter()
        .enumerate()
        .map(|(index, record)| (index + 1, record))
        .collect::<Vec<_>>();
    write_table(out, &rows)?;
    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line.trim_end(), ""),
    }
}
