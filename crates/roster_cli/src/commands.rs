//! One-shot subcommands. Every mutating command saves before returning.

use crate::cli::{AddArgs, DeleteArgs, ListArgs, UpdateArgs};
use crate::render::write_table;
use anyhow::{bail, Context, Result};
use roster_core::{EditorController, Record, RecordFields, RecordId};
use std::io::Write;

pub fn list<W: Write>(editor: &mut EditorController, args: &ListArgs, out: &mut W) -> Result<()> {
    if let Some(text) = &args.search {
        editor.set_search_text(text.as_str());
    }
    if let Some(column) = args.sort {
        editor.set_sort(column, !args.desc);
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &editor.view())
            .context("failed to encode records")?;
        writeln!(out)?;
        return Ok(());
    }

    write_table(out, &labelled_rows(editor))?;
    Ok(())
}

/// Current view rows labelled with their 1-based store position.
fn labelled_rows(editor: &EditorController) -> Vec<(usize, &Record)> {
    editor
        .view()
        .into_iter()
        .map(|record| (store_position(editor, record.id), record))
        .collect()
}

pub fn add<W: Write>(editor: &mut EditorController, args: AddArgs, out: &mut W) -> Result<()> {
    editor.set_inputs(RecordFields::new(
        args.name,
        args.department,
        args.year,
        args.course,
    ));
    editor.add()?;
    let position = editor.store().len();
    save(editor, out)?;
    writeln!(out, "added record {position}")?;
    Ok(())
}

pub fn update<W: Write>(
    editor: &mut EditorController,
    args: &UpdateArgs,
    out: &mut W,
) -> Result<()> {
    let id = resolve_position(editor, args.position)?;
    editor.select(Some(id))?;
    for (column, value) in args.overrides() {
        editor.set_input(column, value);
    }
    editor.update()?;
    save(editor, out)?;
    writeln!(out, "updated record {}", args.position)?;
    Ok(())
}

pub fn delete<W: Write>(editor: &mut EditorController, args: &DeleteArgs, out: &mut W) -> Result<()> {
    let id = resolve_position(editor, args.position)?;
    editor.select(Some(id))?;
    editor.delete()?;
    save(editor, out)?;
    writeln!(out, "deleted record {}", args.position)?;
    Ok(())
}

fn save<W: Write>(editor: &EditorController, out: &mut W) -> Result<()> {
    let count = editor.save()?;
    writeln!(
        out,
        "saved {count} records to {}",
        editor.record_file().path().display()
    )?;
    Ok(())
}

fn resolve_position(editor: &EditorController, position: usize) -> Result<RecordId> {
    let Some(record) = position
        .checked_sub(1)
        .and_then(|index| editor.store().all().get(index))
    else {
        bail!(
            "no record at position {position} (store holds {})",
            editor.store().len()
        );
    };
    Ok(record.id)
}

fn store_position(editor: &EditorController, id: RecordId) -> usize {
    editor.store().position(id).map_or(0, |index| index + 1)
}
