//! Command handlers: each one drives the form controller through a single
//! interaction and renders the resulting snapshot.

use super::render::{print_field_errors, print_records, print_snapshot_json, print_success};
use super::setup::AppContext;
use anyhow::{anyhow, bail};
use regbookapp::error::RegbookError;
use regbookapp::form::SubmitOutcome;
use regbookapp::model::Field;

pub fn list(ctx: &AppContext) -> anyhow::Result<()> {
    if ctx.json {
        return print_snapshot_json(&ctx.form.snapshot());
    }
    print_records(ctx.form.records());
    Ok(())
}

pub fn add(ctx: &mut AppContext, values: Vec<(Field, String)>) -> anyhow::Result<()> {
    apply(ctx, values);
    submit(ctx)
}

pub fn edit(ctx: &mut AppContext, index: u64, values: Vec<(Field, String)>) -> anyhow::Result<()> {
    let position = to_position(ctx, index)?;
    ctx.form
        .start_edit(position)
        .map_err(|e| describe_index_error(e, index))?;
    apply(ctx, values);
    submit(ctx)
}

pub fn delete(ctx: &mut AppContext, index: u64) -> anyhow::Result<()> {
    let position = to_position(ctx, index)?;
    let removed = ctx
        .form
        .delete(position)
        .map_err(|e| describe_index_error(e, index))?;

    if ctx.json {
        return print_snapshot_json(&ctx.form.snapshot());
    }
    print_success(&format!("Record deleted ({}): {}", index, removed.name));
    Ok(())
}

pub fn end_session(ctx: &AppContext) -> anyhow::Result<()> {
    let records = ctx.form.record_store();
    let storage = records.storage();
    storage.clear(records.key())?;
    print_success(&format!("Session ended: {}", storage.root().display()));
    Ok(())
}

fn apply(ctx: &mut AppContext, values: Vec<(Field, String)>) {
    for (field, value) in values {
        ctx.form.on_field_change(field, value);
    }
}

fn submit(ctx: &mut AppContext) -> anyhow::Result<()> {
    // Name is read before submit resets the draft.
    let name = ctx.form.draft().name.clone();
    let outcome = ctx.form.submit()?;

    if ctx.json {
        print_snapshot_json(&ctx.form.snapshot())?;
    } else {
        match outcome {
            SubmitOutcome::Created(pos) => {
                print_success(&format!("Record added ({}): {}", pos + 1, name))
            }
            SubmitOutcome::Updated(pos) => {
                print_success(&format!("Record updated ({}): {}", pos + 1, name))
            }
            SubmitOutcome::Rejected => print_field_errors(ctx.form.errors()),
        }
    }

    if outcome == SubmitOutcome::Rejected {
        bail!(
            "record not saved: {} field(s) need attention",
            ctx.form.errors().len()
        );
    }
    Ok(())
}

/// Converts a 1-based display index into a list position.
fn to_position(ctx: &AppContext, index: u64) -> anyhow::Result<usize> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(|| no_record(index, ctx.form.records().len()))
}

fn no_record(index: u64, len: usize) -> anyhow::Error {
    anyhow!("no record at index {} ({} stored)", index, len)
}

fn describe_index_error(err: RegbookError, index: u64) -> anyhow::Error {
    match err {
        RegbookError::IndexOutOfRange { len, .. } => no_record(index, len),
        other => other.into(),
    }
}
