//! The `cubist` subcommands.
//!
//! Each command writes its result to the given writer so stdout stays
//! machine-readable; diagnostics go through `tracing` to stderr.

use cubist_facelets::{assemble, render_net, CaptureRecord, Color, Face, FaceletState, NetStyle};
use cubist_playback::{solve_into_cursor, PlaybackCursor, RecordedSolver, SolverOutput};
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// One entry of a capture file, grid given as color names.
#[derive(Debug, Deserialize)]
struct CaptureEntry {
    face: Face,
    top: Color,
    grid: Vec<Vec<String>>,
}

pub fn show<W: Write>(facelets: &str, style: NetStyle, out: &mut W) -> CliResult<()> {
    let state: FaceletState = facelets.parse()?;
    write!(out, "{}", render_net(&state, style))?;
    if state.is_solved() {
        writeln!(out, "solved")?;
    }
    Ok(())
}

/// Read a capture file and assemble it into a facelet state.
pub fn assemble_file(path: &Path) -> CliResult<FaceletState> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<CaptureEntry> = serde_json::from_str(&text)?;
    let records = entries
        .into_iter()
        .map(|entry| CaptureRecord::from_names(entry.face, entry.top, &entry.grid))
        .collect::<Result<Vec<_>, _>>()?;
    let state = assemble(&records)?;
    info!(captures = records.len(), "assembled cube");
    Ok(state)
}

pub fn quads<W: Write>(facelets: &str, out: &mut W) -> CliResult<()> {
    let state: FaceletState = facelets.parse()?;
    let quads = cubist_render::project(&state);
    serde_json::to_writer_pretty(&mut *out, &quads)?;
    writeln!(out)?;
    Ok(())
}

fn print_frame<W: Write>(
    cursor: &PlaybackCursor,
    style: NetStyle,
    status: &str,
    phase: &str,
    out: &mut W,
) -> CliResult<()> {
    write!(out, "{}", render_net(cursor.state(), style))?;
    writeln!(out, "{status}")?;
    if !phase.is_empty() {
        writeln!(out, "{phase}")?;
    }
    writeln!(out, "{}", cursor.solution_listing())?;
    Ok(())
}

/// Step through a recorded solution driven by `n`/`p`/`q` lines on `input`.
pub fn play<R: BufRead, W: Write>(
    facelets: &str,
    solution: &Path,
    style: NetStyle,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    let state: FaceletState = facelets.parse()?;
    let output: SolverOutput = serde_json::from_str(&std::fs::read_to_string(solution)?)?;
    let mut cursor = solve_into_cursor(&RecordedSolver::new(output), state)?;
    info!(moves = cursor.len(), "loaded solution");

    let opening = format!("Move 0/{}", cursor.len());
    print_frame(&cursor, style, &opening, "", out)?;

    for line in input.lines() {
        let step = match line?.trim() {
            "n" | "next" => cursor.step_forward(),
            "p" | "prev" => cursor.step_backward(),
            "q" | "quit" => break,
            "" => continue,
            other => {
                writeln!(out, "unknown key {other:?}: n next, p previous, q quit")?;
                continue;
            }
        };
        match step {
            Ok(report) => print_frame(&cursor, style, &report.message(), &report.phase_line(), out)?,
            Err(err) if err.is_boundary() => {
                warn!(%err, "step ignored");
                writeln!(out, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
