//! Headless autoplay runner (default binary).
//!
//! Drives the engine the way a game loop would: spawn, shuffle the piece around,
//! drop it, clear lines, and stop on game over. The final grid is printed with
//! crossterm colours. Timing and input are not modelled.
//!
//! Environment:
//! - `FLOOD_TETRIS_PIECES`: maximum pieces to play (default: 200)
//! - `FLOOD_TETRIS_SEED`: piece bag seed (default: 1)
//! - `FLOOD_TETRIS_LOG`: `error|warn|info|debug|trace` (default: warn)
//! - board dimensions, see `flood_tetris::core::config`

use std::env;
use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use log::{LevelFilter, Log, Metadata, Record};

use flood_tetris::core::bag::Lcg;
use flood_tetris::core::{Board, BoardConfig, Grid, Piece, PieceBag, ShapeTable};
use flood_tetris::types::{PieceKind, ROTATION_COUNT};

/// Writes records to stderr as `[flood-tetris] LEVEL target: message`
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[flood-tetris] {} {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() -> Result<()> {
    let level = env::var("FLOOD_TETRIS_LOG")
        .ok()
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    log::set_logger(&LOGGER).map_err(|e| anyhow!("logger: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let config = BoardConfig::from_env()?;
    let max_pieces = env_or("FLOOD_TETRIS_PIECES", 200)?;
    let seed = env_or("FLOOD_TETRIS_SEED", 1)?;

    let mut board = config.build(&ShapeTable::STANDARD)?;
    let summary = autoplay(&mut board, seed, max_pieces);

    let mut out = io::stdout();
    render(&mut out, board.grid())?;
    writeln!(
        out,
        "pieces: {}  lines: {}  {}",
        summary.pieces,
        summary.lines,
        if summary.game_over { "game over" } else { "stopped" }
    )?;
    out.flush()?;
    Ok(())
}

/// Read an unsigned runner setting. Unset or blank keeps the default; anything
/// else must parse.
fn env_or(var: &str, default: u32) -> Result<u32> {
    parse_setting(var, env::var(var).ok().as_deref(), default)
}

fn parse_setting(var: &str, raw: Option<&str>, default: u32) -> Result<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", var, value)),
    }
}

struct Summary {
    pieces: u32,
    lines: u32,
    game_over: bool,
}

/// Play up to `max_pieces` pieces with random rotations and shifts.
fn autoplay(board: &mut Board<'_>, seed: u32, max_pieces: u32) -> Summary {
    let mut bag = PieceBag::new(seed);
    let mut rng = Lcg::new(seed.wrapping_add(1));
    let columns = board.grid().columns() as u32;
    let mut summary = Summary {
        pieces: 0,
        lines: 0,
        game_over: false,
    };

    while summary.pieces < max_pieces {
        let mut piece = Piece::new(bag.draw());
        board.spawn(&mut piece);
        summary.pieces += 1;

        if board.is_game_over(&piece) {
            summary.game_over = true;
            break;
        }

        // Step down once so taller rotations clear the top edge.
        board.try_move(&mut piece, 0, 1);
        for _ in 0..rng.below(ROTATION_COUNT as u32) {
            board.rotate_right(&mut piece);
        }

        let shift = rng.below(columns) as i32 - (columns / 2) as i32;
        let step = shift.signum();
        for _ in 0..shift.abs() {
            if !board.try_move(&mut piece, step, 0) {
                break;
            }
        }

        board.hard_drop(&mut piece);
        summary.lines += board.clear_lines(&piece);
    }

    log::info!(
        "autoplay finished after {} pieces, {} lines",
        summary.pieces,
        summary.lines
    );
    summary
}

fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
    }
}

/// Print the grid read-only, two characters per cell.
fn render(out: &mut impl Write, grid: &Grid) -> Result<()> {
    let border = "-".repeat(grid.columns() * 2);
    queue!(out, Print(format!("+{}+\n", border)))?;
    for row in grid.rows() {
        queue!(out, Print("|"))?;
        for cell in row {
            match cell {
                Some(kind) => queue!(out, PrintStyledContent("[]".with(color(*kind))))?,
                None => queue!(out, Print(" ."))?,
            }
        }
        queue!(out, Print("|\n"))?;
    }
    queue!(out, Print(format!("+{}+\n", border)))?;
    Ok(())
}
