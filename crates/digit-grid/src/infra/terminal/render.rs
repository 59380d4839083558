//! Draws a `Board` with crossterm.

use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::domain::Color;
use crate::infra::terminal::board::Board;
use crate::usecases::ports::RefreshStatus;

const ORIGIN_COL: u16 = 2;
const ORIGIN_ROW: u16 = 2;
/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;
const UNPAINTED: &str = "··";

pub struct ViewHeader<'a> {
    pub endpoint: &'a str,
    pub policy: &'a str,
}

/// Overwrites the previous frame in place. Variable-width lines clear their tail.
pub fn draw_board(out: &mut impl Write, board: &Board, header: &ViewHeader<'_>) -> io::Result<()> {
    let (rows, cols) = board.size();
    queue!(
        out,
        cursor::MoveTo(0, 0),
        style::SetAttribute(style::Attribute::Bold),
        style::Print("digit-grid"),
        style::SetAttribute(style::Attribute::Reset),
        style::Print(format!("  {}  (overlap: {})", header.endpoint, header.policy)),
        terminal::Clear(terminal::ClearType::UntilNewLine),
    )?;

    for row in 0..rows {
        queue!(out, cursor::MoveTo(ORIGIN_COL, ORIGIN_ROW + row as u16))?;
        for col in 0..cols {
            draw_cell(out, board.color(row, col))?;
        }
    }

    let side_col = ORIGIN_COL + CELL_WIDTH * cols as u16 + 3;
    queue!(
        out,
        cursor::MoveTo(side_col, ORIGIN_ROW),
        style::Print("target: "),
        style::SetAttribute(style::Attribute::Bold),
        style::Print(board.label()),
        style::SetAttribute(style::Attribute::Reset),
        terminal::Clear(terminal::ClearType::UntilNewLine),
    )?;

    let footer_row = ORIGIN_ROW + rows as u16 + 1;
    queue!(out, cursor::MoveTo(ORIGIN_COL, footer_row))?;
    draw_status(out, board.status())?;
    queue!(
        out,
        terminal::Clear(terminal::ClearType::UntilNewLine),
        cursor::MoveTo(ORIGIN_COL, footer_row + 1),
        style::SetForegroundColor(style::Color::DarkGrey),
        style::Print("r/enter/space: refresh   q/esc: quit"),
        style::ResetColor,
    )?;
    out.flush()
}

fn draw_cell(out: &mut impl Write, color: Option<&Color>) -> io::Result<()> {
    match color.and_then(Color::rgb) {
        Some((r, g, b)) => queue!(
            out,
            style::SetBackgroundColor(style::Color::Rgb { r, g, b }),
            style::Print(" ".repeat(CELL_WIDTH as usize)),
            style::ResetColor,
        ),
        None => queue!(
            out,
            style::SetForegroundColor(style::Color::DarkGrey),
            style::Print(UNPAINTED),
            style::ResetColor,
        ),
    }
}

fn draw_status(out: &mut impl Write, status: &RefreshStatus) -> io::Result<()> {
    let color = match status {
        RefreshStatus::Idle | RefreshStatus::Ready => style::Color::DarkGrey,
        RefreshStatus::Loading => style::Color::Yellow,
        RefreshStatus::Failed(_) => style::Color::Red,
    };
    queue!(
        out,
        style::SetForegroundColor(color),
        style::Print(status.to_string()),
        style::ResetColor,
    )
}
