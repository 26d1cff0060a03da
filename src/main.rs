use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use roster::Roster;
use shell::ConsoleShell;
use terminal_monster_arena::Game;

fn main() -> Result<()> {
    execute!(
        io::stdout(),
        SetForegroundColor(Color::Magenta),
        Print("=== Terminal Monster Arena ===\n"),
        ResetColor,
    )
    .context("Failed to print banner")?;

    let mut shell = ConsoleShell::new();
    let mut game = Game::new(Roster::defaults());
    game.run(&mut shell).context("Session loop failed")?;

    Ok(())
}
