//! Drivers: the fixed-cadence interactive loop and headless printing

use crate::fire::entropy::Entropy;
use crate::fire::FireSim;
use crate::help::show_help_modal;
use crate::input::{action_for, Action, HELP};
use crate::terminal::Terminal;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Driver state that lives outside the simulation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverState {
    pub paused: bool,
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowHelp,
    Quit,
}

/// Apply one input action between ticks
pub fn apply<E: Entropy>(sim: &mut FireSim<E>, state: &mut DriverState, action: Action) -> Flow {
    match action {
        Action::ToggleSource => sim.toggle_source(),
        Action::IncreaseSource => sim.increase_source(),
        Action::DecreaseSource => sim.decrease_source(),
        Action::TogglePause => {
            state.paused = !state.paused;
            debug!(paused = state.paused, "pause toggled");
        }
        Action::Resize(w, h) => debug!(w, h, "terminal resized"),
        Action::ShowHelp => return Flow::ShowHelp,
        Action::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Run the animation until the user quits: input, tick, render, sleep
pub fn play<E: Entropy>(term: &mut Terminal, sim: &mut FireSim<E>, frame: Duration) -> io::Result<()> {
    let mut state = DriverState::default();
    info!(
        width = sim.grid().width(),
        height = sim.grid().height(),
        edge = ?sim.edge_policy(),
        frame_ms = frame.as_millis() as u64,
        "fire started"
    );

    'frames: loop {
        let started = Instant::now();

        while let Some(event) = term.poll_event()? {
            let Some(action) = action_for(&event) else { continue };
            if let Action::Resize(w, h) = action {
                term.resize(w, h);
                term.clear_screen()?;
            }
            match apply(sim, &mut state, action) {
                Flow::Continue => {}
                Flow::ShowHelp => {
                    if show_help_modal(term, HELP)? {
                        break 'frames;
                    }
                }
                Flow::Quit => break 'frames,
            }
        }

        if !state.paused {
            sim.tick();
        }
        sim.render(term);
        term.render()?;

        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            term.sleep(rest);
        }
    }

    info!(ticks = sim.ticks(), "fire stopped");
    Ok(())
}

/// Run `ticks` ticks without a terminal and write the final frame as ANSI text
pub fn print_frame<E: Entropy>(sim: &mut FireSim<E>, ticks: u32, pixel_size: u32, out: &mut impl Write) -> io::Result<()> {
    for _ in 0..ticks {
        sim.tick();
    }

    let cols = screen_extent(sim.grid().width(), pixel_size);
    let rows = screen_extent(sim.grid().height(), pixel_size);
    let mut term = Terminal::headless(cols, rows);
    sim.render(&mut term);
    term.write_ansi(out)?;

    info!(ticks = sim.ticks(), burning = sim.is_burning(), "frame printed");
    Ok(())
}

fn screen_extent(cells: usize, pixel_size: u32) -> u16 {
    let extent = cells.saturating_mul(pixel_size as usize);
    u16::try_from(extent).unwrap_or(u16::MAX)
}
