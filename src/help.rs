use crate::terminal::Terminal;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use std::io;

/// Draw a centered help box into the back buffer
pub fn render_help_overlay(term: &mut Terminal, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let (width, height) = term.size();
    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2;

    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;

    let border = Some(Color::White);
    let text = Some(Color::Grey);

    let row = |term: &mut Terminal, y: usize, left: char, fill: char, right: char| {
        term.set(start_x as i32, y as i32, left, border);
        for x in 1..box_width - 1 {
            term.set((start_x + x) as i32, y as i32, fill, border);
        }
        term.set((start_x + box_width - 1) as i32, y as i32, right, border);
    };

    row(term, start_y, '┌', '─', '┐');
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + 1 + i;
        row(term, y, '│', ' ', '│');
        for (j, ch) in line.chars().enumerate() {
            term.set((start_x + 2 + j) as i32, y as i32, ch, text);
        }
    }
    row(term, start_y + box_height - 1, '└', '─', '┘');
}

/// Show the help box until `?` is pressed again.
/// Returns true if the user asked to quit (q/Esc) while it was open.
pub fn show_help_modal(term: &mut Terminal, help_text: &str) -> io::Result<bool> {
    if help_text.is_empty() {
        return Ok(false);
    }

    render_help_overlay(term, help_text);
    term.render()?;

    let quit = loop {
        if let Some(code) = term.wait_key(50)? {
            match code {
                KeyCode::Char('?') => break false,
                KeyCode::Char('q') | KeyCode::Esc => break true,
                _ => {}
            }
        }
    };

    // the box may extend past the grid, which never redraws there;
    // the next full frame flushes the blank cells
    term.clear();
    Ok(quit)
}
