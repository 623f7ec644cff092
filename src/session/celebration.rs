use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

use super::SessionContext;
use crate::output;

const GLYPHS: &[char] = &['*', '+', '\u{2022}', '~', '\u{25c6}'];

/// A fire-and-forget effect played when a session starts.
pub trait Celebration {
    fn celebrate(&self, context: &SessionContext);
}

/// Does nothing. Used when there is no terminal to draw on.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCelebration;

impl Celebration for NoCelebration {
    fn celebrate(&self, _context: &SessionContext) {}
}

/// A burst of colored confetti printed above the chat header.
#[derive(Debug, Clone, Copy)]
pub struct Confetti {
    pub particle_count: usize,
    pub spread: usize,
}

impl Default for Confetti {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70,
        }
    }
}

impl Confetti {
    /// Lays the particles out in rows at most `spread` wide, each row centered.
    pub fn rows(&self) -> Vec<String> {
        let spread = self.spread.max(1);
        let mut rows = Vec::new();
        let mut remaining = self.particle_count;
        let mut index = 0;

        while remaining > 0 {
            let width = remaining.min(spread);
            let padding = (spread - width) / 2;
            let mut row = " ".repeat(padding);
            for _ in 0..width {
                row.push(GLYPHS[index % GLYPHS.len()]);
                index += 1;
            }
            rows.push(row);
            remaining -= width;
        }

        rows
    }
}

impl Celebration for Confetti {
    fn celebrate(&self, _context: &SessionContext) {
        if output::is_quiet() || !io::stdout().is_terminal() {
            return;
        }

        let mut stdout = io::stdout().lock();
        for row in self.rows() {
            let colored: String = row
                .chars()
                .enumerate()
                .map(|(i, c)| match i % 4 {
                    0 => c.magenta().to_string(),
                    1 => c.yellow().to_string(),
                    2 => c.cyan().to_string(),
                    _ => c.green().to_string(),
                })
                .collect();
            // Cosmetic; a closed stdout is not worth reporting.
            let _ = writeln!(stdout, "{colored}");
        }
        let _ = writeln!(stdout);
    }
}
