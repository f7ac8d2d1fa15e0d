//! Color themes for the board.
//!
//! A theme keeps two ordered shade lists: `alive` shades indexed by how long
//! a cell has lived, `dead` shades by how long it has been dead. Once a
//! streak outgrows the list the last alive shade (or the background, for
//! dead cells) is used, so long-settled areas fade into the backdrop.

use ratatui::style::Color;

#[derive(Debug, Clone)]
struct Theme {
    name: &'static str,
    background: Color,
    foreground: Color,
    alive: Vec<Color>,
    dead: Vec<Color>,
}

/// The theme catalog with a current selection, sorted by name.
#[derive(Debug)]
pub struct Themes {
    current: usize,
    store: Vec<Theme>,
}

impl Default for Themes {
    fn default() -> Self {
        Self::new()
    }
}

impl Themes {
    #[must_use]
    pub fn new() -> Self {
        let mut store = catalog();
        store.sort_by(|a, b| a.name.cmp(b.name));
        Self { current: 0, store }
    }

    fn theme(&self) -> &Theme {
        &self.store[self.current]
    }

    /// Name of the current theme.
    #[must_use]
    pub fn name(&self) -> &str {
        self.theme().name
    }

    /// Advance the selection, wrapping past the last entry.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.store.len();
    }

    /// Select a theme by name; returns false (keeping the current theme)
    /// if no theme has that name.
    pub fn select(&mut self, name: &str) -> bool {
        match self.store.iter().position(|theme| theme.name == name) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.theme().background
    }

    #[must_use]
    pub fn foreground(&self) -> Color {
        self.theme().foreground
    }

    /// Map a cycle counter to its display color.
    ///
    /// Positive counters walk the alive shade list and clamp at its last
    /// entry; negative counters walk the dead list and fall back to the
    /// background once past its end; zero is the background.
    #[must_use]
    pub fn color(&self, cycle: i64) -> Color {
        if cycle == 0 {
            return self.background();
        }
        let index = usize::try_from(cycle.unsigned_abs() - 1).unwrap_or(usize::MAX);
        if cycle > 0 {
            let alive = &self.theme().alive;
            alive[index.min(alive.len() - 1)]
        } else {
            self.theme()
                .dead
                .get(index)
                .copied()
                .unwrap_or_else(|| self.background())
        }
    }
}

fn catalog() -> Vec<Theme> {
    let rgb = |r, g, b| Color::Rgb(r, g, b);
    vec![
        Theme {
            name: "color16",
            background: rgb(255, 255, 255),
            foreground: rgb(0, 0, 0),
            alive: vec![
                rgb(0, 0, 0),
                rgb(0, 0, 95),
                rgb(0, 0, 135),
                rgb(0, 0, 175),
                rgb(0, 0, 215),
                rgb(0, 0, 255),
            ],
            dead: vec![
                rgb(125, 255, 255),
                rgb(135, 255, 255),
                rgb(145, 255, 255),
                rgb(165, 255, 255),
                rgb(175, 255, 255),
                rgb(185, 255, 255),
                rgb(195, 255, 255),
                rgb(205, 255, 255),
                rgb(215, 255, 255),
            ],
        },
        Theme {
            name: "orangeAndRed",
            background: rgb(255, 255, 255),
            foreground: rgb(0, 0, 0),
            alive: vec![
                rgb(255, 135, 0),
                rgb(255, 120, 0),
                rgb(255, 105, 0),
                rgb(255, 90, 0),
                rgb(255, 75, 0),
                rgb(255, 60, 0),
                rgb(255, 45, 0),
                rgb(255, 30, 0),
                rgb(255, 15, 0),
                rgb(255, 0, 0),
            ],
            dead: vec![
                rgb(255, 155, 155),
                rgb(255, 165, 165),
                rgb(255, 175, 175),
                rgb(255, 185, 185),
                rgb(255, 195, 195),
                rgb(255, 205, 205),
                rgb(255, 215, 215),
                rgb(255, 225, 225),
                rgb(255, 235, 235),
                rgb(255, 245, 245),
            ],
        },
        Theme {
            name: "whiteAndBlack",
            background: rgb(255, 255, 255),
            foreground: rgb(0, 0, 0),
            alive: vec![rgb(0, 0, 0)],
            dead: vec![rgb(255, 255, 255)],
        },
        Theme {
            name: "blackAndWhite",
            background: rgb(0, 0, 0),
            foreground: rgb(255, 255, 255),
            alive: vec![rgb(255, 255, 255)],
            dead: vec![rgb(0, 0, 0)],
        },
        Theme {
            name: "ocean",
            background: rgb(0, 0, 130),
            foreground: rgb(255, 255, 255),
            alive: vec![
                rgb(75, 75, 255),
                rgb(85, 85, 255),
                rgb(95, 95, 255),
                rgb(105, 105, 255),
                rgb(115, 115, 255),
                rgb(125, 125, 255),
                rgb(135, 135, 255),
                rgb(145, 145, 255),
                rgb(255, 255, 255),
            ],
            dead: vec![
                rgb(0, 0, 70),
                rgb(0, 0, 80),
                rgb(0, 0, 90),
                rgb(0, 0, 100),
                rgb(0, 0, 110),
                rgb(0, 0, 120),
            ],
        },
        Theme {
            name: "fire",
            background: rgb(130, 0, 0),
            foreground: rgb(255, 255, 0),
            alive: vec![
                rgb(255, 0, 0),
                rgb(255, 25, 0),
                rgb(255, 50, 0),
                rgb(255, 75, 0),
                rgb(255, 100, 0),
                rgb(255, 210, 0),
                rgb(255, 220, 0),
                rgb(255, 230, 0),
                rgb(255, 245, 0),
                rgb(255, 255, 0),
            ],
            dead: vec![
                rgb(70, 0, 0),
                rgb(80, 0, 0),
                rgb(90, 0, 0),
                rgb(100, 0, 0),
                rgb(110, 0, 0),
                rgb(120, 0, 0),
            ],
        },
        Theme {
            name: "matrix",
            background: rgb(0, 0, 0),
            foreground: rgb(0, 255, 0),
            alive: vec![
                rgb(0, 205, 0),
                rgb(0, 215, 0),
                rgb(0, 225, 0),
                rgb(0, 235, 0),
                rgb(0, 245, 0),
                rgb(0, 255, 0),
            ],
            dead: vec![
                rgb(0, 70, 0),
                rgb(0, 60, 0),
                rgb(0, 50, 0),
                rgb(0, 40, 0),
                rgb(0, 30, 0),
                rgb(0, 20, 0),
                rgb(0, 10, 0),
            ],
        },
    ]
}
