//! Colour presets for the board
//!
//! Themes are purely cosmetic: they carry the colours the renderer paints
//! with and nothing the simulation reads.

use clap::ValueEnum;
use ratatui::style::Color;

/// One selectable colour palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub head: Color,
    pub body: Color,
    pub food: Color,
    /// Title and score highlight colour
    pub accent: Color,
}

pub const MATRIX: Theme = Theme {
    name: "Matrix",
    head: Color::Rgb(52, 211, 153),
    body: Color::Rgb(5, 150, 105),
    food: Color::Rgb(244, 63, 94),
    accent: Color::Rgb(52, 211, 153),
};

pub const CYBER: Theme = Theme {
    name: "Cyber",
    head: Color::Rgb(34, 211, 238),
    body: Color::Rgb(8, 145, 178),
    food: Color::Rgb(245, 158, 11),
    accent: Color::Rgb(34, 211, 238),
};

pub const SYNTH: Theme = Theme {
    name: "Synth",
    head: Color::Rgb(232, 121, 249),
    body: Color::Rgb(192, 38, 211),
    food: Color::Rgb(45, 212, 191),
    accent: Color::Rgb(232, 121, 249),
};

pub const MAGMA: Theme = Theme {
    name: "Magma",
    head: Color::Rgb(251, 146, 60),
    body: Color::Rgb(234, 88, 12),
    food: Color::Rgb(99, 102, 241),
    accent: Color::Rgb(251, 146, 60),
};

pub static THEMES: [Theme; 4] = [MATRIX, CYBER, SYNTH, MAGMA];

/// CLI-selectable theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeId {
    Matrix,
    Cyber,
    Synth,
    Magma,
}

impl ThemeId {
    pub fn theme(&self) -> &'static Theme {
        &THEMES[*self as usize]
    }

    /// The next preset, wrapping around after the last one
    pub fn next(&self) -> ThemeId {
        match self {
            ThemeId::Matrix => ThemeId::Cyber,
            ThemeId::Cyber => ThemeId::Synth,
            ThemeId::Synth => ThemeId::Magma,
            ThemeId::Magma => ThemeId::Matrix,
        }
    }
}
