//! Map render settings and colours.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An SVG colour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        opacity: f64,
    },
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb { red, green, blue }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Color::Rgba {
            red,
            green,
            blue,
            opacity,
        }
    }
}

/// Formats the colour as an SVG paint value.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{name}"),
            Color::Rgb { red, green, blue } => write!(f, "rgb({red},{green},{blue})"),
            Color::Rgba {
                red,
                green,
                blue,
                opacity,
            } => write!(f, "rgba({red},{green},{blue},{opacity})"),
        }
    }
}

/// Layout and styling parameters for the route map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: [7.0, 15.0],
            stop_label_font_size: 20,
            stop_label_offset: [7.0, -3.0],
            underlayer_color: Color::rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::rgb(255, 160, 0),
                Color::named("red"),
            ],
        }
    }
}
