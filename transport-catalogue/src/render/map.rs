//! SVG route map.

use std::collections::BTreeMap;

use askama::Template;
use tracing::debug;

use super::{Color, Point, RenderSettings, SphereProjector};
use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, Route};

/// Route line, in pixels.
#[derive(Debug, Clone)]
struct LineView {
    points: String,
    stroke: String,
}

/// A text label. Labels come in pairs: the underlayer first, then the
/// coloured text on top of it.
#[derive(Debug, Clone)]
struct LabelView {
    x: f64,
    y: f64,
    fill: String,
    underlayer: bool,
    text: String,
}

#[derive(Template)]
#[template(
    source = r#"<?xml version="1.0" encoding="UTF-8" ?>
<svg xmlns="http://www.w3.org/2000/svg" version="1.1">
{%- for line in lines %}
  <polyline points="{{ line.points }}" fill="none" stroke="{{ line.stroke }}" stroke-width="{{ line_width }}" stroke-linecap="round" stroke-linejoin="round"/>
{%- endfor %}
{%- for label in bus_labels %}
  <text fill="{{ label.fill }}"{% if label.underlayer %} stroke="{{ underlayer_color }}" stroke-width="{{ underlayer_width }}" stroke-linecap="round" stroke-linejoin="round"{% endif %} x="{{ label.x }}" y="{{ label.y }}" dx="{{ bus_dx }}" dy="{{ bus_dy }}" font-size="{{ bus_font_size }}" font-family="Verdana" font-weight="bold">{{ label.text }}</text>
{%- endfor %}
{%- for stop in stops %}
  <circle cx="{{ stop.x }}" cy="{{ stop.y }}" r="{{ stop_radius }}" fill="white"/>
{%- endfor %}
{%- for label in stop_labels %}
  <text fill="{{ label.fill }}"{% if label.underlayer %} stroke="{{ underlayer_color }}" stroke-width="{{ underlayer_width }}" stroke-linecap="round" stroke-linejoin="round"{% endif %} x="{{ label.x }}" y="{{ label.y }}" dx="{{ stop_dx }}" dy="{{ stop_dy }}" font-size="{{ stop_font_size }}" font-family="Verdana">{{ label.text }}</text>
{%- endfor %}
</svg>"#,
    ext = "svg"
)]
struct MapTemplate {
    line_width: f64,
    stop_radius: f64,
    underlayer_color: String,
    underlayer_width: f64,
    bus_dx: f64,
    bus_dy: f64,
    bus_font_size: u32,
    stop_dx: f64,
    stop_dy: f64,
    stop_font_size: u32,

    lines: Vec<LineView>,
    bus_labels: Vec<LabelView>,
    stops: Vec<Point>,
    stop_labels: Vec<LabelView>,
}

/// Draws the catalogue's routes as an SVG document.
///
/// Layers, bottom to top: route lines, route name labels, stop circles,
/// stop name labels. Routes are drawn in name order and take palette
/// colours in turn; only stops served by some route appear.
#[derive(Debug, Clone, Copy)]
pub struct MapRenderer<'a> {
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(settings: &'a RenderSettings) -> Self {
        Self { settings }
    }

    /// Render the map for `catalogue` as SVG text.
    pub fn render(&self, catalogue: &TransportCatalogue) -> Result<String, askama::Error> {
        let settings = self.settings;

        // Routes shadowed by a later route of the same name are not drawn.
        let mut routes: Vec<&Route> = catalogue
            .routes()
            .filter(|(id, route)| {
                !route.stops.is_empty() && catalogue.find_route(&route.name) == Some(*id)
            })
            .map(|(_, route)| route)
            .collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));

        let mut stops: BTreeMap<&str, Coordinates> = BTreeMap::new();
        let mut points = Vec::new();
        for route in &routes {
            for &id in &route.stops {
                let stop = catalogue.stop(id);
                stops.entry(stop.name.as_str()).or_insert(stop.coordinates);
                points.push(stop.coordinates);
            }
        }
        let projector =
            SphereProjector::new(&points, settings.width, settings.height, settings.padding);

        let underlayer = settings.underlayer_color.to_string();
        let mut lines = Vec::with_capacity(routes.len());
        let mut bus_labels = Vec::new();
        for (index, route) in routes.iter().enumerate() {
            let color = self.palette_color(index);
            let project = |position: usize| {
                projector.project(catalogue.stop(route.stops[position]).coordinates)
            };

            let mut path: Vec<usize> = (0..route.stops.len()).collect();
            if !route.circular {
                path.extend((0..route.stops.len() - 1).rev());
            }
            lines.push(LineView {
                points: path
                    .iter()
                    .map(|&i| {
                        let p = project(i);
                        format!("{},{}", p.x, p.y)
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                stroke: color.clone(),
            });

            let last = route.stops.len() - 1;
            let mut ends = vec![0];
            if !route.circular && route.stops[last] != route.stops[0] {
                ends.push(last);
            }
            for end in ends {
                bus_labels.extend(label_pair(project(end), &route.name, &underlayer, &color));
            }
        }

        let mut circles = Vec::with_capacity(stops.len());
        let mut stop_labels = Vec::with_capacity(stops.len() * 2);
        for (name, coordinates) in &stops {
            let at = projector.project(*coordinates);
            circles.push(at);
            stop_labels.extend(label_pair(at, name, &underlayer, "black"));
        }

        debug!(routes = lines.len(), stops = circles.len(), "rendering map");

        MapTemplate {
            line_width: settings.line_width,
            stop_radius: settings.stop_radius,
            underlayer_color: underlayer,
            underlayer_width: settings.underlayer_width,
            bus_dx: settings.bus_label_offset[0],
            bus_dy: settings.bus_label_offset[1],
            bus_font_size: settings.bus_label_font_size,
            stop_dx: settings.stop_label_offset[0],
            stop_dy: settings.stop_label_offset[1],
            stop_font_size: settings.stop_label_font_size,
            lines,
            bus_labels,
            stops: circles,
            stop_labels,
        }
        .render()
    }

    /// Palette colour for the route drawn `index`-th, cycling through the
    /// palette. An empty palette draws everything with no colour.
    fn palette_color(&self, index: usize) -> String {
        let palette = &self.settings.color_palette;
        if palette.is_empty() {
            Color::None.to_string()
        } else {
            palette[index % palette.len()].to_string()
        }
    }
}

fn label_pair(at: Point, text: &str, underlayer: &str, fill: &str) -> [LabelView; 2] {
    [
        LabelView {
            x: at.x,
            y: at.y,
            fill: underlayer.to_string(),
            underlayer: true,
            text: text.to_string(),
        },
        LabelView {
            x: at.x,
            y: at.y,
            fill: fill.to_string(),
            underlayer: false,
            text: text.to_string(),
        },
    ]
}
