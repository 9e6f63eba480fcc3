//! Data transfer objects for JSON request documents and answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::{Color, RenderSettings};
use crate::router::RoutingSettings;
use crate::snapshot::SnapshotConfig;

/// Input document of the build phase.
#[derive(Debug, Deserialize)]
pub struct MakeBaseRequest {
    /// Stops and buses to ingest
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Map styling, carried into the snapshot
    #[serde(default)]
    pub render_settings: RenderSettingsDto,

    /// Wait time and bus speed; without them no router is built
    pub routing_settings: Option<RoutingSettings>,

    /// Where to write the snapshot
    pub serialization_settings: SnapshotConfig,
}

/// Input document of the serve phase.
#[derive(Debug, Deserialize)]
pub struct ProcessRequests {
    /// Queries to answer, in order
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,

    /// Where to read the snapshot from
    pub serialization_settings: SnapshotConfig,
}

/// A stop or bus definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distances in meters to neighbouring stops
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A query with its request id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatRequest {
    pub id: i64,

    #[serde(flatten)]
    pub query: Query,
}

/// What is being asked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Query {
    /// Statistics for a bus route
    Bus { name: String },
    /// Buses serving a stop
    Stop { name: String },
    /// Fastest itinerary between two stops
    Route { from: String, to: String },
    /// The rendered map
    Map,
}

/// A colour as written in JSON: a name, `[r, g, b]` or `[r, g, b, opacity]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorDto {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<ColorDto> for Color {
    fn from(dto: ColorDto) -> Self {
        match dto {
            ColorDto::Named(name) if name == "none" => Color::None,
            ColorDto::Named(name) => Color::Named(name),
            ColorDto::Rgb(red, green, blue) => Color::rgb(red, green, blue),
            ColorDto::Rgba(red, green, blue, opacity) => Color::rgba(red, green, blue, opacity),
        }
    }
}

/// Render settings as written in JSON. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettingsDto {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: ColorDto,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorDto>,
}

impl Default for RenderSettingsDto {
    fn default() -> Self {
        let defaults = RenderSettings::default();
        Self {
            width: defaults.width,
            height: defaults.height,
            padding: defaults.padding,
            line_width: defaults.line_width,
            stop_radius: defaults.stop_radius,
            bus_label_font_size: defaults.bus_label_font_size,
            bus_label_offset: defaults.bus_label_offset,
            stop_label_font_size: defaults.stop_label_font_size,
            stop_label_offset: defaults.stop_label_offset,
            underlayer_color: ColorDto::Rgba(255, 255, 255, 0.85),
            underlayer_width: defaults.underlayer_width,
            color_palette: vec![
                ColorDto::Named("green".into()),
                ColorDto::Rgb(255, 160, 0),
                ColorDto::Named("red".into()),
            ],
        }
    }
}

impl From<RenderSettingsDto> for RenderSettings {
    fn from(dto: RenderSettingsDto) -> Self {
        Self {
            width: dto.width,
            height: dto.height,
            padding: dto.padding,
            line_width: dto.line_width,
            stop_radius: dto.stop_radius,
            bus_label_font_size: dto.bus_label_font_size,
            bus_label_offset: dto.bus_label_offset,
            stop_label_font_size: dto.stop_label_font_size,
            stop_label_offset: dto.stop_label_offset,
            underlayer_color: dto.underlayer_color.into(),
            underlayer_width: dto.underlayer_width,
            color_palette: dto.color_palette.into_iter().map(Color::from).collect(),
        }
    }
}

/// One answer in the output array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,

    #[serde(flatten)]
    pub body: ResponseBody,
}

/// Payload of an answer; the keys depend on the query kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus {
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        buses: Vec<String>,
    },
    Route {
        total_time: f64,
        items: Vec<ItemDto>,
    },
    Map {
        map: String,
    },
    Error {
        error_message: String,
    },
}

/// One leg of a route answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItemDto {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_stop_request() {
        let request: BaseRequest = serde_json::from_value(json!({
            "type": "Stop",
            "name": "Marushkino",
            "latitude": 55.595884,
            "longitude": 37.209755,
            "road_distances": {"Rasskazovka": 9900, "Marushkino": 100}
        }))
        .unwrap();

        match request {
            BaseRequest::Stop {
                name,
                road_distances,
                ..
            } => {
                assert_eq!(name, "Marushkino");
                assert_eq!(road_distances.get("Rasskazovka"), Some(&9900));
                assert_eq!(road_distances.len(), 2);
            }
            other => panic!("expected a stop, got {other:?}"),
        }
    }

    #[test]
    fn road_distances_are_optional() {
        let request: BaseRequest = serde_json::from_value(json!({
            "type": "Stop",
            "name": "Prazhskaya",
            "latitude": 55.611678,
            "longitude": 37.603831
        }))
        .unwrap();
        assert!(matches!(request, BaseRequest::Stop { road_distances, .. } if road_distances.is_empty()));
    }

    #[test]
    fn parse_bus_request() {
        let request: BaseRequest = serde_json::from_value(json!({
            "type": "Bus",
            "name": "750",
            "stops": ["Tolstopaltsevo", "Marushkino", "Rasskazovka"],
            "is_roundtrip": false
        }))
        .unwrap();
        assert_eq!(
            request,
            BaseRequest::Bus {
                name: "750".into(),
                stops: vec![
                    "Tolstopaltsevo".into(),
                    "Marushkino".into(),
                    "Rasskazovka".into()
                ],
                is_roundtrip: false,
            }
        );
    }

    #[test]
    fn parse_stat_requests() {
        let requests: Vec<StatRequest> = serde_json::from_value(json!([
            {"id": 1, "type": "Bus", "name": "256"},
            {"id": 2, "type": "Stop", "name": "Samara"},
            {"id": 3, "type": "Route", "from": "A", "to": "B"},
            {"id": 4, "type": "Map"}
        ]))
        .unwrap();

        assert_eq!(requests[0].query, Query::Bus { name: "256".into() });
        assert_eq!(requests[1].id, 2);
        assert_eq!(
            requests[2].query,
            Query::Route {
                from: "A".into(),
                to: "B".into()
            }
        );
        assert_eq!(requests[3].query, Query::Map);
    }

    #[test]
    fn parse_colors() {
        let colors: Vec<ColorDto> =
            serde_json::from_value(json!(["green", [255, 160, 0], [255, 255, 255, 0.85]])).unwrap();
        let colors: Vec<Color> = colors.into_iter().map(Color::from).collect();
        assert_eq!(
            colors,
            vec![
                Color::named("green"),
                Color::rgb(255, 160, 0),
                Color::rgba(255, 255, 255, 0.85)
            ]
        );
    }

    #[test]
    fn partial_render_settings_keep_defaults() {
        let dto: RenderSettingsDto = serde_json::from_value(json!({
            "width": 600,
            "color_palette": ["black"]
        }))
        .unwrap();
        let settings = RenderSettings::from(dto);

        assert_eq!(settings.width, 600.0);
        assert_eq!(settings.height, 1200.0);
        assert_eq!(settings.color_palette, vec![Color::named("black")]);
        assert_eq!(settings.underlayer_color, Color::rgba(255, 255, 255, 0.85));
    }

    #[test]
    fn default_dto_matches_default_settings() {
        assert_eq!(
            RenderSettings::from(RenderSettingsDto::default()),
            RenderSettings::default()
        );
    }

    #[test]
    fn serialize_responses() {
        let bus = StatResponse {
            request_id: 1,
            body: ResponseBody::Bus {
                curvature: 1.5,
                route_length: 5950,
                stop_count: 6,
                unique_stop_count: 5,
            },
        };
        assert_eq!(
            serde_json::to_value(&bus).unwrap(),
            json!({
                "request_id": 1,
                "curvature": 1.5,
                "route_length": 5950,
                "stop_count": 6,
                "unique_stop_count": 5
            })
        );

        let route = StatResponse {
            request_id: 2,
            body: ResponseBody::Route {
                total_time: 11.0,
                items: vec![
                    ItemDto::Wait {
                        stop_name: "A".into(),
                        time: 6.0,
                    },
                    ItemDto::Bus {
                        bus: "14".into(),
                        span_count: 2,
                        time: 5.0,
                    },
                ],
            },
        };
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            json!({
                "request_id": 2,
                "total_time": 11.0,
                "items": [
                    {"type": "Wait", "stop_name": "A", "time": 6.0},
                    {"type": "Bus", "bus": "14", "span_count": 2, "time": 5.0}
                ]
            })
        );

        let missing = StatResponse {
            request_id: 3,
            body: ResponseBody::Error {
                error_message: "not found".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({"request_id": 3, "error_message": "not found"})
        );
    }
}
