//! Map view adapter around the `walkers` slippy-map widget.
//!
//! [`MapView`] owns the tile fetcher, the camera memory and the placed
//! markers, and exposes the two capability operations the form logic needs
//! through [`MapOps`]. Markers are drawn by a [`walkers::Plugin`] that
//! projects geographic positions into screen space each frame.

use eframe::egui;
use serde::{Deserialize, Serialize};
use walkers::sources::{Attribution, TileSource};
use walkers::{lat_lon, HttpTiles, Map, MapMemory, Plugin, Position, Projector, TileId};

use crate::constants::{
    MAPTILER_API_KEY, MAPTILER_TILE_TEMPLATE, MARKER_SIZE, OSM_TILE_TEMPLATE, WORLD_ZOOM,
};
use crate::form::MapOps;
use crate::types::MarkerIcon;

/// Fill color of the default (imageless) marker glyph.
const DEFAULT_MARKER_FILL: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);

/// Selectable basemap tile providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileProviderKind {
    /// Keyless OpenStreetMap raster tiles.
    #[default]
    OpenStreetMap,
    /// MapTiler streets raster style; needs an API key in the URL.
    MapTilerStreets,
}

impl TileProviderKind {
    /// Every selectable provider, in display order.
    pub const ALL: [Self; 2] = [Self::OpenStreetMap, Self::MapTilerStreets];

    /// Human-readable name shown in the provider selector and attribution.
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "OpenStreetMap",
            Self::MapTilerStreets => "MapTiler Streets",
        }
    }

    /// The `{z}/{x}/{y}` URL template for this provider, with any API key
    /// already substituted in.
    fn url_template(self) -> String {
        match self {
            Self::OpenStreetMap => OSM_TILE_TEMPLATE.to_string(),
            Self::MapTilerStreets => {
                MAPTILER_TILE_TEMPLATE.replace("{key}", MAPTILER_API_KEY.unwrap_or_default())
            }
        }
    }
}

/// Tile source that fills a `{z}/{x}/{y}` URL template.
struct UrlTemplateSource {
    name: &'static str,
    template: String,
}

impl TileSource for UrlTemplateSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.name,
            url: "",
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// One placed marker: a geographic position plus the icon it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker {
    /// Geographic position of the marker.
    pub position: Position,
    /// Icon the marker is rendered with.
    pub icon: MarkerIcon,
}

/// Owned state of the single live map widget.
///
/// The tile fetcher is created lazily the first time a frame provides an
/// `egui::Context` and is never recreated while a handle exists; changing
/// the provider drops the old fetcher first.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    #[serde(skip)]
    tiles: Option<HttpTiles>,
    #[serde(skip, default = "world_view_memory")]
    memory: MapMemory,
    #[serde(skip)]
    markers: Vec<MapMarker>,
    /// Selected basemap provider; persisted as a UI preference.
    provider: TileProviderKind,
}

/// Camera memory for the initial whole-world view centered on (0, 0).
fn world_view_memory() -> MapMemory {
    let mut memory = MapMemory::default();
    memory.center_at(lat_lon(0.0, 0.0));
    if memory.set_zoom(WORLD_ZOOM).is_err() {
        log::warn!("initial zoom level {WORLD_ZOOM} rejected by the map widget");
    }
    memory
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            tiles: None,
            memory: world_view_memory(),
            markers: Vec::new(),
            provider: TileProviderKind::default(),
        }
    }
}

impl MapView {
    /// Currently selected tile provider.
    pub fn provider(&self) -> TileProviderKind {
        self.provider
    }

    /// Switches the basemap provider, dropping and recreating the tile
    /// fetcher.
    pub fn set_provider(&mut self, provider: TileProviderKind, ctx: &egui::Context) {
        self.provider = provider;
        self.tiles = None;
        self.ensure_tiles(ctx);
    }

    /// Placed markers, in placement order.
    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    /// Where the camera currently points, if it has been positioned.
    pub fn camera_position(&self) -> Option<Position> {
        self.memory.detached()
    }

    /// Creates the tile fetcher if none exists yet.
    fn ensure_tiles(&mut self, ctx: &egui::Context) {
        if self.tiles.is_some() {
            return;
        }
        log::info!("initialising {} tile source", self.provider.label());
        let source = UrlTemplateSource {
            name: self.provider.label(),
            template: self.provider.url_template(),
        };
        self.tiles = Some(HttpTiles::new(source, ctx.clone()));
    }

    /// Renders the map into the given UI region.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.ensure_tiles(ui.ctx());

        let map_rect = ui.available_rect_before_wrap();
        let marker_layer = MarkerLayer {
            markers: self.markers.clone(),
        };

        if let Some(tiles) = self.tiles.as_mut() {
            let map = Map::new(Some(tiles), &mut self.memory, lat_lon(0.0, 0.0))
                .with_plugin(marker_layer);
            ui.add(map);

            ui.painter().text(
                map_rect.max - egui::vec2(5.0, 5.0),
                egui::Align2::RIGHT_BOTTOM,
                format!("© {}", self.provider.label()),
                egui::FontId::proportional(10.0),
                egui::Color32::from_black_alpha(150),
            );
        }
    }
}

impl MapOps for MapView {
    fn move_camera(&mut self, latitude: f64, longitude: f64, zoom: f64) {
        self.memory.center_at(lat_lon(latitude, longitude));
        if self.memory.set_zoom(zoom).is_err() {
            log::warn!("camera zoom level {zoom} rejected by the map widget");
        }
    }

    fn add_marker(&mut self, latitude: f64, longitude: f64, icon: MarkerIcon) {
        self.markers.push(MapMarker {
            position: lat_lon(latitude, longitude),
            icon,
        });
    }
}

/// Plugin drawing the placed markers on top of the basemap.
struct MarkerLayer {
    markers: Vec<MapMarker>,
}

impl Plugin for MarkerLayer {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        for marker in &self.markers {
            let screen = projector.project(marker.position);
            let center = egui::pos2(screen.x, screen.y);

            match marker.icon.url() {
                Some(url) => {
                    let rect = egui::Rect::from_center_size(
                        center,
                        egui::vec2(MARKER_SIZE, MARKER_SIZE),
                    );
                    egui::Image::from_uri(url)
                        .corner_radius(egui::CornerRadius::same((MARKER_SIZE / 2.0) as u8))
                        .paint_at(ui, rect);
                }
                None => {
                    let radius = MARKER_SIZE / 2.0;
                    ui.painter().circle_filled(center, radius, DEFAULT_MARKER_FILL);
                    ui.painter().circle_stroke(
                        center,
                        radius,
                        egui::Stroke::new(1.5, egui::Color32::WHITE),
                    );
                }
            }
        }
    }
}
