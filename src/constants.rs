//! Shared application-wide constants.
//! Centralizes tweakable values used across the form, conversion and map code.

// Application shell
/// Window and toolbar title.
pub const APP_TITLE: &str = "DMS to DD Converter";
/// Storage key under which UI preferences are persisted between sessions.
pub const APP_STATE_KEY: &str = "app_state";
/// Width of the converter form panel in logical points.
pub const FORM_PANEL_WIDTH: f32 = 300.0;

// Angle arithmetic
/// Arc minutes in one degree.
pub const MINUTES_IN_DEGREE: f64 = 60.0;
/// Arc seconds in one degree.
pub const SECONDS_IN_DEGREE: f64 = 3600.0;
/// Fractional digits shown for converted decimal-degree results.
pub const RESULT_DECIMALS: usize = 8;

// Map camera
/// Zoom level for the initial whole-world view.
pub const WORLD_ZOOM: f64 = 2.0;
/// Zoom level the camera moves to after a successful conversion.
pub const RESULT_ZOOM: f64 = 12.0;

// Markers
/// Rendered marker diameter in screen pixels.
pub const MARKER_SIZE: f32 = 30.0;
/// Hosted image for the pin marker icon.
pub const PIN_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/684/684908.png";
/// Hosted image for the flag marker icon.
pub const FLAG_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/447/447031.png";

// Tile providers
/// OpenStreetMap raster tile URL template.
pub const OSM_TILE_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Keyed MapTiler raster style URL template; `{key}` is replaced at source
/// construction with [`MAPTILER_API_KEY`].
pub const MAPTILER_TILE_TEMPLATE: &str =
    "https://api.maptiler.com/maps/streets-v2/{z}/{x}/{y}.png?key={key}";
/// API key baked into the MapTiler style URL. Read from the build environment
/// so the checked-in source carries no credentials.
pub const MAPTILER_API_KEY: Option<&str> = option_env!("MAPTILER_KEY");
