//! Sans-IO control surface.
//!
//! Routes GET requests by path and query string; the TCP listener and
//! socket plumbing live outside this crate. Each mutating route pushes a
//! [`PanelCommand`] for the render loop to pick up on its next tick, so a
//! request handler never touches render state directly.

use heapless::String;

use crate::color::{ColorParseError, parse_hex_color};
use crate::command::{CommandSender, PanelCommand};
use crate::effect::RenderMode;
use crate::readings::ReadingsCell;

/// Capacity for the serialized `/data` body.
pub const DATA_JSON_CAPACITY: usize = 96;

/// Capacity for a single decoded query value.
const VALUE_CAPACITY: usize = 16;

/// Error surfaced to the transport glue; all variants are non-fatal and
/// leave the render state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// The route's query parameter is absent.
    MissingParam(&'static str),
    /// The mode name is not one of the known render modes.
    UnknownMode,
    /// The color string is not a valid `"#RRGGBB"` value.
    BadColor(ColorParseError),
    /// A numeric or toggle value failed to parse.
    BadValue,
    /// The command queue is full; the command was dropped.
    Busy,
    /// The readings snapshot did not fit the response buffer.
    Encode,
}

impl From<ColorParseError> for PanelError {
    fn from(err: ColorParseError) -> Self {
        Self::BadColor(err)
    }
}

impl PanelError {
    /// Short description for a plain-text error body.
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingParam(_) => "missing parameter",
            Self::UnknownMode => "unknown mode",
            Self::BadColor(_) => "bad color",
            Self::BadValue => "bad value",
            Self::Busy => "busy",
            Self::Encode => "encode error",
        }
    }
}

/// Successful response for the transport glue to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelResponse {
    /// `200`, HTML control page.
    Page(&'static str),
    /// `200`, JSON readings body.
    Json(String<DATA_JSON_CAPACITY>),
    /// `200`, plain text `OK`.
    Accepted,
    /// `404`.
    NotFound,
}

/// Control-surface adapter.
///
/// Holds a command sender into the engine and a read-only view of the
/// published readings. Never blocks on sensor or LED work.
pub struct Panel<'a, const CMD: usize> {
    commands: CommandSender<'a, CMD>,
    readings: &'a ReadingsCell,
}

impl<'a, const CMD: usize> Panel<'a, CMD> {
    pub const fn new(commands: CommandSender<'a, CMD>, readings: &'a ReadingsCell) -> Self {
        Self { commands, readings }
    }

    /// Handle one GET request target (path plus optional query string).
    pub fn handle_request(&self, target: &str) -> Result<PanelResponse, PanelError> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        match path {
            "/" => Ok(PanelResponse::Page(CONTROL_PAGE)),
            "/data" => self.handle_data(),
            "/setColor" => self.handle_set_color(query),
            "/setMode" => self.handle_set_mode(query),
            "/setBrightness" => self.handle_set_brightness(query),
            "/setAutoBrightness" => self.handle_set_auto_brightness(query),
            _ => Ok(PanelResponse::NotFound),
        }
    }

    fn handle_data(&self) -> Result<PanelResponse, PanelError> {
        let readings = self.readings.snapshot();
        let body = serde_json_core::to_string::<_, DATA_JSON_CAPACITY>(&readings)
            .map_err(|_| PanelError::Encode)?;
        Ok(PanelResponse::Json(body))
    }

    fn handle_set_color(&self, query: &str) -> Result<PanelResponse, PanelError> {
        let raw = query_value(query, "color").ok_or(PanelError::MissingParam("color"))?;
        let decoded = decode_component::<VALUE_CAPACITY>(raw)?;
        let color = parse_hex_color(&decoded)?;
        self.send(PanelCommand::SetColor(color))
    }

    fn handle_set_mode(&self, query: &str) -> Result<PanelResponse, PanelError> {
        let raw = query_value(query, "mode").ok_or(PanelError::MissingParam("mode"))?;
        let mode = RenderMode::parse_from_str(raw).ok_or(PanelError::UnknownMode)?;
        self.send(PanelCommand::SetMode(mode))
    }

    fn handle_set_brightness(&self, query: &str) -> Result<PanelResponse, PanelError> {
        let raw = query_value(query, "brightness").ok_or(PanelError::MissingParam("brightness"))?;
        let value: i32 = raw.parse().map_err(|_| PanelError::BadValue)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let drive = value.clamp(0, 255) as u8;
        self.send(PanelCommand::SetBrightness(drive))
    }

    fn handle_set_auto_brightness(&self, query: &str) -> Result<PanelResponse, PanelError> {
        let raw = query_value(query, "auto").ok_or(PanelError::MissingParam("auto"))?;
        let enabled = match raw {
            "1" => true,
            "0" => false,
            _ => return Err(PanelError::BadValue),
        };
        self.send(PanelCommand::SetAutoBrightness(enabled))
    }

    fn send(&self, command: PanelCommand) -> Result<PanelResponse, PanelError> {
        self.commands
            .try_send(command)
            .map_err(|_| PanelError::Busy)?;
        Ok(PanelResponse::Accepted)
    }
}

/// Find the raw value of `key` in a query string.
fn query_value<'q>(query: &'q str, key: &str) -> Option<&'q str> {
    for pair in query.split('&') {
        if let Some((k, v)) = pair.split_once('=') {
            if k == key {
                return Some(v);
            }
        }
    }
    None
}

/// Percent-decode a query value (`%23` becomes `#`, `+` becomes space).
fn decode_component<const N: usize>(raw: &str) -> Result<String<N>, PanelError> {
    let bytes = raw.as_bytes();
    let mut out = String::new();
    let mut i = 0;
    while i < bytes.len() {
        let decoded = match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return Err(PanelError::BadValue);
                }
                let hi = hex_digit(bytes[i + 1]).ok_or(PanelError::BadValue)?;
                let lo = hex_digit(bytes[i + 2]).ok_or(PanelError::BadValue)?;
                i += 2;
                (hi << 4 | lo) as char
            }
            b'+' => ' ',
            other => other as char,
        };
        out.push(decoded).map_err(|()| PanelError::BadValue)?;
        i += 1;
    }
    Ok(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Control page served on `/`.
///
/// Polls `/data` every two seconds and pushes each control change back
/// through the corresponding set route.
pub const CONTROL_PAGE: &str = r##"<html><head><meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Sensor Data</title></head><body>
<h1>Sensor Data</h1>
<p>Temperature: <span id="temperature"></span> &#8451;</p>
<p>Humidity: <span id="humidity"></span> %</p>
<p>Brightness: <span id="brightness"></span></p>
<h2>LED Control</h2>
<label for="color">Select Color:</label>
<input type="color" id="color" name="color" value="#ff0000"><br>
<label for="mode">Mode:</label>
<select id="mode" name="mode">
<option value="static">Static Color</option>
<option value="rainbow">Rainbow</option>
<option value="rgb">RGB</option>
</select><br>
<label for="brightness">Brightness:</label>
<input type="range" id="brightnessSlider" name="brightness" min="0" max="255"><br>
<label for="autoBrightness">Auto Brightness:</label>
<input type="checkbox" id="autoBrightness" name="autoBrightness"><br>
<script>
function fetchData() {
  fetch('/data').then(response => response.json()).then(data => {
    document.getElementById('temperature').textContent = data.temperature;
    document.getElementById('humidity').textContent = data.humidity;
    document.getElementById('brightness').textContent = data.brightness;
  });
}
setInterval(fetchData, 2000);
fetchData();
document.getElementById('color').addEventListener('change', function() {
  fetch('/setColor?color=' + encodeURIComponent(this.value));
});
document.getElementById('mode').addEventListener('change', function() {
  fetch('/setMode?mode=' + encodeURIComponent(this.value));
});
document.getElementById('brightnessSlider').addEventListener('input', function() {
  fetch('/setBrightness?brightness=' + this.value);
});
document.getElementById('autoBrightness').addEventListener('change', function() {
  fetch('/setAutoBrightness?auto=' + (this.checked ? '1' : '0'));
});
</script>
</body></html>"##;
