//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::instructions::{GridInstructions, LayerInstructions};
use crate::color::Color;

const EXPECT_COUNT: &str = "expected a non-negative integer";
const EXPECT_NUMBER: &str = "expected a finite number";
const EXPECT_COLOR: &str = "expected hex color or color name";

/// Parse a grid query string into instructions + warnings.
pub(crate) fn parse_grid_query(query: &str) -> (GridInstructions, Vec<ParseWarning>) {
    let mut inst = GridInstructions::new();
    let mut warnings = Vec::new();
    for (key, value) in pairs(query) {
        dispatch_grid_key(&key, &value, &mut inst, &mut warnings);
    }
    (inst, warnings)
}

/// Parse a layer query string into instructions + warnings.
pub(crate) fn parse_layer_query(query: &str) -> (LayerInstructions, Vec<ParseWarning>) {
    let mut inst = LayerInstructions::new();
    let mut warnings = Vec::new();
    for (key, value) in pairs(query) {
        dispatch_layer_key(&key, &value, &mut inst, &mut warnings);
    }
    (inst, warnings)
}

fn dispatch_grid_key(
    key: &str,
    value: &str,
    inst: &mut GridInstructions,
    warnings: &mut Vec<ParseWarning>,
) {
    match key {
        "order" => set_parsed(
            &mut inst.order,
            parse_u32(value),
            ("order", EXPECT_COUNT),
            key,
            value,
            warnings,
        ),
        "divisions" | "angular_divisions" => set_parsed(
            &mut inst.angular_divisions,
            parse_u32(value),
            ("divisions", EXPECT_COUNT),
            key,
            value,
            warnings,
        ),
        "step" | "increment" | "radial_increment" => set_parsed(
            &mut inst.radial_increment,
            parse_f64(value),
            ("step", EXPECT_NUMBER),
            key,
            value,
            warnings,
        ),
        "color" => set_parsed(
            &mut inst.color,
            Color::parse(value),
            ("color", EXPECT_COLOR),
            key,
            value,
            warnings,
        ),
        "bold" | "bold_color" => set_parsed(
            &mut inst.bold_color,
            Color::parse(value),
            ("bold", EXPECT_COLOR),
            key,
            value,
            warnings,
        ),
        "stroke" | "stroke_width" => set_parsed(
            &mut inst.stroke_width,
            parse_f64(value),
            ("stroke", EXPECT_NUMBER),
            key,
            value,
            warnings,
        ),
        _ => not_recognized(key, value, warnings),
    }
}

fn dispatch_layer_key(
    key: &str,
    value: &str,
    inst: &mut LayerInstructions,
    warnings: &mut Vec<ParseWarning>,
) {
    match key {
        "motif" => {
            let name = value.trim();
            if name.is_empty() {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "motif",
                    value: String::from(value),
                    reason: "expected a motif name",
                });
            } else {
                set_or_warn(&mut inst.motif, Some(String::from(name)), key, value, warnings);
            }
        }
        "order" => set_parsed(
            &mut inst.order,
            parse_u32(value),
            ("order", EXPECT_COUNT),
            key,
            value,
            warnings,
        ),
        "radius" | "r" | "polar_radius" => set_parsed(
            &mut inst.polar_radius,
            parse_f64(value),
            ("radius", EXPECT_NUMBER),
            key,
            value,
            warnings,
        ),
        "angle" | "polar_angle" => set_parsed(
            &mut inst.polar_angle,
            parse_f64(value),
            ("angle", EXPECT_NUMBER),
            key,
            value,
            warnings,
        ),
        "rotation" | "rot" | "self_rotation" => set_parsed(
            &mut inst.self_rotation,
            parse_f64(value),
            ("rotation", EXPECT_NUMBER),
            key,
            value,
            warnings,
        ),
        "size" | "scale" => set_parsed(
            &mut inst.size,
            parse_f64(value),
            ("size", EXPECT_NUMBER),
            key,
            value,
            warnings,
        ),
        "multiplicity" | "mult" => set_parsed(
            &mut inst.multiplicity,
            parse_u32(value),
            ("multiplicity", EXPECT_COUNT),
            key,
            value,
            warnings,
        ),
        _ => not_recognized(key, value, warnings),
    }
}

fn not_recognized(key: &str, value: &str, warnings: &mut Vec<ParseWarning>) {
    warnings.push(ParseWarning::KeyNotRecognized {
        key: String::from(key),
        value: String::from(value),
    });
}

/// Set a parsed field, or record why the value was rejected.
fn set_parsed<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    (canonical, reason): (&'static str, &'static str),
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if parsed.is_none() {
        warnings.push(ParseWarning::ValueInvalid {
            key: canonical,
            value: String::from(value),
            reason,
        });
        return;
    }
    set_or_warn(field, parsed, key, value, warnings);
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---- Query string tokenizer ----

/// Decoded `(lowercase key, value)` pairs.
fn pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    split_query(query).map(|pair| {
        let (raw_key, raw_value) = split_pair(pair);
        (
            percent_decode(raw_key).to_ascii_lowercase(),
            percent_decode(raw_value),
        )
    })
}

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
