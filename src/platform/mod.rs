//! Platform abstraction layer
//!
//! Maps browser pointer coordinates into playfield pixels.

/// Convert a pointer `client_y` to a playfield `y`.
///
/// `rect_top` and `rect_height` are the canvas bounding rect in CSS pixels.
/// When the canvas is displayed at a different size than the playfield, the
/// offset is scaled; a zero-height rect falls back to the raw offset.
pub fn surface_y(client_y: f32, rect_top: f32, rect_height: f32, surface_height: f32) -> f32 {
    let offset = client_y - rect_top;
    if rect_height > 0.0 {
        offset * surface_height / rect_height
    } else {
        offset
    }
}

/// Milliseconds between two animation-frame timestamps, as seconds
pub fn frame_delta(last_ms: Option<f64>, now_ms: f64) -> f32 {
    match last_ms {
        Some(last) if now_ms >= last => ((now_ms - last) / 1000.0) as f32,
        _ => 0.0,
    }
}
