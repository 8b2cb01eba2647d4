//! Wheel Sector Geometry
//!
//! Computes the pie-slice layout for N labeled slots: angular spans,
//! boundary polygons, and label placement. Pure functions of the slot list.

/// Wheel coordinate space, matching the original 500x500 layout.
pub const WHEEL_CENTER: [f32; 2] = [250.0, 250.0];
pub const WHEEL_RADIUS: f32 = 200.0;

/// Labels sit at this fraction of the radius, along the sector midline.
pub const LABEL_RADIUS_FACTOR: f32 = 0.65;

/// Labels longer than LABEL_MAX_CHARS are shortened to LABEL_KEEP_CHARS
/// plus an ellipsis for display. Stored labels are never truncated.
const LABEL_MAX_CHARS: usize = 12;
const LABEL_KEEP_CHARS: usize = 10;

/// Degrees between sampled points on a sector's arc.
const ARC_STEP_DEG: f64 = 4.0;

/// Sector fill colors, cycled by slot index.
pub const PALETTE: [[u8; 3]; 10] = [
    [0x4e, 0x79, 0xa7],
    [0xf2, 0x8e, 0x2c],
    [0xe1, 0x57, 0x59],
    [0x76, 0xb7, 0xb2],
    [0x59, 0xa1, 0x4f],
    [0xed, 0xc9, 0x49],
    [0xaf, 0x7a, 0xa1],
    [0xff, 0x9d, 0xa7],
    [0x9c, 0x75, 0x5f],
    [0xba, 0xb0, 0xab],
];

/// One pie slice of the wheel, derived from the slot list and never stored.
#[derive(Debug, Clone)]
pub struct Sector {
    pub start_deg: f64,
    pub span_deg: f64,
    pub mid_deg: f64,
    /// Closed slice outline: wheel center followed by the sampled arc.
    pub boundary: Vec<[f32; 2]>,
    pub display_label: String,
    pub label_pos: [f32; 2],
    pub label_angle_deg: f64,
    pub color: [u8; 3],
}

/// Point on a circle around the wheel center, angle in degrees.
pub fn polar(radius: f32, angle_deg: f64) -> [f32; 2] {
    let rad = angle_deg.to_radians();
    [
        WHEEL_CENTER[0] + radius * (rad.cos() as f32),
        WHEEL_CENTER[1] + radius * (rad.sin() as f32),
    ]
}

/// Lay out one sector per slot. The spans always partition the full circle;
/// an empty list yields no sectors and the caller must not draw a wheel.
pub fn compute_sectors(items: &[String]) -> Vec<Sector> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    let span = 360.0 / n as f64;

    items
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let start = i as f64 * span;
            let mid = start + span / 2.0;

            let mut boundary = vec![WHEEL_CENTER];
            let steps = (span / ARC_STEP_DEG).ceil().max(1.0) as usize;
            for s in 0..=steps {
                let angle = start + span * s as f64 / steps as f64;
                boundary.push(polar(WHEEL_RADIUS, angle));
            }

            Sector {
                start_deg: start,
                span_deg: span,
                mid_deg: mid,
                boundary,
                display_label: display_label(label),
                label_pos: polar(WHEEL_RADIUS * LABEL_RADIUS_FACTOR, mid),
                label_angle_deg: mid,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

/// Shorten long labels for on-wheel display.
pub fn display_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let kept: String = label.chars().take(LABEL_KEEP_CHARS).collect();
        format!("{}...", kept)
    } else {
        label.to_string()
    }
}
