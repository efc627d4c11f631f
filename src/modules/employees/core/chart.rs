// Pie chart geometry and rasterization for aggregated worked hours.
//
// Purpose
// - Map each employee's share of the total hours to a pie slice and paint
//   the slices onto a fixed 400x400 RGB canvas, encoded as PNG.
//
// Responsibilities
// - Guard the zero-total case: no slices, blank canvas.
// - Angles are degrees, measured clockwise from the positive x-axis.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::modules::employees::core::aggregate::AggregatedEmployee;

pub const CHART_SIZE: u32 = 400;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Fixed fill palette; slices reuse it cyclically after the ninth employee.
pub const PALETTE: [Rgb<u8>; 9] = [
    Rgb([70, 130, 180]),  // steel blue
    Rgb([255, 140, 0]),   // dark orange
    Rgb([60, 179, 113]),  // medium sea green
    Rgb([220, 20, 60]),   // crimson
    Rgb([147, 112, 219]), // medium purple
    Rgb([139, 69, 19]),   // saddle brown
    Rgb([255, 105, 180]), // hot pink
    Rgb([112, 128, 144]), // slate gray
    Rgb([128, 128, 0]),   // olive
];

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color: Rgb<u8>,
}

/// Compute one slice per employee, sized proportionally to its share of the
/// total hours. Returns no slices unless the total is strictly positive.
pub fn slice_angles(employees: &[AggregatedEmployee]) -> Vec<PieSlice> {
    let total_hours: f64 = employees.iter().map(|e| e.total_worked_hours).sum();
    if total_hours <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(employees.len());
    let mut start_angle = 0.0;
    for (at, employee) in employees.iter().enumerate() {
        let sweep_angle = 360.0 * (employee.total_worked_hours / total_hours);
        slices.push(PieSlice {
            start_angle,
            sweep_angle,
            color: PALETTE[at % PALETTE.len()],
        });
        start_angle += sweep_angle;
    }
    slices
}

/// Paint the pie onto a fresh 400x400 canvas.
pub fn render_hours_pie(employees: &[AggregatedEmployee]) -> RgbImage {
    let slices = slice_angles(employees);
    let mut canvas = RgbImage::from_pixel(CHART_SIZE, CHART_SIZE, BACKGROUND);
    if slices.is_empty() {
        return canvas;
    }

    let center = f64::from(CHART_SIZE) / 2.0;
    let radius = center;
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - center;
        let dy = f64::from(y) + 0.5 - center;
        if dx * dx + dy * dy > radius * radius {
            continue;
        }

        // Screen coordinates grow downward, so atan2 already sweeps clockwise.
        let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        let fill = slices
            .iter()
            .find(|s| angle >= s.start_angle && angle < s.start_angle + s.sweep_angle)
            // Cumulative rounding can leave a sliver short of 360 degrees.
            .unwrap_or(&slices[slices.len() - 1]);
        *pixel = fill.color;
    }
    canvas
}

pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
