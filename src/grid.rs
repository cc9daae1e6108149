use serde::Serialize;

use crate::error::ExtractError;

/// Width of the mapped band around the plate, in feet. Wider than the plate
/// itself so balls off the edge still land in a visible margin column.
const ZONE_WIDTH: f64 = 3.0;
const GRID_COLUMNS: i64 = 10;
const GRID_ROWS: i64 = 15;

/// Discretized pitch location on the display matrix. Column 0 is the
/// catcher's-eye right edge, row 0 the top of the zone band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub column: u8,
    pub row: u8,
}

/// Map plate-crossing coordinates into a grid cell, clamped to the matrix.
///
/// The horizontal axis is mirrored (larger pX means a smaller column) because
/// the display renders the catcher's view. The vertical axis is normalized to
/// the batter's own zone extent and inverted so row 0 sits at the zone top.
pub fn locate(
    plate_x: f64,
    plate_z: f64,
    zone_top: f64,
    zone_bottom: f64,
) -> Result<GridCell, ExtractError> {
    if zone_top == zone_bottom {
        return Err(ExtractError::DegenerateZone);
    }

    let column = ((ZONE_WIDTH / 2.0 - plate_x) / ZONE_WIDTH * GRID_COLUMNS as f64).floor() as i64;
    let height = (plate_z - zone_bottom) / (zone_top - zone_bottom);
    let row = ((1.0 - height) * GRID_ROWS as f64).floor() as i64;

    Ok(GridCell {
        column: column.clamp(0, GRID_COLUMNS - 1) as u8,
        row: row.clamp(0, GRID_ROWS - 1) as u8,
    })
}
