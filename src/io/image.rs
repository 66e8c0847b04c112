//! PNG export of tile maps

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{Result, TileError, invalid_parameter};
use crate::spatial::cell::Cell;
use crate::spatial::grid::TileGrid;

/// Render a map with one `pixels_per_cell` square per cell
///
/// Tile kinds index into `palette`.
///
/// # Errors
///
/// Returns an error if:
/// - The map has no cells or `pixels_per_cell` is zero
/// - A tile kind has no entry in the palette
pub fn render_grid(
    grid: &TileGrid,
    palette: &[[u8; 4]],
    pixels_per_cell: u32,
) -> Result<RgbaImage> {
    if grid.columns() == 0 || grid.rows() == 0 || pixels_per_cell == 0 {
        return Err(invalid_parameter(
            "map",
            &format!("{}x{} @ {pixels_per_cell}px", grid.columns(), grid.rows()),
            &"nothing to render",
        ));
    }

    let width = grid.columns() as u32 * pixels_per_cell;
    let height = grid.rows() as u32 * pixels_per_cell;
    let mut img = ImageBuffer::new(width, height);

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let kind = grid
                .kind_at(Cell::new(col as i32, row as i32))
                .unwrap_or_default();
            let rgba = palette.get(kind as usize).copied().ok_or_else(|| {
                invalid_parameter(
                    "palette",
                    &palette.len(),
                    &format!("no colour for tile kind {kind}"),
                )
            })?;

            let x0 = col as u32 * pixels_per_cell;
            let y0 = row as u32 * pixels_per_cell;
            for dy in 0..pixels_per_cell {
                for dx in 0..pixels_per_cell {
                    img.put_pixel(x0 + dx, y0 + dy, Rgba(rgba));
                }
            }
        }
    }

    Ok(img)
}

/// Export a map as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The map cannot be rendered (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &TileGrid,
    palette: &[[u8; 4]],
    pixels_per_cell: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid(grid, palette, pixels_per_cell)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
