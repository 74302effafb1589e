use waypath_core::config::MAX_GRID_SIZE;
use waypath_core::format::OutputFormat;
use waypath_core::grid::Cell;
use waypath_core::road::Coord;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a LON,LAT coordinate
pub fn parse_coord(s: &str) -> std::result::Result<Coord, String> {
    s.parse::<Coord>().map_err(|e| e.to_string())
}

/// Parse a ROW,COL grid cell
pub fn parse_cell(s: &str) -> std::result::Result<Cell, String> {
    s.parse::<Cell>().map_err(|e| e.to_string())
}

/// Parse an obstacle ratio in [0, 1)
pub fn parse_ratio(s: &str) -> std::result::Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{} is outside [0, 1)", ratio))
    }
}

/// Parse a generated grid's side length in 1..=MAX_GRID_SIZE
pub fn parse_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("{} is outside 1..={}", size, MAX_GRID_SIZE))
    }
}
