use color_eyre::eyre::eyre;
use cube_core::{
    CubeState, Face,
    grid::SIZE,
    serialization::{NET_COLUMNS, NET_ROWS},
};
use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::config::CliConfig;

/// Net cell marker for files; any cell outside the cross may use it.
const BLANK_CELL: &str = ".";

fn colored_cell(face: Face) -> String {
    let cell = format!("{} ", face.letter());
    match face {
        Face::U => cell.black().on_white().to_string(),
        Face::R => cell.white().on_red().to_string(),
        Face::F => cell.black().on_green().to_string(),
        Face::D => cell.black().on_yellow().to_string(),
        Face::L => cell.black().on_truecolor(255, 140, 0).to_string(),
        Face::B => cell.white().on_blue().to_string(),
    }
}

/// The unfolded net, painted when color is enabled. Cells outside the cross
/// are filled with the configured blank either way.
pub fn net(cube: &CubeState, config: &CliConfig) -> String {
    if !config.color {
        return cube.render_net(config.blank);
    }

    let blank = format!("{0}{0}", config.blank);

    cube.to_flattened_net(u8::MAX)
        .iter()
        .map(|row| {
            row.iter()
                .map(|&value| {
                    Face::try_from(value).map_or_else(|_| blank.clone(), colored_cell)
                })
                .collect::<String>()
                .trim_end()
                .to_owned()
        })
        .join("\n")
}

pub fn legend(config: &CliConfig) -> String {
    Face::ALL
        .into_iter()
        .map(|face| {
            let swatch = if config.color {
                colored_cell(face)
            } else {
                face.letter().to_string()
            };
            format!("{swatch} {}", face.color_name())
        })
        .join("  ")
}

/// Net, facelet string and the solved flag.
pub fn report(cube: &CubeState, config: &CliConfig) -> String {
    let mut out = format!("{}\n\n{}", net(cube, config), cube.to_facelet_string());

    if cube.is_solved() {
        let solved = if config.color {
            "SOLVED!".green().bold().to_string()
        } else {
            "SOLVED!".to_owned()
        };
        out.push('\n');
        out.push_str(&solved);
    }

    out
}

/// Whether a net cell belongs to one of the six face blocks.
fn in_cross(row: usize, col: usize) -> bool {
    if (SIZE..2 * SIZE).contains(&row) {
        col < NET_COLUMNS
    } else {
        row < NET_ROWS && (SIZE..2 * SIZE).contains(&col)
    }
}

/// Read a flattened net written as whitespace separated integers, one grid row
/// per line. Cells outside the cross may be written as `.`.
pub fn parse_net_text(text: &str) -> color_eyre::Result<Vec<Vec<u8>>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split_whitespace()
                .enumerate()
                .map(|(col, token)| {
                    if token == BLANK_CELL {
                        return if in_cross(row, col) {
                            Err(eyre!(
                                "Blank net cell inside the cross at row {}, column {}",
                                row + 1,
                                col + 1
                            ))
                        } else {
                            Ok(0)
                        };
                    }
                    token.parse::<u8>().map_err(|_| {
                        eyre!(
                            "Invalid net cell {token:?} at row {}, column {}",
                            row + 1,
                            col + 1
                        )
                    })
                })
                .collect()
        })
        .collect()
}
