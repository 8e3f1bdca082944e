#![allow(clippy::print_stdout)]

use harmony::error::PaletteError;
use harmony::order::{order, Algorithm, Direction};
use harmony::palette::parse_palette;
use harmony::{render, OutputFormat};

const PALETTE: &str = "\
(49, 6, 210) Dark Blue
(15, 143, 179) Light Blue
(201, 118, 6) Orange
";

fn main() -> Result<(), PaletteError> {
    // 1. Read your colors
    let colors = parse_palette(PALETTE)?;

    // 2. Order your colors
    let ordered = order(&colors, Algorithm::Hillbert, Direction::Backward);

    // 3. Write your colors
    for color in &ordered {
        println!("    {}", render(color, OutputFormat::Hexcode));
    }

    Ok(())
}
