//! Renders an outline given on the command line (or a built-in sample) to
//! `mindmap.svg` and `mindmap.png` in the current directory.

use std::{env, fs};

use ramify::{MindMapBuilder, RamifyError, config::AppConfig, session::AI_TECHNOLOGIES_SAMPLE};

fn main() -> Result<(), RamifyError> {
    let source = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => AI_TECHNOLOGIES_SAMPLE.to_string(),
    };

    let builder = MindMapBuilder::new(AppConfig::default());
    fs::write("mindmap.svg", builder.render_svg(&source)?)?;
    fs::write("mindmap.png", builder.render_png(&source)?)?;

    println!("Wrote mindmap.svg and mindmap.png");
    Ok(())
}
