use std::path::PathBuf;

use anyhow::Result;

mod camera;
mod explode;
mod gizmo;
mod input;
mod loader;
mod math;
mod render;
mod render_loop;
mod scene_graph;
mod selection;
mod viewer;
mod window;

#[cfg(test)]
mod test_fixtures;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let scene_path = std::env::args().nth(1).map(PathBuf::from);

    window::run(scene_path)?;

    Ok(())
}
