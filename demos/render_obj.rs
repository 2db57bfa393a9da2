//! Load an OBJ file from the command line, render one frame with the
//! software rasterizer, and write it next to the input as a PPM image.
//!
//! Usage: `cargo run --example render_obj -- model.obj [out.ppm]`

use std::fs;
use std::io::Write;

use anyhow::{bail, Context, Result};
use cgmath::Vector3;

use meshview::render::{self, DepthBuffer, Pixmap, RenderOptions};
use meshview::scene::{share_mesh, Scene, SceneObject};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: render_obj <model.obj> [out.ppm]");
    };
    let output = args.next().unwrap_or_else(|| "frame.ppm".to_string());

    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read '{input}'"))?;
    let mesh = meshview::obj::read(&content)
        .with_context(|| format!("failed to parse '{input}'"))?;
    log::info!(
        "loaded '{}': {} vertices, {} polygons",
        input,
        mesh.vertex_count(),
        mesh.polygon_count()
    );

    let mut scene = Scene::new();
    let mut object = SceneObject::new(share_mesh(mesh), input.clone());
    // Tip the model slightly so flat-lit faces separate visually.
    object.rotate_by(Vector3::new(0.0, 30.0, 0.0));
    object.set_scale(Vector3::new(40.0, 40.0, 40.0));
    scene.add_object(object);

    let mut surface = Pixmap::new(WIDTH, HEIGHT);
    surface.fill([1.0, 1.0, 1.0, 1.0]);
    let mut depth_buffer = DepthBuffer::new(WIDTH, HEIGHT);
    let options = RenderOptions {
        lighting: true,
        light_direction: Vector3::new(0.5, 1.0, 1.0),
        ..RenderOptions::default()
    };

    render::render_scene(&mut surface, &mut depth_buffer, &scene, None, None, &options);

    write_ppm(&output, &surface).with_context(|| format!("failed to write '{output}'"))?;
    log::info!("wrote {WIDTH}x{HEIGHT} frame to '{output}'");
    Ok(())
}

fn write_ppm(path: &str, surface: &Pixmap) -> Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "P6\n{WIDTH} {HEIGHT}\n255")?;
    for chunk in surface.to_rgba_bytes().chunks(4) {
        file.write_all(&chunk[..3])?;
    }
    Ok(())
}
