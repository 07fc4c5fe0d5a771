//! Language tree window: macroquad entry point.

use std::io;

use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use sc_langtree::render::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH, run};
use sc_langtree::summary::render_summary;
use sc_langtree::{LANGUAGES, build_scene};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("{}", render_summary(LANGUAGES));

    let mut rng = StdRng::from_os_rng();
    let scene = build_scene(LANGUAGES, &mut rng);
    tracing::info!(items = scene.items().len(), "scene ready");

    run(scene).await;
}
