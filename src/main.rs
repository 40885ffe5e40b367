use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use rand::Rng;

use gridbox::config::Params;
use gridbox::render;
use gridbox::{Grid, MOORE_OFFSETS, SplitMix64};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = match std::env::args().nth(1) {
        Some(path) => Params::load(Path::new(&path))?,
        None => Params::default(),
    };
    params.validate()?;

    let mut grid: Grid<usize> = Grid::from_signed(params.width, params.height)?;
    info!(
        "Generating {}x{} grid, {} tiles, empty weight {}, seed {:?}",
        grid.width(),
        grid.height(),
        params.tiles.len(),
        params.empty_weight,
        params.seed
    );

    match params.seed {
        Some(seed) => run(&mut grid, &params, &mut SplitMix64::new(seed)),
        None => run(&mut grid, &params, &mut rand::thread_rng()),
    }
}

fn run<R: Rng>(grid: &mut Grid<usize>, params: &Params, rng: &mut R) -> anyhow::Result<()> {
    grid.populate(&params.value_pool(), rng)?;

    info!("Counts:");
    for (i, tile) in params.tiles.iter().enumerate() {
        info!("  {:12} {:6}", tile.name, grid.count_of(Some(&i)));
    }
    info!("  {:12} {:6}", "(empty)", grid.count_of(None));

    let glyph = |cell: Option<&usize>| cell.map_or('.', |&t| params.tiles[t].glyph);

    if grid.is_empty() {
        warn!("grid has no cells, nothing to sample or render");
        return Ok(());
    }

    let idx = grid.random_index(rng)?;
    let (x, y) = (grid.x(idx), grid.y(idx));
    info!("Random cell {} at ({}, {}) holds {}", idx, x, y, glyph(grid.get_index(idx)?));
    for ((dx, dy), n) in MOORE_OFFSETS.iter().zip(grid.neighbors_of_index(idx)?) {
        info!("  ({:+}, {:+}) {}", dx, dy, glyph(n));
    }

    if let Some(first) = params.tiles.first() {
        let hits = grid.indexes_of(Some(&0));
        let pick = grid.random_index_of(Some(&0), rng)?;
        info!("{} appears {} times, random pick at {}", first.name, hits.len(), pick);
    }

    if params.ascii {
        print!("{}", render::render_ascii(grid, glyph));
    }

    if let Some(path) = &params.png {
        let rgba = render::render_rgba(grid, |cell| match cell {
            Some(&t) => {
                let [r, g, b] = params.tiles[t].color;
                [r, g, b, 255]
            }
            None => render::EMPTY_RGBA,
        });
        let (w, h) = render::image_size(grid)
            .with_context(|| format!("{}x{} grid is too large for a PNG", grid.width(), grid.height()))?;
        image::save_buffer(path, &rgba, w, h, image::ColorType::Rgba8)
            .with_context(|| format!("failed to save {}", path.display()))?;
        info!("Saved {}", path.display());
    }

    Ok(())
}
