use std::{io::Write as _, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tabstrip_components::{
    alignment::TabAlignment,
    border_shape::TabStyle,
    host::{StaticTabHost, TabHost},
    style_engine::create_style_engine,
    surface::{MeshSurface, PaintRecorder},
};
use tabstrip_ui::{Px, PxPosition, PxRect};
use tracing::info;

const TAB_LENGTH: Px = Px(96);
const TAB_THICKNESS: Px = Px(24);
const PAGE_EXTENT: Px = Px(160);

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl From<Side> for TabAlignment {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => TabAlignment::Top,
            Side::Bottom => TabAlignment::Bottom,
            Side::Left => TabAlignment::Left,
            Side::Right => TabAlignment::Right,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tabstrip-demo")]
#[command(version, about = "Paint a tab strip and print it as SVG", long_about = None)]
struct Cli {
    /// Style name: none, default, dark, rounded or visual-studio
    #[arg(short, long, default_value = "default")]
    style: String,
    /// Side of the page the tabs sit on
    #[arg(short, long, value_enum, default_value_t = Side::Top)]
    alignment: Side,
    /// Mirror the layout for right-to-left reading
    #[arg(long)]
    rtl: bool,
    /// Number of tabs
    #[arg(short = 'n', long, default_value_t = 4)]
    count: usize,
    /// Index of the selected tab
    #[arg(long, default_value_t = 0)]
    selected: usize,
    /// Index of the tab under the pointer
    #[arg(long)]
    hot: Option<usize>,
    /// Paint as if the widget had keyboard focus
    #[arg(long)]
    focused: bool,
    /// Draw closer glyphs
    #[arg(long)]
    closer: bool,
    /// Override the style's corner radius
    #[arg(long)]
    radius: Option<i32>,
    /// Override the style's tab overlap
    #[arg(long)]
    overlap: Option<i32>,
    /// Background opacity between 0 and 1
    #[arg(long)]
    opacity: Option<f32>,
    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also tessellate the strip and report the triangle count
    #[arg(long)]
    mesh: bool,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tabstrip_components=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn widget_bounds(count: usize, alignment: TabAlignment) -> Result<PxRect> {
    let count = i32::try_from(count).context("too many tabs")?;
    let row = TAB_LENGTH
        .raw()
        .checked_mul(count)
        .context("tab row does not fit in pixel space")?;
    let along = Px(row) + StaticTabHost::MARGIN * 2;
    let across = TAB_THICKNESS + PAGE_EXTENT;
    Ok(if alignment.is_horizontal() {
        PxRect::new(Px::ZERO, Px::ZERO, along, across)
    } else {
        PxRect::new(Px::ZERO, Px::ZERO, across, along)
    })
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.count == 0 {
        bail!("--count must be at least 1");
    }
    if cli.selected >= cli.count {
        bail!("--selected {} is out of range for {} tabs", cli.selected, cli.count);
    }

    let style = TabStyle::from_name(&cli.style);
    let alignment = TabAlignment::from(cli.alignment);
    let bounds = widget_bounds(cli.count, alignment)?;

    let mut host = StaticTabHost::row(cli.count, TAB_LENGTH, TAB_THICKNESS, alignment, bounds);
    host.state.right_to_left = cli.rtl;
    host.state.selected_index = Some(cli.selected);
    host.state.active_index = cli.hot;
    host.state.focused = cli.focused;
    if let Some(hot) = cli.hot {
        // Park the pointer on the hot tab's closer so the active color shows.
        let closer = host.closer_rect(hot);
        host.state.mouse_position = PxPosition::new(
            closer.x + closer.width / 2,
            closer.y + closer.height / 2,
        );
    }

    let mut engine = create_style_engine(style, host);
    if let Some(radius) = cli.radius {
        engine.set_radius(radius).context("invalid --radius")?;
    }
    if let Some(overlap) = cli.overlap {
        engine.set_overlap(overlap).context("invalid --overlap")?;
    }
    if let Some(opacity) = cli.opacity {
        engine.set_opacity(opacity).context("invalid --opacity")?;
    }
    engine.set_show_closer(cli.closer);

    info!(
        style = %engine.style(),
        ?alignment,
        tabs = cli.count,
        "painting tab strip"
    );

    let mut recorder = PaintRecorder::new();
    let mut mesh = MeshSurface::new();
    for index in 0..cli.count {
        let index = i32::try_from(index).context("tab index out of range")?;
        engine
            .paint_tab(index, &mut recorder)
            .with_context(|| format!("failed to record tab {index}"))?;
        if cli.mesh {
            engine
                .paint_tab(index, &mut mesh)
                .with_context(|| format!("failed to tessellate tab {index}"))?;
        }
    }

    if cli.mesh {
        eprintln!(
            "{} triangles, {} vertices, {:.1} px² covered",
            mesh.triangle_count(),
            mesh.vertices().len(),
            mesh.covered_area()
        );
    }

    let svg = recorder.to_svg_document(bounds.width.positive(), bounds.height.positive());
    match cli.output {
        Some(path) => std::fs::write(&path, svg)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(svg.as_bytes())
            .context("failed to write SVG to stdout")?,
    }
    Ok(())
}
