//! CLI tool to simulate the tutorials showcase against a JSON catalog.
//!
//! Usage:
//!   showcase-sim <catalog.json>
//!   showcase-sim <catalog.json> --authenticated --ticks 600 --click 3
//!
//! Prints what the section would render, where the strip sits after the
//! given number of refresh ticks, and what a click would do.

use std::cell::RefCell;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tutorials_showcase::{
    FixedAuth, Interaction, ManualScheduler, PlaybackSurface, Showcase, ShowcaseConfig,
    StaticCatalog, TickLoop,
};

#[derive(Parser, Debug)]
#[command(name = "showcase-sim", about = "Simulate the tutorials showcase section")]
struct Args {
    /// Tutorial catalog (JSON array)
    catalog: PathBuf,

    /// Simulate a signed-in visitor
    #[arg(long)]
    authenticated: bool,

    /// Number of display refreshes to simulate
    #[arg(long, default_value_t = 0)]
    ticks: usize,

    /// Total scroll width of the doubled strip in pixels
    #[arg(long, default_value_t = 3000.0)]
    scroll_width: f64,

    /// Click the card at this strip index
    #[arg(long)]
    click: Option<usize>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "tutorials_showcase=debug,info"
    } else {
        "tutorials_showcase=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => match ShowcaseConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ShowcaseConfig::default(),
    };

    let catalog = match StaticCatalog::from_json_path(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error reading catalog '{}': {}", args.catalog.display(), e);
            process::exit(1);
        }
    };

    let showcase = Rc::new(RefCell::new(Showcase::new(config)));
    showcase
        .borrow_mut()
        .refresh(&catalog, &FixedAuth(args.authenticated));

    {
        let section = showcase.borrow();
        let Some(render) = section.render() else {
            println!("(nothing rendered)");
            return;
        };
        println!("{}", render.headline.title);
        println!("{}", render.headline.subtitle);
        println!("View all -> {}", render.view_all_route);
        println!();
        for item in &render.strip {
            let t = item.tutorial;
            let mut line = format!("{:>3}  {}", item.strip_index, t.title);
            if let Some(category) = &t.category {
                line.push_str(&format!(" [{}]", category));
            }
            if let Some(duration) = &t.duration {
                line.push_str(&format!(" {}", duration));
            }
            line.push_str(&format!(" ({} views)", t.view_count));
            println!("{}", line);
        }
        if let Some(cta) = render.sign_in {
            println!();
            println!("{} -> {}", cta.prompt, cta.route);
        }
        if render.interaction == Interaction::Disabled {
            println!("Clicks are disabled for guests.");
        }
    }

    if args.ticks > 0 {
        let scheduler = ManualScheduler::new();
        let mut tick_loop = TickLoop::new(scheduler.clone());
        let shared = showcase.clone();
        let width = args.scroll_width;
        tick_loop.start(move || {
            shared.borrow_mut().tick(width);
        });
        scheduler.fire_n(args.ticks);
        tick_loop.stop();
        println!();
        println!(
            "Offset after {} ticks: {:.1}px (loop point {:.1}px)",
            args.ticks,
            showcase.borrow().engine().offset(),
            args.scroll_width / 2.0
        );
    }

    if let Some(index) = args.click {
        let mut section = showcase.borrow_mut();
        println!();
        if !section.click(index) {
            println!("Click on {} did nothing.", index);
            return;
        }
        let player = section.player();
        if let Some(caption) = player.caption() {
            println!("Playing: {}", caption.title);
            if let Some(description) = caption.description {
                println!("  {}", description);
            }
        }
        match player.surface() {
            Some(PlaybackSurface::EmbedFrame { src, .. }) => println!("  embed frame: {}", src),
            Some(PlaybackSurface::NativeVideo { src, .. }) => println!("  native video: {}", src),
            None => {}
        }
        section.close_player();
    }
}
