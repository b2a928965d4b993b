extern crate cardtracer as root;

#[macro_use]
extern crate log;
extern crate simplelog;

use log::LevelFilter;
use root::config::RenderConfig;
use root::error::EngineError;
use root::ppm::PpmWriter;
use root::renderer::TiledRenderer;
use root::world::scenes;

use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};

use std::fs::File;
use std::time::Instant;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case", about = "The Business Card Raytracer")]
struct Opt {
    /// the output filename
    #[structopt(long, default_value = "card.ppm")]
    pub output: String,
    /// the scene to render
    #[structopt(long, default_value = "aek")]
    pub scene: String,
    /// the card width
    #[structopt(long, default_value = "512")]
    pub width: usize,
    /// the card height
    #[structopt(long, default_value = "512")]
    pub height: usize,
    /// the number of rays per pixel
    #[structopt(long, default_value = "64")]
    pub samples: usize,
    /// the maximum number of bounces per ray
    #[structopt(long, default_value = "8")]
    pub recursions: u32,
    /// the number of render threads
    #[structopt(long, default_value = "1")]
    pub threads: usize,
    /// seed for a reproducible render
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: String, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "error" => LevelFilter::Error,
        "debug" => LevelFilter::Debug,
        _ => default,
    }
}

fn run(opts: Opt) -> Result<(), EngineError> {
    if opts.output.is_empty() {
        return Err(EngineError::InvalidConfig("filename"));
    }
    let config = RenderConfig::new(
        opts.width,
        opts.height,
        opts.samples,
        opts.recursions,
        opts.threads,
    )?
    .with_seed(opts.seed);

    let scene = scenes::create(&opts.scene)?;

    let mut output = PpmWriter::new(&opts.output);
    output.open(config.width, config.height, 255)?;

    println!("raytrace: processing ...");
    let now = Instant::now();
    TiledRenderer::default()
        .with_progress(true)
        .render(&scene, &config, output.data())?;
    println!("raytrace: {}s", now.elapsed().as_secs_f32());

    output.store()?;
    output.close()?;
    info!("wrote <{}>", opts.output);
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    let term_log_level = parse_log_level(opts.print_log_level.clone(), LevelFilter::Warn);
    let write_log_level = parse_log_level(opts.write_log_level.clone(), LevelFilter::Info);

    let logger = CombinedLogger::init(vec![
        TermLogger::new(
            term_log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            File::create("card.log").unwrap_or_else(|e| {
                eprintln!("error: cannot create card.log, {}", e);
                std::process::exit(1);
            }),
        ),
    ]);
    if let Err(e) = logger {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(opts) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
