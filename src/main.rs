use anyhow::{bail, Context, Result};
use clap::{App, Arg};
use color_transition::{palettes, ColorTransition};
use walkdir::WalkDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

fn main() -> Result<()> {
    let matches = App::new(NAME)
        .version(VERSION)
        .author(AUTHOR)
        .about("Recolor grayscale images through a piecewise-linear color transition")
        .arg(
            Arg::with_name("INPUT")
                .help("Specify the grayscale image to recolor")
                .required_unless("print")
                .index(1),
        )
        .arg(
            Arg::with_name("transition")
                .short("t")
                .long("transition")
                .takes_value(true)
                .value_name("FILE")
                .help("Load the color transition from a file"),
        )
        .arg(
            Arg::with_name("preset")
                .short("p")
                .long("preset")
                .takes_value(true)
                .possible_values(&palettes::PRESETS)
                .help("Use a built-in color transition [default: grayscale]"),
        )
        .arg(
            Arg::with_name("stretch")
                .short("s")
                .long("stretch")
                .help("Read images at 16 bits and stretch their value range over the transition"),
        )
        .arg(
            Arg::with_name("print")
                .long("print")
                .help("Print the color transition and exit"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .help("Silence all output"),
        )
        .arg(
            Arg::with_name("recursive")
                .short("r")
                .help("Finds .png files in the specified folder and recolors all of them"),
        )
        .get_matches();

    let verbose = matches.occurrences_of("verbose") as usize;
    let quiet = matches.is_present("quiet");
    stderrlog::new()
        .module(module_path!())
        .quiet(quiet)
        .verbosity(verbose)
        .init()
        .context("Could not initialise logging")?;

    let transition = match matches.value_of("transition") {
        Some(path) => ColorTransition::load_from_file(path)?,
        None => {
            let name = matches.value_of("preset").unwrap_or("grayscale");
            match palettes::by_name(name) {
                Some(transition) => transition,
                None => bail!("Unknown preset '{}'", name),
            }
        }
    };

    if matches.is_present("print") {
        println!("{}", transition);
        return Ok(());
    }

    let input = matches
        .value_of("INPUT")
        .context("An input image is required")?;

    let stretch = matches.is_present("stretch");
    if matches.is_present("recursive") {
        for entry in WalkDir::new(input) {
            let entry = entry?;
            let path = entry.path();
            let is_png = path.extension().map_or(false, |ext| ext == "png");
            if entry.file_type().is_file() && is_png && !color_transition::is_output_path(path) {
                color_transition::recolor_file(path, &transition, stretch)?;
            }
        }
    } else {
        color_transition::recolor_file(input, &transition, stretch)?;
    }
    Ok(())
}
