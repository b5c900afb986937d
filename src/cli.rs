use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::{path::Path, sync::mpsc::channel, time::Duration};

use crate::errors::{Error, Result};
use crate::geometry::Size;
use crate::{render_file, RenderConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// Scene file to render ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Canvas width (user-units)
    #[arg(long, default_value = "800")]
    width: f32,

    /// Canvas height (user-units)
    #[arg(long, default_value = "600")]
    height: f32,

    /// Don't draw the background grid
    #[arg(long)]
    no_grid: bool,

    /// Spacing between grid lines (user-units)
    #[arg(long, default_value = "20")]
    grid_interval: f32,
}

/// Top-level configuration used by the `rectlink` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
///
/// 'front-end' program settings (e.g. input/output filenames, whether to
/// continually process input on change) are stored directly in this struct.
/// Per-render ('back-end') settings are stored in the embedded `RenderConfig`.
#[derive(Clone)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (requires input_path is not stdin)
    pub watch: bool,
    /// render config options
    pub render: RenderConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            render: RenderConfig {
                canvas: Size::new(args.width, args.height),
                grid: !args.no_grid,
                grid_interval: args.grid_interval,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Run the `rectlink` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        render_file(&config.input_path, &config.output_path, &config.render)?;
    } else if config.input_path != "-" {
        let watch = config.input_path;
        let (tx, rx) = channel();
        let mut watcher =
            new_debouncer(Duration::from_millis(250), tx).expect("Could not create watcher");
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(Path::new(&watch), RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        render_file(&watch, &config.output_path, &config.render).unwrap_or_else(|e| {
            eprintln!("render failed: {e:?}");
        });
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize().map_err(Error::Io)?
                            == watch_path.canonicalize().map_err(Error::Io)?
                        {
                            eprintln!("{} changed", event.path.to_string_lossy());
                            render_file(&watch, &config.output_path, &config.render)
                                .unwrap_or_else(|e| {
                                    eprintln!("render failed: {e:?}");
                                });
                        }
                    }
                }
                Ok(Err(e)) => eprintln!("Watch error {e:?}"),
                Err(e) => eprintln!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_cmdline() {
        let config = Config::from_cmdline("rectlink scene.json -o out.svg").expect("test");
        assert_eq!(config.input_path, "scene.json");
        assert_eq!(config.output_path, "out.svg");
        assert!(!config.watch);
        assert!(config.render.grid);

        let config =
            Config::from_cmdline("rectlink --width 400 --height 300 --no-grid").expect("test");
        assert_eq!(config.render.canvas.as_wh(), (400., 300.));
        assert!(!config.render.grid);
    }

    #[test]
    fn test_watch_requires_file() {
        assert!(Config::from_cmdline("rectlink -w").is_err());
    }
}
