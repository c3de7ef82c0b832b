use std::fmt::{Display, Formatter};

use clap::Parser;
use log::info;

/// Compress with LZ77, or print the Huffman code table
#[derive(Debug)]
pub enum Mode {
    Zip,
    Codes,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define all user settable options to control program behavior
#[derive(Debug)]
pub struct LzOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Compress / print code table
    pub op_mode: Mode,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Search horizon for the LZ77 match engine
    pub window_size: usize,
    /// Shortest run worth a token. Matches must be strictly longer than this.
    pub minimum_match_length: usize,
}

impl LzOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            op_mode: Mode::Zip,
            force_overwrite: false,
            keep_input_files: false,
            window_size: 4096,
            minimum_match_length: 3,
        }
    }
}

impl Default for LzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "lzhuff, a small LZ77 + Huffman compression toolkit",
    long_about = "
    lzhuff offers two independent codecs over a byte stream: an LZ77 sliding-window
    compressor that rewrites each input file in place, and a Huffman frequency-tree
    builder that can print the prefix code table for a file.

    It is done in the spirit of learning, both learning Rust and learning compression techniques."
)]
pub struct Args {
    /// Filenames of files to process
    #[clap()]
    files: Vec<String>,

    /// Perform LZ77 compression on the input files (the default action)
    #[clap(short = 'z', long = "zip")]
    zip: bool,

    /// Build a Huffman tree for each input file and print its code table
    #[clap(long = "codes")]
    codes: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Sliding window size in bytes for the LZ77 match engine
    #[clap(short = 'w', long = "window", default_value_t = 4096)]
    window: usize,

    /// Shortest run worth encoding. Matches must be strictly longer to be compressed.
    #[clap(short = 'm', long = "min-match", default_value_t = 3)]
    min_match: usize,

    /// Sets verbosity. -v 1 shows very little, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Put command line information from CLAP into our internal options structure
/// and set the log level.
pub fn opts_init() -> LzOpts {
    let args = Args::parse();
    let mut opts = LzOpts::new();

    // Print opening line
    println!("lzhuff, an LZ77 + Huffman compression toolkit. Version {}", VERSION);

    opts.files = args.files;
    if args.codes {
        opts.op_mode = Mode::Codes;
    }
    if args.zip {
        opts.op_mode = Mode::Zip;
    }
    opts.force_overwrite = args.force;
    opts.keep_input_files = args.keep;
    opts.window_size = args.window;
    opts.minimum_match_length = args.min_match;

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("Operational mode set to {}", opts.op_mode);
    if opts.window_size != 4096 {
        info!("Window size set to {}", opts.window_size)
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    opts
}
