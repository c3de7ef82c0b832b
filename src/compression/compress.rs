use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::huffman_coding::tree::Tree;
use crate::lz77::compress::compress_in_place;
use crate::lz77::config::Lz77Config;
use crate::tools::cli::LzOpts;

/// Compress every input file named in opts with the LZ77 engine and write the
/// result beside it with a ".lz77" suffix. The input file is removed after a
/// successful write unless opts says to keep it.
pub fn compress(opts: &LzOpts) -> Result<()> {
    let config = Lz77Config {
        window_size: opts.window_size,
        minimum_match_length: opts.minimum_match_length,
        ..Lz77Config::default()
    };

    for fname in &opts.files {
        let mut out_name = fname.clone();
        out_name.push_str(".lz77");
        if Path::new(&out_name).exists() && !opts.force_overwrite {
            warn!("{} exists, skipping (use --force to overwrite)", out_name);
            continue;
        }

        let mut buf = fs::read(fname)?;
        let input_size = buf.len();
        let output_size = compress_in_place(&mut buf, &config)?;

        let mut f_out = File::create(&out_name)?;
        f_out.write_all(&buf)?;
        info!(
            "{}: {} -> {} bytes ({}%)",
            fname,
            input_size,
            output_size,
            (output_size * 100) / input_size
        );

        if !opts.keep_input_files {
            fs::remove_file(fname)?;
        }
    }
    Ok(())
}

/// Build a Huffman tree from every input file named in opts and print its code
/// table, one symbol per line.
pub fn codes(opts: &LzOpts) -> Result<()> {
    for fname in &opts.files {
        let fin = File::open(fname)?;
        let tree = Tree::from_reader(fin)?;

        let mut entries: Vec<(u8, String)> = tree.code_table().into_iter().collect();
        entries.sort();
        for (sym, code) in entries {
            if sym.is_ascii_graphic() {
                println!("[{}] = {}", sym as char, code);
            } else {
                println!("[0x{:02x}] = {}", sym, code);
            }
        }
        info!(
            "{}: {} distinct symbols in {} bytes",
            fname,
            tree.leaf_count(),
            tree.root().frequency
        );
    }
    Ok(())
}
