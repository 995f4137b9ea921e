//! Loading gate lists from disk.

use std::{fs::File, io::BufReader, path::PathBuf};

use tseytin::{builder, structures::gate::Gate, types::err::ErrorKind};

/// The gates of the list at the given path, decompressing `xz` files when built with the `xz` feature.
pub fn load_gates(path: &PathBuf) -> Result<Vec<Gate>, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,

        Err(_) => {
            println!("c Failed to open gate list {path:?}");
            std::process::exit(1);
        }
    };

    match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            builder::read_gates(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => builder::read_gates(BufReader::new(&file)),
    }
}
