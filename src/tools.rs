use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

quick_error! {
    #[derive(Debug)]
    pub enum LoadError {
        Io(err: io::Error) {
            from()
            display("{}", err)
            cause(err)
        }
        Oversized(len: usize) {
            display("image is {} bytes, larger than the 64 KiB address space", len)
        }
    }
}

/// reads a raw binary image, rejecting anything that cannot fit in the
/// address space
pub fn read_binary<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut f = File::open(path)?;
    f.read_to_end(&mut buffer)?;
    if buffer.len() > 0x1_0000 {
        return Err(LoadError::Oversized(buffer.len()));
    }
    Ok(buffer)
}
