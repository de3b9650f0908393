mod xz;

pub use xz::XzCompressor;
