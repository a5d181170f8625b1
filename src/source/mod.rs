//! Loading 吉吉 source files from disk.

pub mod source;

#[cfg(test)]
mod tests;
