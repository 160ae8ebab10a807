//! Entry operations on the flat key-value table, split into read and write halves.

mod read;
mod write;
