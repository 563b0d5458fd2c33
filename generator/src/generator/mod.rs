mod assembler;
mod constants;
mod generator;
mod rendering;

pub use assembler::assemble;
pub use generator::{parse_chunks, Generator, ModelFile};
pub use rendering::Render;
