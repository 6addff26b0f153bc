#[macro_use]
mod util;

mod rendering;
