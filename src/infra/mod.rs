//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для колоды;
//! - консольный ввод/вывод для CLI.

pub mod console;
pub mod rng;

pub use console::ConsoleIo;
pub use rng::*;
