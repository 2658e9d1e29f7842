//! Блэкджек один на один с компьютерным дилером.
//!
//! Слои:
//! - `domain` — карты, колода, рука, участники, правила подсчёта;
//! - `engine` — раунд как явная машина состояний + граница ввода/вывода;
//! - `infra`  — RNG-реализации и консольный ввод/вывод.

pub mod domain;
pub mod engine;
pub mod infra;
