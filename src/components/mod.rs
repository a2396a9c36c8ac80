pub mod coloring_board;
pub mod palette;
