mod make_box;
mod make_thick_line;

pub use make_box::MakeBox;
pub use make_thick_line::MakeThickLine;
