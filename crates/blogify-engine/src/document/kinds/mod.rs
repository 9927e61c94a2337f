pub mod bibitem;
pub mod figure;
pub mod list;
pub mod table;

pub use bibitem::BibItem;
pub use figure::FigureBody;
pub use list::ListItem;
pub use table::TableBody;
