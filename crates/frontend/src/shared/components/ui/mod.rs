pub mod badge;
pub mod button;
pub mod checkbox;
pub mod select;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use select::Select;
