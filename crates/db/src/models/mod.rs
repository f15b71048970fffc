//! Row structs for every table and the composite view.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` + `Deserialize` struct matching the row. The
//!   same struct is the create and replace payload; its wire names follow
//!   the existing camelCase API (`fName`, `noOfApartment`, ...).
//! - Its [`Record`](crate::entity::Record) impl and, for writable tables,
//!   its [`Entity`](crate::entity::Entity) impl with the mutable field table.

pub mod apartment;
pub mod fee;
pub mod house;
pub mod invoice;
pub mod payment;
pub mod role;
pub mod street;
pub mod temp_view;
pub mod user;
pub mod user_property;

pub use apartment::Apartment;
pub use fee::Fee;
pub use house::House;
pub use invoice::Invoice;
pub use payment::Payment;
pub use role::Role;
pub use street::Street;
pub use temp_view::TempView;
pub use user::User;
pub use user_property::UserProperty;
